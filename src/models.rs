use serde::{Deserialize, Serialize};

/// File name of the project descriptor at the destination root.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Version written when neither the descriptor nor the answers carry one.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Destination paths of the bundled configuration templates, in write order.
pub const TEMPLATES: &[&str] = &[
    ".gitignore",
    "tsconfig.json",
    "tslint.json",
    "typingsrc",
    ".vscode/settings.json",
    ".vscode/tasks.json",
];

/// Structured author record as npm writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The `author` field accepts either an object or a `"Name <email> (url)"` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Object(AuthorInfo),
    Text(String),
}

/// The fields of the on-disk package manifest this generator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub author: Option<AuthorField>,
    /// `Some` whenever the manifest declares a `keywords` array, even an empty one.
    pub keywords: Option<Vec<String>>,
}

/// Answers gathered during one run, seeded from the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedProps {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub homepage: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub github_account: Option<String>,
}

impl CollectedProps {
    /// Author fields as they go into the candidate descriptor.
    pub fn author(&self) -> AuthorInfo {
        AuthorInfo {
            name: self.author_name.clone(),
            email: self.author_email.clone(),
            url: self.author_url.clone(),
        }
    }
}

/// Local source-control identity used as prompt defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}
