use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{Error, Result};

/// Maps an email address to a best-guess GitHub login.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    async fn github_username(&self, email: &str) -> Result<String>;
}

/// Answers whether a package name is still free on the registry.
#[async_trait]
pub trait NameRegistry: Send + Sync {
    async fn is_available(&self, name: &str) -> Result<bool>;
}

/// Responsible for all external HTTP communication.
pub struct ApiClient {
    client: reqwest::Client,
    github_base: String,
    registry_base: String,
}

/// Helper structs for deserializing GitHub's user search response.
#[derive(serde::Deserialize)]
struct UserSearch {
    items: Vec<UserItem>,
}

#[derive(serde::Deserialize)]
struct UserItem {
    login: String,
}

impl ApiClient {
    /// Initializes a new ApiClient against the public GitHub and npm endpoints.
    pub fn new() -> Result<Self> {
        Self::with_endpoints("https://api.github.com", "https://registry.npmjs.org")
    }

    pub fn with_endpoints(github_base: &str, registry_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("ts-scaffold"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            github_base: github_base.trim_end_matches('/').to_string(),
            registry_base: registry_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AccountLookup for ApiClient {
    /// Searches GitHub users whose public email matches and returns the first login.
    async fn github_username(&self, email: &str) -> Result<String> {
        if email.trim().is_empty() {
            return Err(Error::Lookup("no email to search for".to_string()));
        }

        let url = Url::parse_with_params(
            &format!("{}/search/users", self.github_base),
            &[("q", format!("{} in:email", email))],
        )
        .map_err(|e| Error::Lookup(e.to_string()))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Lookup(format!("GitHub API error: {}", status)));
        }

        let search: UserSearch = response.json().await?;
        let login = search
            .items
            .into_iter()
            .next()
            .map(|item| item.login)
            .ok_or_else(|| Error::Lookup(format!("Couldn't find username for `{}`", email)))?;

        debug!(email, login = %login, "Resolved GitHub account");
        Ok(login)
    }
}

#[async_trait]
impl NameRegistry for ApiClient {
    async fn is_available(&self, name: &str) -> Result<bool> {
        let encoded = name.replace('/', "%2F");
        let url = format!("{}/{}", self.registry_base, encoded);
        let response = self.client.head(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(true),
            status if status.is_success() => Ok(false),
            status => Err(Error::Lookup(format!("npm registry error: {}", status))),
        }
    }
}

/// Stand-in used with `--offline`: no lookup ever succeeds, every name is free.
pub struct Offline;

#[async_trait]
impl AccountLookup for Offline {
    async fn github_username(&self, _email: &str) -> Result<String> {
        Err(Error::Lookup("offline".to_string()))
    }
}

#[async_trait]
impl NameRegistry for Offline {
    async fn is_available(&self, _name: &str) -> Result<bool> {
        Ok(true)
    }
}
