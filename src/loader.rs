//! Reads the existing package.json and seeds the collected props from it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::author;
use crate::error::{Error, Result};
use crate::models::{AuthorField, CollectedProps, ProjectDescriptor};

/// Reads the raw descriptor object, returning an empty object when the file is missing.
pub fn read_descriptor_value(path: &Path) -> Result<Map<String, Value>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No existing descriptor");
            return Ok(Map::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::DescriptorNotObject {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::InvalidDescriptor {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads the typed view of the descriptor. Fields of an unexpected shape are ignored.
pub fn load_descriptor(path: &Path) -> Result<ProjectDescriptor> {
    let raw = read_descriptor_value(path)?;
    Ok(ProjectDescriptor::from_map(&raw))
}

impl ProjectDescriptor {
    pub fn from_map(raw: &Map<String, Value>) -> Self {
        let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);

        let author = raw
            .get("author")
            .and_then(|v| serde_json::from_value::<AuthorField>(v.clone()).ok());

        let keywords = raw.get("keywords").and_then(Value::as_array).map(|words| {
            words
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        });

        Self {
            name: text("name"),
            version: text("version"),
            description: text("description"),
            homepage: text("homepage"),
            author,
            keywords,
        }
    }
}

/// Pre-populates props with what the descriptor already knows.
pub fn seed_props(descriptor: &ProjectDescriptor) -> CollectedProps {
    let mut props = CollectedProps {
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        version: descriptor.version.clone(),
        homepage: descriptor.homepage.clone(),
        ..Default::default()
    };

    if let Some(field) = &descriptor.author {
        let info = author::normalize(field);
        props.author_name = info.name;
        props.author_email = info.email;
        props.author_url = info.url;
    }

    props
}
