//! Merges the collected answers into package.json without discarding user fields.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};
use tracing::info;

use crate::error::{Error, Result};
use crate::loader::read_descriptor_value;
use crate::models::{CollectedProps, DEFAULT_VERSION};
use crate::naming::kebab_case;

/// Builds the descriptor this run would write into an empty directory.
pub fn candidate(props: &CollectedProps) -> Map<String, Value> {
    let mut pkg = Map::new();
    let mut put = |key: &str, value: Option<&String>| {
        if let Some(value) = value {
            pkg.insert(key.to_string(), Value::String(value.clone()));
        }
    };

    let name = props.name.as_deref().map(kebab_case);
    put("name", name.as_ref());
    put(
        "version",
        Some(&props.version.clone().unwrap_or_else(|| DEFAULT_VERSION.to_string())),
    );
    put("description", props.description.as_ref());
    put("homepage", props.homepage.as_ref());

    let author = props.author();
    if author != Default::default() {
        pkg.insert("author".to_string(), json!(author));
    }
    pkg.insert("keywords".to_string(), Value::Array(Vec::new()));
    pkg
}

/// Deep-merges `overlay` into `base`. Objects merge key by key; anything else in
/// `overlay` replaces what `base` had.
pub fn merge(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(incoming) if matches!(base.get(&key), Some(Value::Object(_))) => {
                if let Some(Value::Object(existing)) = base.get_mut(&key) {
                    merge(existing, incoming);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Union of two keyword lists, first occurrence wins, new keywords first.
pub fn union_keywords(new: &[String], existing: &[Value]) -> Vec<Value> {
    let mut seen = Vec::new();
    let incoming = new.iter().cloned().map(Value::String);
    for word in incoming.chain(existing.iter().cloned()) {
        if !seen.contains(&word) {
            seen.push(word);
        }
    }
    seen
}

/// Computes the descriptor to persist: candidate, overlaid by what is on disk now.
pub fn merged_descriptor(props: &CollectedProps, on_disk: Map<String, Value>) -> Map<String, Value> {
    let mut pkg = candidate(props);
    merge(&mut pkg, on_disk);

    if let Some(new) = &props.keywords {
        let existing = match pkg.get("keywords") {
            Some(Value::Array(words)) => words.clone(),
            _ => Vec::new(),
        };
        pkg.insert(
            "keywords".to_string(),
            Value::Array(union_keywords(new, &existing)),
        );
    }
    pkg
}

/// Re-reads the descriptor, merges and writes it back as pretty JSON.
pub fn write_descriptor(path: &Path, props: &CollectedProps) -> Result<()> {
    let on_disk = read_descriptor_value(path)?;
    let pkg = merged_descriptor(props, on_disk);

    let mut content = serde_json::to_string_pretty(&Value::Object(pkg))
        .map_err(|e| Error::io(path, std::io::Error::other(e)))?;
    content.push('\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), "Wrote descriptor");
    Ok(())
}
