//! Bundled configuration templates and their materialisation.
//!
//! Templates are stored without leading dots so packaging tools never treat
//! them as hidden files; `.vscode/settings.json` lives at `vscode/settings.json`.

use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::TEMPLATES;

/// Embedded project templates
#[derive(RustEmbed)]
#[folder = "templates/"]
struct ProjectTemplates;

/// Name of the bundled file for a destination path.
pub fn source_name(dest: &str) -> String {
    dest.split('/')
        .map(|part| part.strip_prefix('.').unwrap_or(part))
        .collect::<Vec<_>>()
        .join("/")
}

/// Renders one bundled template. No variables are supplied, so output equals input.
pub fn render(dest: &str) -> Result<String> {
    let source = source_name(dest);
    let file =
        ProjectTemplates::get(&source).ok_or_else(|| Error::MissingTemplate(source.clone()))?;
    let content = String::from_utf8_lossy(file.data.as_ref());

    Tera::one_off(&content, &Context::new(), false).map_err(|source| Error::Render {
        template: dest.to_string(),
        source,
    })
}

/// Writes every template into `destination`, in order. The first failure aborts.
pub fn materialize(destination: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(TEMPLATES.len());

    for template in TEMPLATES {
        let rendered = render(template)?;
        let target = destination.join(template);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&target, rendered).map_err(|e| Error::io(&target, e))?;
        debug!(path = %target.display(), "Wrote template");
        written.push(target);
    }

    info!(count = written.len(), "Templates written");
    Ok(written)
}
