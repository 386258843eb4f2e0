//! Error types for ts-scaffold

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the generator's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Generator error types
#[derive(Error, Debug)]
pub enum Error {
    /// The user aborted a prompt
    #[error("Aborted by user")]
    Cancelled,

    /// Filesystem read or write failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// package.json exists but is not valid JSON
    #[error("Invalid descriptor {path}: {source}")]
    InvalidDescriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// package.json parses but its top level is not an object
    #[error("Invalid descriptor {path}: top-level value must be an object")]
    DescriptorNotObject { path: PathBuf },

    /// A template listed in the template set is not bundled
    #[error("Template not bundled: {0}")]
    MissingTemplate(String),

    /// Template rendering failed
    #[error("Template rendering failed for {template}: {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// External lookup returned nothing usable
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The package manager could not be started
    #[error("Failed to run {program}: {source}")]
    Install {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup or event handling failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// Preference file could not be written
    #[error("Failed to save preferences to {path}: {source}")]
    Preferences {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the user walked away from a prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_carry_their_path() {
        let err = Error::io("/tmp/demo/package.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/tmp/demo/package.json"));
    }

    #[test]
    fn terminal_errors_are_not_filesystem_errors() {
        let err = Error::Terminal(io::Error::other("raw mode unavailable"));
        assert!(!matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("Terminal error"));
        assert!(!err.is_cancelled());
    }
}
