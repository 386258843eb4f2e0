use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Installs the dependencies declared in the destination's package.json.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, destination: &Path) -> Result<()>;
}

/// Runs `npm install` in the destination directory.
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new() -> Self {
        let program = if cfg!(windows) { "npm.cmd" } else { "npm" };
        Self::with_program(program)
    }

    /// Runs `<program> install` instead of npm, e.g. `pnpm` or `yarn`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Installer for NpmInstaller {
    async fn install(&self, destination: &Path) -> Result<()> {
        info!(dir = %destination.display(), "Running {} install", self.program);

        let status = Command::new(&self.program)
            .arg("install")
            .current_dir(destination)
            .status()
            .await
            .map_err(|source| Error::Install {
                program: self.program.clone(),
                source,
            })?;

        // Exit status is reported, not acted on.
        if !status.success() {
            warn!("{} install exited with {}", self.program, status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_program_is_fatal() {
        let dir = TempDir::new().unwrap();
        let installer = NpmInstaller::with_program("ts-scaffold-no-such-package-manager");

        let err = installer.install(dir.path()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Install { ref program, .. } if program == "ts-scaffold-no-such-package-manager"
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_exit_status_is_only_logged() {
        let dir = TempDir::new().unwrap();
        // `false install` starts fine and exits 1.
        let installer = NpmInstaller::with_program("false");

        assert!(installer.install(dir.path()).await.is_ok());
    }
}
