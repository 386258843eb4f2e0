//! Local git identity, used only for prompt defaults.

use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use crate::models::GitIdentity;

/// Reads `user.name` and `user.email` as git resolves them inside `dir`, so a
/// repository-local identity beats the global one. Missing git yields an empty identity.
pub async fn user_identity(dir: &Path) -> GitIdentity {
    GitIdentity {
        name: get_config_value(dir, "user.name").await,
        email: get_config_value(dir, "user.email").await,
    }
}

async fn get_config_value(dir: &Path, key: &str) -> Option<String> {
    let output = match Command::new("git")
        .args(["config", "--get", key])
        .current_dir(dir)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            debug!("git unavailable while reading {}: {}", key, e);
            return None;
        }
    };

    if !output.status.success() {
        debug!("git config {} not set", key);
        return None;
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}
