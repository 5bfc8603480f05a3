use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::StateError;

/// Captured result of a `terraform show -json` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait ShowCommand: Send + Sync {
    async fn show_json(&self, working_dir: &Path) -> Result<CommandOutput, StateError>;
}

/// Runs the real Terraform executable.
#[derive(Debug, Clone)]
pub struct TerraformCli {
    binary: PathBuf,
}

impl TerraformCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl ShowCommand for TerraformCli {
    async fn show_json(&self, working_dir: &Path) -> Result<CommandOutput, StateError> {
        tracing::debug!(
            binary = %self.binary.display(),
            dir = %working_dir.display(),
            "running terraform show -json"
        );

        let output = tokio::process::Command::new(&self.binary)
            .args(["show", "-json"])
            .current_dir(working_dir)
            .output()
            .await
            .map_err(|source| StateError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        tracing::debug!(status = %output.status, bytes = output.stdout.len(), "terraform exited");

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
