use std::path::{Path, PathBuf};

use serde::Deserialize;
use termtree::Tree;

use super::show::{ShowOutput, summarize};
use super::{ShowCommand, StateError};
use crate::config::DEFAULT_PROVIDER_PREFIX;

const SNIPPET_CHARS: usize = 200;

/// Terraform state captured from a working directory.
#[derive(Debug)]
pub struct StateSnapshot {
    pub show_output: serde_json::Value,
    pub summary: Option<Tree<String>>,
}

pub struct StateCollector {
    working_dir: PathBuf,
    runner: Box<dyn ShowCommand>,
    provider_prefix: String,
}

impl StateCollector {
    pub fn new(working_dir: impl Into<PathBuf>, runner: Box<dyn ShowCommand>) -> Self {
        Self {
            working_dir: working_dir.into(),
            runner,
            provider_prefix: DEFAULT_PROVIDER_PREFIX.to_string(),
        }
    }

    pub fn with_provider_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.provider_prefix = prefix.into();
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Checks that the directory holds Terraform sources and has been initialized.
    pub fn validate(&self) -> Result<(), StateError> {
        let entries = std::fs::read_dir(&self.working_dir).map_err(|source| StateError::Io {
            dir: self.working_dir.clone(),
            source,
        })?;

        let has_sources = entries
            .filter_map(Result::ok)
            .any(|entry| is_terraform_source(&entry.file_name().to_string_lossy()));

        if !has_sources {
            return Err(StateError::NoConfigFiles {
                dir: self.working_dir.clone(),
            });
        }

        if !self.working_dir.join(".terraform").exists() {
            return Err(StateError::NotInitialized {
                dir: self.working_dir.clone(),
            });
        }

        Ok(())
    }

    pub async fn collect(&self) -> Result<StateSnapshot, StateError> {
        self.validate()?;

        let output = self.runner.show_json(&self.working_dir).await?;
        if !output.success {
            return Err(StateError::CommandFailed {
                stderr: output.stderr,
            });
        }

        let show_output: serde_json::Value =
            serde_json::from_str(&output.stdout).map_err(|e| {
                tracing::debug!(error = %e, "terraform show output is not JSON");
                StateError::InvalidJson {
                    snippet: output.stdout.chars().take(SNIPPET_CHARS).collect(),
                }
            })?;

        let summary = match ShowOutput::deserialize(&show_output) {
            Ok(parsed) => summarize(&parsed, &self.provider_prefix),
            Err(e) => {
                tracing::warn!(error = %e, "skipping resource summary");
                None
            }
        };

        Ok(StateSnapshot {
            show_output,
            summary,
        })
    }
}

fn is_terraform_source(file_name: &str) -> bool {
    file_name.ends_with(".tf") || file_name.ends_with(".tf.json")
}
