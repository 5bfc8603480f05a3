use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error(
        "No .tf files found in {}. Please run this command from a directory containing \
         Terraform files or specify --working-dir",
        .dir.display()
    )]
    NoConfigFiles { dir: PathBuf },

    #[error("Terraform not initialized in {}. Please run 'terraform init' first.", .dir.display())]
    NotInitialized { dir: PathBuf },

    #[error("failed to read {}: {source}", .dir.display())]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run {}: {source}", .binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terraform show failed:\n{stderr}")]
    CommandFailed { stderr: String },

    #[error("Failed to parse terraform show output as JSON. Output: {snippet}...")]
    InvalidJson { snippet: String },
}
