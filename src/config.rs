//! Configuration loading and resolution.
//!
//! Values come from, in order of precedence: CLI flags, environment variables
//! (both handled by clap), the YAML config file, and built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{AnalyzeArgs, DEFAULT_API_URL, LOCAL_API_URL};
use crate::error::CasedError;

pub const DEFAULT_PROVIDER_PREFIX: &str = "aws_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Contents of a `config.yml` / `.cased.yml` file.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_prefix: Option<String>,
}

impl fmt::Debug for FileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("project", &self.project)
            .field("environment", &self.environment)
            .field("working_dir", &self.working_dir)
            .field("provider_prefix", &self.provider_prefix)
            .finish()
    }
}

pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("cased").join("config.yml"));
        paths.push(home.join(".cased").join("config.yml"));
    }
    paths.push(PathBuf::from(".cased.yml"));
    paths
}

/// Loads the first existing config file out of `explicit` followed by
/// `search_paths`. Finding no file at all yields an empty config.
pub fn load_config(
    explicit: Option<&Path>,
    search_paths: &[PathBuf],
) -> Result<FileConfig, ConfigError> {
    let found = explicit
        .into_iter()
        .chain(search_paths.iter().map(PathBuf::as_path))
        .find(|path| path.is_file());

    let Some(path) = found else {
        tracing::info!("no config file found");
        return Ok(FileConfig::default());
    };

    tracing::info!(path = %path.display(), "found config file");

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(config = ?config, "loaded config");
    Ok(config)
}

fn parse_config(contents: &str) -> Result<FileConfig, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    match serde_yaml::from_str::<serde_yaml::Value>(contents)? {
        serde_yaml::Value::Null => Ok(FileConfig::default()),
        value @ serde_yaml::Value::Mapping(_) => serde_yaml::from_value(value),
        _ => Err(serde::de::Error::custom("expected a mapping of config keys")),
    }
}

/// Settings for a single `analyze` run after all sources are merged.
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_url: String,
    pub project: String,
    pub environment: String,
    pub working_dir: PathBuf,
    pub dry_run: bool,
    pub provider_prefix: String,
    pub terraform_bin: PathBuf,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("project", &self.project)
            .field("environment", &self.environment)
            .field("working_dir", &self.working_dir)
            .field("dry_run", &self.dry_run)
            .field("provider_prefix", &self.provider_prefix)
            .field("terraform_bin", &self.terraform_bin)
            .finish()
    }
}

impl Settings {
    pub fn resolve(args: &AnalyzeArgs, file: FileConfig) -> Result<Self, CasedError> {
        let api_key = args.api_key.clone().or(file.api_key);

        let api_url = if args.local {
            LOCAL_API_URL.to_string()
        } else {
            args.api_url
                .clone()
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        };

        let project = args.project.clone().or(file.project).ok_or_else(|| {
            CasedError::usage("Project must be specified via --project or config file")
        })?;

        let environment = args.environment.clone().or(file.environment).ok_or_else(|| {
            CasedError::usage("Environment must be specified via --environment or config file")
        })?;

        let working_dir = match (&args.working_dir, file.working_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => expand_home(&dir),
            (None, None) => std::env::current_dir()?,
        };

        if !args.dry_run && api_key.is_none() {
            return Err(CasedError::usage(
                "--api-key is required unless using --dry-run",
            ));
        }

        Ok(Self {
            api_key,
            api_url,
            project,
            environment,
            working_dir,
            dry_run: args.dry_run,
            provider_prefix: file
                .provider_prefix
                .unwrap_or_else(|| DEFAULT_PROVIDER_PREFIX.to_string()),
            terraform_bin: args.terraform_bin.clone(),
        })
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
