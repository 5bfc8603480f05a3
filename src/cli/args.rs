use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_API_URL: &str = "https://app.cased.com";
pub const LOCAL_API_URL: &str = "http://localhost:3000";

/// Cased Terraform Analysis Tool
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze Terraform configuration for drift
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Project name (org/project)
    #[arg(long)]
    pub project: Option<String>,

    /// Environment name (e.g. prod, staging)
    #[arg(long)]
    pub environment: Option<String>,

    /// Cased API key
    #[arg(long, env = "CASED_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Cased API URL [default: https://app.cased.com]
    #[arg(long, env = "CASED_API_URL")]
    pub api_url: Option<String>,

    /// Terraform working directory
    #[arg(long, value_parser = existing_dir)]
    pub working_dir: Option<PathBuf>,

    /// Show what would be sent to the API without making the request
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(long, value_parser = existing_file)]
    pub config: Option<PathBuf>,

    /// Use local development server (http://localhost:3000)
    #[arg(long)]
    pub local: bool,

    /// Terraform executable to run
    #[arg(long, env = "CASED_TERRAFORM_BIN", default_value = "terraform")]
    pub terraform_bin: PathBuf,
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("directory '{value}' does not exist"));
    }
    if !path.is_dir() {
        return Err(format!("'{value}' is not a directory"));
    }
    Ok(path)
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("file '{value}' does not exist"));
    }
    if path.is_dir() {
        return Err(format!("'{value}' is a directory"));
    }
    Ok(path)
}
