//! cased-tf - Cased Terraform Analysis Tool
//!
//! Captures Terraform state, sends it to the Cased API for drift analysis and
//! prints the resulting report.

pub mod analyze;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod resource;
pub mod terraform;

pub use api::{AnalysisRequest, ApiError, CasedClient};
pub use config::{FileConfig, Settings, default_search_paths, load_config};
pub use error::{CasedError, ErrorKind};
pub use output::print_drift_report;
pub use resource::{DriftEntry, DriftReport, ResourceRecord};
pub use terraform::{CommandOutput, ShowCommand, StateCollector, StateError, TerraformCli};
