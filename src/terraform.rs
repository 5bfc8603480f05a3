mod error;
mod runner;
mod show;
mod state;

pub use error::StateError;
pub use runner::{CommandOutput, ShowCommand, TerraformCli};
pub use show::{Module, ShowOutput, StateResource, StateValues, summarize};
pub use state::{StateCollector, StateSnapshot};
