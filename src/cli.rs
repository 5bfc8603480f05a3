mod args;

pub use args::{AnalyzeArgs, Cli, Command, DEFAULT_API_URL, LOCAL_API_URL};
