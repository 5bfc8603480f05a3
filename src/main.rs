use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cased_tf::cli::{AnalyzeArgs, Cli, Command};
use cased_tf::{CasedError, ErrorKind, Settings, TerraformCli, analyze, config, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cased_tf=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Analyze(args) => run_analyze(args).await,
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            let kind = err.kind();
            let detail = error::display_chain(&err);
            let message = match kind {
                ErrorKind::Usage => format!("Error: {}", detail),
                ErrorKind::Network => format!("Error calling Cased API: {}", detail),
                ErrorKind::Unexpected => format!("Unexpected error: {}", detail),
            };
            eprintln!("\n{}", message.red());
            Ok(ExitCode::from(kind.exit_code()))
        }
    }
}

async fn run_analyze(args: AnalyzeArgs) -> Result<(), CasedError> {
    let file = config::load_config(args.config.as_deref(), &config::default_search_paths())?;
    let settings = Settings::resolve(&args, file)?;
    tracing::debug!(settings = ?settings, "resolved settings");

    let runner = Box::new(TerraformCli::new(settings.terraform_bin.clone()));
    let mut stdout = std::io::stdout();
    analyze::run(&settings, runner, &mut stdout).await?;
    Ok(())
}
