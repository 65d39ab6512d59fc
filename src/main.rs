use std::io;
use std::process::ExitCode;

use cancel_forecast::commands::base_commands::{CliArgs, Commands};
use cancel_forecast::commands::defaults_cmd::defaults_command;
use cancel_forecast::commands::form_cmd::form_command;
use cancel_forecast::commands::predict_cmd::predict_command;
use cancel_forecast::logging;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {e:?}");
    }

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Predict { .. } => predict_command(cmd).await,
        cmd @ Commands::Form { .. } => form_command(cmd).await,
        Commands::Defaults { format } => defaults_command(format),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            generate(shell, &mut command, "cancel-forecast", &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
