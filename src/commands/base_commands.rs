use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a cancellation forecast for a single reservation
    Predict {
        /// Path to prediction service config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Base URL of the prediction service (overrides the config file)
        #[arg(short, long)]
        base_url: Option<String>,
        /// Form edit as field=value, applied in order (e.g. numAdultos=3)
        #[arg(long = "set", value_parser = parse_field_edit)]
        edits: Vec<(String, String)>,
        /// Check-in date (YYYY-MM-DD); fills weekday and month
        #[arg(long)]
        check_in: Option<String>,
        /// Booking date (YYYY-MM-DD); fills the booking age in days
        #[arg(long)]
        booked_on: Option<String>,
        /// Optional output YAML file with request and result
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Edit the reservation form interactively and request forecasts
    Form {
        /// Path to prediction service config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Base URL of the prediction service (overrides the config file)
        #[arg(short, long)]
        base_url: Option<String>,
    },
    /// Print the default reservation form
    Defaults {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

fn parse_field_edit(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected field=value, got '{raw}'")),
    }
}
