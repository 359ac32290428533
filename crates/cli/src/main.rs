use clap::{Parser, Subcommand};
use ferrous_zones_domain::CliOverrides;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod commands;
mod di;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "ferrous-zones")]
#[command(version)]
#[command(about = "Ferrous Zones - zone file loader and authority lookup")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Directory containing zone files
    #[arg(short = 'z', long, value_name = "DIR", global = true)]
    zones: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load every zone file and print a summary
    Check,

    /// Print every loaded zone
    Show {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the zone with authority over each domain
    Lookup {
        #[arg(required = true, value_name = "DOMAIN")]
        domains: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        zones_path: cli.zones.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    info!(
        zones = %config.zones.path,
        "Starting Ferrous Zones v{}",
        env!("CARGO_PKG_VERSION")
    );

    let use_cases = di::UseCases::new(&config).inspect_err(|e| {
        error!(error = %e, "Failed to load zones");
    })?;

    let mut out = io::stdout().lock();
    match cli.command.unwrap_or(Command::Check) {
        Command::Check => commands::check(&use_cases.registry, &mut out)?,
        Command::Show { format } => commands::show(&use_cases.registry, format, &mut out)?,
        Command::Lookup { domains } => {
            if !commands::lookup(&use_cases, &domains, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
