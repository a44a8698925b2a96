use clap::Parser;
use greeter::Deployment;
use greeter::core::config::{self, CliOverrides};
use greeter::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "greeter", about = "Fetches a greeting from a backend and shows it")]
struct Args {
    /// Deployment preset that picks the default endpoint
    #[arg(short, long, value_enum)]
    deployment: Option<Deployment>,

    /// Base URL of the backend (e.g. http://localhost:5000)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Path of the greeting endpoint (e.g. /api/ping)
    #[arg(short, long)]
    path: Option<String>,

    /// Read settings from this file instead of ~/.greeter/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to greeter.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("greeter.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let cli = CliOverrides {
        deployment: args.deployment,
        base_url: args.base_url,
        path: args.path,
    };
    let resolved = match file_config.and_then(|c| config::resolve(&c, &cli)) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::warn!("Startup failed: {}", e);
            eprintln!("greeter: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Greeter starting up: deployment={:?}, endpoint={}",
        resolved.deployment,
        resolved.endpoint
    );

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::warn!("Terminal error: {}", e);
            eprintln!("greeter: {e}");
            ExitCode::FAILURE
        }
    }
}
