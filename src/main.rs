use airport_info::{
    api::AirportClient,
    config::Config,
    logging,
    lookup::{lookup, LookupOutput},
    render::JsonHandoffRenderer,
};
use clap::Parser;
use color_eyre::Result;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

/// Look up an airport by ICAO code.
#[derive(Parser, Debug)]
#[command(name = "airport-info", version, about)]
struct Cli {
    /// ICAO code, e.g. KJFK
    icao: String,

    /// Print the plain-text report instead of the card render request
    #[arg(long)]
    raw: bool,

    /// Path to the TOML config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (config, config_error) = match Config::load_from(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => {
            eprintln!("{}. Using defaults.", e);
            (Config::default(), Some(e))
        }
    };
    let _log_guard = logging::initialize_logging(&config.logging)?;
    if let Some(e) = config_error {
        warn!("{}. Using defaults.", e);
    }

    let client = AirportClient::new(&config.api)?;
    let output = lookup(&client, &JsonHandoffRenderer, &config.render, &cli.icao, cli.raw).await;

    // Return instead of exiting so the log guard gets to flush.
    match output {
        Ok(LookupOutput::Text(text)) => println!("{}", text),
        Ok(LookupOutput::Image(image)) => {
            let mut stdout = std::io::stdout();
            stdout.write_all(&image.bytes)?;
            stdout.flush()?;
        }
        Err(e) => {
            error!("Lookup for '{}' failed: {}", cli.icao, e);
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
