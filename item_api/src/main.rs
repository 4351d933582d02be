//! Main entry point for the item-api binary.

use anyhow::Result;
use clap::Parser;
use item_api::{cli, server, settings::Settings, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let mut settings = Settings::load(args.config.as_deref())?;

    match args.command {
        cli::Commands::Serve { addr } => {
            if let Some(addr) = addr {
                settings.server.host = addr.ip().to_string();
                settings.server.port = addr.port();
                settings.validate()?;
            }

            telemetry::init(&settings.logging)?;
            server::serve(&settings).await
        }
        cli::Commands::Config => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}
