use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use std::io;

use trtc_cli::{commands, logging, Command, Config, ConfigAction, ConfigUpdate};
use trtc_client::HttpTransport;
use trtc_core::{default_config_path, AppConfig, Uploader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Parse command line arguments
    let cli = Config::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let mut app_config =
        AppConfig::load_or_init(&config_path).context("Failed to load configuration")?;

    // Setup logging (stderr + log file; stdout carries the server response)
    let log_path = logging::resolve_log_path(&app_config.log_file)?;
    logging::init(&log_path, cli.log_level.into())?;

    let mut stdout = io::stdout();

    match cli.command {
        Command::Upload(args) => {
            let transport = HttpTransport::new(app_config.transport_config())
                .map_err(commands::hard_failure)?;
            let uploader = Uploader::new(transport);
            commands::upload(
                &uploader,
                &args.api_key(&app_config),
                &args.category_paths(),
                &mut stdout,
            )
            .await?;
        }
        Command::Config { action } => match action {
            ConfigAction::Get => {
                commands::show_config(&app_config, &mut stdout)?;
            }
            ConfigAction::Set {
                endpoint,
                log_file,
                ignore_cert_error,
            } => {
                let update = ConfigUpdate {
                    endpoint,
                    log_file,
                    ignore_cert_error,
                };
                commands::set_config(&mut app_config, update, &config_path, &mut stdout)?;
            }
        },
    }

    Ok(())
}
