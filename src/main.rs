use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use help_center_tui::app::App;
use help_center_tui::config::{Config, ConfigOrigin};
use help_center_tui::logging;

#[derive(Parser)]
#[command(name = "help-center")]
#[command(about = "A terminal client for browsing and creating Help Center topics")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "help-center.yaml")]
    config: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Help Center API base URL
    #[arg(short, long)]
    api_url: Option<String>,

    /// Route to open on start
    #[arg(short, long, default_value = "/")]
    route: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, origin) = Config::load_with_origin(&cli.config)?;
    if let Some(api_url) = cli.api_url {
        config.set_api_url(api_url);
    }
    config.validate()?;

    let _log_guard = logging::init_tracing(&config.logging, cli.debug)?;

    info!("Starting Help Center TUI client");
    match origin {
        ConfigOrigin::File => info!("Loaded configuration from {}", cli.config),
        ConfigOrigin::CreatedDefault => {
            warn!("Configuration file not found at {}, created default config", cli.config)
        }
    }

    let mut app = App::new(config)?;
    app.navigate(&cli.route);
    app.run().await?;

    info!("Help Center client shutdown complete");
    Ok(())
}
