//! Tab Timer - A keyboard-driven countdown timer
//!
//! This is the main entry point for the tab-timer application.

use tracing::{error, info};

use tab_timer::{config::Config, tui, utils::init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_logging(&config.log_path(), config.log_level());

    info!("Starting tab-timer v1.0.0");
    info!(
        "Configuration: tick={:?}, sound={:?}, prefs={}, system_theme={:?}",
        config.tick_interval(),
        config.sound,
        config.prefs_path().display(),
        config.system_theme
    );

    let result = tui::run(&config).await;
    if let Err(e) = &result {
        error!("tab-timer failed: {:#}", e);
    }

    info!("tab-timer shutdown complete");
    result
}
