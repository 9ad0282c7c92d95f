//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::services::SystemThemeProbe;

const APP_DIR: &str = "tab-timer";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tab-timer")]
#[command(about = "A keyboard-driven terminal countdown timer")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Audio file played when the countdown completes (wav, ogg or mp3)
    #[arg(short, long)]
    pub sound: Option<PathBuf>,

    /// Preferences file holding the saved theme
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Countdown tick period in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// How often to check the system theme, in seconds
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    pub theme_poll_secs: u64,

    /// Source of the system light/dark preference
    #[arg(long, value_enum, default_value = "auto")]
    pub system_theme: SystemThemeProbe,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn theme_poll_interval(&self) -> Duration {
        Duration::from_secs(self.theme_poll_secs)
    }

    /// Preferences file, falling back to the user config directory
    pub fn prefs_path(&self) -> PathBuf {
        self.prefs.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("prefs.json")
        })
    }

    /// Log file, falling back to the user cache directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("tab-timer.log")
        })
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
