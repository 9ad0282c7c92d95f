//! Desktop light/dark preference detection

use clap::ValueEnum;
use tokio::process::Command;
use tracing::debug;

/// Where the system dark-mode preference comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemThemeProbe {
    /// Ask the desktop environment
    Auto,
    /// Always report dark
    Dark,
    /// Always report light
    Light,
}

impl SystemThemeProbe {
    /// Current system preference. Unknown reads as light.
    pub async fn prefers_dark(&self) -> bool {
        match self {
            SystemThemeProbe::Dark => true,
            SystemThemeProbe::Light => false,
            SystemThemeProbe::Auto => match query_desktop().await {
                Ok(dark) => dark,
                Err(e) => {
                    debug!("System theme unavailable, assuming light: {}", e);
                    false
                }
            },
        }
    }
}

#[cfg(target_os = "macos")]
async fn query_desktop() -> Result<bool, String> {
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .await
        .map_err(|e| format!("Failed to execute defaults: {}", e))?;

    // The key is absent in light mode, which makes `defaults` exit non-zero
    Ok(output.status.success() && parse_macos(&String::from_utf8_lossy(&output.stdout)))
}

#[cfg(not(target_os = "macos"))]
async fn query_desktop() -> Result<bool, String> {
    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .await
        .map_err(|e| format!("Failed to execute gsettings: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("gsettings failed: {}", stderr));
    }

    Ok(parse_gsettings(&String::from_utf8_lossy(&output.stdout)))
}

/// `'prefer-dark'` means dark; `'default'` and `'prefer-light'` do not
pub fn parse_gsettings(output: &str) -> bool {
    output.trim().trim_matches('\'').eq_ignore_ascii_case("prefer-dark")
}

pub fn parse_macos(output: &str) -> bool {
    output.trim().eq_ignore_ascii_case("dark")
}
