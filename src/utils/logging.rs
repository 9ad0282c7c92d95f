//! Tracing subscriber setup

use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Install the global subscriber, writing to `path`.
///
/// The terminal belongs to the widget, so logs never go to stdout. If the log
/// file cannot be opened, log output is discarded.
pub fn init_logging(path: &Path, level: &str) {
    let writer = match open_log_file(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("tab_timer={}", level))
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
