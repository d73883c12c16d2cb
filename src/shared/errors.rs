use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown theme: {0} (expected \"light\" or \"dark\")")]
    UnknownTheme(String),

    #[error("Config read error for {}: {source}", .path.display())]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error for {}: {source}", .path.display())]
    ConfigParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
