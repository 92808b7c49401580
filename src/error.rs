use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the devault CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    CapabilityUnsupported(String),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to launch editor: {0}")]
    Editor(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Failed to open '{uri}': {reason}")]
    Launcher { uri: String, reason: String },

    #[error("Invalid screen size '{0}', expected WIDTHxHEIGHT")]
    InvalidScreen(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid exclude pattern: {0}")]
    Glob(#[from] globset::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}

/// A failure confined to one file or one directory of a scan.
///
/// These never abort a walk; the walker records them next to the findings.
#[derive(Debug, Error)]
pub enum ScanWarning {
    #[error("could not read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not read directory {path}: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ScanWarning {
    pub fn path(&self) -> &str {
        match self {
            ScanWarning::FileRead { path, .. } | ScanWarning::DirectoryRead { path, .. } => path,
        }
    }
}
