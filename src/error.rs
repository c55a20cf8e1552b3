use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export scale must be a positive number, got {0}")]
    InvalidScale(f32),

    #[error("export surface {width}x{height} has no pixels")]
    Empty { width: u32, height: u32 },

    #[error("export surface {width}x{height} exceeds the {max}px limit")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start download: {0}")]
    Download(String),
}

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
