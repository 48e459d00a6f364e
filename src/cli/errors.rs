use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown asset '{name}'")]
    UnknownAsset { name: String, available: Vec<String> },
}
