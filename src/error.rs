/// Custom error type for webhook panel operations
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Invalid host parameters: {0}")]
    InvalidParameters(String),

    #[error("Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Helper type for Results that use PanelError
pub type Result<T> = std::result::Result<T, PanelError>;
