use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Statement source error: {0}")]
    Source(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed statement data: {0}")]
    Parse(#[from] serde_json::Error),
}
