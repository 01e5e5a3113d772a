use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type PollResult<T> = Result<T, PollError>;
