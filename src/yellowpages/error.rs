use thiserror::Error;

/// A field value rejected by one of the validators in [`crate::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Names may contain only letters and a single hyphen: {0}")]
    InvalidName(String),

    #[error("Phone number '{0}' must start with +7 or 8 and have 11 digits")]
    InvalidPhonePrefix(String),

    #[error("Phone number '{0}' is not a valid number, use the +7-XXX-XXX-XXXX format")]
    InvalidPhoneLength(String),
}

#[derive(Error, Debug)]
pub enum YellowPagesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(u64),

    #[error("Not a number: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, YellowPagesError>;
