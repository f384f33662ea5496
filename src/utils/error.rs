use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unrecognized answer: '{answer}'")]
    InvalidAnswer { answer: String },

    #[error("Prompt input closed before an answer was given")]
    PromptClosed,
}

pub type Result<T> = std::result::Result<T, BrewError>;
