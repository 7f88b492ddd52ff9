use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request decode error: {message}")]
    DecodeError { message: String },

    #[error("Translation failed: {message}")]
    TranslationError { message: String },

    #[error("Table QA endpoint returned status {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, QaError>;
