use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("HTTP request failed with status code {status}, response: {body}")]
    FetchError { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("invalid input line {line_number}: {line:?}")]
    MalformedLineError { line_number: usize, line: String },

    #[error("invalid number {token:?} on line {line_number}: {source}")]
    InvalidNumberError {
        line_number: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AocError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Fetch,
    Parse,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AocError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AocError::ConfigError { .. }
            | AocError::MissingConfigError { .. }
            | AocError::InvalidConfigValueError { .. }
            | AocError::ConfigFileError(_)
            | AocError::UrlError(_) => ErrorCategory::Config,
            AocError::FetchError { .. } | AocError::TransportError(_) => ErrorCategory::Fetch,
            AocError::MalformedLineError { .. }
            | AocError::InvalidNumberError { .. }
            | AocError::EncodingError(_) => ErrorCategory::Parse,
            AocError::IoError(_) | AocError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Server-side or network trouble may clear up on a later run.
            AocError::FetchError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            AocError::TransportError(_) => ErrorSeverity::Medium,
            AocError::IoError(_) | AocError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AocError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            AocError::FetchError { status, .. } => {
                format!("Error fetching data: server answered with status {}", status)
            }
            AocError::TransportError(e) => format!("Error fetching data: {}", e),
            AocError::MalformedLineError { .. }
            | AocError::InvalidNumberError { .. }
            | AocError::EncodingError(_) => format!("Error parsing input: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AocError::MissingConfigError { .. } => {
                "Set SESSION in the environment or a .env file, pass --session, or add `session` to the config file"
            }
            AocError::FetchError { status: 400 | 401 | 403, .. } => {
                "The session cookie was rejected; copy a fresh value from a logged-in browser"
            }
            AocError::FetchError { status: 404, .. } => {
                "The puzzle input is not available yet, or the base URL is wrong"
            }
            AocError::FetchError { .. } | AocError::TransportError(_) => {
                "Check network connectivity and try again later"
            }
            AocError::MalformedLineError { .. }
            | AocError::InvalidNumberError { .. }
            | AocError::EncodingError(_) => {
                "Expected one pair of whitespace-separated integers per line"
            }
            AocError::ConfigFileError(_) => "Fix the TOML syntax in the config file",
            AocError::ConfigError { .. }
            | AocError::InvalidConfigValueError { .. }
            | AocError::UrlError(_) => "Review the command-line flags and config file",
            AocError::IoError(_) | AocError::SerializationError(_) => {
                "Check that the file exists and is readable"
            }
        }
    }
}
