use thiserror::Error;

#[derive(Error, Debug)]
pub enum EduSpendError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input for '{field}': {message}")]
    InvalidInputError { field: String, message: String },

    #[error("Exchange rate service error: {message}")]
    RateServiceError { message: String },

    #[error("Failed to load model from '{path}': {message}")]
    ModelLoadError { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EduSpendError {
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInputError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpError(_) | Self::RateServiceError { .. } => ErrorSeverity::Medium,
            Self::InvalidInputError { .. } => ErrorSeverity::High,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::ModelLoadError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) | Self::RateServiceError { .. } => "Check network connectivity or pass --exchange-rate explicitly",
            Self::InvalidInputError { .. } => {
                "Run `eduspend options` to see the accepted values for each field"
            }
            Self::ModelLoadError { .. } => {
                "Point --model (or [model].path) at a valid model artifact"
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file and try again",
            Self::IoError(_) => "Check file paths and permissions",
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Retry with --json or report the input that triggered this"
            }
        }
    }

    /// Exit code used by the binary. Critical failures (model load) exit with 3.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EduSpendError>;
