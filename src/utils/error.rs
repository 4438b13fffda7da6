use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Invalid parameters (pool size {pool_size}, count {count}): {reason}")]
    InvalidParameters {
        pool_size: u32,
        count: u32,
        reason: String,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No input received for {field}")]
    MissingInputError { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Generation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LottoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LottoError::ValidationError { .. } | LottoError::MissingInputError { .. } => {
                ErrorCategory::Input
            }
            LottoError::InvalidParameters { .. } => ErrorCategory::Generation,
            LottoError::ConfigError { .. } => ErrorCategory::Configuration,
            LottoError::IoError(_) | LottoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LottoError::ValidationError { .. }
            | LottoError::MissingInputError { .. }
            | LottoError::ConfigError { .. } => ErrorSeverity::Medium,
            LottoError::InvalidParameters { .. } => ErrorSeverity::High,
            LottoError::IoError(_) | LottoError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LottoError::InvalidParameters { pool_size, .. } if *pool_size == 0 => {
                "Use a pool size of at least 1".to_string()
            }
            LottoError::InvalidParameters { pool_size, .. } => format!(
                "Ask for at most {} numbers per game, or enlarge the pool",
                pool_size
            ),
            LottoError::ValidationError { field, .. } => {
                format!("Enter {} as a whole number of 0 or more", field)
            }
            LottoError::MissingInputError { field } => {
                format!("Pass {} on the command line or in the config file", field)
            }
            LottoError::ConfigError { .. } => {
                "Check the config file syntax and that referenced environment variables are set"
                    .to_string()
            }
            LottoError::IoError(_) => {
                "Check that the terminal or output file is writable".to_string()
            }
            LottoError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }

    /// Process exit status for this error; Low severity still exits 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LottoError::InvalidParameters { pool_size, count, .. } if *pool_size == 0 => format!(
                "Cannot draw {} numbers from an empty pool",
                count
            ),
            LottoError::InvalidParameters { pool_size, count, .. } => format!(
                "Cannot draw {} different numbers from a pool of only {}",
                count, pool_size
            ),
            LottoError::ValidationError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            LottoError::MissingInputError { field } => format!("No value was given for {}", field),
            LottoError::ConfigError { message } => format!("Config problem: {}", message),
            LottoError::IoError(e) => format!("Could not read or write the console: {}", e),
            LottoError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;
