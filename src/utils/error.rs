use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Digit reversal of {value} overflows i32")]
    DigitOverflow { value: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Arithmetic,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::IoError(_) => ErrorCategory::Io,
            KataError::SerializationError(_) => ErrorCategory::Serialization,
            KataError::ConfigParseError { .. }
            | KataError::InvalidConfigValueError { .. }
            | KataError::MissingConfigError { .. } => ErrorCategory::Configuration,
            KataError::InvalidInput { .. } => ErrorCategory::Input,
            KataError::DigitOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 溢位只代表該數字不可能是回文
            KataError::DigitOverflow { .. } => ErrorSeverity::Low,
            KataError::InvalidInput { .. } => ErrorSeverity::Medium,
            KataError::ConfigParseError { .. }
            | KataError::InvalidConfigValueError { .. }
            | KataError::MissingConfigError { .. } => ErrorSeverity::High,
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the suite file exists and is readable",
            ErrorCategory::Configuration => {
                "Fix the suite file: every case needs a kind, sorted nums and an expected value"
            }
            ErrorCategory::Input => "Pass a non-negative integer",
            ErrorCategory::Arithmetic => "Use a value whose reversal fits in a 32-bit integer",
            ErrorCategory::Serialization => "Re-run without --json and report the failure",
        }
    }

    /// Process exit code for the CLI.
    ///
    /// Medium only comes from `reverse_digits` input errors, which library callers
    /// can hit; suite loading yields High or Critical.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::IoError(e) => format!("Could not read the suite file: {}", e),
            KataError::ConfigParseError { message } => {
                format!("The suite file is not valid TOML: {}", message)
            }
            KataError::InvalidConfigValueError { field, reason, .. } => {
                format!("Field '{}' is invalid: {}", field, reason)
            }
            KataError::MissingConfigError { field } => {
                format!("Field '{}' is required but missing", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
