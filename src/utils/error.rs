use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid request field '{field}' ({value}): {reason}")]
    InvalidRequest {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Image generation failed: {message}")]
    ImageGenerationError { message: String },

    #[error("Image generation is not available")]
    ImageGenerationUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Request,
    ImageGeneration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::ConfigError { .. }
            | PlanError::InvalidConfigValueError { .. }
            | PlanError::TomlError(_) => ErrorCategory::Configuration,
            PlanError::InvalidRequest { .. } => ErrorCategory::Request,
            PlanError::ImageGenerationError { .. } | PlanError::ImageGenerationUnavailable => {
                ErrorCategory::ImageGeneration
            }
            PlanError::IoError(_) | PlanError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 影像服務失敗會退回本地生成
            PlanError::ImageGenerationUnavailable => ErrorSeverity::Low,
            PlanError::ImageGenerationError { .. } => ErrorSeverity::Medium,
            PlanError::InvalidRequest { .. } => ErrorSeverity::High,
            PlanError::ConfigError { .. }
            | PlanError::InvalidConfigValueError { .. }
            | PlanError::TomlError(_) => ErrorSeverity::High,
            PlanError::IoError(_) | PlanError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanError::InvalidRequest { field, reason, .. } => {
                format!("The request is invalid: {} ({})", reason, field)
            }
            PlanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PlanError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlanError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            PlanError::ImageGenerationError { .. } | PlanError::ImageGenerationUnavailable => {
                "Image generation is unavailable, plans were generated locally".to_string()
            }
            PlanError::IoError(e) => format!("File system error: {}", e),
            PlanError::SerializationError(_) => "Failed to read or write plan JSON".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the configuration file and command line flags"
            }
            ErrorCategory::Request => "Use an area between 20 and 200 m² and 1 to 5 rooms",
            ErrorCategory::ImageGeneration => "No action needed; local generation is used instead",
            ErrorCategory::System => "Check file paths and permissions, then retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
