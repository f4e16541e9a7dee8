use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("File '{path}' not found")]
    FileNotFound { path: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("API rejected the request (HTTP {status}): {body}")]
    ApiRejectedError { status: u16, body: String },
}

impl ImportError {
    /// 給操作者的一行修復建議，只用於日誌輸出
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImportError::FileNotFound { .. } => {
                "Check the CSV file path and make sure the file exists"
            }
            ImportError::ApiError(_) => {
                "Check network connectivity and that the API base URL is reachable"
            }
            ImportError::CsvError(_) => "Check the CSV file for encoding or quoting problems",
            ImportError::IoError(_) => "Check file permissions and disk state",
            ImportError::SerializationError(_) => "The API returned a body that could not be parsed",
            ImportError::ConfigError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::MissingConfigError { .. } => {
                "Fix the settings file or the LINKS_API_URL / LINKS_API_TOKEN variables"
            }
            ImportError::ApiRejectedError { .. } => {
                "Check the API token scopes and the slug you are operating on"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
