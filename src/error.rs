use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid data format in {table}: {message}")]
    DataFormat { table: String, message: String },

    #[error("Missing required column(s) in {table}: {}", columns.join(", "))]
    MissingColumn { table: String, columns: Vec<String> },

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProcessingError {
    pub fn data_format(table: &str, message: impl Into<String>) -> Self {
        ProcessingError::DataFormat {
            table: table.to_string(),
            message: message.into(),
        }
    }

    pub fn missing_column(table: &str, columns: Vec<String>) -> Self {
        ProcessingError::MissingColumn {
            table: table.to_string(),
            columns,
        }
    }
}
