use thiserror::Error;

#[derive(Error, Debug)]
pub enum GolfError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Malformed row in {file} at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        file: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate column '{column}' in {file}")]
    DuplicateColumn { file: String, column: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Figure generation error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GolfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GolfError::IoError(_) => ErrorCategory::Input,
            GolfError::CsvError(_)
            | GolfError::MalformedRow { .. }
            | GolfError::DuplicateColumn { .. } => ErrorCategory::Data,
            GolfError::TomlError(_)
            | GolfError::MissingConfigError { .. }
            | GolfError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GolfError::SerializationError(_) | GolfError::RenderError { .. } => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GolfError::MalformedRow { .. } | GolfError::DuplicateColumn { .. } => {
                ErrorSeverity::Medium
            }
            GolfError::CsvError(_)
            | GolfError::TomlError(_)
            | GolfError::MissingConfigError { .. }
            | GolfError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            GolfError::IoError(_)
            | GolfError::SerializationError(_)
            | GolfError::RenderError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GolfError::IoError(e) => format!("Could not read or write a file: {}", e),
            GolfError::CsvError(e) => format!("A CSV file could not be parsed: {}", e),
            GolfError::MalformedRow { file, line, .. } => {
                format!("{} has a row with the wrong number of fields (line {})", file, line)
            }
            GolfError::DuplicateColumn { file, column } => {
                format!("{} declares the column '{}' more than once", file, column)
            }
            GolfError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            GolfError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            GolfError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            GolfError::SerializationError(_) | GolfError::RenderError { .. } => {
                "Figures could not be generated".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input files exist and are readable",
            ErrorCategory::Data => "Fix the CSV file so every row matches the header",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML config",
            ErrorCategory::Output => "Check that the output directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, GolfError>;
