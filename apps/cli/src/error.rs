use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("{0}")]
    Selection(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ConfigNotFound(_) | CliError::ConfigParse(_) | CliError::Selection(_) => {
                crate::exit_code::USAGE
            }
            CliError::Io(_) | CliError::Json(_) => crate::exit_code::RUNTIME_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
