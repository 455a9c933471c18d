use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Scenario limit reached: at most {0} scenarios can be compared")]
    ScenarioLimit(usize),
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(usize),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}
