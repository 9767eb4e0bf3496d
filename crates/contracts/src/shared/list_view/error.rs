use thiserror::Error;

/// Failure reported by a record store collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("failed to decode records: {0}")]
    Decode(String),
}

/// Failure reported by an action handler collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("action '{0}' is not supported here")]
    Unsupported(String),
    #[error("action '{action}' failed: {reason}")]
    Failed { action: String, reason: String },
}

impl ActionError {
    pub fn failed(action: impl Into<String>, reason: impl ToString) -> Self {
        ActionError::Failed {
            action: action.into(),
            reason: reason.to_string(),
        }
    }
}
