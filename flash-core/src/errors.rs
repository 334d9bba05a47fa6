use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("card has an empty title")]
    EmptyTitle,
    #[error("card already exists: {0}")]
    CardAlreadyExists(String),
    #[error("card not found: {0}")]
    CardNotFound(String),
    #[error("group not found: {0}")]
    GroupNotFound(String),
    #[error("name may not contain '/' or '\\': {0}")]
    InvalidName(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl CoreError {
    pub fn group_not_found(group: &crate::GroupPath) -> Self {
        if group.is_root() {
            CoreError::GroupNotFound("<root>".to_string())
        } else {
            CoreError::GroupNotFound(group.to_string())
        }
    }
}
