use crate::{CoreError, GroupPath, Repository};
use std::sync::Arc;

#[derive(Clone)]
pub struct DeletingService {
    repo: Arc<dyn Repository>,
}

impl DeletingService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub async fn delete_card(&self, group: &GroupPath, title: &str) -> Result<(), CoreError> {
        super::require_title(group, title)?;
        self.repo.delete_card(group, title).await
    }
}
