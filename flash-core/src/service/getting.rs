use crate::{Card, CoreError, GroupPath, Repository};
use std::sync::Arc;

#[derive(Clone)]
pub struct GettingService {
    repo: Arc<dyn Repository>,
}

impl GettingService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Cards filed directly under `group`.
    pub async fn get_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError> {
        self.repo.get_cards(group).await
    }

    /// Cards anywhere below `group`; the root group lists the whole store.
    pub async fn get_all_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError> {
        self.repo.get_all_cards(group).await
    }
}
