use crate::{CardDraft, CoreError, GroupPath, Repository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AddingService {
    repo: Arc<dyn Repository>,
}

impl AddingService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub async fn add_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError> {
        super::require_title(group, &card.title)?;
        self.repo.add_card(group, card).await
    }
}
