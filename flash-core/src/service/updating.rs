use crate::{CardDraft, CoreError, GroupPath, Repository};
use std::sync::Arc;

#[derive(Clone)]
pub struct UpdatingService {
    repo: Arc<dyn Repository>,
}

impl UpdatingService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub async fn update_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError> {
        super::require_title(group, &card.title)?;
        self.repo.update_card(group, card).await
    }
}
