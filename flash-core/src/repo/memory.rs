use crate::{Card, CardDraft, Clock, CoreError, GroupPath, SystemClock};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Process-local repository. Cards are kept in insertion order and every
/// lookup is a linear scan over fully-qualified paths.
pub struct MemoryRepo {
    cards: RwLock<Vec<Card>>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            cards: RwLock::new(Vec::new()),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.read().is_empty()
    }

    /// Copy of every stored card, in insertion order.
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.read().clone()
    }

    fn matching(
        &self,
        group: &GroupPath,
        keep: impl Fn(&Card) -> bool,
    ) -> Result<Vec<Card>, CoreError> {
        group.validate()?;
        let found: Vec<Card> = self.cards.read().iter().filter(|&c| keep(c)).cloned().collect();
        if found.is_empty() {
            return Err(CoreError::group_not_found(group));
        }
        Ok(found)
    }
}

#[async_trait]
impl crate::repo::Repository for MemoryRepo {
    async fn add_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError> {
        let path = group.join(&card.title);
        path.validate()?;
        let mut cards = self.cards.write();
        if cards.iter().any(|c| c.path == path) {
            return Err(CoreError::CardAlreadyExists(path.to_string()));
        }
        debug!(card = %path, "adding card");
        cards.push(Card::new(path, card.description.clone(), self.clock.now()));
        Ok(())
    }

    async fn delete_card(&self, group: &GroupPath, title: &str) -> Result<(), CoreError> {
        let path = group.join(title);
        path.validate()?;
        let mut cards = self.cards.write();
        let Some(index) = cards.iter().position(|c| c.path == path) else {
            return Err(CoreError::CardNotFound(path.to_string()));
        };
        debug!(card = %path, "deleting card");
        cards.remove(index);
        Ok(())
    }

    async fn get_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError> {
        self.matching(group, |c| c.group() == group)
    }

    async fn get_all_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError> {
        self.matching(group, |c| c.group().starts_with(group))
    }

    async fn update_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError> {
        let path = group.join(&card.title);
        path.validate()?;
        let mut cards = self.cards.write();
        let Some(existing) = cards.iter_mut().find(|c| c.path == path) else {
            return Err(CoreError::CardNotFound(path.to_string()));
        };
        debug!(card = %path, "updating card");
        existing.revise(card.description.clone(), self.clock.now());
        Ok(())
    }
}
