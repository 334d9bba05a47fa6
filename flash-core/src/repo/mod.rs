use crate::{Card, CardDraft, CoreError, GroupPath};
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryRepo;

/// Card storage addressed by group path.
///
/// Every backend reports the same errors for the same sequence of calls,
/// except that a file-backed store may answer `GroupNotFound` before
/// `CardNotFound` when a group directory is missing.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn add_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError>;
    async fn delete_card(&self, group: &GroupPath, title: &str) -> Result<(), CoreError>;

    // Listings fail with `GroupNotFound` rather than returning an empty list.
    async fn get_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError>;
    async fn get_all_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError>;

    async fn update_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError>;
}
