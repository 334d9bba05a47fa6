use flash_core::{
    repo::Repository, Card, CardDraft, CardPath, Clock, CoreError, GroupPath, SystemClock,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, warn};

pub mod paths;
pub mod store;

pub use store::{Depth, DocumentStore, FsStore, StoreError};

impl From<StoreError> for CoreError {
    fn from(e: StoreError) -> Self {
        CoreError::Storage(e.to_string())
    }
}

/// File-backed repository. Each card is one JSON document named by its
/// bare title, inside a collection mirroring its group:
/// `cards/Group/SubGroup/Subject1.json`.
pub struct JsonRepo<S: DocumentStore = FsStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl JsonRepo<FsStore> {
    pub async fn open_default() -> Result<Self, CoreError> {
        Self::open(paths::data_root()).await
    }

    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let data_dir = data_dir.into();
        debug!(dir = %data_dir.display(), "opening json store");
        let store = task::spawn_blocking(move || FsStore::open(data_dir))
            .await
            .map_err(|e| CoreError::Storage(format!("blocking task failed: {e}")))??;
        Ok(Self::with_store(store))
    }

    pub fn data_dir(&self) -> &Path {
        self.store.root()
    }
}

impl<S: DocumentStore> JsonRepo<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Runs a store interaction off the async executor.
    async fn blocking<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&S) -> Result<T, CoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| CoreError::Storage(format!("blocking task failed: {e}")))?
    }

    async fn list(&self, group: &GroupPath, depth: Depth) -> Result<Vec<Card>, CoreError> {
        group.validate()?;
        let group = group.clone();
        self.blocking(move |store| {
            let records = match store.read_all(&collection(&group), depth) {
                Ok(records) => records,
                Err(StoreError::CollectionNotFound(_)) => {
                    return Err(CoreError::group_not_found(&group))
                }
                Err(e) => return Err(e.into()),
            };
            let mut cards = records
                .iter()
                .map(|r| decode(r))
                .collect::<Result<Vec<_>, _>>()?;
            if cards.is_empty() {
                return Err(CoreError::group_not_found(&group));
            }
            // Directory order is arbitrary; creation time restores insertion
            // order. Cards created in the same instant fall back to path order.
            cards.sort_by_cached_key(|c| (c.created_at, c.path.to_string()));
            Ok(cards)
        })
        .await
    }
}

fn collection(group: &GroupPath) -> PathBuf {
    Path::new(paths::CARD_COLLECTION).join(group.to_relative_path())
}

fn encode(card: &Card) -> Result<String, CoreError> {
    serde_json::to_string_pretty(card).map_err(|e| CoreError::Storage(format!("encode: {e}")))
}

fn decode(record: &str) -> Result<Card, CoreError> {
    serde_json::from_str(record).map_err(|e| {
        warn!(error = %e, "unreadable card record");
        CoreError::Storage(format!("decode: {e}"))
    })
}

/// Groups other than the root must exist as a collection before a card in
/// them can be touched.
fn require_group<S: DocumentStore>(store: &S, path: &CardPath) -> Result<(), CoreError> {
    if !path.group().is_root() && !store.collection_exists(&collection(path.group())) {
        return Err(CoreError::group_not_found(path.group()));
    }
    Ok(())
}

/// Pre-flight probe: a missing resource means the card is absent.
fn read_existing<S: DocumentStore>(store: &S, path: &CardPath) -> Result<Option<Card>, CoreError> {
    match store.read(&collection(path.group()), path.title()) {
        Ok(record) => decode(&record).map(Some),
        Err(StoreError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

use async_trait::async_trait;

#[async_trait]
impl<S: DocumentStore> Repository for JsonRepo<S> {
    async fn add_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError> {
        let path = group.join(&card.title);
        path.validate()?;
        let record = Card::new(path, card.description.clone(), self.clock.now());
        self.blocking(move |store| {
            match store.read(&collection(record.group()), record.title()) {
                Ok(_) => return Err(CoreError::CardAlreadyExists(record.path.to_string())),
                Err(StoreError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
            debug!(card = %record.path, "adding card");
            store.write(&collection(record.group()), record.title(), &encode(&record)?)?;
            Ok(())
        })
        .await
    }

    async fn delete_card(&self, group: &GroupPath, title: &str) -> Result<(), CoreError> {
        let path = group.join(title);
        path.validate()?;
        self.blocking(move |store| {
            require_group(store, &path)?;
            if read_existing(store, &path)?.is_none() {
                return Err(CoreError::CardNotFound(path.to_string()));
            }
            debug!(card = %path, "deleting card");
            store.delete(&collection(path.group()), path.title())?;
            Ok(())
        })
        .await
    }

    async fn get_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError> {
        self.list(group, Depth::Direct).await
    }

    async fn get_all_cards(&self, group: &GroupPath) -> Result<Vec<Card>, CoreError> {
        self.list(group, Depth::Recursive).await
    }

    async fn update_card(&self, group: &GroupPath, card: &CardDraft) -> Result<(), CoreError> {
        let path = group.join(&card.title);
        path.validate()?;
        let description = card.description.clone();
        let now = self.clock.now();
        self.blocking(move |store| {
            require_group(store, &path)?;
            let Some(mut existing) = read_existing(store, &path)? else {
                return Err(CoreError::CardNotFound(path.to_string()));
            };
            debug!(card = %path, "updating card");
            existing.revise(description, now);
            store.write(&collection(path.group()), path.title(), &encode(&existing)?)?;
            Ok(())
        })
        .await
    }
}
