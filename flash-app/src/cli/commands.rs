use crate::cli::opts::*;
use crate::config::AppConfig;

use anyhow::{Context, Result};
use flash_core::{
    AddingService, Card, CardDraft, CardPath, DeletingService, GettingService, GroupPath,
    MemoryRepo, Repository, UpdatingService,
};
use flash_json::JsonRepo;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

pub async fn run_cli(config: AppConfig, cmd: Command) -> Result<()> {
    let repo = open_repo(&config).await?;
    let services = Services::new(repo);
    let mut out = std::io::stdout();
    execute(&services, cmd, &mut out).await
}

pub async fn open_repo(config: &AppConfig) -> Result<Arc<dyn Repository>> {
    match config.store {
        StoreKind::Memory => {
            info!("using in-memory store; nothing will be persisted");
            Ok(Arc::new(MemoryRepo::new()))
        }
        StoreKind::Json => {
            let repo = JsonRepo::open(config.data_dir.clone())
                .await
                .with_context(|| format!("opening store at {}", config.data_dir.display()))?;
            info!(dir = %config.data_dir.display(), "using json store");
            Ok(Arc::new(repo))
        }
    }
}

/// One validating service per operation, all over the same repository.
pub struct Services {
    pub adding: AddingService,
    pub deleting: DeletingService,
    pub getting: GettingService,
    pub updating: UpdatingService,
}

impl Services {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self {
            adding: AddingService::new(repo.clone()),
            deleting: DeletingService::new(repo.clone()),
            getting: GettingService::new(repo.clone()),
            updating: UpdatingService::new(repo),
        }
    }
}

pub async fn execute<W: Write>(svc: &Services, cmd: Command, out: &mut W) -> Result<()> {
    match cmd {
        Command::Add(a) => {
            let (group, title) = locate(&a.group, &a.title);
            svc.adding
                .add_card(&group, &CardDraft::new(title, a.description))
                .await?;
            writeln!(out, "ok")?;
        }
        Command::Delete(d) => {
            let (group, title) = locate(&d.group, &d.title);
            svc.deleting.delete_card(&group, &title).await?;
            writeln!(out, "ok")?;
        }
        Command::Get(g) => {
            let cards = svc.getting.get_cards(&group_of(&g)).await?;
            print_cards(out, &cards)?;
        }
        Command::GetAll(g) => {
            let cards = svc.getting.get_all_cards(&group_of(&g)).await?;
            print_cards(out, &cards)?;
        }
        Command::Update(u) => {
            let (group, title) = locate(&u.group, &u.title);
            svc.updating
                .update_card(&group, &CardDraft::new(title, u.description))
                .await?;
            writeln!(out, "ok")?;
        }
    }
    Ok(())
}

// ===== Helpers =====
fn group_of(arg: &GroupArg) -> GroupPath {
    GroupPath::parse(arg.group.as_deref().unwrap_or(""))
}

/// `-t Sub.Subject` under group `Group` addresses `Group.Sub.Subject`.
fn locate(arg: &GroupArg, title: &str) -> (GroupPath, String) {
    let path = CardPath::new(group_of(arg), title);
    (path.group().clone(), path.title().to_string())
}

fn print_cards<W: Write>(out: &mut W, cards: &[Card]) -> Result<()> {
    for (i, c) in cards.iter().enumerate() {
        writeln!(out, "\t{}) {} -> {}", i, c.path, c.description)?;
    }
    Ok(())
}
