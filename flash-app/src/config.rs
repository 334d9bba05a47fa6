use crate::cli::opts::{Cli, StoreKind};
use flash_json::paths::data_root;
use std::path::PathBuf;

/// Everything the composition root needs, resolved from flags, environment
/// and platform defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreKind,
    pub data_dir: PathBuf,
    pub verbosity: u8,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            store: cli.store,
            data_dir: cli.data_dir.clone().unwrap_or_else(data_root),
            verbosity: cli.verbose,
        }
    }
}
