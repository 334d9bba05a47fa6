use directories::ProjectDirs;
use std::path::PathBuf;

/// Collection every card lives under; group segments nest below it.
pub const CARD_COLLECTION: &str = "cards";

/// Per-user data directory, or the working directory when the platform
/// offers none.
pub fn data_root() -> PathBuf {
    ProjectDirs::from("com", "flash", "Flash")
        .map(|pd| pd.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
