//! Validating front doors to a [`Repository`](crate::Repository).
//!
//! Each service adds at most one precondition and otherwise passes the
//! repository's result through untouched.

pub mod adding;
pub mod deleting;
pub mod getting;
pub mod updating;

pub use adding::AddingService;
pub use deleting::DeletingService;
pub use getting::GettingService;
pub use updating::UpdatingService;

use crate::{CoreError, GroupPath};

/// Checked after dotted titles are folded, so `"Sub."` counts as empty.
fn require_title(group: &GroupPath, title: &str) -> Result<(), CoreError> {
    if group.join(title).title().is_empty() {
        return Err(CoreError::EmptyTitle);
    }
    Ok(())
}
