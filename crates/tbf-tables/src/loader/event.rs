//! Events emitted by a background load and progress bookkeeping.

use crate::error::LoadError;
use crate::table_set::TableSet;

/// A message from the loader worker to its caller.
///
/// Zero or more `Progress` events are followed by exactly one terminal
/// event, either `Completed` or `Failed`.
#[derive(Debug)]
pub enum LoadEvent {
    /// Percentage of files processed so far (0-100).
    Progress(u8),
    /// All files loaded.
    Completed(TableSet),
    /// The load was aborted.
    Failed(LoadError),
}

impl LoadEvent {
    /// Whether this is the last event of a load.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress(_))
    }
}

/// Percentage reported after `done` of `total` files have been processed.
///
/// Intermediate files report `floor(done / total * 100)`; the last file (and an
/// empty directory) report 100. Intermediate values therefore never reach 100.
pub fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 || done >= total {
        return 100;
    }
    // done < total, so the quotient is below 100 and fits in a u8.
    u8::try_from(done * 100 / total).unwrap_or(99)
}
