//! Directory-to-[`TableSet`] loading.
//!
//! [`TableLoader::load`] runs synchronously. [`TableLoader::spawn`] runs the
//! same sequence on a worker thread and streams [`LoadEvent`]s back over a
//! channel, so the caller's loop never blocks on file I/O.
//!
//! Either way a load is all-or-nothing: the first unreadable file, malformed
//! row or rejected range aborts it and no tables are returned.

pub mod event;
pub mod source;

use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, TryRecvError};

pub use event::{LoadEvent, progress_percent};

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};
use crate::table_set::TableSet;

/// Loads a directory of table sources.
#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    config: LoaderConfig,
}

impl TableLoader {
    /// Create a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load every table source in `dir`.
    pub fn load(&self, dir: &Path) -> LoadResult<TableSet> {
        self.load_with_progress(dir, |_| {})
    }

    /// Load every table source in `dir`, calling `on_progress` after each file.
    ///
    /// Progress values never decrease and 100 is reported exactly once, as the
    /// final call on success. An empty directory reports only 100.
    pub fn load_with_progress<F>(&self, dir: &Path, mut on_progress: F) -> LoadResult<TableSet>
    where
        F: FnMut(u8),
    {
        let files = source::discover_table_files(dir, &self.config.extension)?;
        let total = files.len();
        tracing::debug!(dir = %dir.display(), files = total, "loading table sources");

        let mut tables = TableSet::new();
        for (index, path) in files.iter().enumerate() {
            let table = source::read_table(path, self.config.dice)?;
            if let Some(previous) = tables.insert(table) {
                tracing::warn!(table = previous.name(), "duplicate table name replaced");
            }

            let done = index + 1;
            if done < total {
                on_progress(progress_percent(done, total));
                if !self.config.file_delay.is_zero() {
                    thread::sleep(self.config.file_delay);
                }
            }
        }

        on_progress(100);
        tracing::info!(dir = %dir.display(), tables = tables.len(), "table set loaded");
        Ok(tables)
    }

    /// Start loading `dir` on a worker thread.
    pub fn spawn(&self, dir: impl Into<PathBuf>) -> LoadHandle {
        let (tx, rx) = crossbeam_channel::unbounded();
        let loader = self.clone();
        let dir = dir.into();

        let worker = thread::spawn(move || {
            let result = loader.load_with_progress(&dir, |percent| {
                let _ = tx.send(LoadEvent::Progress(percent));
            });
            let event = match result {
                Ok(tables) => LoadEvent::Completed(tables),
                Err(e) => {
                    tracing::debug!(dir = %dir.display(), error = %e, "table load failed");
                    LoadEvent::Failed(e)
                }
            };
            let _ = tx.send(event);
        });

        LoadHandle {
            events: rx,
            worker: Some(worker),
            finished: false,
        }
    }
}

/// The caller's side of a background load.
///
/// Events arrive in emission order. After the terminal event has been
/// returned, the handle yields nothing more.
#[derive(Debug)]
pub struct LoadHandle {
    events: Receiver<LoadEvent>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

impl LoadHandle {
    /// Whether the terminal event has been returned.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Return the next event if one is ready, without blocking.
    pub fn try_next(&mut self) -> Option<LoadEvent> {
        if self.finished {
            return None;
        }
        match self.events.try_recv() {
            Ok(event) => Some(self.track(event)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(self.track(LoadEvent::Failed(LoadError::WorkerLost)))
            }
        }
    }

    /// Block until the next event arrives.
    pub fn next_blocking(&mut self) -> Option<LoadEvent> {
        if self.finished {
            return None;
        }
        let event = self
            .events
            .recv()
            .unwrap_or(LoadEvent::Failed(LoadError::WorkerLost));
        Some(self.track(event))
    }

    /// Block until the load ends, discarding progress.
    ///
    /// Fails with [`LoadError::WorkerLost`] if the terminal event was already
    /// taken through [`try_next`](Self::try_next) or
    /// [`next_blocking`](Self::next_blocking).
    pub fn wait(mut self) -> LoadResult<TableSet> {
        while let Some(event) = self.next_blocking() {
            match event {
                LoadEvent::Progress(_) => {}
                LoadEvent::Completed(tables) => return Ok(tables),
                LoadEvent::Failed(e) => return Err(e),
            }
        }
        Err(LoadError::WorkerLost)
    }

    fn track(&mut self, event: LoadEvent) -> LoadEvent {
        if event.is_terminal() {
            self.finished = true;
            if let Some(worker) = self.worker.take() {
                let _ = worker.join();
            }
        }
        event
    }
}
