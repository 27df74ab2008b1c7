//! Civilisation generation screen.
//!
//! Loads the table set in the background as soon as it is created. The
//! Generate control stays disabled until the load completes; a failed load
//! leaves it disabled and keeps the error for display.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use tbf_tables::{LoadEvent, LoadHandle, RollResult, TableLoader, TableResult, TableSet};

use super::{Screen, Transition};
use crate::control::ProgressGatedControl;

/// Label of the Generate button.
pub const GENERATE: &str = "Generate";

/// Label of the Back button.
pub const BACK: &str = "Back";

/// Generation screen state.
#[derive(Debug)]
pub struct GenerationScreen {
    visible: bool,
    loader: TableLoader,
    dir: PathBuf,
    load: Option<LoadHandle>,
    tables: TableSet,
    generate_button: ProgressGatedControl,
    outcome: Option<TableResult<RollResult>>,
    load_error: Option<String>,
    rng: StdRng,
}

impl GenerationScreen {
    /// Create the screen and start loading tables from `dir`.
    ///
    /// With a seed, generated rolls are reproducible.
    pub fn new(loader: TableLoader, dir: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut screen = Self {
            visible: false,
            loader,
            dir: dir.into(),
            load: None,
            tables: TableSet::new(),
            generate_button: ProgressGatedControl::new(GENERATE),
            outcome: None,
            load_error: None,
            rng,
        };
        screen.start_loading();
        screen
    }

    /// (Re)start loading the table set.
    pub fn start_loading(&mut self) {
        tracing::info!(dir = %self.dir.display(), "loading tables");
        self.load_error = None;
        self.generate_button.start(0);
        self.load = Some(self.loader.spawn(&self.dir));
    }

    /// The Generate control.
    pub fn generate_control(&self) -> &ProgressGatedControl {
        &self.generate_button
    }

    /// Mutable access to the Generate control, e.g. to subscribe.
    pub fn generate_control_mut(&mut self) -> &mut ProgressGatedControl {
        &mut self.generate_button
    }

    /// The loaded tables (empty until the load completes).
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// The load error, if the last load failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether a load is still in flight.
    pub fn is_loading(&self) -> bool {
        self.load.is_some()
    }

    /// The most recent generated outcome.
    pub fn outcome(&self) -> Option<&TableResult<RollResult>> {
        self.outcome.as_ref()
    }

    /// Apply every load event that is ready, without blocking.
    pub fn poll_loader(&mut self) {
        while let Some(event) = self.load.as_mut().and_then(LoadHandle::try_next) {
            self.apply(event);
        }
    }

    /// Block until the current load finishes.
    pub fn wait_for_tables(&mut self) {
        while let Some(event) = self.load.as_mut().and_then(LoadHandle::next_blocking) {
            self.apply(event);
        }
    }

    /// Store a completed table set and enable generation.
    pub fn on_tables_loaded(&mut self, tables: TableSet) {
        self.tables = tables;
        self.generate_button.report_progress(100);
    }

    /// Roll on the first table by name.
    ///
    /// Returns `None` while generation is unavailable: tables not yet loaded
    /// or the loaded set is empty.
    pub fn generate(&mut self) -> Option<&TableResult<RollResult>> {
        if !self.generate_button.is_enabled() {
            return None;
        }
        let table = self.tables.first()?;
        let outcome = table.roll_with(&mut self.rng);
        match &outcome {
            Ok(result) => tracing::debug!(table = table.name(), value = result.value, "generated"),
            Err(e) => tracing::warn!(table = table.name(), error = %e, "roll failed"),
        }
        self.outcome = Some(outcome);
        self.outcome.as_ref()
    }

    fn apply(&mut self, event: LoadEvent) {
        match event {
            // The control completes only once the tables are stored.
            LoadEvent::Progress(percent) => {
                self.generate_button.report_progress(percent.min(99));
            }
            LoadEvent::Completed(tables) => {
                self.load = None;
                self.on_tables_loaded(tables);
            }
            LoadEvent::Failed(e) => {
                self.load = None;
                self.generate_button.set_enabled(false);
                self.load_error = Some(e.to_string());
            }
        }
    }
}

/// Display text for a generated outcome.
pub fn outcome_text(outcome: &TableResult<RollResult>) -> String {
    match outcome {
        Ok(result) => format!("Roll: {}\n{}", result.value, result.text),
        Err(e) => format!("No result: {e}"),
    }
}

impl Screen for GenerationScreen {
    fn title(&self) -> &str {
        "Civilisation Generation"
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn buttons(&self) -> Vec<String> {
        vec![GENERATE.to_string(), BACK.to_string()]
    }

    fn press(&mut self, button: &str) -> Transition {
        match button {
            GENERATE => {
                self.generate();
                Transition::None
            }
            BACK => Transition::Pop,
            other => {
                tracing::warn!(button = other, "unknown button on generation screen");
                Transition::None
            }
        }
    }

    fn update(&mut self) -> Transition {
        self.poll_loader();
        self.generate_button.tick();
        Transition::None
    }

    fn is_busy(&self) -> bool {
        self.is_loading()
    }

    fn error(&self) -> Option<&str> {
        self.load_error()
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec![self.title().to_string()];
        if self.generate_button.is_enabled() {
            lines.push(format!("[ {GENERATE} ]"));
        } else {
            lines.push(format!("[ {GENERATE} ] {}%", self.generate_button.progress()));
        }
        if let Some(error) = &self.load_error {
            lines.push(format!("Load failed: {error}"));
        }
        if let Some(outcome) = &self.outcome {
            lines.extend(outcome_text(outcome).lines().map(str::to_string));
        }
        lines
    }
}
