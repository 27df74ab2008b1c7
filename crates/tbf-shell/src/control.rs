//! A control that stays disabled until a load reports completion.
//!
//! The control's own `enabled` flag is the only authority on its state.
//! Renderers read it through [`ProgressGatedControl::is_enabled`] and never
//! feed widget state back in.

use crossbeam_channel::{Receiver, Sender};

/// Notifications sent to subscribers of a [`ProgressGatedControl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The enabled flag changed to the carried value.
    StateChanged(bool),
    /// Progress reached 100.
    ProgressComplete,
}

/// A labelled control gated on progress.
#[derive(Debug)]
pub struct ProgressGatedControl {
    label: String,
    enabled: bool,
    progressing: bool,
    progress: u8,
    expected_events: usize,
    received_events: usize,
    subscribers: Vec<Sender<ControlEvent>>,
}

impl ProgressGatedControl {
    /// Create a disabled control at 0%.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            progressing: false,
            progress: 0,
            expected_events: 0,
            received_events: 0,
            subscribers: Vec::new(),
        }
    }

    /// The control's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the control accepts activation.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a progress run is underway.
    pub fn is_progressing(&self) -> bool {
        self.progressing
    }

    /// Displayed progress, 0-100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Progress events expected by the current run (0 when unknown).
    pub fn expected_events(&self) -> usize {
        self.expected_events
    }

    /// Progress events received by the current run.
    pub fn received_events(&self) -> usize {
        self.received_events
    }

    /// Subscribe to state-change and completion notifications.
    pub fn subscribe(&mut self) -> Receiver<ControlEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Begin a progress run: reset to 0% and disable the control.
    pub fn start(&mut self, expected_events: usize) {
        self.progress = 0;
        self.progressing = true;
        self.expected_events = expected_events;
        self.received_events = 0;
        self.set_enabled(false);
    }

    /// Record a progress update.
    ///
    /// The displayed value never moves backwards. At 100 or more the control
    /// enables and notifies once; later reports are ignored.
    pub fn report_progress(&mut self, percent: u8) {
        if self.enabled {
            return;
        }
        self.received_events += 1;
        if percent >= 100 {
            self.complete();
        } else {
            self.progress = self.progress.max(percent);
        }
    }

    /// Advance the displayed progress by one step while a run is underway.
    ///
    /// Animation alone never reaches 100; only a real report completes a run.
    pub fn tick(&mut self) {
        if self.progressing && self.progress < 99 {
            self.progress += 1;
        }
    }

    /// Set the enabled flag directly, notifying only on an actual change.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if enabled {
            self.progress = 100;
            self.progressing = false;
        }
        self.enabled = enabled;
        tracing::debug!(control = %self.label, enabled, "control state changed");
        self.notify(ControlEvent::StateChanged(enabled));
    }

    fn complete(&mut self) {
        self.progress = 100;
        self.progressing = false;
        self.set_enabled(true);
        self.notify(ControlEvent::ProgressComplete);
    }

    fn notify(&mut self, event: ControlEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
