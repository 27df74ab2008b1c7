//! Shell core for Text-Based Future.
//!
//! Holds everything between the table engine and a concrete renderer: the
//! navigator that owns screens and history, the progress-gated control, and
//! headless models of the start and generation screens.

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod navigation;
pub mod screen;

pub use app::build_navigator;
pub use config::ShellConfig;
pub use control::{ControlEvent, ProgressGatedControl};
pub use error::{NavError, NavResult};
pub use navigation::Navigator;
pub use screen::{Screen, Transition};
