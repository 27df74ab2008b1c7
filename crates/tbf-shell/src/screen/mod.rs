//! Screen models: trait definition, screen names, and transitions.
//!
//! Screens never navigate on their own. They return a [`Transition`] from
//! [`Screen::update`] or [`Screen::press`], and the
//! [`Navigator`](crate::navigation::Navigator) applies it.

pub mod generation;
pub mod start;

/// Name of the start screen.
pub const START: &str = "start";

/// Name of the civilisation generation screen.
pub const CIVILISATION_GENERATION: &str = "civilisation_generation";

/// A navigation request returned by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Navigate to the named screen.
    Push(String),
    /// Return to the previous screen.
    Pop,
    /// Close the application.
    Quit,
    /// Stay on the current screen.
    None,
}

/// Trait that all screens implement.
pub trait Screen {
    /// Window title.
    fn title(&self) -> &str;

    /// Whether the screen is currently shown.
    fn is_visible(&self) -> bool;

    /// Show or hide the screen.
    fn set_visible(&mut self, visible: bool);

    /// Labels of the buttons the screen offers, in display order.
    fn buttons(&self) -> Vec<String>;

    /// Activate the button with the given label.
    fn press(&mut self, button: &str) -> Transition;

    /// Advance background work. Called once per frame while current.
    fn update(&mut self) -> Transition {
        Transition::None
    }

    /// Whether the screen is waiting on background work.
    fn is_busy(&self) -> bool {
        false
    }

    /// The error the screen is currently showing, if any.
    fn error(&self) -> Option<&str> {
        None
    }

    /// Text lines describing the screen's current state.
    fn render(&self) -> Vec<String>;
}
