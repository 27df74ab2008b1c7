//! Screen navigation and visit history.
//!
//! The [`Navigator`] is the single owner of screen instances and history.
//! Screens are built lazily from registered factories, at most once per name,
//! and live until the navigator is dropped.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::{NavError, NavResult};
use crate::screen::{Screen, Transition};

/// Builds a screen on first navigation.
pub type ScreenFactory = Box<dyn FnMut() -> Box<dyn Screen>>;

/// Registry of screens plus the history stack.
#[derive(Default)]
pub struct Navigator {
    factories: HashMap<String, ScreenFactory>,
    instances: HashMap<String, Box<dyn Screen>>,
    history: Vec<String>,
    quit_requested: bool,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<&String> = self.factories.keys().collect();
        registered.sort();
        f.debug_struct("Navigator")
            .field("registered", &registered)
            .field("history", &self.history)
            .field("quit_requested", &self.quit_requested)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Create a navigator with no screens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `name`.
    ///
    /// An instance already built from an earlier factory is kept.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: FnMut() -> Box<dyn Screen> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Whether the screen `name` has been built.
    pub fn is_created(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// Show `name`, building it if needed, and record the visit.
    pub fn navigate_to(&mut self, name: &str) -> NavResult<()> {
        let factory = self
            .factories
            .get_mut(name)
            .ok_or_else(|| NavError::UnregisteredScreen(name.to_string()))?;
        if let Entry::Vacant(slot) = self.instances.entry(name.to_string()) {
            tracing::debug!(screen = name, "creating screen");
            slot.insert(factory());
        }

        self.set_current_visible(false);
        self.history.push(name.to_string());
        self.set_current_visible(true);
        tracing::debug!(screen = name, depth = self.history.len(), "navigated");
        Ok(())
    }

    /// Return to the previous screen.
    ///
    /// Returns `false` and changes nothing when there is no previous screen.
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.set_current_visible(false);
        self.history.pop();
        self.set_current_visible(true);
        tracing::debug!(screen = ?self.current_screen(), "navigated back");
        true
    }

    /// Name of the current screen, if any navigation has happened.
    pub fn current_screen(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// The current screen instance.
    pub fn current(&self) -> Option<&dyn Screen> {
        let name = self.history.last()?;
        self.instances.get(name).map(|s| s.as_ref())
    }

    /// The current screen instance, mutably.
    pub fn current_mut(&mut self) -> Option<&mut dyn Screen> {
        let name = self.history.last()?;
        self.instances
            .get_mut(name)
            .map(|screen| &mut **screen as &mut dyn Screen)
    }

    /// A built screen by name.
    pub fn screen(&self, name: &str) -> Option<&dyn Screen> {
        self.instances.get(name).map(|s| s.as_ref())
    }

    /// Visited screen names, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether a screen asked to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Apply a transition returned by a screen.
    pub fn apply(&mut self, transition: Transition) -> NavResult<()> {
        match transition {
            Transition::Push(name) => self.navigate_to(&name)?,
            Transition::Pop => {
                self.navigate_back();
            }
            Transition::Quit => self.quit_requested = true,
            Transition::None => {}
        }
        Ok(())
    }

    /// Run one frame of the current screen and apply its transition.
    pub fn update(&mut self) -> NavResult<()> {
        let transition = match self.current_mut() {
            Some(screen) => screen.update(),
            None => Transition::None,
        };
        self.apply(transition)
    }

    /// Press a button on the current screen and apply its transition.
    pub fn press(&mut self, button: &str) -> NavResult<()> {
        let transition = match self.current_mut() {
            Some(screen) => screen.press(button),
            None => Transition::None,
        };
        self.apply(transition)
    }

    fn set_current_visible(&mut self, visible: bool) {
        if let Some(screen) = self.current_mut() {
            screen.set_visible(visible);
        }
    }
}
