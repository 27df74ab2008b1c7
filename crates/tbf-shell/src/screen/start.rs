//! Start screen with New Game and Exit.

use super::{CIVILISATION_GENERATION, Screen, Transition};

/// Label of the button that starts a new game.
pub const NEW_GAME: &str = "New Game";

/// Label of the button that quits.
pub const EXIT: &str = "Exit";

/// Start screen state.
#[derive(Debug, Default)]
pub struct StartScreen {
    visible: bool,
}

impl StartScreen {
    /// Create a hidden start screen.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for StartScreen {
    fn title(&self) -> &str {
        "Text-Based Future"
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn buttons(&self) -> Vec<String> {
        vec![NEW_GAME.to_string(), EXIT.to_string()]
    }

    fn press(&mut self, button: &str) -> Transition {
        match button {
            NEW_GAME => Transition::Push(CIVILISATION_GENERATION.to_string()),
            EXIT => Transition::Quit,
            other => {
                tracing::warn!(button = other, "unknown button on start screen");
                Transition::None
            }
        }
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec![self.title().to_string()];
        lines.extend(self.buttons().into_iter().map(|b| format!("[ {b} ]")));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_buttons() {
        let screen = StartScreen::new();
        assert_eq!(screen.title(), "Text-Based Future");
        assert_eq!(screen.buttons(), ["New Game", "Exit"]);
        assert!(!screen.is_visible());
    }

    #[test]
    fn button_transitions() {
        let mut screen = StartScreen::new();
        assert_eq!(
            screen.press(NEW_GAME),
            Transition::Push(CIVILISATION_GENERATION.to_string())
        );
        assert_eq!(screen.press(EXIT), Transition::Quit);
        assert_eq!(screen.press("Settings"), Transition::None);
    }

    #[test]
    fn render_lists_buttons() {
        let screen = StartScreen::new();
        assert_eq!(
            screen.render(),
            ["Text-Based Future", "[ New Game ]", "[ Exit ]"]
        );
    }
}
