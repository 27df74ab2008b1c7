//! Configuration for table loading.

use std::time::Duration;

use crate::dice::Dice;

/// Configuration for a [`TableLoader`](crate::loader::TableLoader).
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Die every loaded table is rolled with.
    pub dice: Dice,
    /// File extension (without the dot) that marks a table-source file.
    pub extension: String,
    /// Pause after each file, giving a UI time to repaint between updates.
    pub file_delay: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            dice: Dice::D100,
            extension: "csv".to_string(),
            file_delay: Duration::ZERO,
        }
    }
}

impl LoaderConfig {
    /// Set the die used for loaded tables.
    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    /// Set the table-source extension. A leading dot is ignored.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_lowercase();
        self
    }

    /// Set the pause after each file.
    pub fn with_file_delay(mut self, delay: Duration) -> Self {
        self.file_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = LoaderConfig::default();
        assert_eq!(cfg.dice, Dice::D100);
        assert_eq!(cfg.extension, "csv");
        assert_eq!(cfg.file_delay, Duration::ZERO);
    }

    #[test]
    fn builder_methods() {
        let cfg = LoaderConfig::default()
            .with_dice(Dice::D20)
            .with_extension(".Table")
            .with_file_delay(Duration::from_millis(10));
        assert_eq!(cfg.dice, Dice::D20);
        assert_eq!(cfg.extension, "table");
        assert_eq!(cfg.file_delay, Duration::from_millis(10));
    }
}
