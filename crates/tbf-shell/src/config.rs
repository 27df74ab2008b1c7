//! Configuration for a shell session.

use std::path::PathBuf;

use tbf_tables::LoaderConfig;

/// Default directory scanned for table sources.
pub const DEFAULT_TABLES_DIR: &str = "data/tables";

/// Configuration for a shell session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Directory the generation screen loads tables from.
    pub tables_dir: PathBuf,
    /// RNG seed for reproducible generation; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Loader settings.
    pub loader: LoaderConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tables_dir: PathBuf::from(DEFAULT_TABLES_DIR),
            seed: None,
            loader: LoaderConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Set the table directory.
    pub fn with_tables_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tables_dir = dir.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the loader configuration.
    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbf_tables::Dice;

    #[test]
    fn default_config() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.tables_dir, PathBuf::from("data/tables"));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.loader.dice, Dice::D100);
    }

    #[test]
    fn builder_methods() {
        let cfg = ShellConfig::default()
            .with_tables_dir("tables")
            .with_seed(Some(7))
            .with_loader(LoaderConfig::default().with_dice(Dice::D20));
        assert_eq!(cfg.tables_dir, PathBuf::from("tables"));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.loader.dice, Dice::D20);
    }
}
