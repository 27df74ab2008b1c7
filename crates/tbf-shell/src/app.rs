//! Wiring of the standard screens into a navigator.

use tbf_tables::TableLoader;

use crate::config::ShellConfig;
use crate::navigation::Navigator;
use crate::screen::generation::GenerationScreen;
use crate::screen::start::StartScreen;
use crate::screen::{CIVILISATION_GENERATION, START, Screen};

/// Build a navigator with the start and generation screens registered.
///
/// Nothing is created until the first navigation; the generation screen
/// begins loading tables when it is first shown.
pub fn build_navigator(config: &ShellConfig) -> Navigator {
    let mut nav = Navigator::new();
    nav.register(START, || Box::new(StartScreen::new()) as Box<dyn Screen>);

    let loader = TableLoader::new(config.loader.clone());
    let dir = config.tables_dir.clone();
    let seed = config.seed;
    nav.register(CIVILISATION_GENERATION, move || {
        Box::new(GenerationScreen::new(loader.clone(), dir.clone(), seed)) as Box<dyn Screen>
    });
    nav
}
