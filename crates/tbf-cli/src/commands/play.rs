use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use tbf_shell::screen::generation::GENERATE;
use tbf_shell::screen::start::NEW_GAME;
use tbf_shell::screen::{START, Screen};
use tbf_shell::{Navigator, ShellConfig, build_navigator};
use tbf_tables::LoaderConfig;

/// One frame of the headless loop.
const FRAME: Duration = Duration::from_millis(50);

pub fn run(dir: &Path, loader: LoaderConfig, rolls: u32, seed: Option<u64>) -> Result<(), String> {
    let config = ShellConfig::default()
        .with_tables_dir(dir)
        .with_seed(seed)
        .with_loader(loader);
    let mut nav = build_navigator(&config);

    nav.navigate_to(START).map_err(|e| e.to_string())?;
    print_screen(&nav);

    println!("  {} {NEW_GAME}", ">".dimmed());
    nav.press(NEW_GAME).map_err(|e| e.to_string())?;

    loop {
        nav.update().map_err(|e| e.to_string())?;
        let Some(screen) = nav.current() else {
            return Err("no current screen".into());
        };
        if !screen.is_busy() {
            break;
        }
        thread::sleep(FRAME);
    }

    let screen = current(&nav)?;
    if let Some(error) = screen.error() {
        return Err(format!("table load failed: {error}"));
    }
    print_screen(&nav);

    for _ in 0..rolls {
        println!("  {} {GENERATE}", ">".dimmed());
        nav.press(GENERATE).map_err(|e| e.to_string())?;
        let lines = current(&nav)?.render();
        if lines.len() <= 2 {
            println!("  No tables loaded; nothing to generate.");
            break;
        }
        for line in &lines[2..] {
            println!("    {line}");
        }
    }

    println!();
    println!("  {} {}", "History:".bold(), nav.history().join(" → "));
    if nav.navigate_back() {
        println!("  {} {}", "Back to:".bold(), nav.current_screen().unwrap_or("-"));
    }
    Ok(())
}

fn current(nav: &Navigator) -> Result<&dyn Screen, String> {
    nav.current().ok_or_else(|| "no current screen".to_string())
}

fn print_screen(nav: &Navigator) {
    let Some(screen) = nav.current() else {
        return;
    };
    let mut lines = screen.render().into_iter();
    if let Some(title) = lines.next() {
        println!("  {}", title.bold());
    }
    for line in lines {
        println!("    {line}");
    }
}
