//! Integration tests: session.
use std::fs;
use std::time::{Duration, Instant};

use tbf_shell::screen::generation::GENERATE;
use tbf_shell::screen::start::{EXIT, NEW_GAME};
use tbf_shell::screen::{CIVILISATION_GENERATION, START};
use tbf_shell::{NavError, Navigator, ShellConfig, build_navigator};
use tempfile::TempDir;

fn tables_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("civilisations.csv"),
        "min_roll,max_roll,text\n1,40,River kingdom\n41,80,Desert nomads\n81,100,Sky city\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("omens.csv"),
        "min_roll,max_roll,text\n1,100,A comet\n",
    )
    .unwrap();
    dir
}

fn run_until_idle(nav: &mut Navigator) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        nav.update().unwrap();
        let busy = nav.current().is_some_and(|s| s.is_busy());
        if !busy {
            return;
        }
        assert!(Instant::now() < deadline, "load did not finish");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn new_game_loads_tables_and_generates() {
    let dir = tables_dir();
    let config = ShellConfig::default()
        .with_tables_dir(dir.path())
        .with_seed(Some(11));
    let mut nav = build_navigator(&config);
    assert!(!nav.is_created(START));

    nav.navigate_to(START).unwrap();
    assert_eq!(nav.current().unwrap().title(), "Text-Based Future");
    assert!(!nav.is_created(CIVILISATION_GENERATION));

    nav.press(NEW_GAME).unwrap();
    assert_eq!(nav.current_screen(), Some(CIVILISATION_GENERATION));
    assert!(!nav.screen(START).unwrap().is_visible());
    assert!(nav.current().unwrap().is_visible());

    run_until_idle(&mut nav);
    assert!(nav.current().unwrap().error().is_none());
    assert_eq!(nav.current().unwrap().render()[1], "[ Generate ]");

    nav.press(GENERATE).unwrap();
    let lines = nav.current().unwrap().render();
    assert!(lines[2].starts_with("Roll: "));
    assert!(["River kingdom", "Desert nomads", "Sky city"].contains(&lines[3].as_str()));

    assert!(nav.navigate_back());
    assert_eq!(nav.current_screen(), Some(START));
    assert_eq!(nav.history(), [START]);
    assert!(!nav.navigate_back());
}

#[test]
fn missing_directory_shows_error_and_keeps_generate_disabled() {
    let dir = TempDir::new().unwrap();
    let config = ShellConfig::default().with_tables_dir(dir.path().join("nope"));
    let mut nav = build_navigator(&config);
    nav.navigate_to(CIVILISATION_GENERATION).unwrap();

    run_until_idle(&mut nav);
    let screen = nav.current().unwrap();
    assert!(screen.error().is_some());
    assert!(screen.render()[1].starts_with("[ Generate ] "));

    nav.press(GENERATE).unwrap();
    assert_eq!(nav.current().unwrap().render().len(), 3);
}

#[test]
fn exit_requests_quit() {
    let config = ShellConfig::default();
    let mut nav = build_navigator(&config);
    nav.navigate_to(START).unwrap();
    nav.press(EXIT).unwrap();
    assert!(nav.quit_requested());
    assert_eq!(nav.current_screen(), Some(START));
}

#[test]
fn unknown_screen_is_an_error() {
    let mut nav = build_navigator(&ShellConfig::default());
    assert_eq!(
        nav.navigate_to("settings"),
        Err(NavError::UnregisteredScreen("settings".to_string()))
    );
}
