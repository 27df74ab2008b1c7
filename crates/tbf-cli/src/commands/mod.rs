pub mod list;
pub mod play;
pub mod roll;

use std::io::{IsTerminal, Write};
use std::path::Path;

use tbf_tables::{LoadEvent, LoaderConfig, TableLoader, TableSet};

/// Load a table directory on a worker thread, drawing progress on stderr.
fn load_tables(dir: &Path, config: &LoaderConfig) -> Result<TableSet, String> {
    let show_progress = std::io::stderr().is_terminal();
    let mut handle = TableLoader::new(config.clone()).spawn(dir);

    while let Some(event) = handle.next_blocking() {
        match event {
            LoadEvent::Progress(percent) => {
                if show_progress {
                    eprint!("\r  Loading tables... {percent:>3}%");
                    let _ = std::io::stderr().flush();
                }
            }
            LoadEvent::Completed(tables) => {
                if show_progress {
                    eprintln!();
                }
                return Ok(tables);
            }
            LoadEvent::Failed(e) => {
                if show_progress {
                    eprintln!();
                }
                return Err(format!("table load failed: {e}"));
            }
        }
    }
    Err("table loader stopped without a result".into())
}
