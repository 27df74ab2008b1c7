use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tbf_tables::LoaderConfig;

pub fn run(
    dir: &Path,
    config: &LoaderConfig,
    name: &str,
    count: u32,
    seed: Option<u64>,
) -> Result<(), String> {
    let tables = super::load_tables(dir, config)?;
    let table = tables.get(name).ok_or_else(|| {
        let known: Vec<&str> = tables.names().collect();
        if known.is_empty() {
            format!("unknown table '{name}' (no tables loaded)")
        } else {
            format!("unknown table '{name}' (available: {})", known.join(", "))
        }
    })?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("  {} {}", table.name().bold(), format!("({})", table.dice()).dimmed());
    for _ in 0..count {
        match table.roll_with(&mut rng) {
            Ok(result) => println!("  {:>4}  {}", result.value, result.text),
            Err(e) => println!("  {} {e}", "no result:".red()),
        }
    }

    Ok(())
}
