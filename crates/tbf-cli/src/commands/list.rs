use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tbf_tables::LoaderConfig;

pub fn run(dir: &Path, config: &LoaderConfig) -> Result<(), String> {
    let tables = super::load_tables(dir, config)?;

    if tables.is_empty() {
        println!("  No tables found in '{}'.", dir.display());
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Name", "Die", "Entries", "Unmapped"]);

    for table in tables.iter() {
        let unmapped: u32 = table
            .coverage_gaps()
            .iter()
            .map(|gap| gap.end() - gap.start() + 1)
            .sum();
        let unmapped = if unmapped == 0 {
            "—".to_string()
        } else {
            unmapped.to_string()
        };
        out.add_row(vec![
            table.name().to_string(),
            table.dice().to_string(),
            table.len().to_string(),
            unmapped,
        ]);
    }

    println!("{out}");
    println!();
    println!("  {} tables", tables.len());

    Ok(())
}
