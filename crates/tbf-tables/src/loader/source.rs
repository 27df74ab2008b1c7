//! Table-source discovery and parsing.
//!
//! A table source is a CSV file with a header row naming at least the
//! `min_roll`, `max_roll` and `text` columns. Other columns are ignored.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::dice::Dice;
use crate::error::{LoadError, LoadResult};
use crate::table::Table;

/// One parsed row of a table source.
#[derive(Debug, Deserialize)]
struct TableRow {
    min_roll: u32,
    max_roll: u32,
    text: String,
}

/// List the table-source files in `dir`, sorted by path.
pub fn discover_table_files(dir: &Path, extension: &str) -> LoadResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let matches_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !matches_ext {
            continue;
        }
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "skipping non-file table source");
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// The table name for a source file: its file stem.
pub fn table_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse one table-source file into a table rolled with `dice`.
///
/// The first malformed or rejected row aborts the file.
pub fn read_table(path: &Path, dice: Dice) -> LoadResult<Table> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let table_err = |source| LoadError::Table {
        path: path.to_path_buf(),
        source,
    };
    let mut table = Table::new(table_name(path), dice).map_err(table_err)?;

    for row in reader.deserialize::<TableRow>() {
        let row = row.map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        table
            .add_entry(row.min_roll, row.max_roll, row.text)
            .map_err(table_err)?;
    }

    tracing::debug!(
        table = table.name(),
        entries = table.len(),
        dice = %dice,
        "parsed table source"
    );
    let gaps = table.coverage_gaps();
    if !gaps.is_empty() {
        tracing::info!(
            table = table.name(),
            gaps = ?gaps,
            "table leaves roll values unmapped"
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn discovers_only_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.csv", "min_roll,max_roll,text\n");
        write(dir.path(), "a.CSV", "min_roll,max_roll,text\n");
        write(dir.path(), "notes.txt", "ignore me");
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = discover_table_files(dir.path(), "csv").unwrap();
        let names: Vec<String> = files.iter().map(|p| table_name(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_table_files(&missing, "csv"),
            Err(LoadError::DirectoryNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn reads_rows_with_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "omens.csv",
            "min_roll, max_roll, text, weight\n1, 3, calm, 1\n4, 6, \"storm, with hail\", 2\n",
        );
        let table = read_table(&path, Dice::D6).unwrap();
        assert_eq!(table.name(), "omens");
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(5).unwrap().text(), "storm, with hail");
    }

    #[test]
    fn non_integer_bound_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.csv", "min_roll,max_roll,text\none,3,calm\n");
        assert!(matches!(
            read_table(&path, Dice::D6),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn missing_column_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.csv", "min_roll,text\n1,calm\n");
        assert!(matches!(
            read_table(&path, Dice::D6),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn overlapping_rows_are_table_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "clash.csv",
            "min_roll,max_roll,text\n1,4,a\n3,6,b\n",
        );
        match read_table(&path, Dice::D6) {
            Err(LoadError::Table { source, .. }) => {
                assert!(matches!(source, TableError::InvalidRange { min: 3, max: 6, .. }));
            }
            other => panic!("expected table error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "blank.csv", "min_roll,max_roll,text\n");
        let table = read_table(&path, Dice::D100).unwrap();
        assert!(table.is_empty());
    }
}
