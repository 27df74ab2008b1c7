//! Random tables: named, non-overlapping roll ranges mapped to text.
//!
//! Tables may leave gaps in the die range. Gaps are accepted when entries are
//! added and only surface when a roll lands in one, as
//! [`TableError::NoMatchingEntry`]. Use [`Table::coverage_gaps`] to inspect
//! unmapped values ahead of time.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::dice::Dice;
use crate::error::{TableError, TableResult};

/// One row of a table: an inclusive roll range and its outcome text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    min_roll: u32,
    max_roll: u32,
    text: String,
}

impl Entry {
    /// Lowest roll this entry covers.
    pub fn min_roll(&self) -> u32 {
        self.min_roll
    }

    /// Highest roll this entry covers.
    pub fn max_roll(&self) -> u32 {
        self.max_roll
    }

    /// Outcome text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `value` falls inside this entry's range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min_roll..=self.max_roll).contains(&value)
    }

    fn overlaps(&self, min: u32, max: u32) -> bool {
        min <= self.max_roll && self.min_roll <= max
    }
}

/// The outcome of a single roll on a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    /// The raw die value.
    pub value: u32,
    /// Text of the entry covering `value`.
    pub text: String,
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.value, self.text)
    }
}

/// A named random table rolled with a single die.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    dice: Dice,
    entries: Vec<Entry>,
}

impl Table {
    /// Create an empty table. The name must not be blank.
    pub fn new(name: impl Into<String>, dice: Dice) -> TableResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TableError::InvalidConfiguration(
                "table name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            dice,
            entries: Vec::new(),
        })
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The die this table is rolled with.
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry covering `min_roll..=max_roll`.
    ///
    /// The range must lie within the die and must not share any value with an
    /// existing entry. On failure the table is left unchanged.
    pub fn add_entry(
        &mut self,
        min_roll: u32,
        max_roll: u32,
        text: impl Into<String>,
    ) -> TableResult<()> {
        let invalid = |reason: String| TableError::InvalidRange {
            min: min_roll,
            max: max_roll,
            reason,
        };

        if min_roll > max_roll {
            return Err(invalid("min_roll exceeds max_roll".to_string()));
        }
        let sides = self.dice.sides();
        if min_roll < 1 || max_roll > sides {
            return Err(invalid(format!("outside die range 1-{sides}")));
        }
        if let Some(existing) = self
            .entries
            .iter()
            .find(|e| e.overlaps(min_roll, max_roll))
        {
            return Err(invalid(format!(
                "overlaps entry {}-{}",
                existing.min_roll, existing.max_roll
            )));
        }

        self.entries.push(Entry {
            min_roll,
            max_roll,
            text: text.into(),
        });
        Ok(())
    }

    /// Find the entry covering `value`.
    pub fn resolve(&self, value: u32) -> TableResult<&Entry> {
        self.entries
            .iter()
            .find(|e| e.contains(value))
            .ok_or_else(|| TableError::NoMatchingEntry {
                table: self.name.clone(),
                value,
            })
    }

    /// Roll the table's die and resolve the result.
    pub fn roll(&self) -> TableResult<RollResult> {
        self.roll_with(&mut rand::rng())
    }

    /// Roll using the given RNG and resolve the result.
    pub fn roll_with<R: Rng>(&self, rng: &mut R) -> TableResult<RollResult> {
        let value = self.dice.roll_with(rng);
        let entry = self.resolve(value)?;
        Ok(RollResult {
            value,
            text: entry.text.clone(),
        })
    }

    /// Runs of die values that no entry covers, in ascending order.
    pub fn coverage_gaps(&self) -> Vec<RangeInclusive<u32>> {
        let mut ranges: Vec<(u32, u32)> = self
            .entries
            .iter()
            .map(|e| (e.min_roll, e.max_roll))
            .collect();
        ranges.sort_unstable();

        let mut gaps = Vec::new();
        let mut covered = 0;
        for (min, max) in ranges {
            if min > covered + 1 {
                gaps.push(covered + 1..=min - 1);
            }
            covered = max;
        }
        let sides = self.dice.sides();
        if covered < sides {
            gaps.push(covered + 1..=sides);
        }
        gaps
    }
}
