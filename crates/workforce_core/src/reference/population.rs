//! Year → population reference series.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::ReferenceDataError;

/// One row of the population series, as stored in `population.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRow {
    /// Calendar year
    pub year: i32,
    /// Population count for that year
    pub population: u64,
}

/// Population count per calendar year.
///
/// Headcount projections scale this curve linearly, so only the shape
/// matters; the units are irrelevant as long as they are consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationSeries {
    by_year: BTreeMap<i32, u64>,
}

impl PopulationSeries {
    /// Builds a series from rows. Later duplicates overwrite earlier ones.
    ///
    /// # Errors
    /// `ReferenceDataError::Invalid` if the series is empty.
    pub fn new<I>(rows: I) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = PopulationRow>,
    {
        let by_year: BTreeMap<i32, u64> = rows.into_iter().map(|r| (r.year, r.population)).collect();
        if by_year.is_empty() {
            return Err(ReferenceDataError::Invalid(
                "population series has no rows".to_string(),
            ));
        }
        Ok(Self { by_year })
    }

    /// Population for `year`, if recorded.
    pub fn get(&self, year: i32) -> Option<u64> {
        self.by_year.get(&year).copied()
    }

    /// First and last recorded years.
    pub fn year_span(&self) -> (i32, i32) {
        let first = self.by_year.keys().next().copied().unwrap_or_default();
        let last = self.by_year.keys().next_back().copied().unwrap_or_default();
        (first, last)
    }

    /// Number of recorded years.
    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    /// True if no years are recorded (never the case after construction).
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Iterates `(year, population)` in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.by_year.iter().map(|(&y, &p)| (y, p))
    }
}
