//! Immutable reference tables consumed by the generator.
//!
//! ## Tables
//!
//! - [`PopulationSeries`]: year → population, scaled into headcount
//! - [`HiringSeasonality`]: per-month hiring multipliers
//! - [`FirstNameTable`]: weighted first names per `(sex, birth_year)`
//! - [`LastNameList`]: flat surname list
//! - [`EducationWeights`]: present-day education shares
//!
//! ## Sources
//!
//! [`ReferenceData::builtin`] uses compact tables compiled into the crate.
//! [`ReferenceData::load_dir`] reads JSON overrides from a directory; each
//! file is optional and a missing one keeps the built-in table:
//!
//! | File | Shape |
//! |------|-------|
//! | `population.json` | `[{"year": 2000, "population": 282162411}]` |
//! | `first_names_male.json`, `first_names_female.json` | `[[1990, "Michael", 65282]]` |
//! | `last_names.json` | `[["SMITH", ...]]` or `["SMITH"]` |
//! | `seasonality.json` | `[{"month": 1, "average_hires": 6100, "stdev_hires": 450}]` |
//! | `education.json` | `[{"level": "Bachelor's Degree", "weight": 23.0}]` |
//!
//! A loaded `ReferenceData` is never mutated; share it across runs with
//! `Arc`.

mod builtin;
mod education;
mod loader;
mod names;
mod population;
mod seasonality;

pub use education::{EducationRow, EducationWeights};
pub use names::{FirstNameRow, FirstNameTable, LastNameList};
pub use population::{PopulationRow, PopulationSeries};
pub use seasonality::{HiringSeasonality, MonthlyHiring};

use std::path::Path;
use tracing::{debug, info};

use crate::types::{ReferenceDataError, Sex};
use loader::{
    read_optional, EducationFile, FirstNameFile, LastNameRow, PopulationFile, SeasonalityFile,
};

/// All reference tables a generation run needs.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Population curve
    pub population: PopulationSeries,
    /// Monthly hiring seasonality
    pub seasonality: HiringSeasonality,
    /// First names per `(sex, birth_year)`
    pub first_names: FirstNameTable,
    /// Surnames
    pub last_names: LastNameList,
    /// Education base weights
    pub education: EducationWeights,
}

impl ReferenceData {
    /// Tables compiled into the crate.
    ///
    /// # Errors
    /// Only if the embedded tables are themselves invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_core::reference::ReferenceData;
    ///
    /// let data = ReferenceData::builtin().unwrap();
    /// assert!(data.population.get(2000).is_some());
    /// ```
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Ok(Self {
            population: builtin::population()?,
            seasonality: builtin::seasonality()?,
            first_names: builtin::first_names()?,
            last_names: builtin::last_names()?,
            education: builtin::education()?,
        })
    }

    /// Loads overrides from `dir`, falling back to built-in tables for
    /// any file that is absent.
    ///
    /// # Errors
    /// `Io` or `Parse` if a present file cannot be read, `Invalid` if a
    /// table violates its invariants.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "Loading reference data");

        let population = match read_optional::<PopulationFile>(&dir.join("population.json"))? {
            Some(rows) => {
                debug!(rows = rows.len(), "population.json loaded");
                PopulationSeries::new(rows)?
            }
            None => builtin::population()?,
        };

        let seasonality = match read_optional::<SeasonalityFile>(&dir.join("seasonality.json"))? {
            Some(rows) => HiringSeasonality::new(rows)?,
            None => builtin::seasonality()?,
        };

        let mut name_rows = Vec::with_capacity(Sex::ALL.len());
        for sex in Sex::ALL {
            let file = dir.join(format!("first_names_{}.json", sex.label().to_lowercase()));
            let rows = match read_optional::<FirstNameFile>(&file)? {
                Some(rows) => {
                    debug!(%sex, rows = rows.len(), "first-name file loaded");
                    rows
                }
                None => builtin::first_name_rows(sex),
            };
            name_rows.push((sex, rows));
        }
        let first_names = FirstNameTable::new(name_rows)?;

        let last_names = match read_optional::<Vec<LastNameRow>>(&dir.join("last_names.json"))? {
            Some(rows) => LastNameList::new(
                rows.into_iter()
                    .map(LastNameRow::into_name)
                    .collect::<Result<Vec<_>, _>>()?,
            )?,
            None => builtin::last_names()?,
        };

        let education = match read_optional::<EducationFile>(&dir.join("education.json"))? {
            Some(rows) => EducationWeights::from_rows(&rows)?,
            None => builtin::education()?,
        };

        Ok(Self {
            population,
            seasonality,
            first_names,
            last_names,
            education,
        })
    }
}
