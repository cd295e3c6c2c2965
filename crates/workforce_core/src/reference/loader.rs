//! JSON loaders for reference files.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use super::education::EducationRow;
use super::names::FirstNameRow;
use super::population::PopulationRow;
use super::seasonality::MonthlyHiring;
use crate::types::ReferenceDataError;

/// Reads `path` if it exists. `Ok(None)` means the file is absent.
pub(super) fn read_optional<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, ReferenceDataError> {
    if !path.exists() {
        return Ok(None);
    }
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| ReferenceDataError::Parse {
            path: display,
            message: e.to_string(),
        })
}

pub(super) type PopulationFile = Vec<PopulationRow>;
pub(super) type FirstNameFile = Vec<FirstNameRow>;
pub(super) type SeasonalityFile = Vec<MonthlyHiring>;
pub(super) type EducationFile = Vec<EducationRow>;

/// A last-name row is either a bare string or a census row whose first
/// column is the name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum LastNameRow {
    Bare(String),
    Columns(Vec<serde_json::Value>),
}

impl LastNameRow {
    pub(super) fn into_name(self) -> Result<String, ReferenceDataError> {
        match self {
            LastNameRow::Bare(name) => Ok(name),
            LastNameRow::Columns(columns) => match columns.into_iter().next() {
                Some(serde_json::Value::String(name)) => Ok(name),
                other => Err(ReferenceDataError::Invalid(format!(
                    "last-name row must start with a string, got {:?}",
                    other
                ))),
            },
        }
    }
}
