//! Base weights for highest completed education level.

use serde::{Deserialize, Serialize};

use crate::types::{EducationLevel, ReferenceDataError};

/// One row of `education.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRow {
    /// Level label, e.g. `"Bachelor's Degree"`
    pub level: String,
    /// Relative weight (present-day share)
    pub weight: f64,
}

/// Present-day relative weight of every [`EducationLevel`].
///
/// Weights are indexed by [`EducationLevel::index`]; the era adjustment is
/// applied by the attribute synthesiser, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EducationWeights {
    base: [f64; 7],
}

impl EducationWeights {
    /// # Errors
    /// `ReferenceDataError::Invalid` if any weight is not finite and positive.
    pub fn new(base: [f64; 7]) -> Result<Self, ReferenceDataError> {
        if let Some((i, w)) = base
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(ReferenceDataError::Invalid(format!(
                "education weight for {} must be positive, got {}",
                EducationLevel::ALL[i],
                w
            )));
        }
        Ok(Self { base })
    }

    /// Builds weights from labelled rows; every level must appear exactly once.
    ///
    /// # Errors
    /// `ReferenceDataError::Invalid` on an unknown, duplicated or missing level.
    pub fn from_rows(rows: &[EducationRow]) -> Result<Self, ReferenceDataError> {
        let mut base = [None; 7];
        for row in rows {
            let level: EducationLevel = row
                .level
                .parse()
                .map_err(ReferenceDataError::Invalid)?;
            if base[level.index()].replace(row.weight).is_some() {
                return Err(ReferenceDataError::Invalid(format!(
                    "education level {level} appears twice"
                )));
            }
        }
        let mut weights = [0.0; 7];
        for (i, slot) in base.iter().enumerate() {
            weights[i] = slot.ok_or_else(|| {
                ReferenceDataError::Invalid(format!(
                    "education level {} is missing",
                    EducationLevel::ALL[i]
                ))
            })?;
        }
        Self::new(weights)
    }

    /// Base weight for `level`.
    pub fn weight(&self, level: EducationLevel) -> f64 {
        self.base[level.index()]
    }

    /// `(level, weight)` pairs, lowest level first.
    pub fn pairs(&self) -> impl Iterator<Item = (EducationLevel, f64)> + '_ {
        EducationLevel::ALL.iter().map(|&l| (l, self.base[l.index()]))
    }
}
