//! Monthly hiring seasonality.
//!
//! Historical hires per calendar month (mean and standard deviation) are
//! turned into multipliers relative to the mean of the twelve monthly
//! averages. A month with a multiplier of 1.1 sees 10% more hires than a
//! flat schedule would give it.

use serde::{Deserialize, Serialize};

use crate::types::ReferenceDataError;

/// Historical hiring statistics for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyHiring {
    /// Month number, 1 = January
    pub month: u32,
    /// Mean hires recorded in this month
    pub average_hires: f64,
    /// Standard deviation of hires recorded in this month
    pub stdev_hires: f64,
}

/// Per-month mean and deviation multipliers.
#[derive(Debug, Clone, PartialEq)]
pub struct HiringSeasonality {
    months: [MonthlyHiring; 12],
    overall_mean: f64,
}

impl HiringSeasonality {
    /// Builds the table from exactly one record per month.
    ///
    /// # Errors
    /// `ReferenceDataError::Invalid` if a month is missing or duplicated,
    /// an average is not positive, or a deviation is negative.
    pub fn new<I>(records: I) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = MonthlyHiring>,
    {
        let mut slots: [Option<MonthlyHiring>; 12] = [None; 12];
        for record in records {
            if !(1..=12).contains(&record.month) {
                return Err(ReferenceDataError::Invalid(format!(
                    "seasonality month {} is outside 1..=12",
                    record.month
                )));
            }
            if !(record.average_hires.is_finite() && record.average_hires > 0.0) {
                return Err(ReferenceDataError::Invalid(format!(
                    "seasonality month {} has non-positive average {}",
                    record.month, record.average_hires
                )));
            }
            if !(record.stdev_hires.is_finite() && record.stdev_hires >= 0.0) {
                return Err(ReferenceDataError::Invalid(format!(
                    "seasonality month {} has negative deviation {}",
                    record.month, record.stdev_hires
                )));
            }
            let slot = &mut slots[(record.month - 1) as usize];
            if slot.is_some() {
                return Err(ReferenceDataError::Invalid(format!(
                    "seasonality month {} appears twice",
                    record.month
                )));
            }
            *slot = Some(record);
        }

        let mut months = [MonthlyHiring {
            month: 0,
            average_hires: 0.0,
            stdev_hires: 0.0,
        }; 12];
        for (i, slot) in slots.iter().enumerate() {
            months[i] = slot.ok_or_else(|| {
                ReferenceDataError::Invalid(format!("seasonality month {} is missing", i + 1))
            })?;
        }

        let overall_mean = months.iter().map(|m| m.average_hires).sum::<f64>() / 12.0;
        Ok(Self {
            months,
            overall_mean,
        })
    }

    /// A schedule with no seasonal variation and no noise.
    pub fn flat() -> Self {
        let months = std::array::from_fn(|i| MonthlyHiring {
            month: i as u32 + 1,
            average_hires: 1.0,
            stdev_hires: 0.0,
        });
        Self {
            months,
            overall_mean: 1.0,
        }
    }

    /// Mean multiplier for `month` (1-12).
    pub fn mean_multiplier(&self, month: u32) -> f64 {
        self.record(month).average_hires / self.overall_mean
    }

    /// Standard-deviation multiplier for `month` (1-12).
    pub fn stdev_multiplier(&self, month: u32) -> f64 {
        self.record(month).stdev_hires / self.overall_mean
    }

    /// Raw statistics for `month` (1-12).
    pub fn record(&self, month: u32) -> &MonthlyHiring {
        &self.months[(month.clamp(1, 12) - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn months_with(avg: impl Fn(u32) -> f64) -> Vec<MonthlyHiring> {
        (1..=12)
            .map(|m| MonthlyHiring {
                month: m,
                average_hires: avg(m),
                stdev_hires: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_multipliers_average_to_one() {
        let table = HiringSeasonality::new(months_with(|m| m as f64)).unwrap();
        let mean: f64 = (1..=12).map(|m| table.mean_multiplier(m)).sum::<f64>() / 12.0;
        assert_relative_eq!(mean, 1.0, epsilon = 1e-12);
        assert_relative_eq!(table.mean_multiplier(12), 12.0 / 6.5, epsilon = 1e-12);
        assert_relative_eq!(table.stdev_multiplier(1), 1.0 / 6.5, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_month_rejected() {
        let mut records = months_with(|_| 5.0);
        records.pop();
        let err = HiringSeasonality::new(records).unwrap_err();
        assert!(err.to_string().contains("month 12 is missing"));
    }

    #[test]
    fn test_duplicate_month_rejected() {
        let mut records = months_with(|_| 5.0);
        records[1].month = 1;
        assert!(HiringSeasonality::new(records).is_err());
    }

    #[test]
    fn test_flat_is_neutral() {
        let flat = HiringSeasonality::flat();
        for m in 1..=12 {
            assert_eq!(flat.mean_multiplier(m), 1.0);
            assert_eq!(flat.stdev_multiplier(m), 0.0);
        }
    }
}
