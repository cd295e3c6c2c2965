//! Headcount projection and hiring/attrition bookkeeping.
//!
//! The organisation grows and shrinks in proportion to the reference
//! population curve:
//!
//! ```text
//! expected_headcount[y] = round(population[y] * headcount / population[current_year])
//! ```
//!
//! Yearly hiring replaces projected departures and covers projected growth:
//!
//! ```text
//! new_hires[y] = max(0, expected[y+1] - expected[y] + round(avg_departures(y)))
//! ```
//!
//! where `avg_departures(y)` is the mean of recorded departures over the
//! `depth` years before `y`.

use serde::Serialize;
use std::collections::BTreeMap;

use workforce_core::reference::PopulationSeries;
use workforce_core::types::{Result, WorkforceError};

/// Expected headcount for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyProjection {
    /// Calendar year
    pub year: i32,
    /// Projected number of employees
    pub expected_headcount: u64,
}

/// Projected headcount for every year of a simulation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadcountProjection {
    years: Vec<YearlyProjection>,
}

impl HeadcountProjection {
    /// Scales the population curve so that `current_year` maps to
    /// `present_headcount`, for every year in `start_year..=end_year`.
    ///
    /// # Errors
    /// - `InvalidRequest` if `start_year > end_year`
    /// - `Configuration` if `current_year` or any year in range has no
    ///   population entry, or the `current_year` entry is zero
    pub fn project(
        present_headcount: u64,
        start_year: i32,
        end_year: i32,
        population: &PopulationSeries,
        current_year: i32,
    ) -> Result<Self> {
        if start_year > end_year {
            return Err(WorkforceError::invalid_request(format!(
                "start year {} is after end year {}",
                start_year, end_year
            )));
        }
        let anchor = population.get(current_year).ok_or_else(|| {
            WorkforceError::configuration(format!(
                "no population entry for current year {}",
                current_year
            ))
        })?;
        if anchor == 0 {
            return Err(WorkforceError::configuration(format!(
                "population for current year {} is zero",
                current_year
            )));
        }

        let ratio = present_headcount as f64 / anchor as f64;
        let years = (start_year..=end_year)
            .map(|year| {
                let pop = population.get(year).ok_or_else(|| {
                    WorkforceError::configuration(format!("no population entry for year {}", year))
                })?;
                Ok(YearlyProjection {
                    year,
                    expected_headcount: (pop as f64 * ratio).round() as u64,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { years })
    }

    /// Projected headcount for `year`, if inside the window.
    pub fn headcount(&self, year: i32) -> Option<u64> {
        let first = self.years.first()?.year;
        let offset = usize::try_from(year.checked_sub(first)?).ok()?;
        self.years.get(offset).map(|p| p.expected_headcount)
    }

    /// One entry per year, ascending.
    pub fn years(&self) -> &[YearlyProjection] {
        &self.years
    }

    /// Net new hires for `year`: growth to next year plus the rounded
    /// projected departures. Zero for the last year of the window.
    pub fn net_new_hires(&self, attrition: &AttritionCount, year: i32, depth: u32) -> u64 {
        let (Some(this_year), Some(next_year)) = (self.headcount(year), self.headcount(year + 1))
        else {
            return 0;
        };
        let departures = attrition.projected_departures(year, depth).round() as i64;
        let hires = next_year as i64 - this_year as i64 + departures;
        hires.max(0) as u64
    }
}

/// Departures recorded per calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttritionCount {
    by_year: BTreeMap<i32, u64>,
}

impl AttritionCount {
    /// Empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one departure in `year`.
    pub fn record(&mut self, year: i32) {
        *self.by_year.entry(year).or_default() += 1;
    }

    /// Departures recorded for `year`; 0 if none.
    pub fn get(&self, year: i32) -> u64 {
        self.by_year.get(&year).copied().unwrap_or(0)
    }

    /// Mean departures over the `depth` years before `year`.
    ///
    /// Years with nothing recorded count as zero; `depth == 0` gives 0.
    pub fn projected_departures(&self, year: i32, depth: u32) -> f64 {
        if depth == 0 {
            return 0.0;
        }
        let total: u64 = (1..=depth as i32).map(|k| self.get(year - k)).sum();
        total as f64 / depth as f64
    }

    /// Total departures recorded.
    pub fn total(&self) -> u64 {
        self.by_year.values().sum()
    }

    /// `(year, departures)` in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.by_year.iter().map(|(&y, &n)| (y, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use workforce_core::reference::PopulationRow;

    fn series(rows: &[(i32, u64)]) -> PopulationSeries {
        PopulationSeries::new(rows.iter().map(|&(year, population)| PopulationRow { year, population }))
            .unwrap()
    }

    #[test]
    fn test_projection_formula() {
        let pop = series(&[(2000, 100), (2001, 110), (2002, 125), (2010, 200)]);
        let proj = HeadcountProjection::project(1000, 2000, 2002, &pop, 2010).unwrap();
        assert_eq!(proj.headcount(2000), Some(500));
        assert_eq!(proj.headcount(2001), Some(550));
        assert_eq!(proj.headcount(2002), Some(625));
        assert_eq!(proj.headcount(2003), None);
        assert_eq!(proj.headcount(1999), None);
        assert_eq!(proj.years().len(), 3);
    }

    #[test]
    fn test_projection_rounds() {
        let pop = series(&[(2000, 3), (2001, 1)]);
        let proj = HeadcountProjection::project(10, 2000, 2000, &pop, 2001).unwrap();
        assert_eq!(proj.headcount(2000), Some(30));
        let proj = HeadcountProjection::project(1, 2001, 2001, &series(&[(2001, 3)]), 2001).unwrap();
        assert_eq!(proj.headcount(2001), Some(1));
    }

    #[test]
    fn test_missing_current_year_is_configuration_error() {
        let pop = series(&[(2000, 100)]);
        let err = HeadcountProjection::project(10, 2000, 2000, &pop, 2026).unwrap_err();
        assert!(matches!(err, WorkforceError::Configuration(_)));
        assert!(err.to_string().contains("2026"));
    }

    #[test]
    fn test_zero_current_population_is_configuration_error() {
        let pop = series(&[(2000, 100), (2026, 0)]);
        let err = HeadcountProjection::project(10, 2000, 2000, &pop, 2026).unwrap_err();
        assert!(matches!(err, WorkforceError::Configuration(_)));
    }

    #[test]
    fn test_missing_year_in_range_is_configuration_error() {
        let pop = series(&[(2000, 100), (2002, 100)]);
        let err = HeadcountProjection::project(10, 2000, 2002, &pop, 2000).unwrap_err();
        assert!(err.to_string().contains("2001"));
    }

    #[test]
    fn test_reversed_years_rejected() {
        let pop = series(&[(2000, 100)]);
        let err = HeadcountProjection::project(10, 2001, 2000, &pop, 2000).unwrap_err();
        assert!(matches!(err, WorkforceError::InvalidRequest(_)));
    }

    #[test]
    fn test_projected_departures_moving_average() {
        let mut attrition = AttritionCount::new();
        for _ in 0..6 {
            attrition.record(2002);
        }
        for _ in 0..3 {
            attrition.record(2004);
        }
        assert_relative_eq!(attrition.projected_departures(2005, 3), 3.0);
        // 2001 is missing and counts as zero
        assert_relative_eq!(attrition.projected_departures(2003, 3), 2.0);
        assert_relative_eq!(attrition.projected_departures(2005, 1), 3.0);
        assert_eq!(attrition.projected_departures(2005, 0), 0.0);
        assert_eq!(attrition.total(), 9);
    }

    #[test]
    fn test_net_new_hires() {
        let pop = series(&[(2000, 100), (2001, 110), (2002, 100)]);
        let proj = HeadcountProjection::project(100, 2000, 2002, &pop, 2000).unwrap();
        let mut attrition = AttritionCount::new();
        for _ in 0..5 {
            attrition.record(1999);
        }

        // growth 10 + round(5 / 3) = 12
        assert_eq!(proj.net_new_hires(&attrition, 2000, 3), 12);
        // shrinkage of 10 with round(5 / 3) departures floors at 0
        assert_eq!(proj.net_new_hires(&attrition, 2001, 3), 0);
        // last year of the window
        assert_eq!(proj.net_new_hires(&attrition, 2002, 3), 0);
    }
}
