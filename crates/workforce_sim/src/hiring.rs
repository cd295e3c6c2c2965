//! Biweekly hiring schedule within one year.

use chrono::{Datelike, Duration, NaiveDate};

use workforce_core::reference::HiringSeasonality;
use workforce_core::rng::WorkforceRng;
use workforce_core::types::time::first_monday_of_year;
use workforce_core::types::Result;

/// Two-week hiring periods per year.
pub const PERIODS_PER_YEAR: u32 = 26;

/// Days between period start dates.
pub const PERIOD_LENGTH_DAYS: i64 = 14;

/// Spreads a year's hires across biweekly periods.
///
/// Periods start on the year's first Monday. Each period's count is a
/// rounded normal draw whose mean and deviation are the flat per-period
/// share scaled by the month's seasonal multipliers. Scheduling stops once
/// the year's total is reached; any shortfall lands on the final period.
#[derive(Debug, Clone, Copy)]
pub struct HiringScheduler<'a> {
    seasonality: &'a HiringSeasonality,
}

impl<'a> HiringScheduler<'a> {
    /// Scheduler using `seasonality`
    pub fn new(seasonality: &'a HiringSeasonality) -> Self {
        Self { seasonality }
    }

    /// Start dates of the year's periods.
    ///
    /// # Errors
    /// `InvalidRequest` if `year` is out of range.
    pub fn period_starts(year: i32) -> Result<Vec<NaiveDate>> {
        let first = first_monday_of_year(year)?;
        Ok((0..PERIODS_PER_YEAR as i64)
            .map(|p| first + Duration::days(p * PERIOD_LENGTH_DAYS))
            .collect())
    }

    /// Exactly `total` hire dates in `year`, non-decreasing.
    ///
    /// # Errors
    /// `InvalidRequest` if `year` is out of range.
    pub fn schedule(&self, year: i32, total: u64, rng: &mut WorkforceRng) -> Result<Vec<NaiveDate>> {
        let periods = Self::period_starts(year)?;
        let target = total as usize;
        let mut dates = Vec::with_capacity(target);
        if target == 0 {
            return Ok(dates);
        }

        let per_period = total as f64 / PERIODS_PER_YEAR as f64;
        for &start in &periods {
            if dates.len() >= target {
                break;
            }
            let month = start.month();
            let mean = per_period * self.seasonality.mean_multiplier(month);
            let stdev = per_period * self.seasonality.stdev_multiplier(month);
            let count = rng.gen_box_muller(mean, stdev).round().max(0.0) as usize;
            let take = count.min(target - dates.len());
            dates.extend(std::iter::repeat(start).take(take));
        }

        if let Some(&last) = periods.last() {
            let shortfall = target - dates.len();
            dates.extend(std::iter::repeat(last).take(shortfall));
        }
        Ok(dates)
    }
}
