//! Exponential tenure model.
//!
//! Employment length follows an exponential law whose half-life is the
//! request's attrition half-life:
//!
//! ```text
//! years = (half_life / ln 2) * E,   E ~ Exp(1)
//! ```
//!
//! so half of any cohort has left after `half_life` years.
//!
//! ## Initial cohort
//!
//! Employees already on staff when the simulation starts get deterministic,
//! rank-based hire dates: rank `i` of `N` was hired
//! `(half_life / ln 2) * ln(N / i)` years before the anchor, which spreads
//! the cohort the way an exponential survivor curve would. Their departure
//! is drawn conditionally on having survived to the simulation start; by
//! memorylessness that is the elapsed time plus a fresh exponential draw.

use chrono::{Duration, NaiveDate};
use std::f64::consts::LN_2;

use workforce_core::rng::WorkforceRng;
use workforce_core::types::time::{
    last_business_day_before, monday_on_or_before, year_start, years_between, years_to_days,
    DAYS_PER_YEAR,
};
use workforce_core::types::{Result, WorkforceError};

use crate::config::{GeneratorConfig, TenureCapPolicy};

/// Draws hire and departure dates for one run.
#[derive(Debug, Clone)]
pub struct TenureSampler {
    scale_years: f64,
    policy: TenureCapPolicy,
    max_attempts: usize,
    initial_hire_max_years: f64,
    initial_tenure_cap_years: f64,
    tenure_cap_years: f64,
}

impl TenureSampler {
    /// # Errors
    /// `InvalidRequest` if `half_life_years` is not finite and positive.
    pub fn new(half_life_years: f64, config: &GeneratorConfig) -> Result<Self> {
        if !(half_life_years.is_finite() && half_life_years > 0.0) {
            return Err(WorkforceError::invalid_request(format!(
                "half-life must be finite and positive, got {}",
                half_life_years
            )));
        }
        Ok(Self {
            scale_years: half_life_years / LN_2,
            policy: config.tenure_cap_policy,
            max_attempts: config.max_attempts,
            initial_hire_max_years: config.initial_hire_max_years,
            initial_tenure_cap_years: config.initial_tenure_cap_years,
            tenure_cap_years: config.tenure_cap_years,
        })
    }

    /// Mean tenure in years (`half_life / ln 2`).
    pub fn mean_years(&self) -> f64 {
        self.scale_years
    }

    /// One uncapped tenure draw, in years.
    pub fn draw_years(&self, rng: &mut WorkforceRng) -> f64 {
        self.scale_years * rng.gen_standard_exponential()
    }

    /// A tenure draw no longer than `cap` years, per the configured policy.
    ///
    /// A non-positive `cap` yields 0.
    ///
    /// # Errors
    /// `SamplingExhaustion` if `Resample` rejects `max_attempts` draws.
    pub fn draw_capped_years(&self, cap: f64, rng: &mut WorkforceRng) -> Result<f64> {
        if cap <= 0.0 {
            return Ok(0.0);
        }
        match self.policy {
            TenureCapPolicy::Clip => Ok(self.draw_years(rng).min(cap)),
            TenureCapPolicy::Resample => {
                for _ in 0..self.max_attempts {
                    let years = self.draw_years(rng);
                    if years <= cap {
                        return Ok(years);
                    }
                }
                Err(WorkforceError::SamplingExhaustion {
                    what: "tenure within cap",
                    attempts: self.max_attempts,
                })
            }
        }
    }

    /// Hire dates for an initial cohort of `n`, ordered from longest-serving
    /// (rank 1) to most recent (rank `n`).
    ///
    /// Anchored on the last business day before January 1 of `start_year`
    /// and snapped to the Monday on or before.
    ///
    /// # Errors
    /// `InvalidRequest` if `start_year` or a resulting date is out of range.
    pub fn initial_hire_dates(&self, n: u64, start_year: i32) -> Result<Vec<NaiveDate>> {
        let anchor = last_business_day_before(year_start(start_year)?);
        let total = n as f64;
        (1..=n)
            .map(|rank| {
                let years = (self.scale_years * (total / rank as f64).ln())
                    .min(self.initial_hire_max_years);
                let hired = shift_days(anchor, -years_to_days(years))?;
                Ok(monday_on_or_before(hired))
            })
            .collect()
    }

    /// Departure for an initial-cohort employee hired on `hire_date`.
    ///
    /// Always strictly after January 1 of `start_year`, with total tenure
    /// bounded by the initial-cohort cap.
    ///
    /// # Errors
    /// `SamplingExhaustion` under `Resample`; `InvalidRequest` on date overflow.
    pub fn initial_departure(
        &self,
        hire_date: NaiveDate,
        start_year: i32,
        rng: &mut WorkforceRng,
    ) -> Result<NaiveDate> {
        let simulation_start = year_start(start_year)?;
        let elapsed = years_between(hire_date, simulation_start).max(0.0);
        let remaining = self.draw_capped_years(self.initial_tenure_cap_years - elapsed, rng)?;
        let days = capped_days(elapsed + remaining, self.initial_tenure_cap_years);
        let departure = shift_days(hire_date, days)?;
        if departure > simulation_start {
            Ok(departure)
        } else {
            shift_days(simulation_start, 1)
        }
    }

    /// Departure for an employee hired during the simulation.
    ///
    /// At least one day after `hire_date`, at most `tenure_cap_years` later.
    ///
    /// # Errors
    /// `SamplingExhaustion` under `Resample`; `InvalidRequest` on date overflow.
    pub fn departure_for(&self, hire_date: NaiveDate, rng: &mut WorkforceRng) -> Result<NaiveDate> {
        let years = self.draw_capped_years(self.tenure_cap_years, rng)?;
        shift_days(hire_date, capped_days(years, self.tenure_cap_years))
    }
}

/// Whole days for `years`, never shorter than one day and never past `cap`.
fn capped_days(years: f64, cap: f64) -> i64 {
    let cap_days = (cap * DAYS_PER_YEAR).floor() as i64;
    years_to_days(years).min(cap_days).max(1)
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|offset| date.checked_add_signed(offset))
        .ok_or_else(|| WorkforceError::invalid_request(format!("{} + {} days is out of range", date, days)))
}
