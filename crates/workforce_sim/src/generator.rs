//! Population generation pipeline.
//!
//! One run:
//!
//! 1. Project expected headcount for every year of the window.
//! 2. Seed the initial cohort (`projection[start_year]` employees) with
//!    rank-based hire dates and conditional departures.
//! 3. For each year, hire enough people to cover projected growth plus the
//!    moving average of recent departures, spread over the year by the
//!    hiring schedule.
//! 4. Every departure date feeds back into the attrition counts that drive
//!    later years' hiring.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, info_span};

use chrono::{Datelike, NaiveDate};
use workforce_core::reference::ReferenceData;
use workforce_core::rng::WorkforceRng;
use workforce_core::types::{EmployeeRecord, EmploymentStatus, Result, WorkforceError};
use workforce_store::{insert_in_batches, EmployeeStore};

use crate::attributes::{AttributeSynthesizer, EmployeeAttributes};
use crate::config::GeneratorConfig;
use crate::hiring::HiringScheduler;
use crate::projection::{AttritionCount, HeadcountProjection};
use crate::tenure::TenureSampler;

/// Placeholder position and branch identifiers are drawn from `1..=PLACEHOLDER_ID_MAX`.
pub const PLACEHOLDER_ID_MAX: i64 = 10;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationRequest {
    /// Headcount the organisation has in the configured current year
    pub target_headcount: u64,
    /// First simulated year
    pub start_year: i32,
    /// Last simulated year (inclusive)
    pub end_year: i32,
    /// Years after which half of a cohort has left
    pub half_life_years: f64,
}

impl GenerationRequest {
    /// Convenience constructor
    pub fn new(target_headcount: u64, start_year: i32, end_year: i32, half_life_years: f64) -> Self {
        Self {
            target_headcount,
            start_year,
            end_year,
            half_life_years,
        }
    }

}

/// Records plus the aggregates that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Seed the run was drawn with
    pub seed: u64,
    /// All records, initial cohort first, ids ascending from 1
    pub records: Vec<EmployeeRecord>,
    /// Expected headcount per year
    pub projection: HeadcountProjection,
    /// Size of the initial cohort
    pub initial_cohort: u64,
    /// New hires scheduled per simulated year
    pub new_hires_by_year: BTreeMap<i32, u64>,
    /// Departures per calendar year
    pub attrition: AttritionCount,
}

impl GenerationReport {
    /// Number of records employed on `date`.
    pub fn headcount_on(&self, date: NaiveDate) -> usize {
        self.records.iter().filter(|r| r.is_employed_on(date)).count()
    }

    /// Total hires made during the window (excludes the initial cohort).
    pub fn total_new_hires(&self) -> u64 {
        self.new_hires_by_year.values().sum()
    }
}

/// Generates synthetic workforces from shared reference data.
///
/// Holds no per-run state; every call builds its own projection, attrition
/// counts and record list, so one generator can serve concurrent runs.
#[derive(Debug, Clone)]
pub struct PopulationGenerator {
    data: Arc<ReferenceData>,
    config: GeneratorConfig,
}

impl PopulationGenerator {
    /// Generator over `data` with `config`
    ///
    /// # Errors
    /// `Configuration` if `config` fails [`GeneratorConfig::validate`].
    pub fn new(data: Arc<ReferenceData>, config: GeneratorConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self { data, config })
    }

    /// Loads reference data from `config.reference_dir`, or the built-in
    /// tables when none is set.
    ///
    /// # Errors
    /// - `Configuration` if `config` fails [`GeneratorConfig::validate`]
    /// - `ReferenceData` if a reference file is unreadable or invalid
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        validate_config(&config)?;
        let data = match &config.reference_dir {
            Some(dir) => ReferenceData::load_dir(dir)?,
            None => ReferenceData::builtin()?,
        };
        Self::new(Arc::new(data), config)
    }

    /// Reference data in use
    pub fn reference_data(&self) -> &Arc<ReferenceData> {
        &self.data
    }

    /// RNG for a run: the configured seed, or fresh entropy.
    pub fn rng(&self) -> WorkforceRng {
        match self.config.seed {
            Some(seed) => WorkforceRng::from_seed(seed),
            None => WorkforceRng::from_entropy(),
        }
    }

    /// Generates the workforce for `request`.
    ///
    /// # Errors
    /// - `InvalidRequest` for a malformed request
    /// - `Configuration` if the population series lacks a needed year
    /// - `SamplingExhaustion` if a bounded redraw loop gives up
    pub fn generate(&self, request: &GenerationRequest, rng: &mut WorkforceRng) -> Result<Vec<EmployeeRecord>> {
        self.generate_report(request, rng).map(|report| report.records)
    }

    /// Like [`generate`](Self::generate), keeping the aggregates.
    ///
    /// # Errors
    /// As for [`generate`](Self::generate).
    pub fn generate_report(
        &self,
        request: &GenerationRequest,
        rng: &mut WorkforceRng,
    ) -> Result<GenerationReport> {
        let span = info_span!(
            "generate",
            seed = rng.seed(),
            headcount = request.target_headcount,
            start = request.start_year,
            end = request.end_year
        );
        let _enter = span.enter();

        let current_year = self.config.current_year();
        let projection = HeadcountProjection::project(
            request.target_headcount,
            request.start_year,
            request.end_year,
            &self.data.population,
            current_year,
        )?;
        info!(
            current_year,
            start_headcount = projection.headcount(request.start_year),
            end_headcount = projection.headcount(request.end_year),
            "Headcount projected"
        );

        let tenure = TenureSampler::new(request.half_life_years, &self.config)?;
        let attributes = AttributeSynthesizer::new(&self.data, &self.config);
        let scheduler = HiringScheduler::new(&self.data.seasonality);
        let mut attrition = AttritionCount::new();
        let mut builder = RecordBuilder::default();

        let initial_cohort = projection.headcount(request.start_year).unwrap_or(0);
        for hire_date in tenure.initial_hire_dates(initial_cohort, request.start_year)? {
            let departure = tenure.initial_departure(hire_date, request.start_year, rng)?;
            let person = attributes.synthesize(hire_date, rng)?;
            builder.push(person, hire_date, departure, rng);
            attrition.record(departure.year());
        }
        info!(initial_cohort, "Initial cohort seeded");

        let depth = self.config.departure_average_depth;
        let mut new_hires_by_year = BTreeMap::new();
        for year in request.start_year..=request.end_year {
            let hires = projection.net_new_hires(&attrition, year, depth);
            for hire_date in scheduler.schedule(year, hires, rng)? {
                let person = attributes.synthesize(hire_date, rng)?;
                let departure = tenure.departure_for(hire_date, rng)?;
                builder.push(person, hire_date, departure, rng);
                attrition.record(departure.year());
            }
            new_hires_by_year.insert(year, hires);
            debug!(
                year,
                hires,
                departures = attrition.get(year),
                "Year simulated"
            );
        }

        let records = builder.finish();
        info!(records = records.len(), "Generation complete");

        Ok(GenerationReport {
            seed: rng.seed(),
            records,
            projection,
            initial_cohort,
            new_hires_by_year,
            attrition,
        })
    }

    /// Generates, then writes the records to `store` in batches of
    /// `batch_size`.
    ///
    /// # Errors
    /// - `InvalidRequest` if `batch_size == 0` (checked before generating)
    /// - any generation error
    /// - `Storage` with the store's error, unchanged
    pub async fn generate_and_store<S>(
        &self,
        request: &GenerationRequest,
        rng: &mut WorkforceRng,
        store: &S,
        batch_size: usize,
    ) -> Result<GenerationReport>
    where
        S: EmployeeStore + ?Sized,
    {
        if batch_size == 0 {
            return Err(WorkforceError::invalid_request("batch size must be greater than 0"));
        }
        let report = self.generate_report(request, rng)?;
        let written = insert_in_batches(store, &report.records, batch_size).await?;
        info!(written, batch_size, "Records stored");
        Ok(report)
    }

    /// Independent runs, one per seed, executed in parallel.
    ///
    /// Reports come back in `seeds` order.
    ///
    /// # Errors
    /// Any run's error; the other runs' results are discarded.
    pub fn generate_replicates(
        &self,
        request: &GenerationRequest,
        seeds: &[u64],
    ) -> Result<Vec<GenerationReport>> {
        seeds
            .par_iter()
            .map(|&seed| self.generate_report(request, &mut WorkforceRng::from_seed(seed)))
            .collect()
    }
}

/// Assigns ids and placeholder fields in generation order.
#[derive(Debug, Default)]
struct RecordBuilder {
    records: Vec<EmployeeRecord>,
}

impl RecordBuilder {
    fn push(
        &mut self,
        person: EmployeeAttributes,
        hire_date: NaiveDate,
        departure_date: NaiveDate,
        rng: &mut WorkforceRng,
    ) {
        let id = self.records.len() as u64 + 1;
        let supervisor_id = if id == 1 {
            None
        } else {
            Some(rng.gen_range_inclusive(1, id as i64 - 1) as u64)
        };
        self.records.push(EmployeeRecord {
            id,
            sex: person.sex,
            first_name: person.first_name,
            middle_name: person.middle_name,
            last_name: person.last_name,
            birth_date: person.birth_date,
            hire_date,
            departure_date: Some(departure_date),
            email: person.email,
            education_level: person.education_level,
            position_id: rng.gen_range_inclusive(1, PLACEHOLDER_ID_MAX) as u32,
            branch_id: rng.gen_range_inclusive(1, PLACEHOLDER_ID_MAX) as u32,
            supervisor_id,
            status: EmploymentStatus::Removed,
        });
    }

    fn finish(self) -> Vec<EmployeeRecord> {
        self.records
    }
}

fn validate_config(config: &GeneratorConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| WorkforceError::configuration(e.to_string()))
}
