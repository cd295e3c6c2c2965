//! Generator configuration.
//!
//! Tunables for a generation run, loaded from TOML with `WORKFORCE_*`
//! environment variable overrides. Every key has a default, so an empty
//! file (or no file) is a valid configuration.

use chrono::{Datelike, Local};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound for every year-valued setting (caps, ages, averaging depth).
pub const MAX_SPAN_YEARS: f64 = 100.0;

/// Upper bound for `birth_jitter_days`.
pub const MAX_BIRTH_JITTER_DAYS: i64 = 366;

/// What to do with a tenure draw that exceeds its cap.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TenureCapPolicy {
    /// Replace the draw with the cap
    #[default]
    Clip,
    /// Redraw until the value is within the cap
    Resample,
}

impl std::str::FromStr for TenureCapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clip" => Ok(Self::Clip),
            "resample" => Ok(Self::Resample),
            other => Err(format!("unknown tenure cap policy '{}'", other)),
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the run; `None` draws one from OS entropy
    pub seed: Option<u64>,

    /// Year whose population anchors the headcount ratio; `None` means today
    pub current_year: Option<i32>,

    /// Years averaged when projecting departures
    pub departure_average_depth: u32,

    /// Longest look-back for initial-cohort hire dates, in years
    pub initial_hire_max_years: f64,

    /// Longest total tenure for the initial cohort, in years
    pub initial_tenure_cap_years: f64,

    /// Longest tenure for hires made during the simulation, in years
    pub tenure_cap_years: f64,

    /// Cap handling, shared by both cohorts
    pub tenure_cap_policy: TenureCapPolicy,

    /// Mean age at hire
    pub age_mean: f64,

    /// Standard deviation of age at hire
    pub age_stdev: f64,

    /// Youngest allowed age at hire
    pub min_hire_age: f64,

    /// Oldest allowed age at hire
    pub max_hire_age: f64,

    /// Half-width of the uniform birth-date jitter, in days
    pub birth_jitter_days: i64,

    /// Bound on every rejection loop
    pub max_attempts: usize,

    /// Domain appended to synthesised email addresses
    pub email_domain: String,

    /// Records per storage write
    pub batch_size: usize,

    /// Optional directory of JSON reference overrides
    pub reference_dir: Option<PathBuf>,

    /// Log level
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            current_year: None,
            departure_average_depth: 3,
            initial_hire_max_years: 30.0,
            initial_tenure_cap_years: 40.0,
            tenure_cap_years: 30.0,
            tenure_cap_policy: TenureCapPolicy::Clip,
            age_mean: 25.0,
            age_stdev: 5.0,
            min_hire_age: 18.0,
            max_hire_age: 65.0,
            birth_jitter_days: 180,
            max_attempts: 10_000,
            email_domain: "company.com".to_string(),
            batch_size: workforce_store::DEFAULT_BATCH_SIZE,
            reference_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The anchor year, resolving `None` to the current calendar year
    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// Apply environment variable overrides
    ///
    /// Unparseable values are ignored and the existing setting kept.
    pub fn with_env_override(mut self) -> Self {
        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
        }

        if let Some(seed) = parsed("WORKFORCE_SEED") {
            self.seed = Some(seed);
        }
        if let Some(year) = parsed("WORKFORCE_CURRENT_YEAR") {
            self.current_year = Some(year);
        }
        if let Some(depth) = parsed("WORKFORCE_DEPARTURE_AVERAGE_DEPTH") {
            self.departure_average_depth = depth;
        }
        if let Some(cap) = parsed("WORKFORCE_TENURE_CAP_YEARS") {
            self.tenure_cap_years = cap;
        }
        if let Some(policy) = parsed("WORKFORCE_TENURE_CAP_POLICY") {
            self.tenure_cap_policy = policy;
        }
        if let Some(attempts) = parsed("WORKFORCE_MAX_ATTEMPTS") {
            self.max_attempts = attempts;
        }
        if let Ok(domain) = std::env::var("WORKFORCE_EMAIL_DOMAIN") {
            self.email_domain = domain;
        }
        if let Some(batch_size) = parsed("WORKFORCE_BATCH_SIZE") {
            self.batch_size = batch_size;
        }
        if let Ok(dir) = std::env::var("WORKFORCE_REFERENCE_DIR") {
            self.reference_dir = Some(PathBuf::from(dir));
        }
        if let Ok(log_level) = std::env::var("WORKFORCE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !(1..=MAX_SPAN_YEARS as u32).contains(&self.departure_average_depth) {
            errors.push(format!(
                "departure_average_depth must be in 1..={}, got {}",
                MAX_SPAN_YEARS, self.departure_average_depth
            ));
        }

        for (name, value) in [
            ("initial_hire_max_years", self.initial_hire_max_years),
            ("initial_tenure_cap_years", self.initial_tenure_cap_years),
            ("tenure_cap_years", self.tenure_cap_years),
        ] {
            if !(value.is_finite() && value > 0.0 && value <= MAX_SPAN_YEARS) {
                errors.push(format!(
                    "{} must be in (0, {}], got {}",
                    name, MAX_SPAN_YEARS, value
                ));
            }
        }

        if !(self.age_stdev.is_finite() && (0.0..=MAX_SPAN_YEARS).contains(&self.age_stdev)) {
            errors.push(format!(
                "age_stdev must be in [0, {}], got {}",
                MAX_SPAN_YEARS, self.age_stdev
            ));
        }
        if !(self.min_hire_age > 0.0
            && self.min_hire_age < self.max_hire_age
            && self.max_hire_age <= MAX_SPAN_YEARS)
        {
            errors.push(format!(
                "hire age range [{}, {}] must be non-empty and within (0, {}]",
                self.min_hire_age, self.max_hire_age, MAX_SPAN_YEARS
            ));
        }
        if !(self.min_hire_age..=self.max_hire_age).contains(&self.age_mean) {
            errors.push(format!(
                "age_mean {} lies outside [{}, {}]",
                self.age_mean, self.min_hire_age, self.max_hire_age
            ));
        }
        if !(0..=MAX_BIRTH_JITTER_DAYS).contains(&self.birth_jitter_days) {
            errors.push(format!(
                "birth_jitter_days must be in 0..={}, got {}",
                MAX_BIRTH_JITTER_DAYS, self.birth_jitter_days
            ));
        }

        if self.max_attempts == 0 {
            errors.push("max_attempts must be greater than 0".to_string());
        }
        if self.batch_size == 0 {
            errors.push("batch_size must be greater than 0".to_string());
        }
        if self.email_domain.trim().is_empty() || self.email_domain.contains('@') {
            errors.push(format!("Invalid email_domain '{}'", self.email_domain));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.departure_average_depth, 3);
        assert_eq!(config.tenure_cap_policy, TenureCapPolicy::Clip);
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.email_domain, "company.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
seed = 42
current_year = 2005
tenure_cap_policy = "resample"
"#
        )
        .unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.current_year(), 2005);
        assert_eq!(config.tenure_cap_policy, TenureCapPolicy::Resample);
        assert_eq!(config.age_mean, 25.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/workforce.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_bad_policy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"tenure_cap_policy = "ignore""#).unwrap();
        let err = GeneratorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_collects_every_error() {
        let config = GeneratorConfig {
            log_level: "loud".to_string(),
            departure_average_depth: 0,
            tenure_cap_years: -1.0,
            batch_size: 0,
            email_domain: "a@b".to_string(),
            ..GeneratorConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 5);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("tenure_cap_years")));
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_rejects_empty_age_range() {
        let config = GeneratorConfig {
            min_hire_age: 40.0,
            max_hire_age: 30.0,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("hire age range"));
    }

    #[test]
    fn test_validation_rejects_negative_jitter() {
        let config = GeneratorConfig {
            birth_jitter_days: -5,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("birth_jitter_days"));
    }

    #[test]
    fn test_validation_bounds_year_valued_settings() {
        let config = GeneratorConfig {
            age_stdev: 1e20,
            tenure_cap_years: 1e9,
            initial_tenure_cap_years: f64::INFINITY,
            departure_average_depth: u32::MAX,
            max_hire_age: 1e6,
            ..GeneratorConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 5, "{:?}", errors);
                assert!(errors.iter().any(|e| e.starts_with("age_stdev")));
                assert!(errors.iter().any(|e| e.starts_with("tenure_cap_years")));
                assert!(errors.iter().any(|e| e.starts_with("initial_tenure_cap_years")));
                assert!(errors.iter().any(|e| e.starts_with("departure_average_depth")));
                assert!(errors.iter().any(|e| e.starts_with("hire age range")));
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Clip".parse::<TenureCapPolicy>(), Ok(TenureCapPolicy::Clip));
        assert_eq!("resample".parse::<TenureCapPolicy>(), Ok(TenureCapPolicy::Resample));
        assert!("other".parse::<TenureCapPolicy>().is_err());
    }
}
