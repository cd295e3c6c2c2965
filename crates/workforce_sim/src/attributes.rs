//! Biographical attributes for one synthetic employee.
//!
//! Sex, names, email, education level and birth date are drawn here; hire
//! and departure dates come from the tenure sampler and hiring schedule.

use chrono::{Datelike, Duration, NaiveDate};

use workforce_core::reference::ReferenceData;
use workforce_core::rng::WorkforceRng;
use workforce_core::sampling::AliasSampler;
use workforce_core::types::time::{years_between, years_to_days};
use workforce_core::types::{EducationLevel, Result, Sex, WorkforceError};

use crate::config::GeneratorConfig;

/// Domain used by [`synthesize_email`].
pub const DEFAULT_EMAIL_DOMAIN: &str = "company.com";

/// Scales the education era penalty per year and per category step.
const EDUCATION_ERA_FACTOR: f64 = 0.1;

/// Everything about an employee except identifiers and employment dates.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeAttributes {
    /// Sex
    pub sex: Sex,
    /// First name
    pub first_name: String,
    /// Middle name, always distinct from the first name
    pub middle_name: String,
    /// Title-cased last name
    pub last_name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Lower-case email address
    pub email: String,
    /// Highest education level
    pub education_level: EducationLevel,
}

/// Draws [`EmployeeAttributes`] from shared reference tables.
#[derive(Debug, Clone)]
pub struct AttributeSynthesizer<'a> {
    data: &'a ReferenceData,
    current_year: i32,
    age_mean: f64,
    age_stdev: f64,
    min_hire_age: f64,
    max_hire_age: f64,
    birth_jitter_days: i64,
    max_attempts: usize,
    email_domain: &'a str,
}

impl<'a> AttributeSynthesizer<'a> {
    /// Synthesiser over `data`, tuned by `config`.
    pub fn new(data: &'a ReferenceData, config: &'a GeneratorConfig) -> Self {
        Self {
            data,
            current_year: config.current_year(),
            age_mean: config.age_mean,
            age_stdev: config.age_stdev,
            min_hire_age: config.min_hire_age,
            max_hire_age: config.max_hire_age,
            birth_jitter_days: config.birth_jitter_days,
            max_attempts: config.max_attempts,
            email_domain: &config.email_domain,
        }
    }

    /// Draws every attribute for an employee hired on `hire_date`.
    ///
    /// # Errors
    /// `SamplingExhaustion` if the birth date or middle name cannot be drawn
    /// within the attempt bound; `Sampler` if an education table is invalid.
    pub fn synthesize(&self, hire_date: NaiveDate, rng: &mut WorkforceRng) -> Result<EmployeeAttributes> {
        let birth_date = self.draw_birth_date(hire_date, rng)?;
        let sex = self.draw_sex(rng);
        let (first_name, middle_name) = self.draw_given_names(sex, birth_date.year(), rng)?;
        let last_name = self.draw_last_name(rng);
        let email = email_with_domain(&first_name, &middle_name, &last_name, self.email_domain);
        let education_level = self.draw_education(hire_date.year(), rng)?;

        Ok(EmployeeAttributes {
            sex,
            first_name,
            middle_name,
            last_name,
            birth_date,
            email,
            education_level,
        })
    }

    /// Fair coin.
    pub fn draw_sex(&self, rng: &mut WorkforceRng) -> Sex {
        if rng.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    /// First and middle name from the `(sex, birth_year)` bucket.
    ///
    /// The middle name is redrawn until it differs from the first.
    ///
    /// # Errors
    /// `SamplingExhaustion` after `max_attempts` identical redraws.
    pub fn draw_given_names(
        &self,
        sex: Sex,
        birth_year: i32,
        rng: &mut WorkforceRng,
    ) -> Result<(String, String)> {
        let bucket = self.data.first_names.bucket(sex, birth_year, rng);
        let first = bucket.draw(rng);
        for _ in 0..self.max_attempts {
            let middle = bucket.draw(rng);
            if middle != first {
                return Ok((first.clone(), middle.clone()));
            }
        }
        Err(WorkforceError::SamplingExhaustion {
            what: "middle name",
            attempts: self.max_attempts,
        })
    }

    /// Uniform surname, title-cased.
    pub fn draw_last_name(&self, rng: &mut WorkforceRng) -> String {
        title_case(self.data.last_names.draw(rng))
    }

    /// Education weights for someone hired in `hire_year`.
    ///
    /// Each base weight is divided by `1 + p²` with
    /// `p = |current_year - hire_year| * (index + 1) * 0.1`, so the further
    /// back the hire, the more the higher levels are suppressed.
    pub fn education_weights(&self, hire_year: i32) -> [f64; 7] {
        let years_back = (self.current_year - hire_year).abs() as f64;
        let mut weights = [0.0; 7];
        for (level, base) in self.data.education.pairs() {
            let penalty = years_back * (level.index() + 1) as f64 * EDUCATION_ERA_FACTOR;
            weights[level.index()] = base / (1.0 + penalty * penalty);
        }
        weights
    }

    /// Era-adjusted education draw.
    ///
    /// # Errors
    /// `Sampler` if an adjusted weight underflows to zero.
    pub fn draw_education(&self, hire_year: i32, rng: &mut WorkforceRng) -> Result<EducationLevel> {
        let weights = self.education_weights(hire_year);
        let sampler = AliasSampler::new(EducationLevel::ALL.into_iter().zip(weights))?;
        Ok(*sampler.draw(rng))
    }

    /// Birth date giving an age at hire within the configured range.
    ///
    /// Age is drawn from a normal law (Box–Muller), converted to days,
    /// jittered uniformly by up to `birth_jitter_days` either way, and the
    /// whole draw is repeated until the resulting age at hire is in range.
    ///
    /// # Errors
    /// `SamplingExhaustion` after `max_attempts` out-of-range draws.
    pub fn draw_birth_date(&self, hire_date: NaiveDate, rng: &mut WorkforceRng) -> Result<NaiveDate> {
        let jitter_bound = self.birth_jitter_days.max(0);
        for _ in 0..self.max_attempts {
            let age = rng.gen_box_muller(self.age_mean, self.age_stdev);
            let jitter = rng.gen_range_inclusive(-jitter_bound, jitter_bound);
            let Some(birth) = years_to_days(age)
                .checked_add(jitter)
                .and_then(Duration::try_days)
                .and_then(|offset| hire_date.checked_sub_signed(offset))
            else {
                continue;
            };
            let age_at_hire = years_between(birth, hire_date);
            if age_at_hire >= self.min_hire_age && age_at_hire <= self.max_hire_age {
                return Ok(birth);
            }
        }
        Err(WorkforceError::SamplingExhaustion {
            what: "birth date",
            attempts: self.max_attempts,
        })
    }
}

/// `first.m.last@company.com`, lower-cased.
///
/// ```
/// use workforce_sim::attributes::synthesize_email;
///
/// assert_eq!(synthesize_email("Jane", "Marie", "Doe"), "jane.m.doe@company.com");
/// ```
pub fn synthesize_email(first: &str, middle: &str, last: &str) -> String {
    email_with_domain(first, middle, last, DEFAULT_EMAIL_DOMAIN)
}

/// `first.m.last@domain`, lower-cased with whitespace removed.
///
/// The middle initial is omitted when `middle` is empty.
pub fn email_with_domain(first: &str, middle: &str, last: &str, domain: &str) -> String {
    let local = |s: &str| -> String {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    };
    let initial: String = middle
        .chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();

    let mut email = local(first);
    if !initial.is_empty() {
        email.push('.');
        email.push_str(&initial);
    }
    email.push('.');
    email.push_str(&local(last));
    email.push('@');
    email.push_str(&domain.to_lowercase());
    email
}

/// Upper-cases the first letter of each word and lower-cases the rest.
///
/// Words are separated by spaces, hyphens and apostrophes.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut start_of_word = true;
    for c in name.chars() {
        if start_of_word {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        start_of_word = matches!(c, ' ' | '-' | '\'');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_core::reference::FirstNameTable;

    fn fixture() -> (ReferenceData, GeneratorConfig) {
        let config = GeneratorConfig {
            current_year: Some(2020),
            ..GeneratorConfig::default()
        };
        (ReferenceData::builtin().unwrap(), config)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_email() {
        assert_eq!(synthesize_email("Jane", "Marie", "Doe"), "jane.m.doe@company.com");
        assert_eq!(
            email_with_domain("Mary Ann", "", "Van Dyke", "Example.ORG"),
            "maryann.vandyke@example.org"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("SMITH"), "Smith");
        assert_eq!(title_case("o'BRIEN"), "O'Brien");
        assert_eq!(title_case("SMITH-JONES"), "Smith-Jones");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_birth_dates_respect_age_bounds() {
        let (data, config) = fixture();
        let synth = AttributeSynthesizer::new(&data, &config);
        let mut rng = WorkforceRng::from_seed(12);
        let hire = ymd(2004, 5, 3);
        for _ in 0..5_000 {
            let birth = synth.draw_birth_date(hire, &mut rng).unwrap();
            let age = years_between(birth, hire);
            assert!((18.0..=65.0).contains(&age), "age {age}");
        }
    }

    #[test]
    fn test_birth_date_exhaustion() {
        let (data, mut config) = fixture();
        config.age_mean = 90.0;
        config.age_stdev = 0.0;
        config.birth_jitter_days = 0;
        config.max_attempts = 3;
        let synth = AttributeSynthesizer::new(&data, &config);
        let mut rng = WorkforceRng::from_seed(1);
        let err = synth.draw_birth_date(ymd(2004, 5, 3), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            WorkforceError::SamplingExhaustion { what: "birth date", attempts: 3 }
        ));
    }

    #[test]
    fn test_out_of_range_birth_offsets_are_redrawn() {
        let (data, mut config) = fixture();
        config.age_stdev = 1e20;
        config.birth_jitter_days = -5;
        config.max_attempts = 50;
        let synth = AttributeSynthesizer::new(&data, &config);
        let mut rng = WorkforceRng::from_seed(4);
        match synth.draw_birth_date(ymd(2004, 5, 3), &mut rng) {
            Ok(birth) => {
                let age = years_between(birth, ymd(2004, 5, 3));
                assert!((18.0..=65.0).contains(&age), "age {age}");
            }
            Err(err) => assert!(matches!(
                err,
                WorkforceError::SamplingExhaustion { what: "birth date", attempts: 50 }
            )),
        }
    }

    #[test]
    fn test_middle_name_exhaustion() {
        let (mut data, mut config) = fixture();
        let skewed = || vec![(1980, "A".to_string(), 1e12), (1980, "B".to_string(), 1e-12)];
        data.first_names =
            FirstNameTable::new(Sex::ALL.into_iter().map(|sex| (sex, skewed()))).unwrap();
        config.max_attempts = 3;
        let synth = AttributeSynthesizer::new(&data, &config);
        let mut rng = WorkforceRng::from_seed(8);
        for sex in Sex::ALL {
            let err = synth.draw_given_names(sex, 1980, &mut rng).unwrap_err();
            assert!(matches!(
                err,
                WorkforceError::SamplingExhaustion { what: "middle name", attempts: 3 }
            ));
        }
    }

    #[test]
    fn test_middle_name_differs_from_first() {
        let (data, config) = fixture();
        let synth = AttributeSynthesizer::new(&data, &config);
        let mut rng = WorkforceRng::from_seed(13);
        for year in [1930, 1975, 2019, 1850] {
            for sex in Sex::ALL {
                let (first, middle) = synth.draw_given_names(sex, year, &mut rng).unwrap();
                assert_ne!(first, middle);
            }
        }
    }

    #[test]
    fn test_education_skews_lower_for_older_hires() {
        let (data, config) = fixture();
        let synth = AttributeSynthesizer::new(&data, &config);

        let now = synth.education_weights(2020);
        for level in EducationLevel::ALL {
            assert_eq!(now[level.index()], data.education.weight(level));
        }

        let old = synth.education_weights(1990);
        let share = |w: &[f64; 7], i: usize| w[i] / w.iter().sum::<f64>();
        assert!(share(&old, 0) > share(&now, 0));
        assert!(share(&old, 6) < share(&now, 6));

        // p = 30 * 1 * 0.1 = 3 for the lowest level
        assert!((old[0] - now[0] / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let (data, config) = fixture();
        let synth = AttributeSynthesizer::new(&data, &config);
        let hire = ymd(2010, 9, 6);
        let a = synth.synthesize(hire, &mut WorkforceRng::from_seed(77)).unwrap();
        let b = synth.synthesize(hire, &mut WorkforceRng::from_seed(77)).unwrap();
        assert_eq!(a, b);
        assert!(a.email.ends_with("@company.com"));
        assert_eq!(a.email, a.email.to_lowercase());
        assert!(a.birth_date < hire);
    }
}
