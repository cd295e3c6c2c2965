//! Employee record and its categorical attributes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::time::years_between;

/// Binary sex category used to key first-name distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Both categories, in a fixed order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(format!("unknown sex '{}'", other)),
        }
    }
}

/// Highest completed education level.
///
/// Variants are ordered from lowest to highest; [`EducationLevel::index`]
/// is the category index used by the era penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    /// No high school diploma
    NoHighSchoolDiploma,
    /// High school diploma
    HighSchoolDiploma,
    /// Some college, no degree
    SomeCollegeNoDegree,
    /// Associate degree
    AssociateDegree,
    /// Bachelor's degree
    BachelorsDegree,
    /// Master's degree
    MastersDegree,
    /// Doctoral or professional degree
    DoctoralOrProfessionalDegree,
}

impl EducationLevel {
    /// All levels, lowest first.
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::NoHighSchoolDiploma,
        EducationLevel::HighSchoolDiploma,
        EducationLevel::SomeCollegeNoDegree,
        EducationLevel::AssociateDegree,
        EducationLevel::BachelorsDegree,
        EducationLevel::MastersDegree,
        EducationLevel::DoctoralOrProfessionalDegree,
    ];

    /// Zero-based category index (0 = lowest).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable label as stored in employee tables.
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::NoHighSchoolDiploma => "No High School Diploma",
            EducationLevel::HighSchoolDiploma => "High School Diploma",
            EducationLevel::SomeCollegeNoDegree => "Some College, No Degree",
            EducationLevel::AssociateDegree => "Associate Degree",
            EducationLevel::BachelorsDegree => "Bachelor's Degree",
            EducationLevel::MastersDegree => "Master's Degree",
            EducationLevel::DoctoralOrProfessionalDegree => "Doctoral or Professional Degree",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EducationLevel::ALL
            .iter()
            .copied()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown education level '{}'", s))
    }
}

/// Employment status of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Currently employed
    Active,
    /// Temporarily away
    OnLeave,
    /// Employment ended by the employer
    Terminated,
    /// Historical/offboarded record; the generator always emits this
    #[default]
    Removed,
}

/// One synthetic employee.
///
/// Invariant for generated records: `birth_date < hire_date < departure_date`
/// and the age at hire lies in `[18, 65]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier, assigned in generation order starting at 1
    pub id: u64,
    /// Sex category
    pub sex: Sex,
    /// Given name
    pub first_name: String,
    /// Middle name (distinct from the first name)
    pub middle_name: String,
    /// Family name, title case
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// First day of employment
    pub hire_date: NaiveDate,
    /// Last day of employment; `None` only for employees still active
    pub departure_date: Option<NaiveDate>,
    /// Work email address
    pub email: String,
    /// Highest completed education level
    pub education_level: EducationLevel,
    /// Placeholder position identifier
    pub position_id: u32,
    /// Placeholder branch identifier
    pub branch_id: u32,
    /// Placeholder supervisor identifier; `None` at the top of the hierarchy
    pub supervisor_id: Option<u64>,
    /// Employment status
    pub status: EmploymentStatus,
}

impl EmployeeRecord {
    /// Age in fractional years on the hire date.
    pub fn age_at_hire(&self) -> f64 {
        years_between(self.birth_date, self.hire_date)
    }

    /// Tenure in fractional years, if a departure date is set.
    pub fn tenure_years(&self) -> Option<f64> {
        self.departure_date
            .map(|departure| years_between(self.hire_date, departure))
    }

    /// True if the record was employed on `date`.
    pub fn is_employed_on(&self, date: NaiveDate) -> bool {
        self.hire_date <= date && self.departure_date.map_or(true, |d| date < d)
    }

    /// Checks the date-ordering and hire-age invariants.
    pub fn satisfies_invariants(&self, min_age: f64, max_age: f64) -> bool {
        let ordered = self.birth_date < self.hire_date
            && self.departure_date.map_or(true, |d| self.hire_date < d);
        let age = self.age_at_hire();
        ordered && age >= min_age && age <= max_age
    }
}
