//! Integration tests for module exports.
//!
//! Verifies that the public modules and types are reachable via absolute
//! paths and work together the way downstream crates use them.

use chrono::NaiveDate;

#[test]
fn test_types_module_exports() {
    use workforce_core::types::{
        EducationLevel, EmployeeRecord, EmploymentStatus, Sex, WorkforceError,
    };

    let record = EmployeeRecord {
        id: 1,
        sex: Sex::Female,
        first_name: "Ada".to_string(),
        middle_name: "Grace".to_string(),
        last_name: "Lovelace".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1980, 3, 1).unwrap(),
        hire_date: NaiveDate::from_ymd_opt(2005, 6, 6).unwrap(),
        departure_date: NaiveDate::from_ymd_opt(2010, 1, 4),
        email: "ada.g.lovelace@company.com".to_string(),
        education_level: EducationLevel::MastersDegree,
        position_id: 3,
        branch_id: 7,
        supervisor_id: None,
        status: EmploymentStatus::Removed,
    };
    assert!(record.satisfies_invariants(18.0, 65.0));

    let err: WorkforceError = WorkforceError::invalid_request("start year after end year");
    assert!(err.to_string().starts_with("Invalid request"));
}

#[test]
fn test_time_module_exports() {
    use workforce_core::types::time::{first_monday_of_year, last_business_day_before};

    let monday = first_monday_of_year(2024).unwrap();
    assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    // 2000-01-01 is a Saturday; the prior business day is Friday 1999-12-31.
    let anchor = last_business_day_before(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    assert_eq!(anchor, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
}

#[test]
fn test_reference_and_sampling_exports() {
    use workforce_core::reference::ReferenceData;
    use workforce_core::rng::WorkforceRng;
    use workforce_core::types::Sex;

    let data = ReferenceData::builtin().unwrap();
    let mut rng = WorkforceRng::from_seed(2024);

    let bucket = data.first_names.bucket(Sex::Male, 1975, &mut rng);
    let name = bucket.draw(&mut rng);
    assert!(bucket.outcomes().contains(name));

    assert!(!data.last_names.draw(&mut rng).is_empty());
    assert!(data.seasonality.mean_multiplier(6) > data.seasonality.mean_multiplier(12));
}
