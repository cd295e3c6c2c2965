//! Name reference tables.
//!
//! First names are bucketed by `(sex, birth_year)` with one alias sampler
//! per bucket. Last names are a flat list drawn uniformly.

use std::collections::BTreeMap;

use crate::rng::WorkforceRng;
use crate::sampling::AliasSampler;
use crate::types::{ReferenceDataError, Sex};

/// One first-name frequency row: `(birth_year, name, count)`.
pub type FirstNameRow = (i32, String, f64);

/// Weighted first names per `(sex, birth_year)` bucket.
#[derive(Debug, Clone)]
pub struct FirstNameTable {
    buckets: BTreeMap<(Sex, i32), AliasSampler<String>>,
    years: BTreeMap<Sex, Vec<i32>>,
}

impl FirstNameTable {
    /// Builds the table from per-sex row sets.
    ///
    /// Rows for the same `(year, name)` are summed.
    ///
    /// # Errors
    /// `ReferenceDataError::Invalid` if a sex has no rows, a count is not
    /// positive, or a bucket holds fewer than two distinct names (the
    /// middle-name draw could never differ from the first name).
    pub fn new<I>(rows_by_sex: I) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = (Sex, Vec<FirstNameRow>)>,
    {
        let mut grouped: BTreeMap<(Sex, i32), BTreeMap<String, f64>> = BTreeMap::new();
        for (sex, rows) in rows_by_sex {
            for (year, name, count) in rows {
                if !(count.is_finite() && count > 0.0) {
                    return Err(ReferenceDataError::Invalid(format!(
                        "first name {name} ({sex}, {year}) has non-positive count {count}"
                    )));
                }
                *grouped.entry((sex, year)).or_default().entry(name).or_default() += count;
            }
        }

        let mut buckets = BTreeMap::new();
        let mut years: BTreeMap<Sex, Vec<i32>> = BTreeMap::new();
        for ((sex, year), names) in grouped {
            if names.len() < 2 {
                return Err(ReferenceDataError::Invalid(format!(
                    "first-name bucket ({sex}, {year}) needs at least two distinct names"
                )));
            }
            let sampler = AliasSampler::new(names).map_err(|e| {
                ReferenceDataError::Invalid(format!("first-name bucket ({sex}, {year}): {e}"))
            })?;
            buckets.insert((sex, year), sampler);
            years.entry(sex).or_default().push(year);
        }

        for sex in Sex::ALL {
            if !years.contains_key(&sex) {
                return Err(ReferenceDataError::Invalid(format!(
                    "no first names for sex {sex}"
                )));
            }
        }

        Ok(Self { buckets, years })
    }

    /// Sampler for `(sex, birth_year)`.
    ///
    /// When the year has no data, a supported year for that sex is chosen
    /// uniformly at random instead.
    pub fn bucket(&self, sex: Sex, birth_year: i32, rng: &mut WorkforceRng) -> &AliasSampler<String> {
        let year = self.resolve_year(sex, birth_year, rng);
        &self.buckets[&(sex, year)]
    }

    /// The year whose bucket will be used for `(sex, birth_year)`.
    pub fn resolve_year(&self, sex: Sex, birth_year: i32, rng: &mut WorkforceRng) -> i32 {
        if self.buckets.contains_key(&(sex, birth_year)) {
            return birth_year;
        }
        let supported = &self.years[&sex];
        supported[rng.gen_index(supported.len())]
    }

    /// Years with data for `sex`, ascending.
    pub fn supported_years(&self, sex: Sex) -> &[i32] {
        self.years.get(&sex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of `(sex, year)` buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Flat list of last names, drawn uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastNameList {
    names: Vec<String>,
}

impl LastNameList {
    /// # Errors
    /// `ReferenceDataError::Invalid` if the list is empty or holds a blank name.
    pub fn new<I, S>(names: I) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ReferenceDataError::Invalid(
                "last-name list is empty".to_string(),
            ));
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ReferenceDataError::Invalid(
                "last-name list contains a blank entry".to_string(),
            ));
        }
        Ok(Self { names })
    }

    /// Uniform draw.
    pub fn draw(&self, rng: &mut WorkforceRng) -> &str {
        &self.names[rng.gen_index(self.names.len())]
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false after construction.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(year: i32, names: &[(&str, f64)]) -> Vec<FirstNameRow> {
        names
            .iter()
            .map(|(n, c)| (year, n.to_string(), *c))
            .collect()
    }

    fn table() -> FirstNameTable {
        FirstNameTable::new(vec![
            (Sex::Male, rows(1980, &[("Michael", 5.0), ("David", 2.0)])),
            (
                Sex::Female,
                [
                    rows(1980, &[("Jessica", 5.0), ("Ashley", 3.0)]),
                    rows(1990, &[("Emily", 1.0), ("Sarah", 1.0)]),
                ]
                .concat(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_year_is_used() {
        let t = table();
        let mut rng = WorkforceRng::from_seed(1);
        assert_eq!(t.resolve_year(Sex::Female, 1990, &mut rng), 1990);
        let bucket = t.bucket(Sex::Male, 1980, &mut rng);
        assert!(bucket.outcomes().contains(&"Michael".to_string()));
    }

    #[test]
    fn test_missing_year_falls_back_to_supported_year() {
        let t = table();
        let mut rng = WorkforceRng::from_seed(2);
        for _ in 0..50 {
            let year = t.resolve_year(Sex::Female, 1850, &mut rng);
            assert!(t.supported_years(Sex::Female).contains(&year));
        }
        assert_eq!(t.resolve_year(Sex::Male, 2050, &mut rng), 1980);
    }

    #[test]
    fn test_single_name_bucket_rejected() {
        let err = FirstNameTable::new(vec![
            (Sex::Male, rows(1980, &[("Michael", 5.0)])),
            (Sex::Female, rows(1980, &[("Jessica", 5.0), ("Ashley", 3.0)])),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("at least two distinct names"));
    }

    #[test]
    fn test_missing_sex_rejected() {
        let err =
            FirstNameTable::new(vec![(Sex::Male, rows(1980, &[("A", 1.0), ("B", 1.0)]))]).unwrap_err();
        assert!(err.to_string().contains("Female"));
    }

    #[test]
    fn test_duplicate_rows_are_summed() {
        let t = FirstNameTable::new(vec![
            (Sex::Male, rows(2000, &[("A", 1.0), ("A", 2.0), ("B", 1.0)])),
            (Sex::Female, rows(2000, &[("C", 1.0), ("D", 1.0)])),
        ])
        .unwrap();
        let mut rng = WorkforceRng::from_seed(0);
        let bucket = t.bucket(Sex::Male, 2000, &mut rng);
        assert_eq!(bucket.len(), 2);
        assert!((bucket.probability_of(0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_last_names() {
        assert!(LastNameList::new(Vec::<String>::new()).is_err());
        assert!(LastNameList::new(vec!["SMITH", " "]).is_err());

        let list = LastNameList::new(vec!["SMITH", "JONES"]).unwrap();
        let mut rng = WorkforceRng::from_seed(4);
        let name = list.draw(&mut rng);
        assert!(name == "SMITH" || name == "JONES");
    }
}
