//! Compact reference tables compiled into the binary.
//!
//! - Population: US resident population in thousands, 1930-2100
//!   (census estimates through 2020, interpolated projections after)
//! - Seasonality: monthly hires (thousands) with their year-to-year deviation
//! - First names: top names per decade, repeated for every year of the decade
//! - Last names: most common US surnames, upper case as published
//! - Education: share of the adult population by highest level completed

use super::education::EducationWeights;
use super::names::{FirstNameRow, FirstNameTable, LastNameList};
use super::population::{PopulationRow, PopulationSeries};
use super::seasonality::{HiringSeasonality, MonthlyHiring};
use crate::types::{ReferenceDataError, Sex};

const POPULATION_THOUSANDS: &[(i32, u64)] = &[
    (1930, 123200), (1931, 124090), (1932, 124980), (1933, 125870), (1934, 126760),
    (1935, 127650), (1936, 128540), (1937, 129430), (1938, 130320), (1939, 131210),
    (1940, 132100), (1941, 134120), (1942, 136140), (1943, 138160), (1944, 140180),
    (1945, 142200), (1946, 144220), (1947, 146240), (1948, 148260), (1949, 150280),
    (1950, 152300), (1951, 155140), (1952, 157980), (1953, 160820), (1954, 163660),
    (1955, 166500), (1956, 169340), (1957, 172180), (1958, 175020), (1959, 177860),
    (1960, 180700), (1961, 183140), (1962, 185580), (1963, 188020), (1964, 190460),
    (1965, 192900), (1966, 195340), (1967, 197780), (1968, 200220), (1969, 202660),
    (1970, 205100), (1971, 207310), (1972, 209520), (1973, 211730), (1974, 213940),
    (1975, 216150), (1976, 218360), (1977, 220570), (1978, 222780), (1979, 224990),
    (1980, 227200), (1981, 229440), (1982, 231680), (1983, 233920), (1984, 236160),
    (1985, 238400), (1986, 240640), (1987, 242880), (1988, 245120), (1989, 247360),
    (1990, 249600), (1991, 252860), (1992, 256120), (1993, 259380), (1994, 262640),
    (1995, 265900), (1996, 269160), (1997, 272420), (1998, 275680), (1999, 278940),
    (2000, 282200), (2001, 284910), (2002, 287620), (2003, 290330), (2004, 293040),
    (2005, 295750), (2006, 298460), (2007, 301170), (2008, 303880), (2009, 306590),
    (2010, 309300), (2011, 311520), (2012, 313740), (2013, 315960), (2014, 318180),
    (2015, 320400), (2016, 322620), (2017, 324840), (2018, 327060), (2019, 329280),
    (2020, 331500), (2021, 333220), (2022, 334940), (2023, 336660), (2024, 338380),
    (2025, 340100), (2026, 341880), (2027, 343660), (2028, 345440), (2029, 347220),
    (2030, 349000), (2031, 350400), (2032, 351800), (2033, 353200), (2034, 354600),
    (2035, 356000), (2036, 357400), (2037, 358800), (2038, 360200), (2039, 361600),
    (2040, 363000), (2041, 364300), (2042, 365600), (2043, 366900), (2044, 368200),
    (2045, 369500), (2046, 370800), (2047, 372100), (2048, 373400), (2049, 374700),
    (2050, 376000), (2051, 377000), (2052, 378000), (2053, 379000), (2054, 380000),
    (2055, 381000), (2056, 382000), (2057, 383000), (2058, 384000), (2059, 385000),
    (2060, 386000), (2061, 386800), (2062, 387600), (2063, 388400), (2064, 389200),
    (2065, 390000), (2066, 390800), (2067, 391600), (2068, 392400), (2069, 393200),
    (2070, 394000), (2071, 394600), (2072, 395200), (2073, 395800), (2074, 396400),
    (2075, 397000), (2076, 397600), (2077, 398200), (2078, 398800), (2079, 399400),
    (2080, 400000), (2081, 400400), (2082, 400800), (2083, 401200), (2084, 401600),
    (2085, 402000), (2086, 402400), (2087, 402800), (2088, 403200), (2089, 403600),
    (2090, 404000), (2091, 404300), (2092, 404600), (2093, 404900), (2094, 405200),
    (2095, 405500), (2096, 405800), (2097, 406100), (2098, 406400), (2099, 406700),
    (2100, 407000),
];

/// `(average_hires, stdev_hires)` for January..December.
const MONTHLY_HIRES: [(f64, f64); 12] = [
    (6100.0, 450.0),
    (5600.0, 420.0),
    (6000.0, 430.0),
    (6000.0, 440.0),
    (6300.0, 460.0),
    (6500.0, 470.0),
    (6100.0, 440.0),
    (6000.0, 430.0),
    (5700.0, 410.0),
    (5900.0, 420.0),
    (5500.0, 400.0),
    (4800.0, 380.0),
];

type DecadeNames = (i32, &'static [(&'static str, u32)]);

const MALE_NAMES: &[DecadeNames] = &[
    (1930, &[("Robert", 590), ("James", 530), ("John", 500), ("William", 480), ("Richard", 360), ("Charles", 350), ("Donald", 300), ("George", 260), ("Thomas", 250), ("Joseph", 230), ("David", 200), ("Edward", 180)]),
    (1940, &[("James", 795), ("Robert", 691), ("John", 656), ("William", 544), ("Richard", 430), ("David", 422), ("Charles", 305), ("Thomas", 293), ("Michael", 285), ("Ronald", 236), ("Larry", 230), ("Donald", 225)]),
    (1950, &[("James", 843), ("Michael", 839), ("Robert", 833), ("John", 800), ("David", 740), ("William", 575), ("Richard", 455), ("Thomas", 435), ("Mark", 324), ("Charles", 293), ("Steven", 288), ("Gary", 286)]),
    (1960, &[("Michael", 834), ("David", 739), ("John", 711), ("James", 696), ("Robert", 638), ("Mark", 548), ("William", 414), ("Richard", 393), ("Thomas", 358), ("Jeffrey", 325), ("Steven", 306), ("Joseph", 300)]),
    (1970, &[("Michael", 858), ("Christopher", 617), ("Jason", 529), ("David", 486), ("James", 473), ("John", 460), ("Robert", 452), ("Brian", 381), ("William", 347), ("Matthew", 345), ("Joseph", 308), ("Daniel", 303)]),
    (1980, &[("Michael", 663), ("Christopher", 555), ("Matthew", 458), ("Joshua", 399), ("David", 380), ("James", 370), ("Daniel", 355), ("Robert", 347), ("John", 338), ("Joseph", 299), ("Jason", 297), ("Justin", 290)]),
    (1990, &[("Michael", 462), ("Christopher", 360), ("Matthew", 351), ("Joshua", 329), ("Jacob", 299), ("Nicholas", 275), ("Andrew", 273), ("Daniel", 271), ("Tyler", 262), ("Joseph", 260), ("Brandon", 251), ("David", 250)]),
    (2000, &[("Jacob", 273), ("Michael", 250), ("Joshua", 231), ("Matthew", 221), ("Daniel", 203), ("Christopher", 202), ("Andrew", 199), ("Ethan", 195), ("Joseph", 191), ("William", 189), ("Anthony", 186), ("David", 178)]),
    (2010, &[("Noah", 182), ("Liam", 180), ("Jacob", 167), ("William", 164), ("Mason", 163), ("Ethan", 150), ("Michael", 148), ("Alexander", 146), ("James", 143), ("Elijah", 138), ("Benjamin", 135), ("Daniel", 133)]),
];

const FEMALE_NAMES: &[DecadeNames] = &[
    (1930, &[("Mary", 572), ("Betty", 301), ("Dorothy", 267), ("Helen", 188), ("Barbara", 187), ("Margaret", 184), ("Patricia", 180), ("Joan", 145), ("Shirley", 145), ("Ruth", 140), ("Doris", 130), ("Virginia", 120)]),
    (1940, &[("Mary", 640), ("Patricia", 461), ("Linda", 452), ("Barbara", 420), ("Susan", 338), ("Carol", 266), ("Nancy", 260), ("Judith", 255), ("Betty", 248), ("Sandra", 217), ("Sharon", 201), ("Carolyn", 170)]),
    (1950, &[("Mary", 627), ("Linda", 403), ("Susan", 388), ("Patricia", 383), ("Deborah", 366), ("Barbara", 350), ("Karen", 334), ("Debra", 307), ("Donna", 287), ("Cynthia", 274), ("Sandra", 269), ("Nancy", 265)]),
    (1960, &[("Lisa", 494), ("Mary", 477), ("Susan", 420), ("Karen", 396), ("Kimberly", 382), ("Patricia", 364), ("Linda", 357), ("Donna", 348), ("Michelle", 292), ("Cynthia", 288), ("Sandra", 254), ("Deborah", 250)]),
    (1970, &[("Jennifer", 581), ("Melissa", 290), ("Kimberly", 275), ("Amy", 268), ("Angela", 255), ("Michelle", 254), ("Lisa", 252), ("Heather", 251), ("Jessica", 244), ("Stephanie", 239), ("Nicole", 213), ("Elizabeth", 200)]),
    (1980, &[("Jessica", 469), ("Jennifer", 440), ("Ashley", 389), ("Amanda", 369), ("Sarah", 307), ("Stephanie", 290), ("Melissa", 276), ("Nicole", 276), ("Elizabeth", 262), ("Heather", 255), ("Tiffany", 215), ("Michelle", 214)]),
    (1990, &[("Jessica", 303), ("Ashley", 301), ("Emily", 237), ("Sarah", 224), ("Samantha", 224), ("Amanda", 190), ("Brittany", 190), ("Elizabeth", 178), ("Taylor", 176), ("Megan", 160), ("Hannah", 158), ("Kayla", 155)]),
    (2000, &[("Emily", 223), ("Madison", 193), ("Emma", 181), ("Olivia", 156), ("Hannah", 155), ("Abigail", 150), ("Isabella", 149), ("Samantha", 131), ("Elizabeth", 120), ("Ashley", 119), ("Alexis", 118), ("Sarah", 117)]),
    (2010, &[("Emma", 192), ("Olivia", 181), ("Sophia", 176), ("Isabella", 157), ("Ava", 156), ("Mia", 126), ("Abigail", 113), ("Emily", 112), ("Charlotte", 108), ("Madison", 97), ("Elizabeth", 96), ("Amelia", 95)]),
];

const LAST_NAMES: &[&str] = &[
    "SMITH", "JOHNSON", "WILLIAMS", "BROWN", "JONES", "GARCIA", "MILLER", "DAVIS", "RODRIGUEZ",
    "MARTINEZ", "HERNANDEZ", "LOPEZ", "GONZALEZ", "WILSON", "ANDERSON", "THOMAS", "TAYLOR",
    "MOORE", "JACKSON", "MARTIN", "LEE", "PEREZ", "THOMPSON", "WHITE", "HARRIS", "SANCHEZ",
    "CLARK", "RAMIREZ", "LEWIS", "ROBINSON", "WALKER", "YOUNG", "ALLEN", "KING", "WRIGHT",
    "SCOTT", "TORRES", "NGUYEN", "HILL", "FLORES", "GREEN", "ADAMS", "NELSON", "BAKER", "HALL",
    "RIVERA", "CAMPBELL", "MITCHELL", "CARTER", "ROBERTS",
];

/// Percent of adults 25+ by highest level, lowest first.
const EDUCATION_SHARES: [f64; 7] = [8.9, 27.9, 14.9, 10.5, 23.0, 10.7, 4.1];

pub(super) fn population() -> Result<PopulationSeries, ReferenceDataError> {
    PopulationSeries::new(
        POPULATION_THOUSANDS
            .iter()
            .map(|&(year, population)| PopulationRow { year, population }),
    )
}

pub(super) fn seasonality() -> Result<HiringSeasonality, ReferenceDataError> {
    HiringSeasonality::new(MONTHLY_HIRES.iter().enumerate().map(|(i, &(avg, sd))| {
        MonthlyHiring {
            month: i as u32 + 1,
            average_hires: avg,
            stdev_hires: sd,
        }
    }))
}

pub(super) fn first_name_rows(sex: Sex) -> Vec<FirstNameRow> {
    let decades = match sex {
        Sex::Male => MALE_NAMES,
        Sex::Female => FEMALE_NAMES,
    };
    decades
        .iter()
        .flat_map(|&(decade, names)| {
            (decade..decade + 10).flat_map(move |year| {
                names
                    .iter()
                    .map(move |&(name, count)| (year, name.to_string(), count as f64))
            })
        })
        .collect()
}

pub(super) fn first_names() -> Result<FirstNameTable, ReferenceDataError> {
    FirstNameTable::new(Sex::ALL.iter().map(|&sex| (sex, first_name_rows(sex))))
}

pub(super) fn last_names() -> Result<LastNameList, ReferenceDataError> {
    LastNameList::new(LAST_NAMES.iter().copied())
}

pub(super) fn education() -> Result<EducationWeights, ReferenceDataError> {
    EducationWeights::new(EDUCATION_SHARES)
}
