//! Aggregations over loaded user records.
//!
//! Every function borrows its input and performs no I/O. Grouped counts come
//! back as `BTreeMap`s so reports list keys in ascending order.

use std::{cmp::Reverse, collections::BTreeMap};

use itertools::Itertools;

use crate::{record::UserRecord, region::region_for_country};

/// Records whose parsed age is at least `threshold`, in input order.
pub fn filter_by_minimum_age(records: &[UserRecord], threshold: i32) -> Vec<&UserRecord> {
    records
        .iter()
        .filter(|user| user.parsed_age() >= threshold)
        .collect()
}

pub fn count_by_country(records: &[UserRecord]) -> BTreeMap<&str, usize> {
    records
        .iter()
        .map(|user| user.country.as_str())
        .counts()
        .into_iter()
        .collect()
}

/// Mean of the non-negative parsed ages, rounded to one decimal place.
///
/// Returns `0.0` when no record carries a usable age.
pub fn average_age(records: &[UserRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .map(UserRecord::parsed_age)
        .filter(|age| *age >= 0)
        .fold((0i64, 0usize), |(sum, count), age| {
            (sum + i64::from(age), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    (mean * 10.0).round() / 10.0
}

/// The `n` oldest records. Ties keep input order; unparseable ages sort last.
pub fn top_n_oldest(records: &[UserRecord], n: usize) -> Vec<&UserRecord> {
    let mut sorted = records.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|user| Reverse(user.parsed_age()));
    sorted.truncate(n);
    sorted
}

pub fn count_by_region(records: &[UserRecord]) -> BTreeMap<&'static str, usize> {
    records
        .iter()
        .map(|user| region_for_country(&user.country).as_str())
        .counts()
        .into_iter()
        .collect()
}
