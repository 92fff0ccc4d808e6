//! Region table and the department-to-region aggregation helper.

use std::collections::HashMap;
use std::ops::Add;

use lazy_static::lazy_static;

use crate::departement;
use crate::error::{MapError, Result};

/// Region code/name pairs, in the order the plotting engine lists them:
/// the 13 metropolitan regions first, then the 5 overseas ones.
pub static REGIONS: &[(&str, &str)] = &[
    ("11", "Île-de-France"),
    ("24", "Centre-Val de Loire"),
    ("27", "Bourgogne-Franche-Comté"),
    ("28", "Normandie"),
    ("32", "Hauts-de-France"),
    ("44", "Grand Est"),
    ("52", "Pays de la Loire"),
    ("53", "Bretagne"),
    ("75", "Nouvelle-Aquitaine"),
    ("76", "Occitanie"),
    ("84", "Auvergne-Rhône-Alpes"),
    ("93", "Provence-Alpes-Côte d'Azur"),
    ("94", "Corse"),
    ("01", "Guadeloupe"),
    ("02", "Martinique"),
    ("03", "Guyane"),
    ("04", "Réunion"),
    ("06", "Mayotte"),
];

lazy_static! {
    static ref NAMES: HashMap<&'static str, &'static str> = REGIONS.iter().copied().collect();
}

/// Region codes in table order.
pub fn codes() -> Vec<&'static str> {
    REGIONS.iter().map(|(code, _)| *code).collect()
}

/// Region name table, keyed by code.
pub fn names() -> &'static HashMap<&'static str, &'static str> {
    &NAMES
}

pub fn name_of(code: &str) -> Option<&'static str> {
    NAMES.get(code).copied()
}

/// Rolls per-department values up to per-region totals.
///
/// Accepts any iterable of `(department_code, value)` pairs, so both a
/// `HashMap` (unique keys) and a plain pair sequence (duplicate codes
/// allowed, summed) work. Only regions with at least one contribution
/// appear in the output; the ordering of the result is unspecified.
///
/// Fails on the first code absent from the department table, returning no
/// partial totals. Callers wanting to skip bad codes must filter first.
pub fn aggregate_regions<I, K, V>(values: I) -> Result<Vec<(&'static str, V)>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Add<Output = V> + Copy,
{
    let mut totals: Vec<(&'static str, V)> = Vec::new();
    for (code, value) in values {
        let code = code.as_ref();
        let region = departement::region_of(code)
            .ok_or_else(|| MapError::UnknownDepartement(code.to_owned()))?;
        match totals.iter_mut().find(|(r, _)| *r == region) {
            Some(entry) => entry.1 = entry.1 + value,
            None => totals.push((region, value)),
        }
    }
    Ok(totals)
}
