//! Department-level lookups, derived from the bundled dataset in
//! `data/departements.json`. All accessors hand out `&'static` data; the
//! tables are built on first access and never change afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::DEPARTEMENTS;

lazy_static! {
    static ref NAMES: HashMap<&'static str, &'static str> = DEPARTEMENTS
        .iter()
        .map(|d| (d.code_departement.as_str(), d.nom_departement.as_str()))
        .collect();
    static ref REGION_BY_DEPARTEMENT: HashMap<&'static str, &'static str> = DEPARTEMENTS
        .iter()
        .map(|d| (d.code_departement.as_str(), d.code_region.as_str()))
        .collect();
}

/// Department codes in dataset order ("01" .. "95" with "2A"/"2B", then
/// the overseas codes "971" .. "976").
pub fn codes() -> Vec<&'static str> {
    DEPARTEMENTS
        .iter()
        .map(|d| d.code_departement.as_str())
        .collect()
}

/// Department name table, keyed by code.
pub fn names() -> &'static HashMap<&'static str, &'static str> {
    &NAMES
}

pub fn name_of(code: &str) -> Option<&'static str> {
    NAMES.get(code).copied()
}

/// Region code a department belongs to. Total over the department table:
/// `Some` for every code returned by [`codes`].
pub fn region_of(code: &str) -> Option<&'static str> {
    REGION_BY_DEPARTEMENT.get(code).copied()
}
