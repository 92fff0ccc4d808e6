//! Map configurations handed to the plotting engine: the base SVG
//! templates plus the per-variant lookup tables and code normalization.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{MapError, Result};
use crate::{departement, region};

/// An area code as supplied by callers, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaId {
    Number(u64),
    Text(String),
}

impl From<u64> for AreaId {
    fn from(n: u64) -> Self {
        AreaId::Number(n)
    }
}

impl From<&str> for AreaId {
    fn from(s: &str) -> Self {
        AreaId::Text(s.to_owned())
    }
}

impl From<String> for AreaId {
    fn from(s: String) -> Self {
        AreaId::Text(s)
    }
}

/// Normalizes an area code into a table/SVG lookup key. Numbers are
/// zero-padded to two characters (1 -> "01", 971 stays "971"); text codes
/// pass through unchanged, which covers "2A" and "2B".
pub fn adapt_code(id: &AreaId) -> String {
    match id {
        AreaId::Number(n) => format!("{:02}", n),
        AreaId::Text(s) => s.clone(),
    }
}

const DEPARTMENTS_SVG: &str = "fr.departments.svg";
const REGIONS_SVG: &str = "fr.regions.svg";

/// The two bundled base maps, read once at startup and passed through to
/// the plotting engine unmodified.
#[derive(Debug, Clone)]
pub struct SvgTemplates {
    pub departments: String,
    pub regions: String,
}

impl SvgTemplates {
    /// Reads both templates from `dir` as UTF-8. Either file missing or
    /// unreadable fails the whole load; there is no partial mode.
    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SvgTemplates {
            departments: read_template(&dir.join(DEPARTMENTS_SVG))?,
            regions: read_template(&dir.join(REGIONS_SVG))?,
        })
    }

    /// Reads the templates bundled with this crate under `assets/`.
    pub fn load() -> Result<Self> {
        Self::load_from(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
    }
}

fn read_template(path: &Path) -> Result<String> {
    let svg = fs::read_to_string(path).map_err(|source| MapError::TemplateRead {
        path: path.to_owned(),
        source,
    })?;
    debug!("loaded map template {} ({} bytes)", path.display(), svg.len());
    Ok(svg)
}

/// Everything the generic map-plotting routine needs for one map variant.
///
/// `adapt_code` is the normalization hook the engine calls before every
/// area lookup; each variant supplies its own as plain configuration.
pub struct MapConfig {
    pub kind: &'static str,
    pub area_prefix: &'static str,
    pub x_labels: Vec<&'static str>,
    pub area_names: &'static HashMap<&'static str, &'static str>,
    pub svg_map: String,
    pub adapt_code: fn(&AreaId) -> String,
}

/// French department map.
pub fn departements(templates: &SvgTemplates) -> MapConfig {
    MapConfig {
        kind: "departement",
        area_prefix: "z",
        x_labels: departement::codes(),
        area_names: departement::names(),
        svg_map: templates.departments.clone(),
        adapt_code,
    }
}

/// French region map.
pub fn regions(templates: &SvgTemplates) -> MapConfig {
    MapConfig {
        kind: "region",
        area_prefix: "a",
        x_labels: region::codes(),
        area_names: region::names(),
        svg_map: templates.regions.clone(),
        adapt_code,
    }
}
