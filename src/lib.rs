use serde::{Deserialize, Serialize};

pub mod departement;
pub mod error;
pub mod map;
pub mod region;

/// One record of the bundled department dataset.
#[derive(Debug, Serialize, Deserialize)]
pub struct Departement {
    pub code_departement: String,
    pub nom_departement: String,
    pub code_region: String,
    pub nom_region: String,
}

lazy_static::lazy_static! {
    /// All French departments, in the order the plotting engine lists them.
    /// Parsed once from the dataset bundled at compile time.
    pub static ref DEPARTEMENTS: Vec<Departement> =
        serde_json::from_str(include_str!("data/departements.json"))
            .expect("bundled departements.json is well-formed");
}
