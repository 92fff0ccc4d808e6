use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    /// The aggregation input referenced a code absent from the
    /// department table.
    #[error("unknown departement code '{0}'")]
    UnknownDepartement(String),

    /// A bundled map template could not be read at initialization.
    #[error("failed to read map template {}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
