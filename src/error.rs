//! Error taxonomy for the spec-generation pipeline.
//!
//! Every stage returns `Result<T, Error>`; errors propagate to `main` and
//! terminate the run. The one exception is `UnknownColumn`, which the
//! interactive column prompt recovers from by re-prompting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input archive could not be read or extracted.
    #[error("failed to read archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive contained no `.shp` member.
    #[error("no shapefile found in {0}")]
    NoShapefile(PathBuf),

    /// The archive contained more than one `.shp` member.
    #[error("multiple shapefiles found in {0}")]
    MultipleShapefiles(PathBuf),

    /// The shapefile itself could not be parsed.
    #[error("failed to parse shapefile: {0}")]
    Shapefile(#[from] shapefile::Error),

    /// A requested key column does not exist in the dataset.
    #[error("unknown columns: {}", .0.join(", "))]
    UnknownColumn(Vec<String>),

    /// Reprojection or dissolve failed.
    #[error("geometry error: {0}")]
    Geometry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to write spec file: {0}")]
    Csv(#[from] csv::Error),
}
