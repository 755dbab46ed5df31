//! Dataset ingest: archive extraction, shapefile parsing, and hooks.
//!
//! The archive is extracted into a scoped temporary directory that is
//! deleted as soon as the shapefile is loaded into memory, whether or not
//! parsing succeeded.

mod archive;
mod hooks;
mod reader;

pub use archive::extract_archive;
pub use hooks::{HookRegistry, Phase};
pub use reader::read_shapefile;

use crate::error::Result;
use crate::record::RecordSet;
use log::info;
use std::path::Path;

/// Loads a zipped shapefile dataset into a record set.
pub fn load_dataset(zip_path: &Path) -> Result<RecordSet> {
    let tmp = tempfile::tempdir()?;

    info!("    Extracting shapefile {}...", zip_path.display());
    let shp_path = extract_archive(zip_path, tmp.path())?;

    info!("    Reading shapefile...");
    let set = read_shapefile(&shp_path)?;

    // TempDir cleans up on drop, including on the error paths above.
    drop(tmp);
    Ok(set)
}
