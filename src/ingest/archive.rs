//! Zip archive extraction.

use crate::error::{Error, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extracts every member of the archive into `dest` and returns the path of
/// the single `.shp` member.
///
/// Member names are sanitized against path traversal; unsafe names are
/// skipped. Fails if the archive holds zero or more than one shapefile.
pub fn extract_archive(zip_path: &Path, dest: &Path) -> Result<PathBuf> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file).map_err(|source| Error::Archive {
        path: zip_path.to_path_buf(),
        source,
    })?;

    let mut shp_path: Option<PathBuf> = None;

    for index in 0..archive.len() {
        let mut member = archive.by_index(index).map_err(|source| Error::Archive {
            path: zip_path.to_path_buf(),
            source,
        })?;

        let Some(relative) = member.enclosed_name() else {
            continue;
        };
        let out_path = dest.join(relative);

        if member.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out_file = File::create(&out_path)?;
        io::copy(&mut member, &mut out_file)?;

        if out_path.extension().is_some_and(|ext| ext == "shp") {
            if shp_path.is_some() {
                return Err(Error::MultipleShapefiles(zip_path.to_path_buf()));
            }
            shp_path = Some(out_path);
        }
    }

    shp_path.ok_or_else(|| Error::NoShapefile(zip_path.to_path_buf()))
}
