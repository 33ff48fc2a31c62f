//! Repacking unpacked resource directories into `.resource` archives.

use crate::error::{Error, ErrorKind, Result};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// OS housekeeping files never belong in an archive or a bundle listing.
pub fn is_housekeeping(name: &str) -> bool {
    name.eq_ignore_ascii_case(".ds_store")
}

/// Every regular, non-housekeeping file under `dir`, in sorted order.
pub fn resource_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_housekeeping(&entry.file_name().to_string_lossy()) {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Pack the directory at `path` into a zip written next to it as
/// `<path>.resource`, overwriting whatever is already there.
///
/// Entry names are `prefix` joined with each file's path relative to
/// `path`; directories are implied by entry prefixes rather than stored.
/// Any read or entry-creation failure aborts the whole pack. Returns the
/// path of the archive written.
pub fn pack_resource(path: &Path, prefix: &str) -> Result<PathBuf> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default();

    for file in resource_files(path)? {
        let relative = file.strip_prefix(path).map_err(|e| {
            Error::with_source(ErrorKind::Archive("entry escapes resource root".to_string()), e)
        })?;
        let entry_name = entry_name(prefix, relative);
        let bytes = fs::read(&file)?;
        zip.start_file(entry_name, options)?;
        zip.write_all(&bytes)?;
    }

    zip.finish()?;

    let mut destination = path.as_os_str().to_os_string();
    destination.push(".resource");
    let destination = PathBuf::from(destination);
    fs::write(&destination, buffer.get_ref())?;
    debug!(archive = %destination.display(), "repacked resource directory");
    Ok(destination)
}

/// Zip entry name for `relative`, forward-slash separated regardless of
/// platform.
fn entry_name(prefix: &str, relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if prefix.is_empty() {
        joined
    } else {
        format!("{}/{}", prefix, joined)
    }
}
