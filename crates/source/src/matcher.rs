//! Matching requested metadata names against on-disk artifacts.

use std::path::{Path, PathBuf};

/// Immediate children of `folder` that correspond to the requested `name`.
///
/// A child matches when its base name up to the first dot equals the first
/// dot segment of `name`, so `Foo.cls` and `Foo.cls-meta.xml` both answer
/// for `Foo`, and `My_Type.My_Object.md` answers for `My_Type.My_Object`.
/// Used to validate every requested name before any packaging work begins;
/// an unreadable folder yields no matches.
pub fn exists(folder: &Path, name: &str) -> Vec<PathBuf> {
    let want = name.split('.').next().unwrap_or(name);
    let mut matches = Vec::new();
    let Ok(entries) = std::fs::read_dir(folder) else {
        return matches;
    };
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let base = file_name.to_string_lossy();
        if base.split('.').next() == Some(want) {
            matches.push(entry.path());
        }
    }
    matches
}

/// Whether `filename` denotes the artifact named `name`.
///
/// One trailing extension is stripped, along with a `-meta.xml` sidecar
/// suffix when it follows an extension, and the remainder is compared
/// case-sensitively. `Foo.cls` and `Foo.cls-meta.xml` both match `Foo`; for
/// custom metadata records like `My_Type.My_Object.md` only the final
/// extension goes, so the dotted logical name survives.
pub fn matches_filename(filename: &str, name: &str) -> bool {
    stem(filename) == name
}

fn stem(filename: &str) -> &str {
    if let Some(core) = filename.strip_suffix("-meta.xml") {
        // The sidecar suffix only counts when an extension precedes it, so
        // a bare "Foo-meta.xml" keeps "Foo-meta" as its stem.
        if let Some(idx) = core.rfind('.') {
            if idx + 1 < core.len() {
                return &core[..idx];
            }
        }
    }
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() => &filename[..idx],
        _ => filename,
    }
}
