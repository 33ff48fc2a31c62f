//! Locating the folder that holds a requested metadata type.

use crate::sniff;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// The bundle-style metadata type: its members are per-item sub-folders,
/// each holding several typed definition files.
pub const BUNDLE_TYPE: &str = "AuraDefinitionBundle";

/// Traversal shape of a metadata type, selected once before resolution
/// begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    /// Members live in per-item sub-folders; the type folder is the
    /// umbrella directory two levels above a definition file.
    Bundle,
    /// Definitions sit directly inside the type folder.
    Simple,
}

impl MetadataKind {
    pub fn of(mdtype: &str) -> Self {
        if mdtype == BUNDLE_TYPE {
            MetadataKind::Bundle
        } else {
            MetadataKind::Simple
        }
    }
}

/// Find the folder under `root` whose definition files declare `mdtype` as
/// their root element.
///
/// Every file under `root` is sniffed in depth-first order; the first match
/// wins and the walk stops there. If several disjoint folders declare the
/// same type, the one reached first in traversal order is used. Returns
/// `None` when no file anywhere under `root` matches, which callers must
/// treat as "type not found".
pub fn find_type_folder(root: &Path, mdtype: &str) -> Option<PathBuf> {
    let kind = MetadataKind::of(mdtype);
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if sniff::root_element_of_file(entry.path()).as_deref() != Some(mdtype) {
            continue;
        }
        let folder = match kind {
            // The umbrella folder that contains every bundle item.
            MetadataKind::Bundle => entry.path().parent()?.parent()?,
            MetadataKind::Simple => entry.path().parent()?,
        };
        debug!(mdtype, folder = %folder.display(), "resolved metadata type folder");
        return Some(folder.to_path_buf());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_find_simple_type_folder() {
        let root = tempfile::tempdir().unwrap();
        write(
            &root.path().join("src/classes/Foo.cls"),
            "public class Foo {}",
        );
        write(
            &root.path().join("src/classes/Foo.cls-meta.xml"),
            r#"<?xml version="1.0"?><ApexClass xmlns="urn:metadata"/>"#,
        );

        let folder = find_type_folder(root.path(), "ApexClass").unwrap();
        assert_eq!(folder, root.path().join("src/classes"));
    }

    #[test]
    fn test_find_bundle_type_folder_is_grandparent() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("src/aura/Widget/Widget.cmp"), "<aura:component/>");
        write(
            &root.path().join("src/aura/Widget/Widget.cmp-meta.xml"),
            r#"<AuraDefinitionBundle xmlns="urn:metadata"/>"#,
        );

        let folder = find_type_folder(root.path(), "AuraDefinitionBundle").unwrap();
        assert_eq!(folder, root.path().join("src/aura"));
    }

    #[test]
    fn test_find_type_folder_absent_is_none() {
        let root = tempfile::tempdir().unwrap();
        write(
            &root.path().join("src/pages/Home.page-meta.xml"),
            r#"<ApexPage xmlns="urn:metadata"/>"#,
        );

        assert_eq!(find_type_folder(root.path(), "ApexClass"), None);
    }

    #[test]
    fn test_metadata_kind_dispatch() {
        assert_eq!(MetadataKind::of("AuraDefinitionBundle"), MetadataKind::Bundle);
        assert_eq!(MetadataKind::of("ApexClass"), MetadataKind::Simple);
        assert_eq!(MetadataKind::of("StaticResource"), MetadataKind::Simple);
    }
}
