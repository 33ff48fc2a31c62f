//! Push resolution and orchestration.
//!
//! Resolution is validate-then-act: the requested type must resolve to a
//! folder and every requested name must resolve to an artifact before any
//! packaging or network work begins. Everything here is synchronous and
//! single-threaded; traversal order is what makes first-match locator
//! semantics deterministic.

use crate::collab::{DeployTransport, NotificationSink, PackageBuilder};
use crate::error::{Error, ErrorKind, Result};
use crate::options::DeployOptions;
use crate::report::{interpret, PushReport};
use mdpush_source::{
    exists, find_type_folder, is_housekeeping, matches_filename, pack_resource, resource_files,
    MetadataKind,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-invocation state threaded through resolution and reporting.
///
/// Created once per push and never reinitialized mid-operation.
#[derive(Debug, Default)]
pub struct PushContext {
    /// Logical full name of each submitted component, keyed back to the
    /// local file it came from; consulted only when rendering failures.
    pub name_paths: HashMap<String, PathBuf>,
    /// Whether failures are reported by logical name rather than local
    /// path.
    pub by_name: bool,
}

impl PushContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What the resolution phase decided to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Bundle items, each deployed as an independent package. Name
    /// filtering does not apply; every item is pushed.
    Bundles(Vec<PathBuf>),
    /// Matched plain files plus repacked `.resource` archives, deployed as
    /// one package.
    Files(Vec<PathBuf>),
}

/// Resolve `mdtype` and `names` against the source tree at `root`.
///
/// Each step is a hard precondition for the next: the type folder must
/// exist, then every requested name must exist (misses are aggregated into
/// one error naming all of them), and only then is the folder traversed.
/// Unpacked resource directories are repacked on the way through, so this
/// writes `.resource` files as a side effect.
pub fn resolve_by_type(root: &Path, mdtype: &str, names: &[String]) -> Result<Selection> {
    if !root.is_dir() {
        return Err(Error::new(ErrorKind::NoSourceDir));
    }
    let folder = find_type_folder(root, mdtype)
        .ok_or_else(|| Error::new(ErrorKind::TypeNotFound(mdtype.to_string())))?;

    validate_names(&folder, names)?;

    match MetadataKind::of(mdtype) {
        MetadataKind::Bundle => bundle_items(&folder).map(Selection::Bundles),
        MetadataKind::Simple => simple_selection(&folder, names).map(Selection::Files),
    }
}

/// Offer explicit file paths to the package builder, bypassing type and
/// name resolution.
///
/// Every accepted file records its logical name in the context for failure
/// rendering. Rejected paths are collected across the whole list; any
/// rejection aborts the push with the aggregated set, never a partial one.
pub fn resolve_by_paths<B: PackageBuilder>(
    builder: &mut B,
    paths: &[PathBuf],
    ctx: &mut PushContext,
) -> Result<()> {
    let mut rejected = Vec::new();
    for path in paths {
        match builder.add_file(path) {
            Ok(name) => {
                ctx.name_paths.insert(name, path.clone());
            }
            Err(rejection) => {
                debug!(%rejection, "package builder rejected file");
                rejected.push(rejection.path);
            }
        }
    }
    if rejected.is_empty() {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::RejectedPaths(rejected)))
    }
}

/// Push every artifact of `mdtype` found under `root`, optionally filtered
/// by `names`.
///
/// The full push-by-type control flow: resolve, package, deploy, interpret,
/// notify. Bundle items each get a fresh builder and their own deploy
/// call; everything else travels in one package.
pub fn push_by_type<B, T, N>(
    root: &Path,
    mdtype: &str,
    names: &[String],
    options: &DeployOptions,
    mut make_builder: impl FnMut() -> B,
    transport: &T,
    notifier: &N,
) -> Result<PushReport>
where
    B: PackageBuilder,
    T: DeployTransport<Payload = B::Payload>,
    N: NotificationSink,
{
    let mut ctx = PushContext::new();
    ctx.by_name = true;

    let report = match resolve_by_type(root, mdtype, names)? {
        Selection::Bundles(items) => {
            let mut report = PushReport::empty();
            for item in items {
                debug!(bundle = %item.display(), "deploying bundle item");
                let files = resource_files(&item)?;
                let mut builder = make_builder();
                resolve_by_paths(&mut builder, &files, &mut ctx)?;
                let details = transport.deploy(builder.build_payload(), options)?;
                let item_report = interpret(&details, &ctx);
                report.rendered.push_str(&item_report.rendered);
                report.verdict = report.verdict.merge(item_report.verdict);
            }
            report
        }
        Selection::Files(paths) => {
            let mut builder = make_builder();
            resolve_by_paths(&mut builder, &paths, &mut ctx)?;
            let details = transport.deploy(builder.build_payload(), options)?;
            interpret(&details, &ctx)
        }
    };

    notifier.notify("push", report.verdict.is_success());
    Ok(report)
}

/// Push explicit file paths as one package.
pub fn push_by_paths<B, T, N>(
    paths: &[PathBuf],
    options: &DeployOptions,
    builder: &mut B,
    transport: &T,
    notifier: &N,
) -> Result<PushReport>
where
    B: PackageBuilder,
    T: DeployTransport<Payload = B::Payload>,
    N: NotificationSink,
{
    let mut ctx = PushContext::new();
    resolve_by_paths(builder, paths, &mut ctx)?;
    let details = transport.deploy(builder.build_payload(), options)?;
    let report = interpret(&details, &ctx);
    notifier.notify("push", report.verdict.is_success());
    Ok(report)
}

/// Submit a previously packed archive file as-is.
///
/// The archive may have been produced by an earlier pack, or retrieved
/// from another environment altogether.
pub fn push_archive<T, N>(
    archive_path: &Path,
    options: &DeployOptions,
    transport: &T,
    notifier: &N,
) -> Result<PushReport>
where
    T: DeployTransport,
    N: NotificationSink,
{
    let bytes = fs::read(archive_path)?;
    let details = transport.deploy_archive(&bytes, options)?;
    let report = interpret(&details, &PushContext::new());
    notifier.notify("push", report.verdict.is_success());
    Ok(report)
}

fn validate_names(folder: &Path, names: &[String]) -> Result<()> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| exists(folder, name).is_empty())
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::UnknownNames {
            folder: folder.to_path_buf(),
            names: missing,
        }))
    }
}

/// Immediate sub-directories of the bundle umbrella folder, one packaging
/// unit each.
fn bundle_items(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut items = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if is_housekeeping(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            items.push(entry.path());
        }
    }
    items.sort();
    Ok(items)
}

/// Walk the type folder one level deep.
///
/// Directories at this level are unpacked resources and get repacked;
/// files are selected by name (or unconditionally when `names` is empty).
/// Anything nested deeper already belongs to a repacked directory and is
/// never submitted twice.
fn simple_selection(folder: &Path, names: &[String]) -> Result<Vec<PathBuf>> {
    // Snapshot before archiving so freshly written .resource files do not
    // feed back into the listing.
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if is_housekeeping(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }

    let mut selected = Vec::new();
    for dir in dirs {
        let base = file_name_lossy(&dir);
        if names.is_empty() || names.iter().any(|name| *name == base) {
            selected.push(pack_resource(&dir, "")?);
        }
    }
    for file in files {
        if selected.contains(&file) {
            // Already covered by a repacked resource directory.
            continue;
        }
        let base = file_name_lossy(&file);
        if names.is_empty() || names.iter().any(|name| matches_filename(&base, name)) {
            selected.push(file);
        }
    }
    selected.sort();
    Ok(selected)
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
