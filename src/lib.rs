//! # mdpush
//!
//! Local-to-remote metadata push pipeline for declarative platforms.
//!
//! The pipeline discovers locally stored metadata artifacts, resolves them
//! against a requested type/name filter, repacks unpacked resource
//! directories into single-file archives, hands the selection to an
//! external package builder and deployment transport, and interprets the
//! structured deployment result into a report and a pass/fail verdict.
//!
//! ## Crates
//!
//! - **mdpush-source** - Source tree discovery: root-element sniffing,
//!   type-folder location, name matching, resource repacking
//! - **mdpush-deploy** - Push resolution, packaging orchestration,
//!   collaborator contracts, and deployment result reporting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mdpush::deploy::{push_by_type, DeployOptions, NoNotifications};
//!
//! let report = push_by_type(
//!     &source_root,
//!     "ApexClass",
//!     &[],
//!     &DeployOptions::default(),
//!     || MyPackageBuilder::new(),
//!     &my_transport,
//!     &NoNotifications,
//! )?;
//!
//! print!("{}", report.rendered);
//! assert!(report.verdict.is_success());
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "deploy")]
pub use mdpush_deploy as deploy;
#[cfg(feature = "source")]
pub use mdpush_source as source;

// Re-export commonly used types at the top level
#[cfg(feature = "deploy")]
pub use mdpush_deploy::{DeployOptions, PushReport, PushVerdict};
#[cfg(feature = "source")]
pub use mdpush_source::{find_type_folder, matches_filename, pack_resource};
