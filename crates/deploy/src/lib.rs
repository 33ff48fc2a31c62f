//! # mdpush-deploy
//!
//! The push half of a metadata synchronization pipeline: resolve locally
//! stored metadata against a requested type/name filter, package the
//! matches, hand them to a deployment transport, and turn the structured
//! result into a human-readable report and a pass/fail verdict.
//!
//! The remote transport, the package builder, and the notification
//! side-channel are external collaborators; they participate only through
//! the [`PackageBuilder`], [`DeployTransport`], and [`NotificationSink`]
//! traits.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mdpush_deploy::{push_by_type, DeployOptions, NoNotifications};
//!
//! let report = push_by_type(
//!     &source_root,
//!     "ApexClass",
//!     &["Foo".to_string()],
//!     &DeployOptions::default(),
//!     || MyPackageBuilder::new(),
//!     &my_transport,
//!     &NoNotifications,
//! )?;
//!
//! print!("{}", report.rendered);
//! if !report.verdict.is_success() {
//!     std::process::exit(1);
//! }
//! ```

mod collab;
mod error;
mod options;
mod report;
mod resolver;
mod result;

pub use collab::{
    DeployTransport, NoNotifications, NotificationSink, PackageBuilder, Rejection, TransportError,
};
pub use error::{Error, ErrorKind, Result};
pub use options::{DeployOptions, TestLevel};
pub use report::{interpret, PushReport, PushVerdict};
pub use resolver::{
    push_archive, push_by_paths, push_by_type, resolve_by_paths, resolve_by_type, PushContext,
    Selection,
};
pub use result::{ComponentFailure, ComponentSuccess, DeployDetails, TestFailure, TestSuccess};
