//! # mdpush-source
//!
//! The local half of the metadata push pipeline: everything that happens
//! before a byte goes over the wire.
//!
//! ## Features
//!
//! - **Sniffing** - Identify the metadata type a definition file declares
//!   by its root XML element
//! - **Locating** - Find the folder in a source tree that holds a given
//!   metadata type, including the two-level resolution bundles need
//! - **Matching** - Match requested metadata names against on-disk
//!   artifacts, sidecar `-meta.xml` files included
//! - **Repacking** - Serialize an unpacked resource directory back into its
//!   single-file `.resource` archive
//!
//! ## Example
//!
//! ```rust,ignore
//! use mdpush_source::{find_type_folder, exists, pack_resource};
//!
//! let folder = find_type_folder(root, "StaticResource")
//!     .ok_or("no StaticResource metadata in this tree")?;
//!
//! if exists(&folder, "Widgets").is_empty() {
//!     return Err("no resource named Widgets".into());
//! }
//!
//! let archive = pack_resource(&folder.join("Widgets"), "")?;
//! println!("repacked to {}", archive.display());
//! ```

mod archive;
mod error;
mod locate;
mod matcher;
mod sniff;

pub use archive::{is_housekeeping, pack_resource, resource_files};
pub use error::{Error, ErrorKind, Result};
pub use locate::{find_type_folder, MetadataKind, BUNDLE_TYPE};
pub use matcher::{exists, matches_filename};
pub use sniff::{root_element, root_element_of_file};
