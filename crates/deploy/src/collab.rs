//! Contracts for the external collaborators of a push.
//!
//! The package builder, the deployment transport, and the notification
//! side-channel are out of scope for this crate; the pipeline talks to them
//! only through these traits.

use crate::options::DeployOptions;
use crate::result::DeployDetails;
use std::path::{Path, PathBuf};

/// A file the package builder refused to accept.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}: {reason}", .path.display())]
pub struct Rejection {
    pub path: PathBuf,
    pub reason: String,
}

/// Failure of the remote call itself, independent of deployment content.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self { message: message.into(), source: Some(Box::new(source)) }
    }
}

/// Accumulates selected files into a submittable payload.
pub trait PackageBuilder {
    /// Opaque wire payload handed to the transport.
    type Payload;

    /// Accept one file, returning the logical full name it will deploy
    /// under. A rejection aborts the whole push once every path has been
    /// offered.
    fn add_file(&mut self, path: &Path) -> std::result::Result<String, Rejection>;

    /// Finish the package, draining the accumulated files.
    fn build_payload(&mut self) -> Self::Payload;
}

/// Submits payloads to the remote deployment service.
///
/// Both calls block until the service answers; there is no timeout, retry,
/// or cancellation hook at this layer.
pub trait DeployTransport {
    type Payload;

    fn deploy(
        &self,
        payload: Self::Payload,
        options: &DeployOptions,
    ) -> std::result::Result<DeployDetails, TransportError>;

    /// Submit a previously packed archive as-is.
    fn deploy_archive(
        &self,
        archive: &[u8],
        options: &DeployOptions,
    ) -> std::result::Result<DeployDetails, TransportError>;
}

/// Fire-and-forget completion signal; failures to notify never propagate.
pub trait NotificationSink {
    fn notify(&self, operation: &str, success: bool);
}

/// Sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNotifications;

impl NotificationSink for NoNotifications {
    fn notify(&self, _operation: &str, _success: bool) {}
}
