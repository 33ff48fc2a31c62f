//! Error types for mdpush-deploy.

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(kind: ErrorKind, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self { kind, source: Some(Box::new(source)) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("No source directory available")]
    NoSourceDir,
    #[error("No folders that contain {0} metadata could be found")]
    TypeNotFound(String),
    #[error("{}", unknown_names_message(.names, .folder))]
    UnknownNames { folder: PathBuf, names: Vec<String> },
    #[error("Could not add the following files:\n{}", join_paths(.0))]
    RejectedPaths(Vec<PathBuf>),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Source error: {0}")]
    Source(String),
    #[error("IO error: {0}")]
    Io(String),
}

fn unknown_names_message(names: &[String], folder: &Path) -> String {
    names
        .iter()
        .map(|name| format!("INVALID: No resource named {} found in {}", name, folder.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<mdpush_source::Error> for Error {
    fn from(err: mdpush_source::Error) -> Self {
        Error { kind: ErrorKind::Source(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error { kind: ErrorKind::Io(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<crate::collab::TransportError> for Error {
    fn from(err: crate::collab::TransportError) -> Self {
        Error { kind: ErrorKind::Transport(err.message.clone()), source: Some(Box::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names_lists_every_miss() {
        let err = Error::new(ErrorKind::UnknownNames {
            folder: PathBuf::from("src/classes"),
            names: vec!["Missing".to_string(), "AlsoGone".to_string()],
        });
        let message = err.to_string();
        assert!(message.contains("No resource named Missing found in src/classes"));
        assert!(message.contains("No resource named AlsoGone found in src/classes"));
    }

    #[test]
    fn test_rejected_paths_lists_every_path() {
        let err = Error::new(ErrorKind::RejectedPaths(vec![
            PathBuf::from("a/b.cls"),
            PathBuf::from("c/d.page"),
        ]));
        let message = err.to_string();
        assert!(message.starts_with("Could not add the following files:"));
        assert!(message.contains("a/b.cls"));
        assert!(message.contains("c/d.page"));
    }
}
