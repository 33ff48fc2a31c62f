//! Error types for mdpush-source.

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
    #[error("IO error: {0}")]
    Io(String),
    #[error("Directory walk error: {0}")]
    Walk(String),
    #[error("Archive error: {0}")]
    Archive(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error { kind: ErrorKind::Io(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error { kind: ErrorKind::Walk(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error { kind: ErrorKind::Archive(err.to_string()), source: Some(Box::new(err)) }
    }
}
