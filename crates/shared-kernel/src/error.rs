// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LuminosityError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LuminosityError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, LuminosityError>;

/// Failures while narrowing a loosely typed row into a [`crate::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Row is not an object (got {found})")]
    NotAnObject { found: &'static str },

    #[error("Field '{field}' holds an unsupported {found} value")]
    UnsupportedValue { field: String, found: &'static str },
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Record #{index} has a count that is not a base-10 integer: {value:?}")]
    InvalidCount { index: usize, value: Option<String> },

    #[error("Record #{index} is missing grouping field '{field}'")]
    MissingGroupField { index: usize, field: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Invalid date label '{label}': expected YYYY-MM-DD")]
    InvalidDateLabel { label: String },

    #[error("Invalid grouping field list: {input}")]
    InvalidGroupBy { input: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No catalogs found under: {paths}")]
    NoCatalogs { paths: String },

    #[error("Failed to load catalog '{path}': {reason}")]
    CatalogLoadFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<LuminosityError>>,
    },

    #[error("Failed to write report: {reason}")]
    ReportFailed {
        reason: String,
        #[source]
        source: Option<Box<LuminosityError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open catalog '{path}': {details}")]
    CatalogOpen { path: PathBuf, details: String },

    #[error("Query '{label}' failed: {details}")]
    Query { label: String, details: String },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl From<RecordError> for LuminosityError {
    fn from(err: RecordError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for LuminosityError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LuminosityError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for LuminosityError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LuminosityError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LuminosityError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LuminosityError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
