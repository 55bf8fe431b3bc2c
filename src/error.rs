//! Unified error types for sbom-diff.
//!
//! The taxonomy mirrors how a caller has to react: validation and not-found
//! errors are the caller's fault and map to client errors, provider failures
//! are infrastructure problems and map to server errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomDiffError {
    /// Malformed snapshot id, identical base/target ids, bad request shape
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A snapshot id did not resolve through the provider
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The component/vulnerability provider failed
    #[error("Provider failure: {context}")]
    Provider {
        context: String,
        #[source]
        source: ProviderErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific provider error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProviderErrorKind {
    #[error("Backing store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Corrupt snapshot record: {0}")]
    Corrupt(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-diff operations
pub type Result<T> = std::result::Result<T, SbomDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SbomDiffError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for a snapshot id
    pub fn snapshot_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            kind: "SBOM snapshot",
            id: id.to_string(),
        }
    }

    /// Create a provider error with context
    pub fn provider(context: impl Into<String>, source: ProviderErrorKind) -> Self {
        Self::Provider {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error was caused by the request rather than the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SbomDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::provider(
            "JSON deserialization",
            ProviderErrorKind::Corrupt(err.to_string()),
        )
    }
}

impl From<uuid::Error> for SbomDiffError {
    fn from(err: uuid::Error) -> Self {
        Self::Validation(format!("invalid snapshot id: {err}"))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the existing context so the final
/// message reads as a path through the code, e.g.
/// `"loading snapshot store: JSON deserialization"`.
///
/// ```ignore
/// use sbom_diff::error::ErrorContext;
///
/// let components = provider
///     .components(id)
///     .with_context(|| format!("fetching components of {id}"))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// `NotFound` is returned untouched: it is bubbled verbatim to callers.
fn add_context_to_error(err: SbomDiffError, new_ctx: &str) -> SbomDiffError {
    match err {
        SbomDiffError::Provider {
            context: existing,
            source,
        } => SbomDiffError::Provider {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomDiffError::Io {
            path,
            message,
            source,
        } => SbomDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomDiffError::Config(msg) => SbomDiffError::Config(chain_context(new_ctx, &msg)),
        SbomDiffError::Validation(msg) => SbomDiffError::Validation(chain_context(new_ctx, &msg)),
        not_found @ SbomDiffError::NotFound { .. } => not_found,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a not-found error for the given snapshot id.
    fn or_snapshot_not_found(self, id: impl ToString) -> Result<T>;

    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn or_snapshot_not_found(self, id: impl ToString) -> Result<T> {
        self.ok_or_else(|| SbomDiffError::snapshot_not_found(id))
    }

    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| SbomDiffError::Validation(context.into()))
    }
}
