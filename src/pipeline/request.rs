//! Diff request handling.
//!
//! Turns a `POST /api/v1/sbom/diff` body into a diff and maps the outcome
//! onto an HTTP status plus JSON body. Transport is left to the caller.

use crate::diff::{DiffResult, SnapshotDiffService};
use crate::error::{Result, SbomDiffError};
use crate::model::SnapshotId;
use crate::provider::SnapshotProvider;
use serde::{Deserialize, Serialize};

/// Route served by the diff handler.
pub const DIFF_ROUTE: &str = "/api/v1/sbom/diff";

/// HTTP status codes produced by the handler.
pub mod status {
    pub const OK: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Message returned for failures whose details stay in the logs.
const INTERNAL_ERROR_MESSAGE: &str = "internal error while computing SBOM diff";

/// Body of a diff request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRequest {
    pub base_sbom_id: String,
    pub target_sbom_id: String,
}

impl DiffRequest {
    pub fn new(base_sbom_id: impl Into<String>, target_sbom_id: impl Into<String>) -> Self {
        Self {
            base_sbom_id: base_sbom_id.into(),
            target_sbom_id: target_sbom_id.into(),
        }
    }

    /// Parse a JSON request body. Malformed bodies are validation errors.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| SbomDiffError::validation(format!("invalid request body: {e}")))
    }

    /// Parse both ids and reject identical ones.
    pub fn validate(&self) -> Result<(SnapshotId, SnapshotId)> {
        let base = parse_id("base_sbom_id", &self.base_sbom_id)?;
        let target = parse_id("target_sbom_id", &self.target_sbom_id)?;
        if base == target {
            return Err(SbomDiffError::validation(
                "base_sbom_id and target_sbom_id must be different",
            ));
        }
        Ok((base, target))
    }
}

fn parse_id(field: &str, value: &str) -> Result<SnapshotId> {
    value
        .parse()
        .map_err(|_| SbomDiffError::validation(format!("{field} must be a valid UUID")))
}

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Outcome of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffResponse {
    Ok(DiffResult),
    Error { status: u16, body: ErrorBody },
}

impl DiffResponse {
    /// Map an error onto its response.
    ///
    /// Client errors carry their message; provider and other internal
    /// failures are logged and answered with a generic message.
    #[must_use]
    pub fn from_error(err: &SbomDiffError) -> Self {
        if err.is_client_error() {
            return Self::Error {
                status: status::BAD_REQUEST,
                body: ErrorBody {
                    error: err.to_string(),
                },
            };
        }
        tracing::error!(error = %err, "SBOM diff failed");
        Self::Error {
            status: status::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Ok(_) => status::OK,
            Self::Error { status, .. } => *status,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The diff result, if the request succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&DiffResult> {
        match self {
            Self::Ok(result) => Some(result),
            Self::Error { .. } => None,
        }
    }

    /// Serialize the response body.
    pub fn body_json(&self, pretty: bool) -> serde_json::Result<String> {
        match (self, pretty) {
            (Self::Ok(result), true) => serde_json::to_string_pretty(result),
            (Self::Ok(result), false) => serde_json::to_string(result),
            (Self::Error { body, .. }, true) => serde_json::to_string_pretty(body),
            (Self::Error { body, .. }, false) => serde_json::to_string(body),
        }
    }
}

/// Validates diff requests and runs them against a diff service.
pub struct DiffRequestHandler<P> {
    service: SnapshotDiffService<P>,
    project_scope: Option<String>,
}

impl<P: SnapshotProvider> DiffRequestHandler<P> {
    pub const fn new(service: SnapshotDiffService<P>) -> Self {
        Self {
            service,
            project_scope: None,
        }
    }

    /// Restrict requests to snapshots of one project.
    #[must_use]
    pub fn with_project_scope(mut self, project: Option<String>) -> Self {
        self.project_scope = project;
        self
    }

    pub const fn service(&self) -> &SnapshotDiffService<P> {
        &self.service
    }

    /// Handle a raw JSON request body.
    pub fn handle_json(&self, body: &str) -> DiffResponse {
        match DiffRequest::from_json(body) {
            Ok(request) => self.handle(&request),
            Err(err) => DiffResponse::from_error(&err),
        }
    }

    /// Handle a parsed request.
    pub fn handle(&self, request: &DiffRequest) -> DiffResponse {
        match self.run(request) {
            Ok(result) => DiffResponse::Ok(result),
            Err(err) => DiffResponse::from_error(&err),
        }
    }

    fn run(&self, request: &DiffRequest) -> Result<DiffResult> {
        let (base, target) = request.validate()?;
        self.check_project(base, target)?;
        self.service.diff(base, target)
    }

    /// Both snapshots must exist and belong to the same (scoped) project.
    ///
    /// A snapshot owned by another project is reported exactly like an
    /// unknown id.
    fn check_project(&self, base: SnapshotId, target: SnapshotId) -> Result<()> {
        let provider = self.service.provider();
        let base_snapshot = provider.snapshot(base)?;
        let target_snapshot = provider.snapshot(target)?;

        if let Some(ref scope) = self.project_scope {
            if &base_snapshot.project_id != scope {
                return Err(SbomDiffError::snapshot_not_found(base));
            }
        }
        if !base_snapshot.same_project(&target_snapshot) {
            tracing::debug!(
                %base,
                %target,
                base_project = %base_snapshot.project_id,
                target_project = %target_snapshot.project_id,
                "cross-project diff rejected"
            );
            return Err(SbomDiffError::snapshot_not_found(target));
        }
        Ok(())
    }
}
