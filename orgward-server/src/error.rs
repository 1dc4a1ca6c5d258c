//! Guard and server error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orgward_core::ResolveError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced at the request boundary
#[derive(Debug, Error)]
pub enum GuardError {
    /// No authenticated principal was attached to the request
    #[error("authentication required")]
    Unauthenticated,

    /// The request did not name a valid organization
    #[error("missing or invalid organization id")]
    MissingOrganization,

    /// The request was malformed in a way unrelated to access
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The access decision was negative
    #[error("{0}")]
    Forbidden(String),

    /// The membership store failed
    #[error("membership lookup failed: {0}")]
    Resolver(#[from] ResolveError),
}

impl GuardError {
    /// Machine-readable code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHORIZED",
            Self::MissingOrganization | Self::InvalidRequest(_) => "BAD_REQUEST",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Resolver(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::MissingOrganization | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Resolver(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        // Store failures are logged where they happen; don't leak details.
        let message = match &self {
            Self::Resolver(_) => "internal error".to_string(),
            other => other.to_string(),
        };
        let body = ErrorBody {
            code: self.code().to_string(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Errors that can occur running the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}
