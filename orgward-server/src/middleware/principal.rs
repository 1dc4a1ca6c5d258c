//! Development authentication: trust a user id header.
//!
//! Real deployments put their own authentication layer in front of the guard
//! and insert a [`Principal`] themselves. This layer exists for local runs
//! and tests, where requests name their user directly.

use axum::{extract::Request, middleware::Next, response::Response};
use orgward_core::UserId;

use crate::identity::Principal;

/// Header carrying the acting user's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Attach a [`Principal`] when the request carries a valid user id header.
///
/// Requests without one pass through unauthenticated; the guard rejects them
/// on protected routes.
pub async fn trusted_user_header(mut request: Request, next: Next) -> Response {
    let principal = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<UserId>().ok())
        .map(Principal::new);

    match principal {
        Some(principal) => {
            request.extensions_mut().insert(principal);
        }
        None => {
            tracing::trace!("No valid {} header", USER_ID_HEADER);
        }
    }

    next.run(request).await
}
