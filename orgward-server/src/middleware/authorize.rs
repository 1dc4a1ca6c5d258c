//! Route-level authorization middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::GuardError;
use crate::guard::RouteGuard;
use crate::identity::RequestIdentity;

/// Enforce a route's requirement before the handler runs.
///
/// On success the resolved [`OrganizationUserContext`](orgward_core::OrganizationUserContext)
/// is attached to request extensions, where the
/// [`Membership`](crate::identity::Membership) extractor reads it.
///
/// ```ignore
/// Router::new()
///     .route("/api/posts", post(create_post))
///     .route_layer(middleware::from_fn_with_state(
///         guard.route(Permission::PostCreate),
///         authorize_middleware,
///     ));
/// ```
pub async fn authorize_middleware(
    State(route): State<RouteGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, GuardError> {
    let identity = RequestIdentity::extract(
        request.headers(),
        request.extensions(),
        &route.guard.config().organization_header,
    )?;

    let context = route.guard.require(&identity, &route.requirement).await?;
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}
