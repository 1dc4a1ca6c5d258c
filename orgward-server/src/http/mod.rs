//! HTTP server module

mod api;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use orgward_core::{Permission, Requirement};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::middleware::{authorize_middleware, trusted_user_header};

pub use api::{ActionResponse, HealthResponse, MembershipResponse};

/// A single route behind a route guard
fn guarded(
    state: &Arc<AppState>,
    requirement: impl Into<Requirement>,
    router: Router<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    router.route_layer(middleware::from_fn_with_state(
        state.guard.route(requirement),
        authorize_middleware,
    ))
}

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    let organization = guarded(
        &state,
        Permission::OrganizationView,
        Router::new().route("/api/organization", get(api::get_membership)),
    );
    let update_organization = guarded(
        &state,
        Requirement::AdminOrOwner,
        Router::new().route("/api/organization", patch(api::update_organization)),
    );
    let delete_organization = guarded(
        &state,
        Requirement::Owner,
        Router::new().route("/api/organization", delete(api::delete_organization)),
    );
    let posts = guarded(
        &state,
        Permission::PostCreate,
        Router::new().route("/api/posts", post(api::create_post)),
    );

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/members/:role", delete(api::remove_member))
        .route("/api/access/:resource/:action", get(api::check_access))
        .merge(organization)
        .merge(update_organization)
        .merge(delete_organization)
        .merge(posts)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(trusted_user_header)),
        )
        .with_state(state)
}
