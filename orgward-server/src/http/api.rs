//! REST API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use orgward_core::{
    NO_MEMBERSHIP_REASON, OrganizationUserContext, Permission, PermissionCheck, Role, UserId,
    can_access_resource,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::GuardError;
use crate::guard::OrgGuard;
use crate::identity::{Membership, RequestIdentity};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// The caller's membership and what it grants
#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub membership: OrganizationUserContext,
    pub permissions: Vec<Permission>,
}

/// Return the caller's membership in the requested organization
pub async fn get_membership(Membership(context): Membership) -> Json<MembershipResponse> {
    let permissions = if context.is_active() {
        context.role.permissions().to_vec()
    } else {
        Vec::new()
    };
    Json(MembershipResponse {
        membership: context,
        permissions,
    })
}

/// Acknowledgement for a guarded mutation
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: String,
    pub performed_by: UserId,
    pub role: Role,
}

impl ActionResponse {
    fn new(action: &str, context: &OrganizationUserContext) -> Self {
        Self {
            action: action.to_string(),
            performed_by: context.user_id,
            role: context.role,
        }
    }
}

pub async fn update_organization(Membership(context): Membership) -> Json<ActionResponse> {
    Json(ActionResponse::new("organization.update", &context))
}

pub async fn delete_organization(Membership(context): Membership) -> Json<ActionResponse> {
    Json(ActionResponse::new("organization.delete", &context))
}

pub async fn create_post(
    Membership(context): Membership,
) -> (StatusCode, Json<ActionResponse>) {
    (
        StatusCode::CREATED,
        Json(ActionResponse::new("post.create", &context)),
    )
}

/// Remove a member holding `role`.
///
/// Guarded in the handler because the requirement depends on the path.
pub async fn remove_member(
    State(guard): State<OrgGuard>,
    identity: RequestIdentity,
    Path(role): Path<String>,
) -> Result<StatusCode, GuardError> {
    let target: Role = role
        .parse()
        .map_err(|e: orgward_core::ParseError| GuardError::InvalidRequest(e.to_string()))?;
    guard.require_manage(&identity, target).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Report whether the caller may perform `action` on `resource`.
///
/// Always answers 200 with a decision; UIs use it to decide what to show.
pub async fn check_access(
    State(guard): State<OrgGuard>,
    identity: RequestIdentity,
    Path((resource, action)): Path<(String, String)>,
) -> Result<Json<PermissionCheck>, GuardError> {
    let check = match guard.resolve(&identity).await? {
        Some(context) => can_access_resource(&context, &resource, &action),
        None => PermissionCheck::denied(NO_MEMBERSHIP_REASON),
    };
    Ok(Json(check))
}
