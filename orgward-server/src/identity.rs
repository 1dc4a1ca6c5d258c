//! Request identity and membership extractors

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{Extensions, HeaderMap, request::Parts},
};
use orgward_core::{NO_MEMBERSHIP_REASON, OrganizationId, OrganizationUserContext, UserId};

use crate::error::GuardError;
use crate::guard::OrgGuard;

/// Authenticated caller, inserted into request extensions by the
/// authentication layer that runs before the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
}

impl Principal {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Who is acting, and on which organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIdentity {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
}

impl RequestIdentity {
    pub fn new(user_id: UserId, organization_id: OrganizationId) -> Self {
        Self {
            user_id,
            organization_id,
        }
    }

    /// Read the principal from extensions and the organization from `header`
    pub fn extract(
        headers: &HeaderMap,
        extensions: &Extensions,
        header: &str,
    ) -> Result<Self, GuardError> {
        let principal = extensions
            .get::<Principal>()
            .ok_or(GuardError::Unauthenticated)?;

        let organization_id = headers
            .get(header)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<OrganizationId>().ok())
            .ok_or(GuardError::MissingOrganization)?;

        Ok(Self::new(principal.user_id, organization_id))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestIdentity
where
    OrgGuard: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = GuardError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let guard = OrgGuard::from_ref(state);
        Self::extract(
            &parts.headers,
            &parts.extensions,
            &guard.config().organization_header,
        )
    }
}

/// The membership a route guard resolved for this request.
///
/// Only available on routes behind
/// [`authorize_middleware`](crate::middleware::authorize_middleware).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership(pub OrganizationUserContext);

#[async_trait]
impl<S> FromRequestParts<S> for Membership
where
    S: Send + Sync,
{
    type Rejection = GuardError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<OrganizationUserContext>()
            .copied()
            .map(Membership)
            .ok_or_else(|| GuardError::Forbidden(NO_MEMBERSHIP_REASON.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_requires_principal() {
        let headers = HeaderMap::new();
        let extensions = Extensions::new();
        let err = RequestIdentity::extract(&headers, &extensions, "x-organization-id").unwrap_err();
        assert!(matches!(err, GuardError::Unauthenticated));
    }

    #[test]
    fn test_extract_requires_valid_organization() {
        let mut extensions = Extensions::new();
        extensions.insert(Principal::new(UserId::generate()));

        let mut headers = HeaderMap::new();
        let err = RequestIdentity::extract(&headers, &extensions, "x-organization-id").unwrap_err();
        assert!(matches!(err, GuardError::MissingOrganization));

        headers.insert("x-organization-id", HeaderValue::from_static("acme"));
        let err = RequestIdentity::extract(&headers, &extensions, "x-organization-id").unwrap_err();
        assert!(matches!(err, GuardError::MissingOrganization));
    }

    #[test]
    fn test_extract_reads_configured_header() {
        let user_id = UserId::generate();
        let organization_id = OrganizationId::generate();
        let mut extensions = Extensions::new();
        extensions.insert(Principal::new(user_id));
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-tenant",
            HeaderValue::from_str(&organization_id.to_string()).unwrap(),
        );

        let identity = RequestIdentity::extract(&headers, &extensions, "x-tenant").unwrap();
        assert_eq!(identity, RequestIdentity::new(user_id, organization_id));
    }
}
