//! Organization user context types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Role;
use crate::checker::AccessChecker;
use crate::error::ParseError;

/// Identifier of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier of an organization (tenant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub Uuid);

impl OrganizationId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for OrganizationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// State of a user's membership in an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Accepted membership; the only status that grants anything
    Active,
    /// Invitation sent but not yet accepted
    Invited,
    /// Membership revoked or paused by an administrator
    Suspended,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Invited => "invited",
            Self::Suspended => "suspended",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "invited" => Ok(Self::Invited),
            "suspended" => Ok(Self::Suspended),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

/// A user's membership in one organization, as resolved for one request.
///
/// Built by a [`MembershipResolver`](crate::MembershipResolver) and handed to
/// the checker by value. The core never stores or mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUserContext {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub role: Role,
    pub status: MembershipStatus,
}

impl OrganizationUserContext {
    /// Create an active membership context
    pub fn new(user_id: UserId, organization_id: OrganizationId, role: Role) -> Self {
        Self {
            user_id,
            organization_id,
            role,
            status: MembershipStatus::Active,
        }
    }

    /// Set the membership status
    pub fn with_status(mut self, status: MembershipStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns true if the membership is active
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Bind a checker to this context
    pub fn checker(self) -> AccessChecker {
        AccessChecker::new(self)
    }
}
