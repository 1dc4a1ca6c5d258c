//! Membership resolution seam
//!
//! The core never looks memberships up itself. Callers plug in a
//! [`MembershipResolver`] backed by whatever store owns memberships; the
//! in-memory [`StaticMembershipResolver`] serves tests, demos and the CLI.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::catalog::Role;
use crate::context::{MembershipStatus, OrganizationId, OrganizationUserContext, UserId};
use crate::error::{ConfigError, ResolveError};

/// Looks up a user's membership in an organization
#[async_trait]
pub trait MembershipResolver: Send + Sync {
    /// Returns `Ok(None)` when the user is not a member of the organization
    async fn resolve(
        &self,
        user_id: UserId,
        organization_id: OrganizationId,
    ) -> Result<Option<OrganizationUserContext>, ResolveError>;
}

#[async_trait]
impl<R: MembershipResolver + ?Sized> MembershipResolver for Arc<R> {
    async fn resolve(
        &self,
        user_id: UserId,
        organization_id: OrganizationId,
    ) -> Result<Option<OrganizationUserContext>, ResolveError> {
        (**self).resolve(user_id, organization_id).await
    }
}

/// One membership row as written in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEntry {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub role: Role,
    #[serde(default = "default_status")]
    pub status: MembershipStatus,
}

fn default_status() -> MembershipStatus {
    MembershipStatus::Active
}

impl From<MembershipEntry> for OrganizationUserContext {
    fn from(entry: MembershipEntry) -> Self {
        OrganizationUserContext::new(entry.user_id, entry.organization_id, entry.role)
            .with_status(entry.status)
    }
}

impl From<OrganizationUserContext> for MembershipEntry {
    fn from(context: OrganizationUserContext) -> Self {
        Self {
            user_id: context.user_id,
            organization_id: context.organization_id,
            role: context.role,
            status: context.status,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MembershipFile {
    #[serde(default)]
    memberships: Vec<MembershipEntry>,
}

/// In-memory membership table
#[derive(Debug, Default)]
pub struct StaticMembershipResolver {
    memberships: RwLock<HashMap<(UserId, OrganizationId), OrganizationUserContext>>,
}

impl StaticMembershipResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver preloaded with the given memberships
    pub fn from_entries(entries: impl IntoIterator<Item = MembershipEntry>) -> Self {
        let memberships = entries
            .into_iter()
            .map(|entry| {
                let context = OrganizationUserContext::from(entry);
                ((context.user_id, context.organization_id), context)
            })
            .collect();
        Self {
            memberships: RwLock::new(memberships),
        }
    }

    /// Parse a TOML document with `[[memberships]]` tables
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: MembershipFile = toml::from_str(contents)?;
        Ok(Self::from_entries(file.memberships))
    }

    /// Load memberships from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut resolver = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            memberships = resolver.memberships.get_mut().len(),
            "Loaded membership file"
        );
        Ok(resolver)
    }

    /// Insert or replace a membership
    pub async fn insert(&self, context: OrganizationUserContext) {
        self.memberships
            .write()
            .await
            .insert((context.user_id, context.organization_id), context);
    }

    /// Remove a membership, returning it if present
    pub async fn remove(
        &self,
        user_id: UserId,
        organization_id: OrganizationId,
    ) -> Option<OrganizationUserContext> {
        self.memberships
            .write()
            .await
            .remove(&(user_id, organization_id))
    }

    pub async fn len(&self) -> usize {
        self.memberships.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.memberships.read().await.is_empty()
    }
}

#[async_trait]
impl MembershipResolver for StaticMembershipResolver {
    async fn resolve(
        &self,
        user_id: UserId,
        organization_id: OrganizationId,
    ) -> Result<Option<OrganizationUserContext>, ResolveError> {
        let memberships = self.memberships.read().await;
        Ok(memberships.get(&(user_id, organization_id)).copied())
    }
}
