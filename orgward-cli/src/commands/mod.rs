pub mod access;
pub mod check;
pub mod manage;
pub mod roles;
pub mod serve;
pub mod summary;

use anyhow::Result;
use clap::Args;
use orgward_core::{MembershipStatus, OrganizationId, OrganizationUserContext, Role, UserId};
use serde::Serialize;

/// The hypothetical member a command evaluates
#[derive(Debug, Clone, Args)]
pub struct MemberArgs {
    /// Role of the acting user
    #[arg(short, long, default_value = "member")]
    pub role: Role,

    /// Membership status of the acting user
    #[arg(short, long, default_value = "active")]
    pub status: MembershipStatus,
}

impl MemberArgs {
    /// Context with fresh ids; only role and status affect decisions
    pub fn context(&self) -> OrganizationUserContext {
        OrganizationUserContext::new(UserId::generate(), OrganizationId::generate(), self.role)
            .with_status(self.status)
    }
}

pub(crate) fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
