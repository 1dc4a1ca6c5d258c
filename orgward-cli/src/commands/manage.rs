//! User management policy lookups

use anyhow::Result;
use clap::Args;
use orgward_core::{PermissionCheck, Role};

use super::{MemberArgs, print_json};

/// Arguments for the manage command
#[derive(Debug, Args)]
pub struct ManageArgs {
    #[command(flatten)]
    pub member: MemberArgs,

    /// Role of the user being managed
    pub target: Role,
}

pub fn run(args: ManageArgs) -> Result<()> {
    print_json(&evaluate(&args))
}

pub fn evaluate(args: &ManageArgs) -> PermissionCheck {
    args.member.context().checker().can_manage_user(args.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgward_core::MembershipStatus;

    fn args(role: Role, target: Role) -> ManageArgs {
        ManageArgs {
            member: MemberArgs {
                role,
                status: MembershipStatus::Active,
            },
            target,
        }
    }

    #[test]
    fn admin_manages_members_not_admins() {
        assert!(evaluate(&args(Role::Admin, Role::Member)).is_granted());
        let check = evaluate(&args(Role::Admin, Role::Admin));
        assert_eq!(
            check.reason(),
            Some("Role 'admin' cannot manage users with role 'admin'")
        );
    }

    #[test]
    fn owner_manages_owner() {
        assert!(evaluate(&args(Role::Owner, Role::Owner)).is_granted());
    }
}
