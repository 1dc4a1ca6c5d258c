//! Evaluate permissions for a hypothetical member

use anyhow::Result;
use clap::Args;
use orgward_core::{Permission, PermissionCheck};
use serde::Serialize;

use super::{MemberArgs, print_json};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub member: MemberArgs,

    /// Permissions to check, e.g. post:create
    #[arg(required = true)]
    pub permissions: Vec<String>,

    /// Combine into one decision requiring every permission
    #[arg(long, conflicts_with = "any")]
    pub all: bool,

    /// Combine into one decision requiring any permission
    #[arg(long)]
    pub any: bool,
}

/// One line of check output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub requirement: String,
    #[serde(flatten)]
    pub check: PermissionCheck,
}

pub fn run(args: CheckArgs) -> Result<()> {
    print_json(&evaluate(&args))
}

/// Decisions for the requested permissions; never fails.
///
/// In combined mode an unknown identifier denies the whole decision.
pub fn evaluate(args: &CheckArgs) -> Vec<Decision> {
    let checker = args.member.context().checker();

    if args.all || args.any {
        let mode = if args.all { "all" } else { "any" };
        let parsed = args
            .permissions
            .iter()
            .map(|p| p.parse::<Permission>().map_err(|_| p))
            .collect::<Result<Vec<_>, _>>();
        let check = match parsed {
            Err(unknown) => PermissionCheck::denied(format!("Unknown permission '{unknown}'")),
            Ok(permissions) if args.all => checker.can_all(&permissions),
            Ok(permissions) => checker.can_any(&permissions),
        };
        return vec![Decision {
            requirement: format!("{mode}({})", args.permissions.join(", ")),
            check,
        }];
    }

    args.permissions
        .iter()
        .map(|permission| Decision {
            requirement: permission.clone(),
            check: checker.can_str(permission),
        })
        .collect()
}
