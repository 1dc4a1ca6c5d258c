//! Resource/action access lookups

use anyhow::Result;
use clap::Args;
use orgward_core::can_access_resource;
use orgward_core::resource::resource_permission;
use orgward_core::{Action, ResourceType};
use serde::Serialize;

use super::{MemberArgs, print_json};

/// Arguments for the access command
#[derive(Debug, Args)]
pub struct AccessArgs {
    #[command(flatten)]
    pub member: MemberArgs,

    /// Resource type (organization, member, post, project)
    pub resource: String,

    /// Action (view, create, update, delete, manage)
    pub action: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    /// Permission the pair maps to, if any
    pub permission: Option<String>,
    pub has_permission: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub fn run(args: AccessArgs) -> Result<()> {
    print_json(&evaluate(&args))
}

pub fn evaluate(args: &AccessArgs) -> AccessDecision {
    let check = can_access_resource(&args.member.context(), &args.resource, &args.action);
    let permission = match (
        args.resource.parse::<ResourceType>(),
        args.action.parse::<Action>(),
    ) {
        (Ok(resource), Ok(action)) => {
            resource_permission(resource, action).map(|p| p.as_str().to_string())
        }
        _ => None,
    };

    AccessDecision {
        permission,
        has_permission: check.has_permission,
        reason: check.reason,
    }
}
