//! Dashboard access summary for a role

use anyhow::Result;
use clap::Args;
use orgward_ui::{AccessQuery, AccessSummary};

use super::{MemberArgs, print_json};

/// Arguments for the summary command
#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub member: MemberArgs,
}

pub fn run(args: SummaryArgs) -> Result<()> {
    print_json(&summarize(&args))
}

pub fn summarize(args: &SummaryArgs) -> AccessSummary {
    AccessQuery::new(Some(args.member.context())).summary()
}
