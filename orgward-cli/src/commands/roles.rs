//! Role permission matrix

use anyhow::{Result, bail};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use orgward_core::catalog::{has_permission, hierarchy_violations};
use orgward_core::{Permission, Role};

/// Arguments for the roles command
#[derive(Debug, Args)]
pub struct RolesArgs {
    /// Fail if a higher role lacks a permission a lower role holds
    #[arg(long)]
    pub verify: bool,
}

pub fn run(args: RolesArgs) -> Result<()> {
    println!("{}", matrix());

    if args.verify {
        let violations = hierarchy_violations();
        if !violations.is_empty() {
            for (higher, lower, permission) in &violations {
                eprintln!("{higher} lacks {permission} held by {lower}");
            }
            bail!("{} hierarchy violation(s) found", violations.len());
        }
        println!("Role hierarchy is consistent");
    }

    Ok(())
}

/// Table of permissions (rows) by role (columns)
pub fn matrix() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Permission").fg(Color::Cyan)];
    header.extend(
        Role::ALL
            .iter()
            .map(|role| Cell::new(format!("{role} ({})", role.level())).fg(Color::Cyan)),
    );
    table.set_header(header);

    for permission in Permission::ALL {
        let mut row = vec![Cell::new(permission.as_str())];
        row.extend(Role::ALL.iter().map(|role| {
            if has_permission(*role, permission) {
                Cell::new("\u{2713}").fg(Color::Green)
            } else {
                Cell::new("")
            }
        }));
        table.add_row(row);
    }

    table
}
