//! End-to-end access scenarios against the public API
//!
//! These run a resolved membership through the checker the way a request
//! handler would: resolve, check, act on the decision.

use std::sync::Arc;

use orgward_core::{
    MembershipResolver, MembershipStatus, OrganizationId, OrganizationUserContext, Permission,
    Requirement, Role, StaticMembershipResolver, UserId, can_access_resource,
};

fn context(role: Role, status: MembershipStatus) -> OrganizationUserContext {
    OrganizationUserContext::new(UserId::generate(), OrganizationId::generate(), role)
        .with_status(status)
}

#[test]
fn active_member_can_create_post() {
    let check = context(Role::Member, MembershipStatus::Active)
        .checker()
        .can(Permission::PostCreate);
    assert!(check.is_granted());
    assert!(check.reason().is_none());
}

#[test]
fn active_member_cannot_delete_organization() {
    let check = context(Role::Member, MembershipStatus::Active)
        .checker()
        .can(Permission::OrganizationDelete);
    assert!(!check.is_granted());
    assert!(check.reason().unwrap().contains("'member'"));
}

#[test]
fn suspended_owner_cannot_delete_organization() {
    let check = context(Role::Owner, MembershipStatus::Suspended)
        .checker()
        .can(Permission::OrganizationDelete);
    assert!(!check.is_granted());
    assert!(check.reason().unwrap().contains("not active"));
}

#[test]
fn resource_mapper_agrees_with_checker() {
    let ctx = context(Role::Admin, MembershipStatus::Active);
    assert_eq!(
        can_access_resource(&ctx, "post", "delete"),
        ctx.checker().can(Permission::PostDelete)
    );
    let invalid = can_access_resource(&ctx, "organization", "invalid-action");
    assert!(!invalid.is_granted());
    assert!(
        invalid
            .reason()
            .unwrap()
            .contains("Invalid resource/action combination")
    );
}

#[tokio::test]
async fn resolved_membership_drives_decision() {
    let resolver = StaticMembershipResolver::new();
    let ctx = context(Role::Viewer, MembershipStatus::Active);
    resolver.insert(ctx).await;

    let resolved = resolver
        .resolve(ctx.user_id, ctx.organization_id)
        .await
        .unwrap();
    let requirement = Requirement::Permission(Permission::PostView);
    assert!(requirement.evaluate_for(resolved.as_ref()).is_granted());

    let stranger = resolver
        .resolve(UserId::generate(), ctx.organization_id)
        .await
        .unwrap();
    assert!(!requirement.evaluate_for(stranger.as_ref()).is_granted());
}

#[tokio::test]
async fn concurrent_checks_agree() {
    let ctx = context(Role::Member, MembershipStatus::Active);
    let expected: Arc<Vec<bool>> = Arc::new(
        Permission::ALL
            .iter()
            .map(|p| ctx.checker().can(*p).is_granted())
            .collect(),
    );

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let expected = Arc::clone(&expected);
            tokio::spawn(async move {
                let checker = ctx.checker();
                for (permission, expected) in Permission::ALL.iter().zip(expected.iter()) {
                    assert_eq!(checker.can(*permission).is_granted(), *expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}
