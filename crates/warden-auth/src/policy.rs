//! Who may reset whose password.
//!
//! ```text
//! actor \ target   administrator  coordinator  resource_guard
//! administrator    deny           allow        allow
//! coordinator      deny           deny         allow
//! resource_guard   deny           deny         deny
//! ```
//!
//! Administrators change their own password through a separate self-service
//! path, never through a reset.

use warden_core::entities::User;
use warden_core::enums::Role;

/// Decide whether `actor` may reset the password of `target`.
///
/// Absent actor or target is always denied.
#[must_use]
pub fn can_reset_password(actor: Option<&User>, target: Option<&User>) -> bool {
    let (Some(actor), Some(target)) = (actor, target) else {
        return false;
    };
    role_may_reset(actor.role, target.role)
}

#[allow(clippy::match_same_arms)]
const fn role_may_reset(actor: Role, target: Role) -> bool {
    match (actor, target) {
        (_, Role::Administrator) => false,
        (Role::Administrator, Role::Coordinator | Role::ResourceGuard) => true,
        (Role::Coordinator, Role::ResourceGuard) => true,
        (Role::Coordinator, Role::Coordinator) => false,
        (Role::ResourceGuard, Role::Coordinator | Role::ResourceGuard) => false,
    }
}

/// Users whose password `actor` may reset, in directory order.
pub fn resettable_targets<'a>(actor: &User, users: &'a [User]) -> Vec<&'a User> {
    users
        .iter()
        .filter(|target| can_reset_password(Some(actor), Some(*target)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.into(),
            name: format!("user-{id}"),
            last_name: String::new(),
            email: format!("{id}@parques.example"),
            role,
        }
    }

    #[rstest]
    #[case(Role::Administrator, Role::Administrator, false)]
    #[case(Role::Administrator, Role::Coordinator, true)]
    #[case(Role::Administrator, Role::ResourceGuard, true)]
    #[case(Role::Coordinator, Role::Administrator, false)]
    #[case(Role::Coordinator, Role::Coordinator, false)]
    #[case(Role::Coordinator, Role::ResourceGuard, true)]
    #[case(Role::ResourceGuard, Role::Administrator, false)]
    #[case(Role::ResourceGuard, Role::Coordinator, false)]
    #[case(Role::ResourceGuard, Role::ResourceGuard, false)]
    fn permission_matrix(#[case] actor: Role, #[case] target: Role, #[case] allowed: bool) {
        let actor = user("a", actor);
        let target = user("t", target);
        assert_eq!(can_reset_password(Some(&actor), Some(&target)), allowed);
    }

    #[test]
    fn administrator_target_denied_for_every_actor() {
        let target = user("t", Role::Administrator);
        for role in Role::ALL {
            let actor = user("a", role);
            assert!(!can_reset_password(Some(&actor), Some(&target)));
        }
    }

    #[test]
    fn administrator_cannot_reset_own_password_here() {
        let admin = user("4", Role::Administrator);
        assert!(!can_reset_password(Some(&admin), Some(&admin)));
    }

    #[test]
    fn absent_actor_or_target_denied() {
        let guard = user("1", Role::ResourceGuard);
        let admin = user("4", Role::Administrator);
        assert!(!can_reset_password(None, Some(&guard)));
        assert!(!can_reset_password(Some(&admin), None));
        assert!(!can_reset_password(None, None));
    }

    #[test]
    fn resettable_targets_for_coordinator_are_guards_only() {
        let users = vec![
            user("1", Role::ResourceGuard),
            user("2", Role::ResourceGuard),
            user("3", Role::Coordinator),
            user("4", Role::Administrator),
        ];
        let ids: Vec<&str> = resettable_targets(&users[2], &users)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn resettable_targets_for_administrator_excludes_administrators() {
        let users = vec![
            user("1", Role::ResourceGuard),
            user("3", Role::Coordinator),
            user("4", Role::Administrator),
            user("5", Role::Administrator),
        ];
        let ids: Vec<&str> = resettable_targets(&users[2], &users)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
