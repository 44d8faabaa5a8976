//! Who may see and change what.
//!
//! Role gating happens at the router; ownership is decided here, per row.

use super::AuthUser;
use crate::types::Role;

/// Anonymous callers and GUEST tokens get the redacted read view.
pub fn is_guest(user: Option<&AuthUser>) -> bool {
    match user {
        None => true,
        Some(user) => match user.role {
            Role::Guest => true,
            Role::Viewer | Role::Analyst => false,
        },
    }
}

/// An ANALYST may edit only rows they created.
pub fn can_edit(user: Option<&AuthUser>, owner_user_id: Option<i64>) -> bool {
    let Some(user) = user else {
        return false;
    };

    match user.role {
        Role::Analyst => owner_user_id == Some(user.id),
        Role::Guest | Role::Viewer => false,
    }
}

pub fn has_role(user: &AuthUser, allowed: &[Role]) -> bool {
    allowed.contains(&user.role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: Role) -> AuthUser {
        AuthUser {
            id,
            email: format!("user{id}@example.com"),
            display_name: format!("User {id}"),
            role,
        }
    }

    #[test]
    fn anonymous_and_guest_are_guests() {
        assert!(is_guest(None));
        assert!(is_guest(Some(&user(1, Role::Guest))));
        assert!(!is_guest(Some(&user(1, Role::Viewer))));
        assert!(!is_guest(Some(&user(1, Role::Analyst))));
    }

    #[test]
    fn owner_analyst_can_edit() {
        assert!(can_edit(Some(&user(3, Role::Analyst)), Some(3)));
    }

    #[test]
    fn other_analyst_cannot_edit() {
        assert!(!can_edit(Some(&user(4, Role::Analyst)), Some(3)));
    }

    #[test]
    fn viewer_owner_cannot_edit() {
        assert!(!can_edit(Some(&user(3, Role::Viewer)), Some(3)));
    }

    #[test]
    fn ownerless_rows_are_not_editable() {
        assert!(!can_edit(Some(&user(3, Role::Analyst)), None));
        assert!(!can_edit(None, Some(3)));
    }

    #[test]
    fn role_membership() {
        assert!(has_role(&user(1, Role::Analyst), &[Role::Analyst]));
        assert!(!has_role(&user(1, Role::Viewer), &[Role::Analyst]));
    }
}
