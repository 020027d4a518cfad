//! Static route table: which gate each path requires.
//!
//! The web crate maps the same paths to page components; this table is the
//! single source of truth for the access decision.

use crate::role::Role;

/// Login entry point.
pub const LOGIN: &str = "/login";
/// Self-registration.
pub const REGISTER: &str = "/register";
/// Password reset request.
pub const FORGOT_PASSWORD: &str = "/forgot-password";
/// Common landing page after login.
pub const DASHBOARD: &str = "/dashboard";
/// Own profile.
pub const PROFILE: &str = "/profile";
/// Mandatory password change after provisioning.
pub const FORCE_CHANGE_PASSWORD: &str = "/force-change-password";
/// Landing page for role mismatches.
pub const UNAUTHORIZED: &str = "/unauthorized";

/// The gate a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// No checks.
    Public,
    /// A valid session that has cleared the forced password change.
    Authenticated,
    /// An authenticated session with exactly this role.
    Role(Role),
}

/// How a rule's pattern matches a path.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// The path equals the pattern.
    Exact(&'static str),
    /// The path is the prefix or lies below it on a segment boundary.
    Prefix(&'static str),
}

impl Pattern {
    fn matches(&self, path: &str) -> bool {
        match *self {
            Self::Exact(pattern) => path == pattern,
            Self::Prefix(prefix) => match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

const RULES: &[(Pattern, RouteGuard)] = &[
    (Pattern::Exact(LOGIN), RouteGuard::Public),
    (Pattern::Exact(REGISTER), RouteGuard::Public),
    (Pattern::Exact(FORGOT_PASSWORD), RouteGuard::Public),
    (Pattern::Exact(DASHBOARD), RouteGuard::Authenticated),
    (Pattern::Exact(PROFILE), RouteGuard::Authenticated),
    (Pattern::Exact(FORCE_CHANGE_PASSWORD), RouteGuard::Authenticated),
    (Pattern::Prefix("/admin"), RouteGuard::Role(Role::Admin)),
    (Pattern::Prefix("/manager"), RouteGuard::Role(Role::Manager)),
    (Pattern::Prefix("/employee"), RouteGuard::Role(Role::Employee)),
    (Pattern::Exact(UNAUTHORIZED), RouteGuard::Public),
];

/// Returns the gate required for `path`.
///
/// Role prefixes cover every path below them, including ones with no page;
/// other unknown paths are public and render the 404 page.
#[must_use]
pub fn guard_for(path: &str) -> RouteGuard {
    let path = normalize(path);
    RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(path))
        .map_or(RouteGuard::Public, |(_, guard)| *guard)
}

/// Strips a query string, a fragment and trailing slashes from `path`.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_pages() {
        for path in [LOGIN, REGISTER, FORGOT_PASSWORD, UNAUTHORIZED, "/"] {
            assert_eq!(guard_for(path), RouteGuard::Public, "{path}");
        }
    }

    #[test]
    fn authenticated_pages() {
        for path in [DASHBOARD, PROFILE, FORCE_CHANGE_PASSWORD] {
            assert_eq!(guard_for(path), RouteGuard::Authenticated, "{path}");
        }
    }

    #[test]
    fn role_groups() {
        assert_eq!(
            guard_for("/admin/manage-users"),
            RouteGuard::Role(Role::Admin)
        );
        assert_eq!(
            guard_for("/admin/edit-user/12"),
            RouteGuard::Role(Role::Admin)
        );
        assert_eq!(
            guard_for("/manager/leave-approval"),
            RouteGuard::Role(Role::Manager)
        );
        assert_eq!(
            guard_for("/employee/tasks"),
            RouteGuard::Role(Role::Employee)
        );
        assert_eq!(guard_for("/employee"), RouteGuard::Role(Role::Employee));
    }

    #[test]
    fn prefix_respects_segment_boundary() {
        assert_eq!(guard_for("/administrator"), RouteGuard::Public);
        assert_eq!(guard_for("/managers/list"), RouteGuard::Public);
    }

    #[test]
    fn unknown_paths_are_public() {
        assert_eq!(guard_for("/nope"), RouteGuard::Public);
        assert_eq!(guard_for("/dashboard/extra"), RouteGuard::Public);
    }

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize("/dashboard/"), "/dashboard");
        assert_eq!(normalize("/profile?tab=password"), "/profile");
        assert_eq!(normalize("/admin/assign-task#top"), "/admin/assign-task");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(guard_for("/dashboard/"), RouteGuard::Authenticated);
    }
}
