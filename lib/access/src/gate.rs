//! The access-control gate.
//!
//! Pure decision functions over a [`Session`] snapshot and a requested path.
//! Nothing here touches storage or performs navigation; see
//! [`SessionContext::authorize`](crate::SessionContext::authorize) for the
//! guard that also tears down stale sessions.

use chrono::{DateTime, Utc};

use crate::role::Role;
use crate::route::{self, RouteGuard};
use crate::session::Session;

/// Outcome of evaluating a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Render the requested page.
    Allow,
    /// Replace the requested location with this path.
    RedirectTo(&'static str),
}

impl NavigationDecision {
    /// Returns true for [`NavigationDecision::Allow`].
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// First-stage gate for a protected path, evaluated at `now`.
///
/// 1. no token, or an expired/unreadable one: `/login`
/// 2. first login pending and not on the change page: `/force-change-password`
/// 3. first login done but on the change page: `/dashboard`
/// 4. otherwise allow
#[must_use]
pub fn evaluate_at(session: &Session, requested_path: &str, now: DateTime<Utc>) -> NavigationDecision {
    if !session.has_valid_token_at(now) {
        return NavigationDecision::RedirectTo(route::LOGIN);
    }

    let on_change_page = route::normalize(requested_path) == route::FORCE_CHANGE_PASSWORD;
    match (session.is_first_login(), on_change_page) {
        (true, false) => NavigationDecision::RedirectTo(route::FORCE_CHANGE_PASSWORD),
        (false, true) => NavigationDecision::RedirectTo(route::DASHBOARD),
        _ => NavigationDecision::Allow,
    }
}

/// First-stage gate evaluated against the wall clock.
#[must_use]
pub fn evaluate(session: &Session, requested_path: &str) -> NavigationDecision {
    evaluate_at(session, requested_path, Utc::now())
}

/// Second-stage gate for a role-scoped route group.
#[must_use]
pub fn evaluate_role(session: &Session, required: Role) -> NavigationDecision {
    if session.role() == Some(required) {
        NavigationDecision::Allow
    } else {
        NavigationDecision::RedirectTo(route::UNAUTHORIZED)
    }
}

/// Full navigation check: looks up the route's gate and runs the stages it
/// requires, in order.
#[must_use]
pub fn check_at(session: &Session, requested_path: &str, now: DateTime<Utc>) -> NavigationDecision {
    let decision = match route::guard_for(requested_path) {
        RouteGuard::Public => NavigationDecision::Allow,
        RouteGuard::Authenticated => evaluate_at(session, requested_path, now),
        RouteGuard::Role(required) => match evaluate_at(session, requested_path, now) {
            NavigationDecision::Allow => evaluate_role(session, required),
            redirect => redirect,
        },
    };

    tracing::debug!(path = requested_path, ?decision, "navigation checked");
    decision
}

/// Full navigation check evaluated against the wall clock.
#[must_use]
pub fn check(session: &Session, requested_path: &str) -> NavigationDecision {
    check_at(session, requested_path, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::token_expiring_at;
    use chrono::{Duration, TimeZone};

    const PROTECTED: &[&str] = &[
        "/dashboard",
        "/profile",
        "/force-change-password",
        "/admin/pending-approvals",
        "/admin/edit-user/3",
        "/manager/tasks",
        "/employee/apply-leave",
    ];

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    fn live(role: Role, first_login: bool) -> Session {
        Session::authenticated(token_expiring_at(now() + Duration::hours(1)), role, first_login)
    }

    fn redirect(path: &'static str) -> NavigationDecision {
        NavigationDecision::RedirectTo(path)
    }

    #[test]
    fn no_token_redirects_to_login_everywhere_protected() {
        let session = Session::anonymous();
        for path in PROTECTED {
            assert_eq!(check_at(&session, path, now()), redirect("/login"), "{path}");
        }
    }

    #[test]
    fn no_token_leaves_public_paths_alone() {
        let session = Session::anonymous();
        for path in ["/login", "/register", "/forgot-password", "/unauthorized", "/missing"] {
            assert_eq!(check_at(&session, path, now()), NavigationDecision::Allow, "{path}");
        }
    }

    #[test]
    fn expired_token_redirects_to_login() {
        let session = Session::authenticated(
            token_expiring_at(now() - Duration::seconds(1)),
            Role::Admin,
            false,
        );
        assert_eq!(evaluate_at(&session, "/profile", now()), redirect("/login"));
    }

    #[test]
    fn malformed_token_redirects_to_login() {
        let session = Session::authenticated("garbage".to_string(), Role::Admin, false);
        assert_eq!(evaluate_at(&session, "/dashboard", now()), redirect("/login"));
    }

    #[test]
    fn first_login_traps_every_path_but_the_change_page() {
        for role in Role::ALL {
            let session = live(role, true);
            for path in PROTECTED {
                let expected = if *path == "/force-change-password" {
                    NavigationDecision::Allow
                } else {
                    redirect("/force-change-password")
                };
                assert_eq!(evaluate_at(&session, path, now()), expected, "{role} {path}");
            }
        }
    }

    #[test]
    fn first_login_trap_precedes_role_gate() {
        // A first-login manager on an admin page goes to the change page,
        // not to /unauthorized.
        let session = live(Role::Manager, true);
        assert_eq!(
            check_at(&session, "/admin/manage-users", now()),
            redirect("/force-change-password")
        );
    }

    #[test]
    fn change_page_after_first_login_goes_to_dashboard() {
        for role in Role::ALL {
            let session = live(role, false);
            assert_eq!(
                evaluate_at(&session, "/force-change-password", now()),
                redirect("/dashboard"),
            );
            assert_eq!(
                evaluate_at(&session, "/force-change-password/", now()),
                redirect("/dashboard"),
            );
        }
    }

    #[test]
    fn active_session_is_allowed_on_common_pages() {
        let session = live(Role::Employee, false);
        assert_eq!(evaluate_at(&session, "/dashboard", now()), NavigationDecision::Allow);
        assert_eq!(evaluate_at(&session, "/profile", now()), NavigationDecision::Allow);
    }

    #[test]
    fn role_gate_allows_only_matching_role() {
        for actual in Role::ALL {
            let session = live(actual, false);
            for required in Role::ALL {
                let expected = if actual == required {
                    NavigationDecision::Allow
                } else {
                    redirect("/unauthorized")
                };
                assert_eq!(evaluate_role(&session, required), expected);
            }
        }
    }

    #[test]
    fn role_gate_rejects_missing_role() {
        let session = Session::anonymous();
        assert_eq!(evaluate_role(&session, Role::Employee), redirect("/unauthorized"));
    }

    #[test]
    fn manager_route_groups() {
        let session = live(Role::Manager, false);
        assert_eq!(
            check_at(&session, "/admin/manage-users", now()),
            redirect("/unauthorized")
        );
        assert_eq!(
            check_at(&session, "/manager/manage-users", now()),
            NavigationDecision::Allow
        );
        assert_eq!(
            check_at(&session, "/employee/tasks", now()),
            redirect("/unauthorized")
        );
    }

    #[test]
    fn wall_clock_variants() {
        let session = Session::authenticated(
            token_expiring_at(Utc::now() + Duration::hours(1)),
            Role::Admin,
            false,
        );
        assert!(evaluate(&session, "/dashboard").is_allowed());
        assert!(check(&session, "/admin/assign-task").is_allowed());
        assert!(!check(&Session::anonymous(), "/profile").is_allowed());
    }
}
