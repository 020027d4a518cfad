//! Client-side session state.
//!
//! A session is four string entries in a [`KeyValueStore`]: the bearer
//! token, the role, the display email and the first-login flag. They are
//! written together at login and removed together at logout.
//! [`SessionContext`] is the only writer; the gate reads [`Session`]
//! snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staffdesk_core::Result;

use crate::error::StoreError;
use crate::gate::{self, NavigationDecision};
use crate::navigation::Navigator;
use crate::role::Role;
use crate::route;
use crate::store::KeyValueStore;
use crate::token;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the role.
pub const ROLE_KEY: &str = "role";
/// Storage key of the display email.
pub const EMAIL_KEY: &str = "email";
/// Storage key of the first-login flag.
pub const FIRST_LOGIN_KEY: &str = "firstLogin";

const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, EMAIL_KEY, FIRST_LOGIN_KEY];

/// The part of the login response that establishes a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    /// Bearer token for subsequent API calls.
    pub token: String,
    /// The account's role.
    pub role: Role,
    /// True until the provisioned password has been changed.
    pub first_login: bool,
}

impl LoginGrant {
    /// Returns where the user lands right after logging in.
    #[must_use]
    pub fn landing_path(&self) -> &'static str {
        if self.first_login {
            route::FORCE_CHANGE_PASSWORD
        } else {
            route::DASHBOARD
        }
    }
}

/// Where a session stands, derived from its token and first-login flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No token, or an expired/unreadable one.
    Anonymous,
    /// Valid token, password change still required.
    MustChangePassword,
    /// Valid token, normal access.
    Active,
}

/// A snapshot of the stored session, as seen by the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<Role>,
    email: Option<String>,
    first_login: bool,
}

impl Session {
    /// A snapshot with nothing stored.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A snapshot of a logged-in session.
    #[must_use]
    pub fn authenticated(token: String, role: Role, first_login: bool) -> Self {
        Self {
            token: Some(token),
            role: Some(role),
            email: None,
            first_login,
        }
    }

    /// Sets the display email.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Returns the bearer token, if present.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the role, if present.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the display email, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns true while the forced password change is pending.
    #[must_use]
    pub fn is_first_login(&self) -> bool {
        self.first_login
    }

    /// Returns true if a token is present and unexpired at `now`.
    #[must_use]
    pub fn has_valid_token_at(&self, now: DateTime<Utc>) -> bool {
        self.token
            .as_deref()
            .is_some_and(|token| !token::is_expired_at(token, now))
    }

    /// Returns the session state at `now`.
    #[must_use]
    pub fn state_at(&self, now: DateTime<Utc>) -> SessionState {
        if !self.has_valid_token_at(now) {
            SessionState::Anonymous
        } else if self.first_login {
            SessionState::MustChangePassword
        } else {
            SessionState::Active
        }
    }
}

/// What the request interceptor should do about authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestCredentials {
    /// No session; send the request without credentials.
    Anonymous,
    /// Attach this bearer token.
    Bearer(String),
    /// A token is stored but expired or unreadable; do not send.
    Expired,
}

/// Typed access to the stored session, plus the navigation executor used
/// for teardown redirects.
#[derive(Debug, Clone)]
pub struct SessionContext<S, N> {
    store: S,
    navigator: N,
}

impl<S: KeyValueStore, N: Navigator> SessionContext<S, N> {
    /// Creates a context over the given store and navigator.
    #[must_use]
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the navigation executor.
    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Returns the stored bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Returns the stored role. An unrecognized value reads as absent.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        let raw = self.store.get(ROLE_KEY)?;
        match raw.parse() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unrecognized stored role");
                None
            }
        }
    }

    /// Returns the stored display email.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.store.get(EMAIL_KEY)
    }

    /// Returns true iff the stored flag is exactly `"true"`.
    #[must_use]
    pub fn is_first_login(&self) -> bool {
        self.store.get(FIRST_LOGIN_KEY).as_deref() == Some("true")
    }

    /// Reads the whole session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            role: self.role(),
            email: self.email(),
            first_login: self.is_first_login(),
        }
    }

    /// Writes all four session fields.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails. Fields written before the failure
    /// are removed again, so the store never holds a partial session.
    pub fn set_session(
        &self,
        token: &str,
        role: Role,
        email: &str,
        first_login: bool,
    ) -> Result<(), StoreError> {
        let first_login = if first_login { "true" } else { "false" };
        let entries = [
            (TOKEN_KEY, token),
            (ROLE_KEY, role.as_str()),
            (EMAIL_KEY, email),
            (FIRST_LOGIN_KEY, first_login),
        ];

        for (key, value) in entries {
            if let Err(e) = self.store.set(key, value) {
                tracing::warn!(key, "session write failed, rolling back");
                self.clear();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Removes every session field. Returns true if a token was present.
    pub fn clear(&self) -> bool {
        let had_token = self.store.get(TOKEN_KEY).is_some();
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
        had_token
    }

    /// Session teardown: clears the store and always redirects to the login
    /// page, even when the store was already empty.
    ///
    /// Repeating it is harmless: the store stays empty and the navigator
    /// ignores a redirect to the current location. Returns true if a session
    /// was present, for logging.
    pub fn logout(&self) -> bool {
        let had_session = SESSION_KEYS
            .iter()
            .any(|key| self.store.get(key).is_some());
        self.clear();
        if had_session {
            tracing::info!("session torn down");
        } else {
            tracing::debug!("teardown on an empty session");
        }
        self.navigator
            .apply(NavigationDecision::RedirectTo(route::LOGIN));
        had_session
    }

    /// Stores the session from a successful login and returns the landing path.
    ///
    /// # Errors
    ///
    /// Returns an error if the session could not be stored.
    pub fn establish(&self, grant: &LoginGrant, email: &str) -> Result<&'static str, StoreError> {
        self.set_session(&grant.token, grant.role, email, grant.first_login)?;
        tracing::info!(role = %grant.role, first_login = grant.first_login, "session established");
        Ok(grant.landing_path())
    }

    /// Finishes a successful password change: the local flag flips to false
    /// and the session is torn down so the user logs in again.
    pub fn complete_password_change(&self) {
        if let Err(e) = self.store.set(FIRST_LOGIN_KEY, "false") {
            tracing::warn!(error = %e, "failed to clear first-login flag");
        }
        self.logout();
    }

    /// Navigation guard evaluated at `now`.
    ///
    /// Runs the full gate for `path`. When authentication fails because a
    /// stored token is expired or unreadable, the stale session is cleared so
    /// it does not outlive the redirect.
    pub fn authorize_at(&self, path: &str, now: DateTime<Utc>) -> NavigationDecision {
        let session = self.snapshot();
        let decision = gate::check_at(&session, path, now);

        let stale = session.token().is_some() && !session.has_valid_token_at(now);
        if stale && decision == NavigationDecision::RedirectTo(route::LOGIN) {
            tracing::info!(path, "clearing expired session");
            self.clear();
        }
        decision
    }

    /// Navigation guard evaluated against the wall clock.
    pub fn authorize(&self, path: &str) -> NavigationDecision {
        self.authorize_at(path, Utc::now())
    }

    /// Request interceptor decision at `now`.
    #[must_use]
    pub fn request_credentials_at(&self, now: DateTime<Utc>) -> RequestCredentials {
        match self.token() {
            None => RequestCredentials::Anonymous,
            Some(token) if token::is_expired_at(&token, now) => RequestCredentials::Expired,
            Some(token) => RequestCredentials::Bearer(token),
        }
    }

    /// Request interceptor decision against the wall clock.
    #[must_use]
    pub fn request_credentials(&self) -> RequestCredentials {
        self.request_credentials_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::store::MemoryStore;
    use crate::token::tests::token_expiring_at;
    use chrono::Duration;

    type TestContext<'a> = SessionContext<&'a MemoryStore, &'a RecordingNavigator>;

    fn context<'a>(store: &'a MemoryStore, navigator: &'a RecordingNavigator) -> TestContext<'a> {
        SessionContext::new(store, navigator)
    }

    fn fresh_token() -> String {
        token_expiring_at(Utc::now() + Duration::hours(1))
    }

    /// Store that rejects writes to one key.
    struct FailingStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.failing_key {
                return Err(StoreError::WriteFailed {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                }
                .into());
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn set_session_writes_all_fields() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);

        session
            .set_session("tok", Role::Manager, "mo@example.com", true)
            .expect("store session");

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("MANAGER"));
        assert_eq!(store.get(EMAIL_KEY).as_deref(), Some("mo@example.com"));
        assert_eq!(store.get(FIRST_LOGIN_KEY).as_deref(), Some("true"));
        assert_eq!(session.role(), Some(Role::Manager));
        assert!(session.is_first_login());
    }

    #[test]
    fn failed_write_leaves_no_partial_session() {
        let store = FailingStore {
            inner: MemoryStore::new(),
            failing_key: EMAIL_KEY,
        };
        let navigator = RecordingNavigator::new();
        let session = SessionContext::new(&store, &navigator);

        let result = session.set_session("tok", Role::Admin, "a@example.com", false);

        assert!(result.is_err());
        assert!(store.inner.is_empty());
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn first_login_flag_is_literal_true_only() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);

        assert!(!session.is_first_login());
        for value in ["false", "TRUE", "1", "yes", ""] {
            store.set(FIRST_LOGIN_KEY, value).expect("set");
            assert!(!session.is_first_login(), "{value}");
        }
        store.set(FIRST_LOGIN_KEY, "true").expect("set");
        assert!(session.is_first_login());
    }

    #[test]
    fn unknown_stored_role_reads_as_absent() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);

        store.set(ROLE_KEY, "SUPERUSER").expect("set");
        assert_eq!(session.role(), None);
    }

    #[test]
    fn snapshot_reflects_store() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        assert_eq!(session.snapshot(), Session::anonymous());

        session
            .set_session("tok", Role::Employee, "em@example.com", false)
            .expect("store session");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.token(), Some("tok"));
        assert_eq!(snapshot.role(), Some(Role::Employee));
        assert_eq!(snapshot.email(), Some("em@example.com"));
        assert!(!snapshot.is_first_login());
    }

    #[test]
    fn session_states() {
        let now = Utc::now();
        let live = token_expiring_at(now + Duration::hours(1));
        let dead = token_expiring_at(now - Duration::hours(1));

        assert_eq!(Session::anonymous().state_at(now), SessionState::Anonymous);
        assert_eq!(
            Session::authenticated(dead, Role::Admin, false).state_at(now),
            SessionState::Anonymous
        );
        assert_eq!(
            Session::authenticated(live.clone(), Role::Admin, true).state_at(now),
            SessionState::MustChangePassword
        );
        assert_eq!(
            Session::authenticated(live, Role::Admin, false).state_at(now),
            SessionState::Active
        );
    }

    #[test]
    fn teardown_twice_only_ever_targets_login() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        session
            .set_session(&fresh_token(), Role::Admin, "ad@example.com", false)
            .expect("store session");

        assert!(session.logout());
        assert!(!session.logout());

        assert!(store.is_empty());
        let redirects = navigator.redirects();
        assert!(!redirects.is_empty());
        assert!(redirects.iter().all(|path| path == "/login"), "{redirects:?}");
    }

    #[test]
    fn logout_on_empty_store_still_redirects() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);

        assert!(!session.logout());

        assert!(store.is_empty());
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn login_with_first_login_lands_on_password_change() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);

        let grant: LoginGrant = serde_json::from_value(serde_json::json!({
            "token": fresh_token(),
            "role": "EMPLOYEE",
            "firstLogin": true,
        }))
        .expect("login response");

        let landing = session
            .establish(&grant, "em@example.com")
            .expect("establish");
        assert_eq!(landing, "/force-change-password");
        assert_eq!(
            session.authorize("/dashboard"),
            NavigationDecision::RedirectTo("/force-change-password")
        );
        assert_eq!(
            session.authorize("/force-change-password"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn login_without_first_login_lands_on_dashboard() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        let grant = LoginGrant {
            token: fresh_token(),
            role: Role::Admin,
            first_login: false,
        };

        assert_eq!(session.establish(&grant, "ad@example.com").expect("establish"), "/dashboard");
        assert!(session.authorize("/dashboard").is_allowed());
    }

    #[test]
    fn expired_token_on_profile_redirects_and_clears() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        let now = Utc::now();
        session
            .set_session(
                &token_expiring_at(now - Duration::minutes(1)),
                Role::Employee,
                "em@example.com",
                false,
            )
            .expect("store session");

        assert_eq!(
            session.authorize_at("/profile", now),
            NavigationDecision::RedirectTo("/login")
        );
        assert!(store.is_empty());
        // The router performs the redirect; teardown does not add another.
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn expired_token_survives_public_navigation() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        let now = Utc::now();
        session
            .set_session(
                &token_expiring_at(now - Duration::minutes(1)),
                Role::Employee,
                "em@example.com",
                false,
            )
            .expect("store session");

        assert!(session.authorize_at("/login", now).is_allowed());
        assert!(!store.is_empty());
    }

    #[test]
    fn manager_is_kept_out_of_admin_pages() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        session
            .set_session(&fresh_token(), Role::Manager, "mo@example.com", false)
            .expect("store session");

        assert_eq!(
            session.authorize("/admin/manage-users"),
            NavigationDecision::RedirectTo("/unauthorized")
        );
        assert!(session.authorize("/manager/manage-users").is_allowed());
        // Role mismatch keeps the session.
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn unknown_pages_under_a_role_prefix_stay_gated() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);

        assert_eq!(
            session.authorize("/admin/nope"),
            NavigationDecision::RedirectTo("/login")
        );
        assert!(session.authorize("/nowhere").is_allowed());

        session
            .set_session(&fresh_token(), Role::Employee, "em@example.com", false)
            .expect("store session");
        assert_eq!(
            session.authorize("/admin/nope"),
            NavigationDecision::RedirectTo("/unauthorized")
        );
        assert!(session.authorize("/employee/nope").is_allowed());
    }

    #[test]
    fn password_change_forces_new_login() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        session
            .set_session(&fresh_token(), Role::Employee, "em@example.com", true)
            .expect("store session");

        session.complete_password_change();

        assert!(store.is_empty());
        assert_eq!(navigator.last().as_deref(), Some("/login"));
        assert_eq!(
            session.authorize("/dashboard"),
            NavigationDecision::RedirectTo("/login")
        );
    }

    #[test]
    fn request_credentials() {
        let store = MemoryStore::new();
        let navigator = RecordingNavigator::new();
        let session = context(&store, &navigator);
        let now = Utc::now();

        assert_eq!(session.request_credentials_at(now), RequestCredentials::Anonymous);

        let live = token_expiring_at(now + Duration::hours(1));
        store.set(TOKEN_KEY, &live).expect("set");
        assert_eq!(
            session.request_credentials_at(now),
            RequestCredentials::Bearer(live)
        );

        store.set(TOKEN_KEY, "broken").expect("set");
        assert_eq!(session.request_credentials_at(now), RequestCredentials::Expired);
    }
}
