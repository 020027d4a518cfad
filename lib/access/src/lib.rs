//! Session state and navigation access control for the staffdesk client.
//!
//! This crate provides:
//! - Roles (`Role`) and the login grant returned by the backend
//! - Bearer-token inspection (`token`), failing closed on malformed tokens
//! - Session storage over a pluggable key/value store (`SessionContext`)
//! - The access-control gate (`gate`) and the static route table (`route`)
//! - The navigation executor seam (`Navigator`)
//!
//! # Access Control Model
//!
//! Every protected navigation runs three checks in a fixed order:
//! authentication, the forced-password-change trap, then (for role-scoped
//! route groups) the role gate. The checks are a UX convenience only; the
//! backend re-checks authentication and role on every request.
//!
//! # Example
//!
//! ```
//! use staffdesk_access::{
//!     LoginGrant, MemoryStore, NavigationDecision, RecordingNavigator, Role, SessionContext,
//! };
//!
//! let session = SessionContext::new(MemoryStore::new(), RecordingNavigator::new());
//!
//! // Anonymous visitors are sent to the login page.
//! assert_eq!(
//!     session.authorize("/dashboard"),
//!     NavigationDecision::RedirectTo("/login"),
//! );
//!
//! // A first-login grant lands on the forced password change.
//! let grant = LoginGrant {
//!     token: "not-a-jwt".to_string(),
//!     role: Role::Employee,
//!     first_login: true,
//! };
//! let landing = session.establish(&grant, "ann@example.com").expect("store session");
//! assert_eq!(landing, "/force-change-password");
//! ```

pub mod error;
pub mod gate;
pub mod navigation;
pub mod role;
pub mod route;
pub mod session;
pub mod store;
pub mod token;

// Re-export main types at crate root
pub use error::{StoreError, TokenError, UnknownRole};
pub use gate::NavigationDecision;
pub use navigation::{Navigator, RecordingNavigator};
pub use role::Role;
pub use route::RouteGuard;
pub use session::{LoginGrant, RequestCredentials, Session, SessionContext, SessionState};
pub use store::{KeyValueStore, MemoryStore};
