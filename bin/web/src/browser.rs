//! Browser bindings for the session.
//!
//! [`LocalStorage`] and [`BrowserNavigator`] are zero-sized handles onto
//! `window.localStorage` and `window.location`, so a session context can be
//! built wherever a component needs one. Outside the browser bundle they
//! behave as an empty, read-only store and a navigator that only logs.

use staffdesk_access::{KeyValueStore, Navigator, SessionContext, StoreError};
use staffdesk_client::ApiClient;
use staffdesk_core::Result;

use crate::config;

/// Session context bound to the browser.
pub type BrowserSession = SessionContext<LocalStorage, BrowserNavigator>;

/// API client bound to the browser session.
pub type BrowserApi = ApiClient<LocalStorage, BrowserNavigator>;

/// Returns the browser session.
#[must_use]
pub fn session() -> BrowserSession {
    SessionContext::new(LocalStorage, BrowserNavigator)
}

/// Returns an API client over the browser session.
#[must_use]
pub fn api() -> BrowserApi {
    ApiClient::new(config::client_config(), session())
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

/// Full-page navigation through `window.location`.
///
/// Teardown redirects replace the current history entry so the back button
/// cannot return to a page of the torn-down session.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        let Some(storage) = storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, error = ?e, "failed to remove session entry");
        }
    }
}

#[cfg(not(feature = "csr"))]
impl KeyValueStore for LocalStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable.into())
    }

    fn remove(&self, _key: &str) {}
}

/// A redirect to the page already shown is dropped, which makes repeated
/// teardowns (several in-flight 401s, a second logout click) a no-op.
#[cfg(any(feature = "csr", test))]
fn needs_redirect(current: Option<&str>, target: &str) -> bool {
    current != Some(target)
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(location) = web_sys::window().map(|w| w.location()) else {
                tracing::warn!(path, "no window to redirect");
                return;
            };
            let current = location.pathname().ok();
            if !needs_redirect(current.as_deref(), path) {
                tracing::debug!(path, "already at redirect target");
                return;
            }
            if let Err(e) = location.replace(path) {
                tracing::warn!(path, error = ?e, "failed to replace location");
            }
        }
        #[cfg(not(feature = "csr"))]
        tracing::debug!(path, "redirect requested outside the browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_to_current_page_is_skipped() {
        assert!(!needs_redirect(Some("/login"), "/login"));
        assert!(needs_redirect(Some("/dashboard"), "/login"));
        assert!(needs_redirect(None, "/login"));
    }
}
