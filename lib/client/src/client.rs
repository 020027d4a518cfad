//! HTTP plumbing shared by every endpoint.
//!
//! All calls go through [`ApiClient::send`], which runs the request
//! interceptor before the network and the response interceptor after it.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use staffdesk_access::{KeyValueStore, Navigator, RequestCredentials, SessionContext};
use staffdesk_core::Result;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Whether a call carries the session's credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// Sent without credentials and never rejected locally.
    Public,
    /// Sent with the stored bearer token, if any.
    Session,
}

/// REST API client bound to the stored session.
///
/// Every non-public call reads the token at send time, so a login or logout
/// between calls takes effect immediately.
#[derive(Debug)]
pub struct ApiClient<S, N> {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionContext<S, N>,
}

impl<S: KeyValueStore, N: Navigator> ApiClient<S, N> {
    /// Creates a client with a default `reqwest` client.
    #[must_use]
    pub fn new(config: ClientConfig, session: SessionContext<S, N>) -> Self {
        Self::with_http(reqwest::Client::new(), config, session)
    }

    /// Creates a client over an existing `reqwest` client.
    #[must_use]
    pub fn with_http(
        http: reqwest::Client,
        config: ClientConfig,
        session: SessionContext<S, N>,
    ) -> Self {
        Self {
            http,
            config,
            session,
        }
    }

    /// Returns the session this client reads credentials from.
    pub fn session(&self) -> &SessionContext<S, N> {
        &self.session
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request interceptor.
    ///
    /// An expired or unreadable token tears the session down and fails the
    /// call locally; a valid one is attached as a bearer token. Public calls
    /// never carry credentials: a stale token is dropped from the store
    /// without leaving the page, and the call goes through.
    pub(crate) fn prepare(&self, request: RequestBuilder, access: Access) -> Result<RequestBuilder, ApiError> {
        if access == Access::Public {
            if self.session.request_credentials() == RequestCredentials::Expired {
                tracing::info!("dropping expired session before public call");
                self.session.clear();
            }
            return Ok(request);
        }

        match self.session.request_credentials() {
            RequestCredentials::Anonymous => Ok(request),
            RequestCredentials::Bearer(token) => Ok(request.bearer_auth(token)),
            RequestCredentials::Expired => {
                tracing::info!("stored token expired, tearing down session");
                self.session.logout();
                Err(ApiError::token_expired().into())
            }
        }
    }

    /// Response interceptor for non-success answers.
    ///
    /// A 401 tears the session down and redirects to the login page, whether
    /// or not a session was still stored. Several in-flight calls may all
    /// land here; the store stays empty and every redirect targets `/login`.
    pub(crate) fn reject(&self, status: StatusCode, body: &str) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("credentials rejected, tearing down session");
            self.session.logout();
        }
        ApiError::from_response(status, body)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, path, "api request");

        let mut request = self.http.request(method, self.config.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.prepare(request, access)?;

        let response = request.send().await.map_err(ApiError::network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(self.reject(status, &body).into())
    }

    /// Sends a request and decodes a JSON response.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, access, body).await?;
        let text = response.text().await.map_err(ApiError::network)?;
        let value = serde_json::from_str(&text).map_err(ApiError::decode)?;
        Ok(value)
    }

    /// Sends a request whose response is a confirmation message.
    pub(crate) async fn send_message<B>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        body: Option<&B>,
    ) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, access, body).await?;
        let text = response.text().await.map_err(ApiError::network)?;
        Ok(confirmation(&text))
    }

    /// `GET` returning JSON, with session credentials.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json::<(), T>(Method::GET, path, Access::Session, None)
            .await
    }

    /// `PUT` without a body, with session credentials.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<String, ApiError> {
        self.send_message::<()>(Method::PUT, path, Access::Session, None)
            .await
    }
}

/// Extracts the text of a confirmation body, which may be a bare string,
/// a JSON string, or an object with `message`.
fn confirmation(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(message)) => message,
        Ok(Value::Object(fields)) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;
    use chrono::{Duration, Utc};
    use reqwest::header::AUTHORIZATION;
    use staffdesk_access::{MemoryStore, RecordingNavigator, Role};
    use std::rc::Rc;

    struct Harness {
        store: Rc<MemoryStore>,
        navigator: Rc<RecordingNavigator>,
        client: ApiClient<Rc<MemoryStore>, Rc<RecordingNavigator>>,
    }

    fn harness() -> Harness {
        let store = Rc::new(MemoryStore::new());
        let navigator = Rc::new(RecordingNavigator::new());
        let session = SessionContext::new(Rc::clone(&store), Rc::clone(&navigator));
        // Discard port: any call that reaches the network is refused.
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9/api"), session);
        Harness {
            store,
            navigator,
            client,
        }
    }

    fn token_expiring_in(delta: Duration) -> String {
        use base64::Engine;
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;

        let exp = (Utc::now() + delta).timestamp();
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"asha@example.com","exp":{exp}}}"#));
        format!("{header}.{claims}.signature")
    }

    fn sign_in(h: &Harness, token: &str) {
        h.client
            .session()
            .set_session(token, Role::Employee, "asha@example.com", false)
            .expect("session stored");
    }

    fn authorization(h: &Harness, access: Access) -> Option<String> {
        let request = h
            .client
            .prepare(h.client.http.get("http://127.0.0.1:9/api/me"), access)
            .expect("prepared")
            .build()
            .expect("request builds");
        request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[test]
    fn valid_token_is_attached() {
        let h = harness();
        let token = token_expiring_in(Duration::hours(1));
        sign_in(&h, &token);

        assert_eq!(authorization(&h, Access::Session), Some(format!("Bearer {token}")));
        assert!(h.navigator.redirects().is_empty());
    }

    #[test]
    fn no_token_sends_anonymously() {
        let h = harness();
        assert_eq!(authorization(&h, Access::Session), None);
    }

    #[test]
    fn public_calls_drop_a_stale_token_without_redirecting() {
        let h = harness();
        sign_in(&h, &token_expiring_in(-Duration::minutes(5)));

        assert_eq!(authorization(&h, Access::Public), None);
        assert!(h.store.is_empty());
        assert!(h.navigator.redirects().is_empty());
    }

    #[test]
    fn public_calls_keep_a_valid_session() {
        let h = harness();
        let token = token_expiring_in(Duration::hours(1));
        sign_in(&h, &token);

        assert_eq!(authorization(&h, Access::Public), None);
        assert_eq!(h.client.session().token(), Some(token));
        assert!(h.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn expired_token_is_rejected_locally() {
        let h = harness();
        sign_in(&h, &token_expiring_in(-Duration::minutes(5)));

        let err = h
            .client
            .get::<Value>("/me")
            .await
            .expect_err("call must not proceed");
        assert_eq!(err.current_context().kind(), ApiErrorKind::TokenExpired);
        assert!(h.store.is_empty());
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn malformed_token_is_rejected_locally() {
        let h = harness();
        sign_in(&h, "not-a-token");

        let err = h
            .client
            .put_empty("/employee/accept-task/1")
            .await
            .expect_err("call must not proceed");
        assert_eq!(err.current_context().kind(), ApiErrorKind::TokenExpired);
        assert!(h.store.is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let h = harness();
        let err = h
            .client
            .get::<Value>("/me")
            .await
            .expect_err("nothing listens on the discard port");
        assert_eq!(err.current_context().kind(), ApiErrorKind::Network);
        assert!(h.navigator.redirects().is_empty());
    }

    #[test]
    fn repeated_unauthorized_responses_only_target_login() {
        let h = harness();
        sign_in(&h, &token_expiring_in(Duration::hours(1)));

        let first = h.client.reject(StatusCode::UNAUTHORIZED, "");
        let second = h.client.reject(StatusCode::UNAUTHORIZED, "");

        assert_eq!(first.kind(), ApiErrorKind::Unauthorized);
        assert_eq!(second.kind(), ApiErrorKind::Unauthorized);
        assert!(h.store.is_empty());
        let redirects = h.navigator.redirects();
        assert!(!redirects.is_empty());
        assert!(redirects.iter().all(|path| path == "/login"), "{redirects:?}");
    }

    #[test]
    fn unauthorized_without_stored_session_still_redirects() {
        let h = harness();

        let err = h.client.reject(StatusCode::UNAUTHORIZED, "");

        assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
        assert!(h.store.is_empty());
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn other_failures_keep_the_session() {
        let h = harness();
        sign_in(&h, &token_expiring_in(Duration::hours(1)));

        let err = h.client.reject(StatusCode::FORBIDDEN, r#"{"message":"Access denied"}"#);
        assert_eq!(err.kind(), ApiErrorKind::Forbidden);
        assert_eq!(err.message(), "Access denied");
        assert!(!h.store.is_empty());
        assert!(h.navigator.redirects().is_empty());
    }

    #[test]
    fn confirmation_bodies() {
        assert_eq!(confirmation("Leave applied"), "Leave applied");
        assert_eq!(confirmation("\"Task accepted\""), "Task accepted");
        assert_eq!(confirmation(r#"{"message":"Report submitted"}"#), "Report submitted");
        assert_eq!(confirmation(""), "");
    }
}
