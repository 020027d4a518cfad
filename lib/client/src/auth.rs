//! Public authentication endpoints.

use reqwest::Method;
use staffdesk_access::{KeyValueStore, LoginGrant, Navigator};
use staffdesk_core::Result;
use tracing::instrument;

use crate::client::{Access, ApiClient};
use crate::error::{ApiError, ApiErrorKind};
use crate::types::{ForgotPasswordRequest, LoginRequest, RegistrationRequest};

impl<S: KeyValueStore, N: Navigator> ApiClient<S, N> {
    /// `POST /auth/login`.
    ///
    /// Returns the grant to store with
    /// [`SessionContext::establish`](staffdesk_access::SessionContext::establish).
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are refused or the backend is
    /// unreachable.
    #[instrument(skip_all)]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, ApiError> {
        self.send_json(Method::POST, "/auth/login", Access::Public, Some(request))
            .await
    }

    /// `POST /auth/register`. New accounts start out pending approval.
    ///
    /// # Errors
    ///
    /// Returns an error if the registration is refused.
    #[instrument(skip_all)]
    pub async fn register(&self, request: &RegistrationRequest) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/auth/register", Access::Public, Some(request))
            .await
    }

    /// `POST /auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the request.
    #[instrument(skip_all)]
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<String, ApiError> {
        self.send_message(
            Method::POST,
            "/auth/forgot-password",
            Access::Public,
            Some(request),
        )
        .await
    }
}

/// Rewords a login failure for the login form.
#[must_use]
pub fn login_failure_message(error: &ApiError) -> String {
    match error.kind() {
        ApiErrorKind::Network | ApiErrorKind::Decode => {
            return "Login failed. Please try again.".to_string();
        }
        _ => {}
    }

    let message = error.message().to_lowercase();
    if message.contains("pending") {
        "Your account is pending approval".to_string()
    } else if message.contains("rejected") {
        "Your account has been rejected".to_string()
    } else if message.contains("invalid") {
        "Invalid email or password".to_string()
    } else {
        error.message().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn refused(body: &str) -> ApiError {
        ApiError::from_response(StatusCode::BAD_REQUEST, body)
    }

    #[test]
    fn pending_account() {
        assert_eq!(
            login_failure_message(&refused("User is PENDING approval")),
            "Your account is pending approval"
        );
    }

    #[test]
    fn rejected_account() {
        assert_eq!(
            login_failure_message(&refused(r#"{"message":"Account Rejected by admin"}"#)),
            "Your account has been rejected"
        );
    }

    #[test]
    fn invalid_credentials() {
        assert_eq!(
            login_failure_message(&refused("Invalid credentials")),
            "Invalid email or password"
        );
    }

    #[test]
    fn other_messages_pass_through() {
        assert_eq!(
            login_failure_message(&refused("Account is inactive")),
            "Account is inactive"
        );
    }

    #[test]
    fn transport_failures_are_generic() {
        assert_eq!(
            login_failure_message(&ApiError::network("refused")),
            "Login failed. Please try again."
        );
    }
}
