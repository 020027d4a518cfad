//! Endpoints for the signed-in account.

use reqwest::Method;
use staffdesk_access::{KeyValueStore, Navigator};
use staffdesk_core::Result;
use tracing::instrument;

use crate::client::{Access, ApiClient};
use crate::error::ApiError;
use crate::types::{ChangePasswordRequest, Employee, ProfileUpdate};

impl<S: KeyValueStore, N: Navigator> ApiClient<S, N> {
    /// `GET /me`.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded.
    #[instrument(skip_all)]
    pub async fn me(&self) -> Result<Employee, ApiError> {
        self.get("/me").await
    }

    /// `PUT /me`.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is refused.
    #[instrument(skip_all)]
    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<String, ApiError> {
        self.send_message(Method::PUT, "/me", Access::Session, Some(update))
            .await
    }

    /// `POST /change-password`.
    ///
    /// On success the caller finishes with
    /// [`SessionContext::complete_password_change`](staffdesk_access::SessionContext::complete_password_change).
    ///
    /// # Errors
    ///
    /// Returns an error if the old password is wrong or the call fails.
    #[instrument(skip_all)]
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<String, ApiError> {
        self.send_message(Method::POST, "/change-password", Access::Session, Some(request))
            .await
    }
}
