//! Self-service endpoints, shared by the manager and employee route groups.

use reqwest::Method;
use staffdesk_access::{KeyValueStore, Navigator};
use staffdesk_core::{Result, TaskId};
use tracing::instrument;

use crate::client::{Access, ApiClient};
use crate::error::ApiError;
use crate::scope::SelfServiceScope;
use crate::types::{LeaveApplication, LeaveRequest, Report, ReportSubmission, Task};

fn path(scope: SelfServiceScope, rest: &str) -> String {
    format!("/{}/{rest}", scope.segment())
}

impl<S: KeyValueStore, N: Navigator> ApiClient<S, N> {
    /// The caller's leave requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn my_leaves(&self, scope: SelfServiceScope) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get(&path(scope, "my-leaves")).await
    }

    /// Files a leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is refused, for example on
    /// overlapping dates.
    #[instrument(skip(self, application), fields(scope = scope.segment()))]
    pub async fn apply_leave(
        &self,
        scope: SelfServiceScope,
        application: &LeaveApplication,
    ) -> Result<String, ApiError> {
        self.send_message(Method::POST, &path(scope, "apply-leave"), Access::Session, Some(application))
            .await
    }

    /// Every task assigned to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn my_tasks(&self, scope: SelfServiceScope) -> Result<Vec<Task>, ApiError> {
        self.get(&path(scope, "my-tasks")).await
    }

    /// Accepted tasks a report can be submitted against.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn in_progress_tasks(&self, scope: SelfServiceScope) -> Result<Vec<Task>, ApiError> {
        self.get(&path(scope, "in-progress-tasks")).await
    }

    /// Accepts a pending task, moving it to in-progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be accepted.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn accept_task(&self, scope: SelfServiceScope, id: TaskId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("accept-task/{id}"))).await
    }

    /// The caller's submitted reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn my_reports(&self, scope: SelfServiceScope) -> Result<Vec<Report>, ApiError> {
        self.get(&path(scope, "my-reports")).await
    }

    /// Submits a report against an in-progress task.
    ///
    /// # Errors
    ///
    /// Returns an error if the report is refused.
    #[instrument(skip(self, submission), fields(scope = scope.segment()))]
    pub async fn submit_report(
        &self,
        scope: SelfServiceScope,
        submission: &ReportSubmission,
    ) -> Result<String, ApiError> {
        self.send_message(Method::POST, &path(scope, "submit-report"), Access::Session, Some(submission))
            .await
    }
}
