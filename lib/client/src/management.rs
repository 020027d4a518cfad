//! Management endpoints, shared by the admin and manager route groups.
//!
//! Account approvals, the employee directory, leave review, task assignment
//! and report review. Every call is scoped by [`ManagementScope`]; the one
//! admin-only call, [`ApiClient::set_employee_status`], takes no scope.

use reqwest::Method;
use staffdesk_access::{KeyValueStore, Navigator};
use staffdesk_core::{EmployeeId, LeaveId, ReportId, Result};
use tracing::instrument;

use crate::client::{Access, ApiClient};
use crate::error::ApiError;
use crate::scope::ManagementScope;
use crate::types::{Employee, EmployeeDraft, LeaveRequest, Report, Task, TaskAssignment, UserStatus};

fn path(scope: ManagementScope, rest: &str) -> String {
    format!("/{}/{rest}", scope.segment())
}

impl<S: KeyValueStore, N: Navigator> ApiClient<S, N> {
    /// Accounts awaiting approval.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn pending_users(&self, scope: ManagementScope) -> Result<Vec<Employee>, ApiError> {
        self.get(&path(scope, "pending-users")).await
    }

    /// Approves a pending account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the approval.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn approve_user(&self, scope: ManagementScope, id: EmployeeId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("approve/{id}"))).await
    }

    /// Rejects a pending account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the rejection.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn reject_user(&self, scope: ManagementScope, id: EmployeeId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("reject/{id}"))).await
    }

    /// Every employee visible to the scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn employees(&self, scope: ManagementScope) -> Result<Vec<Employee>, ApiError> {
        self.get(&path(scope, "view-employees")).await
    }

    /// Active accounts, used to pick task assignees and for dashboard counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn active_users(&self, scope: ManagementScope) -> Result<Vec<Employee>, ApiError> {
        self.get(&path(scope, "active-users")).await
    }

    /// Creates an account. The backend mails the provisioned password.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is refused.
    #[instrument(skip(self, draft), fields(scope = scope.segment()))]
    pub async fn add_employee(&self, scope: ManagementScope, draft: &EmployeeDraft) -> Result<String, ApiError> {
        self.send_message(Method::POST, &path(scope, "add-employee"), Access::Session, Some(draft))
            .await
    }

    /// One employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn employee(&self, scope: ManagementScope, id: EmployeeId) -> Result<Employee, ApiError> {
        self.get(&path(scope, &format!("employee/{id}"))).await
    }

    /// Updates an employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is refused.
    #[instrument(skip(self, draft), fields(scope = scope.segment()))]
    pub async fn update_employee(
        &self,
        scope: ManagementScope,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<String, ApiError> {
        self.send_message(
            Method::PUT,
            &path(scope, &format!("update-employee/{id}")),
            Access::Session,
            Some(draft),
        )
        .await
    }

    /// Activates or deactivates an account. Administrators only.
    ///
    /// # Errors
    ///
    /// Returns an error if the change is refused.
    #[instrument(skip(self))]
    pub async fn set_employee_status(&self, id: EmployeeId, status: &UserStatus) -> Result<String, ApiError> {
        self.put_empty(&format!("/admin/employee/status/{id}?userStatus={}", status.as_str()))
            .await
    }

    /// Leave requests awaiting review.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn pending_leaves(&self, scope: ManagementScope) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get(&path(scope, "pending")).await
    }

    /// Approves a leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the approval is refused.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn approve_leave(&self, scope: ManagementScope, id: LeaveId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("leave/approve/{id}"))).await
    }

    /// Rejects a leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the rejection is refused.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn reject_leave(&self, scope: ManagementScope, id: LeaveId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("leave/reject/{id}"))).await
    }

    /// Tasks this scope has assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn assigned_tasks(&self, scope: ManagementScope) -> Result<Vec<Task>, ApiError> {
        self.get(&path(scope, "my-assigned-tasks")).await
    }

    /// Assigned tasks not yet accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn pending_tasks(&self, scope: ManagementScope) -> Result<Vec<Task>, ApiError> {
        self.get(&path(scope, "pending-tasks")).await
    }

    /// Assigns a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment is refused.
    #[instrument(skip(self, assignment), fields(scope = scope.segment()))]
    pub async fn assign_task(&self, scope: ManagementScope, assignment: &TaskAssignment) -> Result<String, ApiError> {
        self.send_message(Method::POST, &path(scope, "assign-task"), Access::Session, Some(assignment))
            .await
    }

    /// Reports awaiting review.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn pending_reports(&self, scope: ManagementScope) -> Result<Vec<Report>, ApiError> {
        self.get(&path(scope, "pending-reports")).await
    }

    /// Approves a report; the backend completes its task.
    ///
    /// # Errors
    ///
    /// Returns an error if the approval is refused.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn approve_report(&self, scope: ManagementScope, id: ReportId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("approve-report/{id}"))).await
    }

    /// Rejects a report.
    ///
    /// # Errors
    ///
    /// Returns an error if the rejection is refused.
    #[instrument(skip(self), fields(scope = scope.segment()))]
    pub async fn reject_report(&self, scope: ManagementScope, id: ReportId) -> Result<String, ApiError> {
        self.put_empty(&path(scope, &format!("reject-report/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_paths() {
        assert_eq!(path(ManagementScope::Admin, "pending-users"), "/admin/pending-users");
        assert_eq!(
            path(ManagementScope::Manager, &format!("leave/approve/{}", LeaveId::new(5))),
            "/manager/leave/approve/5"
        );
    }
}
