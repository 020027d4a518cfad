//! Wire types exchanged with the REST API.
//!
//! Field names follow the backend's camelCase JSON. Status enums keep any
//! value the backend adds later as `Other` instead of failing the whole
//! response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staffdesk_access::Role;
use staffdesk_core::{EmployeeId, LeaveId, ReportId, TaskId};
use std::fmt;

pub use staffdesk_access::LoginGrant;

/// Defines a status enum serialized as its upper-case wire string, with a
/// catch-all `Other` variant for values this client does not know yet.
macro_rules! wire_status {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal, $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Returns the wire string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value,
                }
            }

            /// Returns a display label.
            #[must_use]
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_status!(
    /// Account lifecycle status.
    UserStatus {
        Pending => "PENDING", "Pending",
        Active => "ACTIVE", "Active",
        Inactive => "INACTIVE", "Inactive",
        Rejected => "REJECTED", "Rejected",
    }
);

wire_status!(
    /// Task lifecycle status.
    TaskStatus {
        Pending => "PENDING", "Pending",
        InProgress => "IN_PROGRESS", "In progress",
        Completed => "COMPLETED", "Completed",
    }
);

wire_status!(
    /// Review status of leave requests and reports.
    ApprovalStatus {
        Pending => "PENDING", "Pending",
        Approved => "APPROVED", "Approved",
        Rejected => "REJECTED", "Rejected",
    }
);

impl UserStatus {
    /// Returns the status an activation toggle moves to, if any.
    #[must_use]
    pub fn toggled(&self) -> Option<Self> {
        match self {
            Self::Active => Some(Self::Inactive),
            Self::Inactive => Some(Self::Active),
            _ => None,
        }
    }
}

/// An employee record as returned by list, detail and profile endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Employee {
    /// Returns the registration date, when the backend sent one.
    #[must_use]
    pub fn registered_on(&self) -> Option<NaiveDate> {
        let created_at = self.created_at.as_deref()?;
        let date = created_at.get(..10)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

/// A person referenced from another record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A task assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub status: TaskStatus,
    /// The assignee.
    #[serde(default)]
    pub employee: Option<PersonRef>,
    /// Who assigned the task. Absent when an administrator assigned it.
    #[serde(default)]
    pub manager: Option<PersonRef>,
}

impl Task {
    /// Returns the assigner's display name.
    #[must_use]
    pub fn assigned_by(&self) -> &str {
        self.manager
            .as_ref()
            .and_then(|m| m.full_name.as_deref())
            .unwrap_or("Admin")
    }
}

/// A leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: LeaveId,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub employee: Option<PersonRef>,
}

impl LeaveRequest {
    /// Number of calendar days covered, both ends inclusive.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A work report submitted against a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub description: String,
    pub status: ApprovalStatus,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/forgot-password` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// `POST /change-password` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// `PUT /me` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub department: String,
    pub designation: String,
}

/// Body of `add-employee` and `update-employee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub designation: String,
    /// Only sent by edits that change the account status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// `POST /{scope}/assign-task` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    pub employee_id: EmployeeId,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    /// Role of the assignee.
    pub role: Role,
}

/// `POST /{self}/apply-leave` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// `POST /{self}/submit-report` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    pub task_id: TaskId,
    pub description: String,
}
