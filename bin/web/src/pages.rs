//! Page components for the application.
//!
//! Each page is a Leptos component that renders one route. Pages load their
//! data on mount with independent requests and show failures inline.

pub mod approvals;
pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod errors;
pub mod leaves;
pub mod password;
pub mod profile;
pub mod reports;
pub mod tasks;

// Re-export all page components for convenient access
pub use approvals::PendingApprovalsPage;
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage};
pub use dashboard::DashboardPage;
pub use employees::{AddUserPage, EditUserPage, ManageUsersPage};
pub use errors::{NotFoundPage, UnauthorizedPage};
pub use leaves::{ApplyLeavePage, LeaveApprovalPage};
pub use password::ForceChangePasswordPage;
pub use profile::ProfilePage;
pub use reports::{ApproveReportsPage, MyReportsPage};
pub use tasks::{AssignTaskPage, MyTasksPage};
