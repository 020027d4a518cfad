//! Core types shared by every staffdesk crate.
//!
//! This crate provides the `Result` alias used for layered error reporting
//! and the strongly-typed identifiers of the records served by the
//! employee-management REST API.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{EmployeeId, LeaveId, ParseIdError, ReportId, TaskId};
