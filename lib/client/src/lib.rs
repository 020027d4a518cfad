//! REST API client for the staffdesk backend.
//!
//! This crate provides:
//! - `ApiClient`: a `reqwest` client wired to the stored session, with the
//!   request interceptor (bearer token, local rejection of expired tokens)
//!   and the response interceptor (teardown on 401)
//! - `ApiError`: every failure normalized once at the HTTP boundary
//! - Wire types for employees, tasks, leave requests and reports
//! - Presence-check form validation producing those wire types
//!
//! Endpoints are grouped by area: `auth`, `profile`, `management` (admin and
//! manager scopes) and `self_service` (manager and employee scopes).

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod management;
pub mod profile;
pub mod scope;
pub mod self_service;
pub mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use auth::login_failure_message;
pub use error::{ApiError, ApiErrorKind, FormError};
pub use scope::{ManagementScope, SelfServiceScope};
