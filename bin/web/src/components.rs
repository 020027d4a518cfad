//! Small building blocks shared by the pages.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use rootcause::Report;
use staffdesk_access::route;
use staffdesk_client::ApiError;

/// Outcome of the last action on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    /// Feedback for a failed API call.
    #[must_use]
    pub fn from_report(report: &Report<ApiError>) -> Self {
        Self::Error(describe(report))
    }
}

/// Returns the user-facing message of a failed API call.
#[must_use]
pub fn describe(report: &Report<ApiError>) -> String {
    report.current_context().message().to_string()
}

/// Converts an API result into a value a resource can hold.
pub fn loaded<T>(result: staffdesk_core::Result<T, ApiError>) -> Result<T, String> {
    result.map_err(|e| describe(&e))
}

/// Runs an API mutation in the background, reports its outcome through
/// `feedback`, then calls `after` whatever the outcome.
///
/// An empty confirmation from the backend is replaced by `fallback`.
pub fn perform<F>(
    feedback: RwSignal<Option<Feedback>>,
    fallback: &'static str,
    call: F,
    after: impl FnOnce() + 'static,
) where
    F: Future<Output = staffdesk_core::Result<String, ApiError>> + 'static,
{
    spawn_local(async move {
        let outcome = match call.await {
            Ok(message) if message.is_empty() => Feedback::Success(fallback.to_string()),
            Ok(message) => Feedback::Success(message),
            Err(e) => Feedback::from_report(&e),
        };
        feedback.set(Some(outcome));
        after();
    });
}

/// Inline success or error message.
#[component]
pub fn FeedbackBanner(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|feedback| match feedback {
            Feedback::Success(message) => {
                view! { <div class="alert alert-success">{message}</div> }.into_any()
            }
            Feedback::Error(message) => {
                view! { <div class="alert alert-error">{message}</div> }.into_any()
            }
        })
    }
}

/// Page title with a way back to the dashboard.
#[component]
pub fn PageHeader(title: &'static str) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>{title}</h1>
            <A href=route::DASHBOARD>"Back to dashboard"</A>
        </div>
    }
}

/// Coloured label for a wire status.
#[component]
pub fn StatusBadge(#[prop(into)] label: String, #[prop(into)] status: String) -> impl IntoView {
    let class = format!("badge badge-{}", status.to_lowercase().replace('_', "-"));
    view! { <span class=class>{label}</span> }
}

/// Placeholder shown while a resource loads.
#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}

/// Inline load failure.
#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! { <div class="alert alert-error">{message}</div> }
}

/// Placeholder for an empty list.
#[component]
pub fn Empty(message: &'static str) -> impl IntoView {
    view! { <p class="empty">{message}</p> }
}
