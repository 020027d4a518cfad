//! First-login password change.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdesk_client::forms::PasswordChangeForm;

use crate::browser;
use crate::components::{Feedback, FeedbackBanner};
use crate::pages::profile::PasswordFields;

/// Replaces the provisioned password. On success the session ends and the
/// user signs in again with the new password.
#[component]
pub fn ForceChangePasswordPage() -> impl IntoView {
    let form = RwSignal::new(PasswordChangeForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match form.with(PasswordChangeForm::validate) {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            let api = browser::api();
            match api.change_password(&request).await {
                Ok(_) => {
                    tracing::info!("provisioned password replaced");
                    api.session().complete_password_change();
                }
                Err(e) => {
                    feedback.set(Some(Feedback::from_report(&e)));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-box" on:submit=on_submit>
                <h1>"Set a new password"</h1>
                <p class="muted">
                    "Your account was created with a temporary password. Choose a new one to continue."
                </p>
                <FeedbackBanner feedback/>
                <PasswordFields form/>
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    "Change password"
                </button>
            </form>
        </div>
    }
}
