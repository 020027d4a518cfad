//! Public authentication pages.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use staffdesk_access::route;
use staffdesk_client::forms::{ForgotPasswordForm, LoginForm, RegistrationForm};
use staffdesk_client::login_failure_message;

use crate::browser;
use crate::components::{Feedback, FeedbackBanner};

/// Login page.
///
/// A successful login stores the session and lands on the forced password
/// change for provisioned accounts, or on the dashboard otherwise.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let feedback = RwSignal::new(None::<Feedback>);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        feedback.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let api = browser::api();
            match api.login(&request).await {
                Ok(grant) => match api.session().establish(&grant, &request.email) {
                    Ok(landing) => navigate(landing, Default::default()),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to store session");
                        feedback.set(Some(Feedback::Error(e.current_context().to_string())));
                    }
                },
                Err(e) => {
                    feedback.set(Some(Feedback::Error(login_failure_message(
                        e.current_context(),
                    ))));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-box" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <FeedbackBanner feedback/>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <div class="auth-links">
                    <A href=route::FORGOT_PASSWORD>"Forgot password?"</A>
                    <A href=route::REGISTER>"Create an account"</A>
                </div>
            </form>
        </div>
    }
}

/// Self-registration page. New accounts wait for approval.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match browser::api().register(&request).await {
                Ok(_) => {
                    set_full_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    feedback.set(Some(Feedback::Success(
                        "Registration successful. You can sign in once an administrator approves your account."
                            .to_string(),
                    )));
                }
                Err(e) => feedback.set(Some(Feedback::from_report(&e))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-box" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <FeedbackBanner feedback/>
                <label for="full-name">"Full name"</label>
                <input
                    id="full-name"
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    "Register"
                </button>
                <div class="auth-links">
                    <A href=route::LOGIN>"Back to sign in"</A>
                </div>
            </form>
        </div>
    }
}

/// Password reset request page.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ForgotPasswordForm { email: email.get() };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match browser::api().forgot_password(&request).await {
                Ok(message) => {
                    let message = if message.is_empty() {
                        "If the address is registered, a reset email is on its way.".to_string()
                    } else {
                        message
                    };
                    feedback.set(Some(Feedback::Success(message)));
                }
                Err(e) => feedback.set(Some(Feedback::from_report(&e))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-box" on:submit=on_submit>
                <h1>"Forgot password"</h1>
                <FeedbackBanner feedback/>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    "Send reset link"
                </button>
                <div class="auth-links">
                    <A href=route::LOGIN>"Back to sign in"</A>
                </div>
            </form>
        </div>
    }
}
