use leptos::prelude::*;
use leptos_router::components::A;
use staffdesk_access::route;

/// Landing page for a role mismatch. The session is kept.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"Access denied"</h1>
            <p>"Your role does not allow access to this page."</p>
            <A href=route::DASHBOARD>"Back to dashboard"</A>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href=route::LOGIN>"Go to sign in"</A>
        </div>
    }
}
