//! Route guard.
//!
//! Every route is wrapped in [`Guarded`], which asks the session gate about
//! the current location before rendering anything. A redirect replaces the
//! location, so a blocked page never mounts and never fetches.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use staffdesk_access::NavigationDecision;

use crate::browser;

/// Renders `children` only if the gate allows the current path.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let decision = Memo::new(move |_| browser::session().authorize(&location.pathname.get()));

    move || match decision.get() {
        NavigationDecision::Allow => children().into_any(),
        NavigationDecision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
