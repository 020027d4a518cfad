//! Registration approvals.

use leptos::prelude::*;
use staffdesk_client::ManagementScope;
use staffdesk_core::EmployeeId;

use crate::browser;
use crate::components::{
    Empty, Feedback, FeedbackBanner, LoadError, Loading, PageHeader, loaded, perform,
};

/// Accounts waiting for approval, with approve and reject actions.
#[component]
pub fn PendingApprovalsPage(scope: ManagementScope) -> impl IntoView {
    let feedback = RwSignal::new(None::<Feedback>);
    let users = LocalResource::new(move || async move {
        loaded(browser::api().pending_users(scope).await)
    });

    let decide = move |id: EmployeeId, approve: bool| {
        let call = async move {
            let api = browser::api();
            if approve {
                api.approve_user(scope, id).await
            } else {
                api.reject_user(scope, id).await
            }
        };
        let fallback = if approve { "User approved" } else { "User rejected" };
        perform(feedback, fallback, call, move || users.refetch());
    };

    view! {
        <div class="page">
            <PageHeader title="Pending Approvals"/>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || users.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No registrations are waiting for approval."/> }
                            .into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Registered"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|user| {
                                    let id = user.id;
                                    let registered = user
                                        .registered_on()
                                        .map(|date| date.format("%b %-d, %Y").to_string());
                                    view! {
                                        <tr>
                                            <td>{user.full_name}</td>
                                            <td>{user.email}</td>
                                            <td>{user.role.map(|role| role.label())}</td>
                                            <td>{registered}</td>
                                            <td class="actions">
                                                <button
                                                    class="approve-btn"
                                                    on:click=move |_| decide(id, true)
                                                >"Approve"</button>
                                                <button
                                                    class="reject-btn"
                                                    on:click=move |_| decide(id, false)
                                                >"Reject"</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
