//! Leave requests: approval queue and self-service application.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use staffdesk_client::forms::LeaveForm;
use staffdesk_client::types::LeaveRequest;
use staffdesk_client::{ManagementScope, SelfServiceScope};
use staffdesk_core::LeaveId;

use crate::browser;
use crate::components::{
    Empty, Feedback, FeedbackBanner, LoadError, Loading, PageHeader, StatusBadge, loaded, perform,
};

fn requester(leave: &LeaveRequest) -> String {
    leave
        .employee
        .as_ref()
        .and_then(|e| e.full_name.clone().or_else(|| e.email.clone()))
        .unwrap_or_default()
}

fn period(leave: &LeaveRequest) -> String {
    let days = leave.days();
    let unit = if days == 1 { "day" } else { "days" };
    format!("{} to {} ({days} {unit})", leave.start_date, leave.end_date)
}

/// Pending leave requests with approve and reject actions.
#[component]
pub fn LeaveApprovalPage(scope: ManagementScope) -> impl IntoView {
    let feedback = RwSignal::new(None::<Feedback>);
    let leaves = LocalResource::new(move || async move {
        loaded(browser::api().pending_leaves(scope).await)
    });

    let decide = move |id: LeaveId, approve: bool| {
        let call = async move {
            let api = browser::api();
            if approve {
                api.approve_leave(scope, id).await
            } else {
                api.reject_leave(scope, id).await
            }
        };
        let fallback = if approve { "Leave approved" } else { "Leave rejected" };
        perform(feedback, fallback, call, move || leaves.refetch());
    };

    view! {
        <div class="page">
            <PageHeader title="Leave Approvals"/>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || leaves.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No pending leave requests."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Employee"</th>
                                    <th>"Period"</th>
                                    <th>"Reason"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|leave| {
                                    let id = leave.id;
                                    let who = requester(&leave);
                                    let period = period(&leave);
                                    view! {
                                        <tr>
                                            <td>{who}</td>
                                            <td>{period}</td>
                                            <td>{leave.reason}</td>
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

/// Leave application form above the caller's own leave history.
#[component]
pub fn ApplyLeavePage(scope: SelfServiceScope) -> impl IntoView {
    let form = RwSignal::new(LeaveForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let history = LocalResource::new(move || async move {
        loaded(browser::api().my_leaves(scope).await)
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let application = match form.with(LeaveForm::validate) {
            Ok(application) => application,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };
        let call = async move { browser::api().apply_leave(scope, &application).await };
        perform(feedback, "Leave applied", call, move || {
            if matches!(feedback.get_untracked(), Some(Feedback::Success(_))) {
                form.set(LeaveForm::default());
            }
            history.refetch();
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Apply Leave"/>
            <FeedbackBanner feedback/>
            <form class="form-card" on:submit=on_submit>
                <label for="start-date">"From"</label>
                <input
                    id="start-date"
                    type="date"
                    prop:value=move || form.with(|f| f.start_date.clone())
                    on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                />
                <label for="end-date">"To"</label>
                <input
                    id="end-date"
                    type="date"
                    prop:value=move || form.with(|f| f.end_date.clone())
                    on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                />
                <label for="reason">"Reason"</label>
                <textarea
                    id="reason"
                    prop:value=move || form.with(|f| f.reason.clone())
                    on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                ></textarea>
                <button type="submit" class="primary-btn">"Apply"</button>
            </form>

            <h2>"My leave requests"</h2>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || history.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="You have not applied for leave yet."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Period"</th>
                                    <th>"Reason"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|leave| {
                                    let period = period(&leave);
                                    view! {
                                        <tr>
                                            <td>{period}</td>
                                            <td>{leave.reason}</td>
                                            <td>
                                                <StatusBadge
                                                    label=leave.status.label()
                                                    status=leave.status.as_str()
                                                />
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use staffdesk_client::types::{ApprovalStatus, PersonRef};

    fn leave(start: (i32, u32, u32), end: (i32, u32, u32)) -> LeaveRequest {
        LeaveRequest {
            id: LeaveId::new(1),
            reason: "Trip".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            status: ApprovalStatus::Pending,
            employee: None,
        }
    }

    #[test]
    fn single_day_period() {
        assert_eq!(
            period(&leave((2025, 3, 10), (2025, 3, 10))),
            "2025-03-10 to 2025-03-10 (1 day)"
        );
    }

    #[test]
    fn multi_day_period() {
        assert_eq!(
            period(&leave((2025, 3, 10), (2025, 3, 14))),
            "2025-03-10 to 2025-03-14 (5 days)"
        );
    }

    #[test]
    fn requester_falls_back_to_email() {
        let mut request = leave((2025, 3, 10), (2025, 3, 10));
        assert_eq!(requester(&request), "");

        request.employee = Some(PersonRef {
            id: None,
            full_name: None,
            email: Some("ana@example.com".to_string()),
        });
        assert_eq!(requester(&request), "ana@example.com");
    }
}
