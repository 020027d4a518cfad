//! Work reports: review queue and self-service submission.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use staffdesk_client::forms::ReportForm;
use staffdesk_client::{ManagementScope, SelfServiceScope};
use staffdesk_core::ReportId;

use crate::browser;
use crate::components::{
    Empty, Feedback, FeedbackBanner, LoadError, Loading, PageHeader, StatusBadge, loaded, perform,
};

/// Submitted reports awaiting review.
#[component]
pub fn ApproveReportsPage(scope: ManagementScope) -> impl IntoView {
    let feedback = RwSignal::new(None::<Feedback>);
    let reports = LocalResource::new(move || async move {
        loaded(browser::api().pending_reports(scope).await)
    });

    let decide = move |id: ReportId, approve: bool| {
        let call = async move {
            let api = browser::api();
            if approve {
                api.approve_report(scope, id).await
            } else {
                api.reject_report(scope, id).await
            }
        };
        let fallback = if approve { "Report approved" } else { "Report rejected" };
        perform(feedback, fallback, call, move || reports.refetch());
    };

    view! {
        <div class="page">
            <PageHeader title="Approve Reports"/>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || reports.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No reports to review."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Task"</th>
                                    <th>"Employee"</th>
                                    <th>"Report"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|report| {
                                    let id = report.id;
                                    view! {
                                        <tr>
                                            <td>{report.task_title}</td>
                                            <td>{report.employee_name}</td>
                                            <td>{report.description}</td>
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

/// Report form for in-progress tasks, above the caller's report history.
#[component]
pub fn MyReportsPage(scope: SelfServiceScope) -> impl IntoView {
    let form = RwSignal::new(ReportForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let tasks = LocalResource::new(move || async move {
        loaded(browser::api().in_progress_tasks(scope).await)
    });
    let history = LocalResource::new(move || async move {
        loaded(browser::api().my_reports(scope).await)
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match form.with(ReportForm::validate) {
            Ok(submission) => submission,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };
        let call = async move { browser::api().submit_report(scope, &submission).await };
        perform(feedback, "Report submitted", call, move || {
            if matches!(feedback.get_untracked(), Some(Feedback::Success(_))) {
                form.set(ReportForm::default());
            }
            history.refetch();
        });
    };

    let task_options = move || {
        tasks.get().map(|result| match result {
            Err(message) => view! { <LoadError message/> }.into_any(),
            Ok(list) => view! {
                <select
                    id="task"
                    prop:value=move || form.with(|f| f.task_id.clone())
                    on:change=move |ev| form.update(|f| f.task_id = event_target_value(&ev))
                >
                    <option value="">"Select a task"</option>
                    {list
                        .into_iter()
                        .map(|task| view! { <option value=task.id.to_string()>{task.title}</option> })
                        .collect_view()}
                </select>
            }.into_any(),
        })
    };

    view! {
        <div class="page">
            <PageHeader title="My Reports"/>
            <FeedbackBanner feedback/>
            <form class="form-card" on:submit=on_submit>
                <label for="task">"Task"</label>
                <Suspense fallback=|| view! { <Loading/> }>{task_options}</Suspense>
                <label for="report">"Report"</label>
                <textarea
                    id="report"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <button type="submit" class="primary-btn">"Submit report"</button>
            </form>

            <h2>"Submitted reports"</h2>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || history.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No reports submitted yet."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Task"</th>
                                    <th>"Report"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|report| view! {
                                    <tr>
                                        <td>{report.task_title}</td>
                                        <td>{report.description}</td>
                                        <td>
                                            <StatusBadge
                                                label=report.status.label()
                                                status=report.status.as_str()
                                            />
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
