//! Task assignment and the assignee's task list.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use staffdesk_access::Role;
use staffdesk_client::forms::TaskForm;
use staffdesk_client::types::{Employee, Task, TaskStatus};
use staffdesk_client::{ManagementScope, SelfServiceScope};
use staffdesk_core::TaskId;

use crate::browser;
use crate::components::{
    Empty, Feedback, FeedbackBanner, LoadError, Loading, PageHeader, StatusBadge, loaded, perform,
};

/// Roles a scope may hand tasks to.
fn assignee_roles(scope: ManagementScope) -> &'static [Role] {
    match scope {
        ManagementScope::Admin => &[Role::Employee, Role::Manager],
        ManagementScope::Manager => &[Role::Employee],
    }
}

/// Active users holding `role`.
fn candidates(users: &[Employee], role: Role) -> Vec<Employee> {
    users
        .iter()
        .filter(|user| user.role == Some(role))
        .cloned()
        .collect()
}

fn assignee(task: &Task) -> String {
    task.employee
        .as_ref()
        .and_then(|e| e.full_name.clone().or_else(|| e.email.clone()))
        .unwrap_or_default()
}

fn deadline(task: &Task) -> String {
    task.deadline.map(|d| d.to_string()).unwrap_or_default()
}

/// Assigns tasks to active users and lists what the caller assigned.
#[component]
pub fn AssignTaskPage(scope: ManagementScope) -> impl IntoView {
    let form = RwSignal::new(TaskForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let users = LocalResource::new(move || async move {
        loaded(browser::api().active_users(scope).await)
    });
    let assigned = LocalResource::new(move || async move {
        loaded(browser::api().assigned_tasks(scope).await)
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let assignment = match form.with(TaskForm::validate) {
            Ok(assignment) => assignment,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };
        let call = async move { browser::api().assign_task(scope, &assignment).await };
        perform(feedback, "Task assigned", call, move || {
            if matches!(feedback.get_untracked(), Some(Feedback::Success(_))) {
                let role = form.with_untracked(|f| f.role);
                form.set(TaskForm {
                    role,
                    ..TaskForm::default()
                });
            }
            assigned.refetch();
        });
    };

    let assignee_options = move || {
        let role = form.with(|f| f.role);
        users.get().map(|result| match result {
            Err(message) => view! { <LoadError message/> }.into_any(),
            Ok(list) => view! {
                <select
                    id="assignee"
                    prop:value=move || form.with(|f| f.employee_id.clone())
                    on:change=move |ev| form.update(|f| f.employee_id = event_target_value(&ev))
                >
                    <option value="">"Select a person"</option>
                    {candidates(&list, role)
                        .into_iter()
                        .map(|user| view! {
                            <option value=user.id.to_string()>
                                {format!("{} ({})", user.full_name, user.email)}
                            </option>
                        })
                        .collect_view()}
                </select>
            }.into_any(),
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Assign Task"/>
            <FeedbackBanner feedback/>
            <form class="form-card" on:submit=on_submit>
                <label for="assignee-role">"Assign to"</label>
                <select
                    id="assignee-role"
                    prop:value=move || form.with(|f| f.role.as_str())
                    on:change=move |ev| {
                        if let Ok(role) = event_target_value(&ev).parse::<Role>() {
                            form.update(|f| {
                                f.role = role;
                                f.employee_id.clear();
                            });
                        }
                    }
                >
                    {assignee_roles(scope)
                        .iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect_view()}
                </select>
                <label for="assignee">"Assignee"</label>
                <Suspense fallback=|| view! { <Loading/> }>{assignee_options}</Suspense>
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <label for="deadline">"Deadline"</label>
                <input
                    id="deadline"
                    type="date"
                    prop:value=move || form.with(|f| f.deadline.clone())
                    on:input=move |ev| form.update(|f| f.deadline = event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Assign"</button>
            </form>

            <h2>"Assigned tasks"</h2>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || assigned.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No tasks assigned yet."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Assignee"</th>
                                    <th>"Deadline"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|task| {
                                    let who = assignee(&task);
                                    let due = deadline(&task);
                                    view! {
                                        <tr>
                                            <td>{task.title}</td>
                                            <td>{who}</td>
                                            <td>{due}</td>
                                            <td>
                                                <StatusBadge
                                                    label=task.status.label()
                                                    status=task.status.as_str()
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

/// Tasks assigned to the caller. Pending tasks can be accepted, which moves
/// them to in progress.
#[component]
pub fn MyTasksPage(scope: SelfServiceScope) -> impl IntoView {
    let feedback = RwSignal::new(None::<Feedback>);
    let tasks = LocalResource::new(move || async move {
        loaded(browser::api().my_tasks(scope).await)
    });

    let accept = move |id: TaskId| {
        let call = async move { browser::api().accept_task(scope, id).await };
        perform(feedback, "Task accepted", call, move || tasks.refetch());
    };

    view! {
        <div class="page">
            <PageHeader title="My Tasks"/>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || tasks.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No tasks assigned to you."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <div class="cards">
                            {list.into_iter().map(|task| {
                                let id = task.id;
                                let due = deadline(&task);
                                let by = task.assigned_by().to_string();
                                let pending = task.status == TaskStatus::Pending;
                                view! {
                                    <div class="card">
                                        <h3>{task.title}</h3>
                                        <p>{task.description}</p>
                                        <p class="muted">
                                            {format!("Assigned by {by}, due {due}")}
                                        </p>
                                        <StatusBadge
                                            label=task.status.label()
                                            status=task.status.as_str()
                                        />
                                        {pending.then(|| view! {
                                            <button
                                                class="primary-btn"
                                                on:click=move |_| accept(id)
                                            >"Accept"</button>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk_core::EmployeeId;

    fn user(id: i64, role: Option<Role>) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            full_name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            role,
            status: None,
            department: None,
            designation: None,
            created_at: None,
        }
    }

    #[test]
    fn candidates_match_the_selected_role() {
        let users = vec![
            user(1, Some(Role::Employee)),
            user(2, Some(Role::Manager)),
            user(3, None),
            user(4, Some(Role::Employee)),
        ];

        let ids: Vec<_> = candidates(&users, Role::Employee)
            .into_iter()
            .map(|u| u.id.get())
            .collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(candidates(&users, Role::Manager).len(), 1);
        assert!(candidates(&users, Role::Admin).is_empty());
    }

    #[test]
    fn managers_assign_to_employees_only() {
        assert_eq!(assignee_roles(ManagementScope::Manager), &[Role::Employee]);
        assert_eq!(
            assignee_roles(ManagementScope::Admin),
            &[Role::Employee, Role::Manager]
        );
    }
}
