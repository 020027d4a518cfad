//! Employee directory: list, create and edit accounts.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use staffdesk_access::Role;
use staffdesk_client::ManagementScope;
use staffdesk_client::forms::EmployeeForm;
use staffdesk_client::types::UserStatus;
use staffdesk_core::EmployeeId;

use crate::browser;
use crate::components::{
    Empty, Feedback, FeedbackBanner, LoadError, Loading, PageHeader, StatusBadge, loaded, perform,
};

/// Roles a scope may create accounts for.
fn assignable_roles(scope: ManagementScope) -> &'static [Role] {
    match scope {
        ManagementScope::Admin => &[Role::Employee, Role::Manager],
        ManagementScope::Manager => &[Role::Employee],
    }
}

const STATUSES: [UserStatus; 4] = [
    UserStatus::Pending,
    UserStatus::Active,
    UserStatus::Inactive,
    UserStatus::Rejected,
];

fn directory_path(scope: ManagementScope) -> String {
    format!("/{}/manage-users", scope.segment())
}

/// Every employee visible to the scope. Administrators can also toggle
/// accounts between active and inactive.
#[component]
pub fn ManageUsersPage(scope: ManagementScope) -> impl IntoView {
    let feedback = RwSignal::new(None::<Feedback>);
    let employees = LocalResource::new(move || async move {
        loaded(browser::api().employees(scope).await)
    });
    let can_toggle = scope == ManagementScope::Admin;

    let toggle = move |id: EmployeeId, status: UserStatus| {
        let call = async move { browser::api().set_employee_status(id, &status).await };
        perform(feedback, "Status updated", call, move || employees.refetch());
    };

    view! {
        <div class="page">
            <PageHeader title="Manage Employees"/>
            <div class="actions-bar">
                <A href=format!("/{}/add-user", scope.segment())>"Add employee"</A>
            </div>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || employees.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(list) if list.is_empty() => {
                        view! { <Empty message="No employees yet."/> }.into_any()
                    }
                    Ok(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Department"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|employee| {
                                    let id = employee.id;
                                    let status = employee.status.clone();
                                    let next = status.as_ref().and_then(UserStatus::toggled);
                                    let edit_href = format!("/{}/edit-user/{id}", scope.segment());
                                    view! {
                                        <tr>
                                            <td>{employee.full_name}</td>
                                            <td>{employee.email}</td>
                                            <td>{employee.role.map(|role| role.label())}</td>
                                            <td>{employee.department}</td>
                                            <td>
                                                {status.map(|status| view! {
                                                    <StatusBadge label=status.label() status=status.as_str()/>
                                                })}
                                            </td>
                                            <td class="actions">
                                                <a href=edit_href>"Edit"</a>
                                                {next.filter(|_| can_toggle).map(|next| {
                                                    let label = match next {
                                                        UserStatus::Active => "Activate",
                                                        _ => "Deactivate",
                                                    };
                                                    view! {
                                                        <button
                                                            class="secondary-btn"
                                                            on:click=move |_| toggle(id, next.clone())
                                                        >{label}</button>
                                                    }
                                                })}
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

/// Shared create/edit form fields.
#[component]
fn EmployeeFields(
    scope: ManagementScope,
    form: RwSignal<EmployeeForm>,
    #[prop(optional)] with_status: bool,
) -> impl IntoView {
    view! {
        <label for="full-name">"Full name"</label>
        <input
            id="full-name"
            type="text"
            prop:value=move || form.with(|f| f.full_name.clone())
            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
        />
        <label for="email">"Email"</label>
        <input
            id="email"
            type="email"
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
        />
        <label for="role">"Role"</label>
        <select
            id="role"
            prop:value=move || form.with(|f| f.role.as_str().to_string())
            on:change=move |ev| {
                if let Ok(role) = event_target_value(&ev).parse::<Role>() {
                    form.update(|f| f.role = role);
                }
            }
        >
            {assignable_roles(scope)
                .iter()
                .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                .collect_view()}
        </select>
        <label for="department">"Department"</label>
        <input
            id="department"
            type="text"
            prop:value=move || form.with(|f| f.department.clone())
            on:input=move |ev| form.update(|f| f.department = event_target_value(&ev))
        />
        <label for="designation">"Designation"</label>
        <input
            id="designation"
            type="text"
            prop:value=move || form.with(|f| f.designation.clone())
            on:input=move |ev| form.update(|f| f.designation = event_target_value(&ev))
        />
        {with_status.then(|| view! {
            <label for="status">"Status"</label>
            <select
                id="status"
                prop:value=move || {
                    form.with(|f| f.status.as_ref().map(|s| s.as_str().to_string()).unwrap_or_default())
                }
                on:change=move |ev| {
                    let status = UserStatus::from(event_target_value(&ev));
                    form.update(|f| f.status = Some(status));
                }
            >
                {STATUSES
                    .iter()
                    .map(|status| view! { <option value=status.as_str().to_string()>{status.label().to_string()}</option> })
                    .collect_view()}
            </select>
        })}
    }
}

/// Creates an account. The backend mails the provisioned password, and the
/// new user must change it at first login.
#[component]
pub fn AddUserPage(scope: ManagementScope) -> impl IntoView {
    let form = RwSignal::new(EmployeeForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let (submitting, set_submitting) = signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = match form.with(EmployeeForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match browser::api().add_employee(scope, &draft).await {
                Ok(_) => navigate(&directory_path(scope), Default::default()),
                Err(e) => feedback.set(Some(Feedback::from_report(&e))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Add Employee"/>
            <FeedbackBanner feedback/>
            <form class="form-card" on:submit=on_submit>
                <EmployeeFields scope form/>
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        "Create account"
                    </button>
                    <a href=directory_path(scope)>"Cancel"</a>
                </div>
            </form>
        </div>
    }
}

/// Edits an account loaded from the `:id` route parameter.
#[component]
pub fn EditUserPage(scope: ManagementScope) -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<EmployeeId>().ok()));

    let form = RwSignal::new(EmployeeForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let (submitting, set_submitting) = signal(false);
    let navigate = use_navigate();

    let employee = LocalResource::new(move || async move {
        let Some(id) = id() else {
            return Err("Unknown employee".to_string());
        };
        let employee = loaded(browser::api().employee(scope, id).await)?;
        form.set(EmployeeForm::from_employee(&employee));
        Ok(employee)
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id() else {
            return;
        };
        let draft = match form.with(EmployeeForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match browser::api().update_employee(scope, id, &draft).await {
                Ok(_) => navigate(&directory_path(scope), Default::default()),
                Err(e) => feedback.set(Some(Feedback::from_report(&e))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Edit Employee"/>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || employee.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(_) => view! {
                        <form class="form-card" on:submit=on_submit.clone()>
                            <EmployeeFields scope form with_status=true/>
                            <div class="form-actions">
                                <button
                                    type="submit"
                                    class="primary-btn"
                                    disabled=move || submitting.get()
                                >"Save changes"</button>
                                <a href=directory_path(scope)>"Cancel"</a>
                            </div>
                        </form>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managers_only_create_employees() {
        assert_eq!(assignable_roles(ManagementScope::Manager), &[Role::Employee]);
        assert!(assignable_roles(ManagementScope::Admin).contains(&Role::Manager));
        assert!(!assignable_roles(ManagementScope::Admin).contains(&Role::Admin));
    }

    #[test]
    fn directory_paths() {
        assert_eq!(directory_path(ManagementScope::Admin), "/admin/manage-users");
        assert_eq!(directory_path(ManagementScope::Manager), "/manager/manage-users");
    }
}
