//! The caller's own profile.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use staffdesk_client::forms::{PasswordChangeForm, ProfileForm};
use staffdesk_client::types::Employee;

use crate::browser;
use crate::components::{Feedback, FeedbackBanner, LoadError, Loading, PageHeader, StatusBadge, loaded, perform};

fn profile_form(employee: &Employee) -> ProfileForm {
    ProfileForm {
        full_name: employee.full_name.clone(),
        department: employee.department.clone().unwrap_or_default(),
        designation: employee.designation.clone().unwrap_or_default(),
    }
}

/// Profile details with an edit form and a password change form.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let form = RwSignal::new(ProfileForm::default());
    let feedback = RwSignal::new(None::<Feedback>);
    let profile = LocalResource::new(move || async move {
        let employee = loaded(browser::api().me().await)?;
        form.set(profile_form(&employee));
        Ok::<_, String>(employee)
    });

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let update = match form.with(ProfileForm::validate) {
            Ok(update) => update,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };
        let call = async move { browser::api().update_me(&update).await };
        perform(feedback, "Profile updated", call, move || profile.refetch());
    };

    view! {
        <div class="page">
            <PageHeader title="My Profile"/>
            <FeedbackBanner feedback/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || profile.get().map(|result| match result {
                    Err(message) => view! { <LoadError message/> }.into_any(),
                    Ok(employee) => view! {
                        <dl class="profile-summary">
                            <dt>"Email"</dt>
                            <dd>{employee.email}</dd>
                            <dt>"Role"</dt>
                            <dd>{employee.role.map(|role| role.label())}</dd>
                            <dt>"Status"</dt>
                            <dd>
                                {employee.status.map(|status| view! {
                                    <StatusBadge label=status.label() status=status.as_str()/>
                                })}
                            </dd>
                        </dl>
                    }.into_any(),
                })}
            </Suspense>

            <form class="form-card" on:submit=on_save>
                <h2>"Edit profile"</h2>
                <label for="full-name">"Full name"</label>
                <input
                    id="full-name"
                    type="text"
                    prop:value=move || form.with(|f| f.full_name.clone())
                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                />
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
                <button type="submit" class="primary-btn">"Save"</button>
            </form>

            <ChangePassword/>
        </div>
    }
}

/// Voluntary password change. The session stays as it is.
#[component]
fn ChangePassword() -> impl IntoView {
    let form = RwSignal::new(PasswordChangeForm::default());
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match form.with(PasswordChangeForm::validate) {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(Feedback::Error(e.to_string())));
                return;
            }
        };
        let call = async move { browser::api().change_password(&request).await };
        perform(feedback, "Password changed", call, move || {
            if matches!(feedback.get_untracked(), Some(Feedback::Success(_))) {
                form.set(PasswordChangeForm::default());
            }
        });
    };

    view! {
        <form class="form-card" on:submit=on_submit>
            <h2>"Change password"</h2>
            <FeedbackBanner feedback/>
            <PasswordFields form/>
            <button type="submit" class="primary-btn">"Change password"</button>
        </form>
    }
}

/// Current, new and confirmation password inputs.
#[component]
pub(crate) fn PasswordFields(form: RwSignal<PasswordChangeForm>) -> impl IntoView {
    view! {
        <label for="old-password">"Current password"</label>
        <input
            id="old-password"
            type="password"
            prop:value=move || form.with(|f| f.old_password.clone())
            on:input=move |ev| form.update(|f| f.old_password = event_target_value(&ev))
        />
        <label for="new-password">"New password"</label>
        <input
            id="new-password"
            type="password"
            prop:value=move || form.with(|f| f.new_password.clone())
            on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
        />
        <label for="confirm-password">"Confirm new password"</label>
        <input
            id="confirm-password"
            type="password"
            prop:value=move || form.with(|f| f.confirm_password.clone())
            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk_core::EmployeeId;

    #[test]
    fn profile_form_fills_missing_fields_with_blanks() {
        let employee = Employee {
            id: EmployeeId::new(7),
            full_name: "Ana Diaz".to_string(),
            email: "ana@example.com".to_string(),
            role: None,
            status: None,
            department: Some("Finance".to_string()),
            designation: None,
            created_at: None,
        };

        let form = profile_form(&employee);
        assert_eq!(form.full_name, "Ana Diaz");
        assert_eq!(form.department, "Finance");
        assert_eq!(form.designation, "");
    }
}
