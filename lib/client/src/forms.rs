//! Form input and presence-check validation.
//!
//! Each form holds the raw strings bound to its inputs and converts itself
//! into the request body once every required field is filled in. The
//! backend remains the authority on anything beyond presence.

use chrono::NaiveDate;
use staffdesk_access::Role;
use staffdesk_core::{EmployeeId, TaskId};

use crate::error::FormError;
use crate::types::{
    ChangePasswordRequest, Employee, EmployeeDraft, ForgotPasswordRequest, LeaveApplication,
    LoginRequest, ProfileUpdate, RegistrationRequest, ReportSubmission, TaskAssignment, UserStatus,
};

const ALL_FIELDS: FormError = FormError::new("All fields are required");
const FILL_ALL: FormError = FormError::new("Please fill all fields");
const EMAIL_REQUIRED: FormError = FormError::new("Please enter your email");
const PASSWORD_MISMATCH: FormError =
    FormError::new("New password and confirm password do not match");
const INVALID_DATE: FormError = FormError::new("Please enter valid dates");
const REPORT_REQUIRED: FormError = FormError::new("Please select task and write description");

fn filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn require(value: &str, error: FormError) -> Result<String, FormError> {
    filled(value).ok_or(error)
}

fn require_date(value: &str, missing: FormError) -> Result<NaiveDate, FormError> {
    let value = require(value, missing)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| INVALID_DATE)
}

/// Login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns an error if a field is empty.
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = require(&self.email, ALL_FIELDS)?;
        // Passwords are sent as typed.
        if self.password.is_empty() {
            return Err(ALL_FIELDS);
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// Self-registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    /// # Errors
    ///
    /// Returns an error if a field is empty.
    pub fn validate(&self) -> Result<RegistrationRequest, FormError> {
        let full_name = require(&self.full_name, ALL_FIELDS)?;
        let email = require(&self.email, ALL_FIELDS)?;
        if self.password.is_empty() {
            return Err(ALL_FIELDS);
        }
        Ok(RegistrationRequest {
            full_name,
            email,
            password: self.password.clone(),
        })
    }
}

/// Forgot-password form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    /// # Errors
    ///
    /// Returns an error if the email is empty.
    pub fn validate(&self) -> Result<ForgotPasswordRequest, FormError> {
        Ok(ForgotPasswordRequest {
            email: require(&self.email, EMAIL_REQUIRED)?,
        })
    }
}

/// Password change form, used both for the forced first-login change and
/// from the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    /// # Errors
    ///
    /// Returns an error if a field is empty or the confirmation differs.
    pub fn validate(&self) -> Result<ChangePasswordRequest, FormError> {
        if self.old_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ALL_FIELDS);
        }
        if self.new_password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Profile edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub department: String,
    pub designation: String,
}

impl ProfileForm {
    /// # Errors
    ///
    /// Returns an error if a field is empty.
    pub fn validate(&self) -> Result<ProfileUpdate, FormError> {
        Ok(ProfileUpdate {
            full_name: require(&self.full_name, ALL_FIELDS)?,
            department: require(&self.department, ALL_FIELDS)?,
            designation: require(&self.designation, ALL_FIELDS)?,
        })
    }
}

/// New-employee and employee-edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub designation: String,
    /// Status to set, on edit forms that expose it.
    pub status: Option<UserStatus>,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            role: Role::Employee,
            department: String::new(),
            designation: String::new(),
            status: None,
        }
    }
}

impl EmployeeForm {
    /// Prefills an edit form from a stored record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            role: employee.role.unwrap_or(Role::Employee),
            department: employee.department.clone().unwrap_or_default(),
            designation: employee.designation.clone().unwrap_or_default(),
            status: employee.status.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if a field is empty.
    pub fn validate(&self) -> Result<EmployeeDraft, FormError> {
        Ok(EmployeeDraft {
            full_name: require(&self.full_name, ALL_FIELDS)?,
            email: require(&self.email, ALL_FIELDS)?,
            role: self.role,
            department: require(&self.department, ALL_FIELDS)?,
            designation: require(&self.designation, ALL_FIELDS)?,
            status: self.status.clone(),
        })
    }
}

/// Leave application form. Dates are `YYYY-MM-DD`, as produced by date inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub reason: String,
    pub start_date: String,
    pub end_date: String,
}

impl LeaveForm {
    /// # Errors
    ///
    /// Returns an error if a field is empty or a date does not parse.
    pub fn validate(&self) -> Result<LeaveApplication, FormError> {
        Ok(LeaveApplication {
            reason: require(&self.reason, FILL_ALL)?,
            start_date: require_date(&self.start_date, FILL_ALL)?,
            end_date: require_date(&self.end_date, FILL_ALL)?,
        })
    }
}

/// Task assignment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// Selected assignee id, empty until one is picked.
    pub employee_id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    /// Role of the assignee list currently shown.
    pub role: Role,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            title: String::new(),
            description: String::new(),
            deadline: String::new(),
            role: Role::Employee,
        }
    }
}

impl TaskForm {
    /// # Errors
    ///
    /// Returns an error if a field is empty or the deadline does not parse.
    pub fn validate(&self) -> Result<TaskAssignment, FormError> {
        let employee_id: EmployeeId = require(&self.employee_id, FILL_ALL)?
            .parse()
            .map_err(|_| FILL_ALL)?;
        Ok(TaskAssignment {
            employee_id,
            title: require(&self.title, FILL_ALL)?,
            description: require(&self.description, FILL_ALL)?,
            deadline: require_date(&self.deadline, FILL_ALL)?,
            role: self.role,
        })
    }
}

/// Report submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    /// Selected task id, empty until one is picked.
    pub task_id: String,
    pub description: String,
}

impl ReportForm {
    /// # Errors
    ///
    /// Returns an error if no task is selected or the description is blank.
    pub fn validate(&self) -> Result<ReportSubmission, FormError> {
        let task_id: TaskId = require(&self.task_id, REPORT_REQUIRED)?
            .parse()
            .map_err(|_| REPORT_REQUIRED)?;
        Ok(ReportSubmission {
            task_id,
            description: require(&self.description, REPORT_REQUIRED)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(form.validate(), Err(ALL_FIELDS));

        let form = LoginForm {
            email: " asha@example.com ".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ALL_FIELDS));
    }

    #[test]
    fn login_trims_email_only() {
        let form = LoginForm {
            email: " asha@example.com ".to_string(),
            password: " pass word ".to_string(),
        };
        let request = form.validate().expect("valid");
        assert_eq!(request.email, "asha@example.com");
        assert_eq!(request.password, " pass word ");
    }

    #[test]
    fn registration_requires_every_field() {
        let mut form = RegistrationForm {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.validate().is_ok());
        form.full_name.clear();
        assert_eq!(form.validate(), Err(ALL_FIELDS));
    }

    #[test]
    fn forgot_password_requires_email() {
        assert_eq!(
            ForgotPasswordForm::default().validate(),
            Err(EMAIL_REQUIRED)
        );
    }

    #[test]
    fn password_change_checks_presence_then_match() {
        let mut form = PasswordChangeForm {
            old_password: "old".to_string(),
            new_password: "new-one".to_string(),
            confirm_password: String::new(),
        };
        assert_eq!(form.validate(), Err(ALL_FIELDS));

        form.confirm_password = "new-two".to_string();
        assert_eq!(form.validate(), Err(PASSWORD_MISMATCH));

        form.confirm_password = "new-one".to_string();
        let request = form.validate().expect("valid");
        assert_eq!(request.old_password, "old");
        assert_eq!(request.new_password, "new-one");
    }

    #[test]
    fn employee_form_requires_every_field() {
        let form = EmployeeForm {
            full_name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            role: Role::Manager,
            department: "Sales".to_string(),
            designation: "   ".to_string(),
            status: None,
        };
        assert_eq!(form.validate(), Err(ALL_FIELDS));
    }

    #[test]
    fn employee_form_round_trips_a_record() {
        let employee = Employee {
            id: EmployeeId::new(4),
            full_name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            role: Some(Role::Manager),
            status: Some(UserStatus::Inactive),
            department: Some("Sales".to_string()),
            designation: None,
            created_at: None,
        };
        let mut form = EmployeeForm::from_employee(&employee);
        assert_eq!(form.role, Role::Manager);
        assert_eq!(form.validate(), Err(ALL_FIELDS));

        form.designation = "Lead".to_string();
        let draft = form.validate().expect("valid");
        assert_eq!(draft.status, Some(UserStatus::Inactive));
        assert_eq!(draft.department, "Sales");
    }

    #[test]
    fn leave_form_parses_dates() {
        let form = LeaveForm {
            reason: "Travel".to_string(),
            start_date: "2026-09-01".to_string(),
            end_date: "2026-09-04".to_string(),
        };
        let request = form.validate().expect("valid");
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2026, 9, 1).expect("date"));

        let form = LeaveForm {
            end_date: "04/09/2026".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Err(INVALID_DATE));
    }

    #[test]
    fn leave_form_requires_fields() {
        assert_eq!(LeaveForm::default().validate(), Err(FILL_ALL));
    }

    #[test]
    fn task_form_requires_assignee() {
        let form = TaskForm {
            title: "Audit".to_string(),
            description: "Quarterly audit".to_string(),
            deadline: "2026-10-01".to_string(),
            ..TaskForm::default()
        };
        assert_eq!(form.validate(), Err(FILL_ALL));

        let form = TaskForm {
            employee_id: "7".to_string(),
            ..form
        };
        let request = form.validate().expect("valid");
        assert_eq!(request.employee_id, EmployeeId::new(7));
        assert_eq!(request.role, Role::Employee);
    }

    #[test]
    fn report_form_rejects_blank_description() {
        let form = ReportForm {
            task_id: "3".to_string(),
            description: " \n ".to_string(),
        };
        assert_eq!(form.validate(), Err(REPORT_REQUIRED));

        let form = ReportForm {
            task_id: String::new(),
            description: "Done".to_string(),
        };
        assert_eq!(form.validate(), Err(REPORT_REQUIRED));
    }
}
