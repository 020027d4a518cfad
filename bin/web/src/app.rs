//! Main Leptos application component and routing.
//!
//! Admin and manager management pages share one component per page,
//! parametrized by [`ManagementScope`]; manager and employee self-service
//! pages share one component per page, parametrized by [`SelfServiceScope`].

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use staffdesk_access::route;
use staffdesk_client::{ManagementScope, SelfServiceScope};

use crate::guard::Guarded;
use crate::pages::{
    AddUserPage, ApplyLeavePage, ApproveReportsPage, AssignTaskPage, DashboardPage, EditUserPage,
    ForceChangePasswordPage, ForgotPasswordPage, LeaveApprovalPage, LoginPage, ManageUsersPage,
    MyReportsPage, MyTasksPage, NotFoundPage, PendingApprovalsPage, ProfilePage, RegisterPage,
    UnauthorizedPage,
};

const ADMIN: ManagementScope = ManagementScope::Admin;
const MANAGER: ManagementScope = ManagementScope::Manager;
const MANAGER_SELF: SelfServiceScope = SelfServiceScope::Manager;
const EMPLOYEE_SELF: SelfServiceScope = SelfServiceScope::Employee;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="staffdesk"/>
        <Router>
            <main class="container">
                // Unknown pages under a role prefix are still role-gated before the 404.
                <Routes fallback=|| view! { <Guarded><NotFoundPage/></Guarded> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=route::LOGIN/> }/>

                    // Public
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/unauthorized") view=UnauthorizedPage/>

                    // Any signed-in role
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <Guarded><DashboardPage/></Guarded> }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <Guarded><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=path!("/force-change-password")
                        view=|| view! { <Guarded><ForceChangePasswordPage/></Guarded> }
                    />

                    // Administrators
                    <Route
                        path=path!("/admin/pending-approvals")
                        view=|| view! { <Guarded><PendingApprovalsPage scope=ADMIN/></Guarded> }
                    />
                    <Route
                        path=path!("/admin/manage-users")
                        view=|| view! { <Guarded><ManageUsersPage scope=ADMIN/></Guarded> }
                    />
                    <Route
                        path=path!("/admin/add-user")
                        view=|| view! { <Guarded><AddUserPage scope=ADMIN/></Guarded> }
                    />
                    <Route
                        path=path!("/admin/edit-user/:id")
                        view=|| view! { <Guarded><EditUserPage scope=ADMIN/></Guarded> }
                    />
                    <Route
                        path=path!("/admin/leave-approval")
                        view=|| view! { <Guarded><LeaveApprovalPage scope=ADMIN/></Guarded> }
                    />
                    <Route
                        path=path!("/admin/assign-task")
                        view=|| view! { <Guarded><AssignTaskPage scope=ADMIN/></Guarded> }
                    />
                    <Route
                        path=path!("/admin/approve-reports")
                        view=|| view! { <Guarded><ApproveReportsPage scope=ADMIN/></Guarded> }
                    />

                    // Managers
                    <Route
                        path=path!("/manager/pending-approvals")
                        view=|| view! { <Guarded><PendingApprovalsPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/manage-users")
                        view=|| view! { <Guarded><ManageUsersPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/add-user")
                        view=|| view! { <Guarded><AddUserPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/edit-user/:id")
                        view=|| view! { <Guarded><EditUserPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/leave-approval")
                        view=|| view! { <Guarded><LeaveApprovalPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/assign-task")
                        view=|| view! { <Guarded><AssignTaskPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/approve-reports")
                        view=|| view! { <Guarded><ApproveReportsPage scope=MANAGER/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/apply-leave")
                        view=|| view! { <Guarded><ApplyLeavePage scope=MANAGER_SELF/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/tasks")
                        view=|| view! { <Guarded><MyTasksPage scope=MANAGER_SELF/></Guarded> }
                    />
                    <Route
                        path=path!("/manager/reports")
                        view=|| view! { <Guarded><MyReportsPage scope=MANAGER_SELF/></Guarded> }
                    />

                    // Employees
                    <Route
                        path=path!("/employee/apply-leave")
                        view=|| view! { <Guarded><ApplyLeavePage scope=EMPLOYEE_SELF/></Guarded> }
                    />
                    <Route
                        path=path!("/employee/tasks")
                        view=|| view! { <Guarded><MyTasksPage scope=EMPLOYEE_SELF/></Guarded> }
                    />
                    <Route
                        path=path!("/employee/reports")
                        view=|| view! { <Guarded><MyReportsPage scope=EMPLOYEE_SELF/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
