//! Role-aware landing page.

use leptos::prelude::*;
use leptos_router::components::A;
use staffdesk_access::{Role, route};
use staffdesk_client::{ApiError, ManagementScope, SelfServiceScope};

use crate::browser;
use crate::components::loaded;

/// A navigation tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tile {
    title: &'static str,
    description: &'static str,
    href: String,
}

impl Tile {
    fn new(title: &'static str, description: &'static str, href: String) -> Self {
        Self {
            title,
            description,
            href,
        }
    }
}

fn management_tiles(scope: ManagementScope) -> Vec<Tile> {
    let base = scope.segment();
    vec![
        Tile::new(
            "Manage Employees",
            "View, add and edit accounts",
            format!("/{base}/manage-users"),
        ),
        Tile::new(
            "Pending Approvals",
            "Approve or reject new registrations",
            format!("/{base}/pending-approvals"),
        ),
        Tile::new(
            "Leave Approvals",
            "Review leave requests",
            format!("/{base}/leave-approval"),
        ),
        Tile::new("Assign Tasks", "Create and track assignments", format!("/{base}/assign-task")),
        Tile::new(
            "Approve Reports",
            "Review submitted work reports",
            format!("/{base}/approve-reports"),
        ),
    ]
}

fn self_service_tiles(scope: SelfServiceScope) -> Vec<Tile> {
    let base = scope.segment();
    vec![
        Tile::new("Apply Leave", "Request time off", format!("/{base}/apply-leave")),
        Tile::new("My Tasks", "Accept and follow your tasks", format!("/{base}/tasks")),
        Tile::new("My Reports", "Submit work reports", format!("/{base}/reports")),
    ]
}

/// Tiles shown to `role`, management first.
fn tiles_for(role: Role) -> Vec<Tile> {
    let mut tiles = Vec::new();
    if let Some(scope) = ManagementScope::for_role(role) {
        tiles.extend(management_tiles(scope));
    }
    if let Some(scope) = SelfServiceScope::for_role(role) {
        tiles.extend(self_service_tiles(scope));
    }
    tiles
}

fn count<T>(result: staffdesk_core::Result<Vec<T>, ApiError>) -> Result<usize, String> {
    loaded(result).map(|list| list.len())
}

fn count_label(count: Option<usize>) -> String {
    count.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// The dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = browser::session();
    let role = session.role();
    let email = session.email().unwrap_or_default();

    let on_logout = move |_| {
        browser::session().logout();
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="muted">
                        {email}
                        {role.map(|role| format!(" ({})", role.label()))}
                    </p>
                </div>
                <div class="dashboard-actions">
                    <A href=route::PROFILE>"My profile"</A>
                    <button class="secondary-btn" on:click=on_logout>"Log out"</button>
                </div>
            </header>

            {role
                .and_then(ManagementScope::for_role)
                .map(|scope| view! { <ManagementCounters scope/> })}

            <section class="tiles">
                {role
                    .map(tiles_for)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <a href=tile.href class="tile">
                                <h3>{tile.title}</h3>
                                <p>{tile.description}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

/// Live counts for the management scope, each loaded independently.
#[component]
fn ManagementCounters(scope: ManagementScope) -> impl IntoView {
    let active_users = LocalResource::new(move || async move {
        count(browser::api().active_users(scope).await)
    });
    let pending_tasks = LocalResource::new(move || async move {
        count(browser::api().pending_tasks(scope).await)
    });
    let pending_leaves = LocalResource::new(move || async move {
        count(browser::api().pending_leaves(scope).await)
    });
    let pending_reports = LocalResource::new(move || async move {
        count(browser::api().pending_reports(scope).await)
    });

    view! {
        <section class="counters">
            <Counter label="Active users" count=active_users/>
            <Counter label="Pending tasks" count=pending_tasks/>
            <Counter label="Leave requests" count=pending_leaves/>
            <Counter label="Pending reports" count=pending_reports/>
        </section>
    }
}

#[component]
fn Counter(
    label: &'static str,
    count: LocalResource<Result<usize, String>>,
) -> impl IntoView {
    view! {
        <div class="counter">
            <span class="counter-value">
                {move || count_label(count.get().and_then(Result::ok))}
            </span>
            <span class="counter-label">{label}</span>
        </div>
    }
}
