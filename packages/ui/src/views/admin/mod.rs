//! Admin dashboard: header, tab bar and the active tab's panel.

mod agents;
mod policies;
mod records;

use dioxus::prelude::*;

use crate::admin::{load_collections, AdminState, Tab};
use crate::banner::NotificationBanner;
use crate::notification::Notifier;
use crate::session::{use_app, LogoutButton};

pub use agents::AgentsPanel;
pub use policies::PoliciesPanel;
pub use records::{PolicyLogsPanel, RecordsTable, StatsPanel};

#[component]
pub fn AdminDashboard() -> Element {
    let app = use_app();
    let mut state = use_signal(|| {
        let mut state = AdminState::default();
        state.set_user(app.session.user_name());
        state
    });
    let notifier = use_signal(Notifier::new);

    // Load all collections on mount
    let _ = use_resource(move || {
        let backend = app.backend();
        async move {
            let data = load_collections(&backend).await;
            tracing::info!(
                agents = data.agents.len(),
                policies = data.policies.len(),
                "Dashboard loaded"
            );
            state.write().data = data;
        }
    });

    let snapshot = state.read();
    let tab = snapshot.tab;
    let admin_name = snapshot.admin_name.clone();
    let initials = snapshot.admin_initials.clone();
    let stats = snapshot.stats();
    let customers = snapshot.data.customers.clone();
    let claims = snapshot.data.claims.clone();
    let logs = snapshot.data.policy_logs.clone();
    drop(snapshot);
    let tabs: Vec<(Tab, &str)> = Tab::ALL
        .into_iter()
        .map(|t| (t, if t == tab { "tab active" } else { "tab" }))
        .collect();

    rsx! {
        div {
            class: "admin-layout",

            header {
                class: "admin-header",
                h2 { "InsurePortal Admin" }
                div {
                    class: "admin-user",
                    span { class: "avatar", "{initials}" }
                    span { "{admin_name}" }
                    LogoutButton { class: "secondary-btn" }
                }
            }

            nav {
                class: "tab-bar",
                for (candidate, class) in tabs {
                    button {
                        class: class,
                        onclick: move |_| state.write().tab = candidate,
                        {candidate.label()}
                    }
                }
            }

            main {
                class: "admin-content",
                NotificationBanner { notifier }
                {match tab {
                    Tab::Dashboard => rsx! { StatsPanel { stats } },
                    Tab::Agents => rsx! { AgentsPanel { state, notifier } },
                    Tab::Policies => rsx! { PoliciesPanel { state, notifier } },
                    Tab::Customers => rsx! { RecordsTable { title: "customers", rows: customers } },
                    Tab::Claims => rsx! { RecordsTable { title: "claims", rows: claims } },
                    Tab::PolicyLogs => rsx! { PolicyLogsPanel { logs } },
                }}
            }
        }
    }
}
