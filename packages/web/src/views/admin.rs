use api::Destination;
use dioxus::prelude::*;
use ui::{use_app, AdminDashboard};

use crate::Route;

/// Admin dashboard page. Anyone without an admin session is sent to their
/// own landing page instead.
#[component]
pub fn Admin() -> Element {
    let app = use_app();
    let nav = use_navigator();

    let destination = app.destination();
    if destination != Destination::Admin {
        tracing::warn!(to = destination.path(), "Not an admin session, redirecting");
        nav.replace(Route::from(destination));
        return rsx! {};
    }

    rsx! {
        AdminDashboard {}
    }
}
