//! Landing pages for agents and customers.

use dioxus::prelude::*;
use ui::{use_app, LogoutButton};

#[component]
fn Landing(title: String) -> Element {
    let app = use_app();
    let name = app.session.user_name().unwrap_or_default();
    let initials = app.session.initials().unwrap_or_default();

    rsx! {
        div {
            class: "admin-layout",
            header {
                class: "admin-header",
                h2 { "{title}" }
                div {
                    class: "admin-user",
                    span { class: "avatar", "{initials}" }
                    span { "{name}" }
                    LogoutButton { class: "secondary-btn" }
                }
            }
            main {
                class: "admin-content",
                p { class: "empty-state", "Welcome back. Your dashboard is on its way." }
            }
        }
    }
}

#[component]
pub fn Agent() -> Element {
    rsx! {
        Landing { title: "Agent Portal" }
    }
}

#[component]
pub fn Customer() -> Element {
    rsx! {
        Landing { title: "Customer Portal" }
    }
}
