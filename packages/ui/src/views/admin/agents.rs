//! Agents tab: search, create and edit.

use chrono::Utc;
use dioxus::prelude::*;

use crate::admin::{submit_agent_update, submit_new_agent, AdminState};
use crate::banner::show_banner;
use crate::notification::Notifier;
use crate::session::use_app;
use crate::views::fields::{GenderSelect, TextField};
use crate::views::ModalOverlay;

/// (form field, label, input type)
const CREATE_FIELDS: [(&str, &str, &str); 7] = [
    ("name", "Name", "text"),
    ("contactInfo", "Contact email", "email"),
    ("password", "Password", "password"),
    ("aadharnumber", "Aadhaar number", "text"),
    ("phone", "Phone", "tel"),
    ("address", "Address", "text"),
    ("orgEmail", "Organisational email", "email"),
];

const UPDATE_FIELDS: [(&str, &str, &str); 7] = [
    ("name", "Name", "text"),
    ("contactInfo", "Contact email", "email"),
    ("date", "Joined", "text"),
    ("aadharnumber", "Aadhaar number", "text"),
    ("phone", "Phone", "tel"),
    ("address", "Address", "text"),
    ("orgEmail", "Organisational email", "email"),
];

#[component]
pub fn AgentsPanel(state: Signal<AdminState>, notifier: Signal<Notifier>) -> Element {
    let mut state = state;
    let snapshot = state.read().clone();
    let search = snapshot.search.clone();

    rsx! {
        div {
            class: "panel-toolbar",
            input {
                r#type: "search",
                placeholder: "Search agents by name",
                value: "{search}",
                oninput: move |e| state.write().search = e.value(),
            }
            button {
                class: "primary-btn",
                onclick: move |_| state.write().toggle_agent_form(),
                if snapshot.show_agent_form { "Close" } else { "Add Agent" }
            }
        }

        if snapshot.show_agent_form {
            CreateAgentForm { state, notifier }
        }

        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Contact" }
                    th { "Organisational email" }
                    th { "Phone" }
                    th { "" }
                }
            }
            tbody {
                for agent in snapshot.filtered_agents().into_iter().cloned() {
                    tr {
                        td { {agent.display_name().to_string()} }
                        td { {agent.contact().unwrap_or_default().to_string()} }
                        td { {agent.org_email.clone().unwrap_or_default()} }
                        td { {agent.phone.clone().unwrap_or_default()} }
                        td {
                            button {
                                class: "link-btn",
                                onclick: move |_| state.write().open_update_form(&agent),
                                "Edit"
                            }
                        }
                    }
                }
            }
        }

        if snapshot.show_update_form {
            UpdateAgentForm { state, notifier }
        }
    }
}

#[component]
fn CreateAgentForm(state: Signal<AdminState>, notifier: Signal<Notifier>) -> Element {
    let mut state = state;
    let app = use_app();
    let duration = app.config.ui.banner_duration();
    let snapshot = state.read().clone();
    let gender = snapshot.agent_form.value("gender").to_string();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let agent = match state.write().prepare_new_agent(Utc::now()) {
            Ok(agent) => agent,
            Err(banner) => {
                show_banner(notifier, banner, duration);
                return;
            }
        };
        let backend = app.backend();
        spawn(async move {
            let result = submit_new_agent(&backend, &agent).await;
            let banner = state.write().finish_create_agent(result);
            show_banner(notifier, banner, duration);
        });
    };

    rsx! {
        form {
            class: "card-form",
            onsubmit: onsubmit,
            for (name, label, input_type) in CREATE_FIELDS {
                TextField {
                    label: label.to_string(),
                    value: snapshot.agent_form.value(name).to_string(),
                    error: snapshot.agent_error(name),
                    input_type: input_type.to_string(),
                    oninput: move |value: String| state.write().agent_form.set(name, value),
                    onblur: move |_| state.write().agent_form.touch(name),
                }
            }
            GenderSelect {
                value: gender,
                onchange: move |value: String| state.write().agent_form.set("gender", value),
            }
            button {
                r#type: "submit",
                class: "primary-btn",
                disabled: snapshot.creating_agent,
                if snapshot.creating_agent { "Creating..." } else { "Create Agent" }
            }
        }
    }
}

#[component]
fn UpdateAgentForm(state: Signal<AdminState>, notifier: Signal<Notifier>) -> Element {
    let mut state = state;
    let app = use_app();
    let duration = app.config.ui.banner_duration();
    let snapshot = state.read().clone();
    let gender = snapshot.update_form.value("gender").to_string();
    let title = snapshot
        .selected_agent
        .as_ref()
        .map(|a| format!("Edit {}", a.display_name()))
        .unwrap_or_else(|| "Edit agent".to_string());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let (id, update) = match state.write().prepare_update() {
            Ok(prepared) => prepared,
            Err(banner) => {
                show_banner(notifier, banner, duration);
                return;
            }
        };
        let backend = app.backend();
        spawn(async move {
            let result = submit_agent_update(&backend, &id, &update).await;
            let banner = state.write().finish_update(result);
            show_banner(notifier, banner, duration);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| state.write().close_update_form(),
            h3 { "{title}" }
            form {
                class: "card-form",
                onsubmit: onsubmit,
                for (name, label, input_type) in UPDATE_FIELDS {
                    TextField {
                        label: label.to_string(),
                        value: snapshot.update_form.value(name).to_string(),
                        error: snapshot.update_error(name),
                        input_type: input_type.to_string(),
                        oninput: move |value: String| state.write().update_form.set(name, value),
                        onblur: move |_| state.write().update_form.touch(name),
                    }
                }
                GenderSelect {
                    value: gender,
                    onchange: move |value: String| state.write().update_form.set("gender", value),
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "secondary-btn",
                        onclick: move |_| state.write().close_update_form(),
                        "Cancel"
                    }
                    button { r#type: "submit", class: "primary-btn", "Save" }
                }
            }
        }
    }
}
