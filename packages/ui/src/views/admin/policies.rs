//! Policies tab: the catalog with a type filter, creation and deletion.

use dioxus::prelude::*;

use crate::admin::{submit_new_policy, submit_policy_delete, AdminState};
use crate::banner::show_banner;
use crate::notification::Notifier;
use crate::session::use_app;
use crate::views::fields::TextField;
use crate::views::ModalOverlay;

const POLICY_FIELDS: [(&str, &str, &str); 5] = [
    ("name", "Name", "text"),
    ("policyType", "Type", "text"),
    ("premiumAmount", "Premium", "number"),
    ("coverageamount", "Coverage", "number"),
    ("coverageDetails", "Coverage details", "text"),
];

fn amount(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn PoliciesPanel(state: Signal<AdminState>, notifier: Signal<Notifier>) -> Element {
    let mut state = state;
    let snapshot = state.read().clone();
    let filter = snapshot.policy_type_filter.clone();
    let types: Vec<String> = snapshot.policy_types().into_iter().map(str::to_string).collect();

    rsx! {
        div {
            class: "panel-toolbar",
            select {
                value: "{filter}",
                onchange: move |e| state.write().policy_type_filter = e.value(),
                option { value: "", selected: filter.is_empty(), "All types" }
                for policy_type in types {
                    option {
                        value: "{policy_type}",
                        selected: policy_type == filter,
                        "{policy_type}"
                    }
                }
            }
            button {
                class: "primary-btn",
                onclick: move |_| state.write().toggle_policy_form(),
                if snapshot.show_policy_form { "Close" } else { "Add Policy" }
            }
        }

        if snapshot.show_policy_form {
            CreatePolicyForm { state, notifier }
        }

        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Type" }
                    th { "Premium" }
                    th { "Coverage" }
                    th { "Details" }
                    th { "" }
                }
            }
            tbody {
                for policy in snapshot.filtered_policies().into_iter().cloned() {
                    tr {
                        td { {policy.name.clone().unwrap_or_default()} }
                        td { {policy.policy_type.clone().unwrap_or_default()} }
                        td { {amount(policy.premium_amount)} }
                        td { {amount(policy.coverage_amount)} }
                        td { {policy.coverage_details.clone().unwrap_or_default()} }
                        td {
                            button {
                                class: "danger-link-btn",
                                onclick: move |_| state.write().request_delete(policy.id.clone()),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }

        if snapshot.pending_delete.is_some() {
            DeletePolicyDialog { state, notifier }
        }
    }
}

#[component]
fn CreatePolicyForm(state: Signal<AdminState>, notifier: Signal<Notifier>) -> Element {
    let mut state = state;
    let app = use_app();
    let duration = app.config.ui.banner_duration();
    let snapshot = state.read().clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let policy = match state.write().prepare_new_policy() {
            Ok(policy) => policy,
            Err(banner) => {
                show_banner(notifier, banner, duration);
                return;
            }
        };
        let backend = app.backend();
        spawn(async move {
            let result = submit_new_policy(&backend, &policy).await;
            let banner = state.write().finish_create_policy(result);
            show_banner(notifier, banner, duration);
        });
    };

    rsx! {
        form {
            class: "card-form",
            onsubmit: onsubmit,
            for (name, label, input_type) in POLICY_FIELDS {
                TextField {
                    label: label.to_string(),
                    value: snapshot.policy_form.value(name).to_string(),
                    error: snapshot.policy_error(name),
                    input_type: input_type.to_string(),
                    oninput: move |value: String| state.write().policy_form.set(name, value),
                    onblur: move |_| state.write().policy_form.touch(name),
                }
            }
            button {
                r#type: "submit",
                class: "primary-btn",
                disabled: snapshot.creating_policy,
                if snapshot.creating_policy { "Creating..." } else { "Create Policy" }
            }
        }
    }
}

/// Confirmation step before a catalog entry is deleted.
#[component]
fn DeletePolicyDialog(state: Signal<AdminState>, notifier: Signal<Notifier>) -> Element {
    let mut state = state;
    let app = use_app();
    let duration = app.config.ui.banner_duration();
    let prompt = state
        .read()
        .pending_delete
        .as_ref()
        .map(|pending| pending.prompt())
        .unwrap_or_default();

    let confirm = move |_: MouseEvent| {
        let id = match state.write().confirm_delete() {
            Ok(id) => id,
            Err(banner) => {
                show_banner(notifier, banner, duration);
                return;
            }
        };
        let backend = app.backend();
        spawn(async move {
            let result = submit_policy_delete(&backend, &id).await;
            if let Some(banner) = state.write().finish_delete(result) {
                show_banner(notifier, banner, duration);
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| state.write().cancel_delete(),
            p { "{prompt}" }
            div {
                class: "form-actions",
                button {
                    class: "secondary-btn",
                    onclick: move |_| state.write().cancel_delete(),
                    "Cancel"
                }
                button { class: "danger-btn", onclick: confirm, "Delete" }
            }
        }
    }
}
