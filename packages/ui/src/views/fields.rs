//! Labelled form inputs with their validation message.

use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: String,
    error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    rsx! {
        label {
            class: "form-field",
            span { class: "form-label", "{label}" }
            input {
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
                onblur: move |_| onblur.call(()),
            }
            if let Some(error) = error {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

#[component]
pub fn GenderSelect(value: String, onchange: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "form-field",
            span { class: "form-label", "Gender" }
            select {
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                for choice in ["male", "female", "other"] {
                    option { value: choice, selected: choice == value, "{choice}" }
                }
            }
        }
    }
}
