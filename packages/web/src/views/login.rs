//! Login page view.

use dioxus::prelude::*;
use ui::LoginView;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}
