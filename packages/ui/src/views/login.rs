//! Login screen: pick customer or agent, then sign in with email and password.

use api::LoginKind;
use dioxus::prelude::*;

use crate::banner::{show_banner, NotificationBanner};
use crate::login::{failure_message, perform_login, LoginState, LOGIN_SUCCESS};
use crate::notification::{Banner, Notifier};
use crate::platform::sleep;
use crate::session::use_app;

#[component]
pub fn LoginView() -> Element {
    let app = use_app();
    let navigator = use_navigator();
    let mut state = use_signal(LoginState::default);
    let notifier = use_signal(Notifier::new);

    let banner_duration = app.config.ui.banner_duration();
    let redirect_delay = app.config.ui.redirect_delay();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = match state.write().begin_submit() {
            Ok(credentials) => credentials,
            Err(banner) => {
                show_banner(notifier, banner, banner_duration);
                return;
            }
        };
        let kind = state.read().login_kind();
        let app = app.clone();
        spawn(async move {
            let backend = app.backend();
            match perform_login(&backend, &app.session, kind, &credentials).await {
                Ok(destination) => {
                    let ticket = state.write().finish_submit(true);
                    show_banner(notifier, Banner::success(LOGIN_SUCCESS), banner_duration);
                    if let Some(ticket) = ticket {
                        sleep(redirect_delay).await;
                        if state.write().take_redirect(ticket) {
                            navigator.replace(destination.path());
                        }
                    }
                }
                Err(e) => {
                    state.write().finish_submit(false);
                    show_banner(notifier, Banner::error(failure_message(&e)), banner_duration);
                }
            }
        });
    };

    let snapshot = state.read().clone();
    let password_type = if snapshot.show_password { "text" } else { "password" };
    let email_error = snapshot.field_error("email");
    let password_error = snapshot.field_error("password");
    let email = snapshot.form.value("email").to_string();
    let password = snapshot.form.value("password").to_string();
    let heading = format!("{} Login", snapshot.login_kind().label());

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #f5f7fb;",

            div {
                style: "width: 100%; max-width: 360px;",
                NotificationBanner { notifier }
            }

            h1 {
                style: "margin-bottom: 0.5rem; color: #1f2a44; font-weight: 700; font-size: 1.75rem;",
                "InsurePortal"
            }

            if !snapshot.show_form {
                p {
                    style: "margin-bottom: 2rem; color: #5b6475; font-size: 0.9375rem;",
                    "How would you like to sign in?"
                }
                div {
                    class: "login-buttons",
                    style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",
                    button {
                        class: "login-btn primary-btn",
                        onclick: move |_| state.write().choose(LoginKind::Customer),
                        "Customer Login"
                    }
                    button {
                        class: "login-btn secondary-btn",
                        onclick: move |_| state.write().choose(LoginKind::Agent),
                        "Agent Login"
                    }
                }
            } else {
                p {
                    style: "margin-bottom: 1.5rem; color: #5b6475; font-size: 0.9375rem;",
                    "{heading}"
                }
                form {
                    class: "login-form",
                    style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",
                    onsubmit: onsubmit,

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| state.write().form.set("email", e.value()),
                        onblur: move |_| state.write().form.touch("email"),
                    }
                    if let Some(error) = email_error {
                        span { class: "field-error", "{error}" }
                    }

                    div {
                        style: "display: flex; gap: 0.5rem;",
                        input {
                            style: "flex: 1;",
                            r#type: "{password_type}",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |e| state.write().form.set("password", e.value()),
                            onblur: move |_| state.write().form.touch("password"),
                        }
                        button {
                            r#type: "button",
                            class: "link-btn",
                            onclick: move |_| state.write().toggle_password(),
                            if snapshot.show_password { "Hide" } else { "Show" }
                        }
                    }
                    if let Some(error) = password_error {
                        span { class: "field-error", "{error}" }
                    }

                    button {
                        r#type: "submit",
                        class: "login-btn primary-btn",
                        disabled: snapshot.loading,
                        if snapshot.loading { "Signing in..." } else { "Sign in" }
                    }
                    button {
                        r#type: "button",
                        class: "link-btn",
                        onclick: move |_| state.write().show_form = false,
                        "Back"
                    }
                }
            }
        }
    }
}
