//! Application context and session hooks for the UI.

use api::{Destination, HttpBackend, Session};
use chrono::Utc;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::platform::{make_token_store, PlatformStore};

/// Shared handles every screen needs: the configuration, the backend facade
/// and the persisted session.
#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub session: Session<PlatformStore>,
    http: HttpBackend,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let session = Session::new(make_token_store(), config.session.token_key.clone());
        let http = HttpBackend::new(&config.api);
        Self {
            config,
            session,
            http,
        }
    }

    /// Backend carrying the current bearer token, if any.
    pub fn backend(&self) -> HttpBackend {
        self.http.clone().with_token(self.session.token())
    }

    /// Where the current session should land.
    pub fn destination(&self) -> Destination {
        self.session.destination(Utc::now())
    }
}

/// Get the application context provided by [`AppProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provider component that installs the [`AppContext`].
/// Wrap your app with this component.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(move || {
        tracing::info!(base_url = %config.api.base_url, "Backend configured");
        AppContext::new(config)
    });

    rsx! {
        {children}
    }
}

/// Button that ends the session and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let onclick = move |_| {
        app.session.clear();
        tracing::info!("Logged out");
        navigator.replace(Destination::Login.path());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
