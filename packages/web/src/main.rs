use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::Destination;
use store::ClientConfig;
use ui::{use_app, AppProvider};
use views::{Admin, Agent, Customer, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
    #[route("/agent")]
    Agent {},
    #[route("/customer")]
    Customer {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Admin => Route::Admin {},
            Destination::Agent => Route::Agent {},
            Destination::Customer => Route::Customer {},
            Destination::Login => Route::Login {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// The platform config file (defaults on the web), with the backend URL
/// overridable at build time.
fn client_config() -> ClientConfig {
    let mut config = ui::load_config();
    if let Some(url) = option_env!("INSUREPORTAL_API_URL").filter(|url| !url.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config: client_config(),
            Router::<Route> {}
        }
    }
}

/// Send `/` wherever the stored session belongs.
#[component]
fn Root() -> Element {
    let app = use_app();
    let nav = use_navigator();
    nav.replace(Route::from(app.destination()));
    rsx! {}
}
