//! Notification banner shown at the top of a screen.

use std::time::Duration;

use dioxus::prelude::*;

use crate::notification::{Banner, Notifier};
use crate::platform::sleep;

/// Show `banner` and hide it after `duration`, unless a newer banner
/// replaced it in the meantime.
pub fn show_banner(mut notifier: Signal<Notifier>, banner: Banner, duration: Duration) {
    let ticket = notifier.write().show(banner);
    spawn(async move {
        sleep(duration).await;
        notifier.write().expire(ticket);
    });
}

#[component]
pub fn NotificationBanner(notifier: Signal<Notifier>) -> Element {
    let mut notifier = notifier;
    let Some(banner) = notifier.read().current().cloned() else {
        return rsx! {};
    };
    let message = banner.message.clone();
    let (background, color) = if banner.is_error() {
        ("#fdecea", "#b3261e")
    } else {
        ("#e7f5ec", "#1e7b3c")
    };

    rsx! {
        div {
            class: "notification-banner",
            role: "status",
            style: "display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.75rem 1rem; margin-bottom: 1rem; border-radius: 6px; background: {background}; color: {color}; font-size: 0.9375rem;",
            span { "{message}" }
            button {
                style: "background: none; border: none; color: inherit; cursor: pointer; font-size: 1rem;",
                onclick: move |_| notifier.write().dismiss(),
                "×"
            }
        }
    }
}
