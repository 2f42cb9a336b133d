use dioxus::prelude::*;

/// Keys that dismiss an open modal.
fn dismisses(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// A full-screen overlay that centers its children in a modal card.
///
/// Clicking outside the card or pressing Escape triggers `on_close`. The
/// overlay takes focus when mounted; key presses inside the card bubble up
/// to it.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if dismisses(&evt.key()) {
                    evt.stop_propagation();
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
