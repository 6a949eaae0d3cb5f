//! Detail Overlay Component
//!
//! Full-screen overlay with a centered panel. Every click is reported as an
//! [`OverlayClick`] so the page's selection state decides what happens;
//! clicks inside the panel never reach the background handler.

use dioxus::prelude::*;
use tetravers_core::OverlayClick;

use crate::components::CloseButton;

/// Detail overlay
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DetailOverlay {
///         overlay_class: "royaume-modal-overlay",
///         panel_class: "royaume-modal",
///         on_click: move |target| { selection.write().click(target); },
///         h2 { "{realm.name()}" }
///     }
/// }
/// ```
#[component]
pub fn DetailOverlay(
    /// CSS class of the full-screen backdrop
    #[props(default = "modal-overlay".to_string())]
    overlay_class: String,
    /// CSS class of the panel
    #[props(default = "modal-panel".to_string())]
    panel_class: String,
    /// Inline style for the panel (accent border, glow)
    #[props(default)]
    panel_style: String,
    /// Receives every click on the overlay
    on_click: EventHandler<OverlayClick>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "{overlay_class}",
            onclick: move |_| on_click.call(OverlayClick::Background),

            div {
                class: "{panel_class}",
                style: "{panel_style}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_click.call(OverlayClick::Panel);
                },

                CloseButton { onclick: move |_| on_click.call(OverlayClick::CloseButton) }

                {children}
            }
        }
    }
}
