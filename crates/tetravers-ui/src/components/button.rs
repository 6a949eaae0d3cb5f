//! Button Components
//!
//! Button styles used across the site:
//! - Enter: the glowing "Accéder au Tétravers" call to action
//! - Submit: form submission (newsletter)
//! - ReadMore: inline link-like button on list entries

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Hero call to action - cyan border, glow on hover
    #[default]
    Enter,
    /// Form submission
    Submit,
    /// Inline "read more" affordance
    ReadMore,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Enter => "enter-button",
            ButtonVariant::Submit => "submit-button",
            ButtonVariant::ReadMore => "recit-read-more",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Enter,
///         onclick: move |_| navigator.push(Route::Univers {}),
///         "Accéder au Tétravers"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with ✕ icon, used in detail overlays
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "modal-close",
            "aria-label": "Fermer",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                onclick.call(());
            },
            "✕"
        }
    }
}
