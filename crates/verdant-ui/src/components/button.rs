//! Button Components
//!
//! - Primary: filled leaf-green call to action
//! - Outline: secondary action
//! - Submit: form submit with a busy state

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call to action
    #[default]
    Primary,
    /// Bordered secondary action
    Outline,
    /// Text-only action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Ghost => "btn btn--ghost",
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

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| show_care_guide(),
///         "Read the care guide"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

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

/// Properties for the SubmitButton component
#[derive(Clone, PartialEq, Props)]
pub struct SubmitButtonProps {
    /// Label at rest
    pub label: String,
    /// Label while busy
    #[props(default = "Subscribing...".to_string())]
    pub busy_label: String,
    /// Disables the button and swaps label and icon for a spinner
    #[props(default = false)]
    pub busy: bool,
}

/// Form submit button with a busy indicator.
///
/// The resting label and arrow icon come back as soon as `busy` clears.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    rsx! {
        button {
            class: submit_class(props.busy),
            r#type: "submit",
            disabled: props.busy,
            "aria-busy": if props.busy { "true" } else { "false" },
            if props.busy {
                span { class: "spinner", "aria-hidden": "true" }
                span { "{props.busy_label}" }
            } else {
                span { "{props.label}" }
                // Arrow icon
                svg {
                    class: "btn__icon",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    line { x1: "5", y1: "12", x2: "19", y2: "12" }
                    polyline { points: "12 5 19 12 12 19" }
                }
            }
        }
    }
}

fn submit_class(busy: bool) -> &'static str {
    if busy {
        "btn btn--primary btn--busy"
    } else {
        "btn btn--primary"
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
