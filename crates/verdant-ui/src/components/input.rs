//! Form Field Components
//!
//! Email input and consent checkbox with an inline error slot. An error
//! marks the control `aria-invalid` and links the message through
//! `aria-describedby`.

use dioxus::prelude::*;

/// Properties for the EmailInput component
#[derive(Clone, PartialEq, Props)]
pub struct EmailInputProps {
    /// Element id; also used to focus the field from outside
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Inline error message
    #[props(default)]
    pub error: Option<String>,
    /// Visually hidden label text
    #[props(default = "Email address".to_string())]
    pub label: String,
    #[props(default = "you@example.com".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub disabled: bool,
}

/// Email input with inline validation message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     EmailInput {
///         id: "newsletter-email".to_string(),
///         value: form.read().email().to_string(),
///         oninput: move |v| form.write().set_email(v),
///         onblur: move |_| { form.write().blur(); },
///         error: form.read().field_error(FormField::Email).map(|e| e.to_string()),
///     }
/// }
/// ```
#[component]
pub fn EmailInput(props: EmailInputProps) -> Element {
    let error_id = error_id(&props.id);
    let invalid = props.error.is_some();

    rsx! {
        div { class: field_class(invalid),
            label { class: "visually-hidden", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: "form-field__input",
                r#type: "email",
                name: "email",
                autocomplete: "email",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                disabled: props.disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": if invalid { error_id.clone() } else { String::new() },
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(message) = &props.error {
                p { id: "{error_id}", class: "form-field__error", role: "alert", "{message}" }
            }
        }
    }
}

/// Properties for the ConsentCheckbox component
#[derive(Clone, PartialEq, Props)]
pub struct ConsentCheckboxProps {
    /// Element id; also used to focus the checkbox from outside
    pub id: String,
    pub checked: bool,
    /// Handler called with the new checked state
    pub onchange: EventHandler<bool>,
    /// Inline error message
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Label content
    pub children: Element,
}

/// Required consent checkbox. Its error is shown inline like any other
/// field error.
#[component]
pub fn ConsentCheckbox(props: ConsentCheckboxProps) -> Element {
    let error_id = error_id(&props.id);
    let invalid = props.error.is_some();
    let class = format!("{} form-field--checkbox", field_class(invalid));

    rsx! {
        div { class: "{class}",
            label { class: "checkbox",
                input {
                    id: "{props.id}",
                    r#type: "checkbox",
                    name: "consent",
                    checked: props.checked,
                    disabled: props.disabled,
                    "aria-invalid": if invalid { "true" } else { "false" },
                    "aria-describedby": if invalid { error_id.clone() } else { String::new() },
                    onchange: move |e| props.onchange.call(e.checked()),
                }
                span { class: "checkbox__label", {props.children} }
            }
            if let Some(message) = &props.error {
                p { id: "{error_id}", class: "form-field__error", role: "alert", "{message}" }
            }
        }
    }
}

fn error_id(field_id: &str) -> String {
    format!("{}-error", field_id)
}

fn field_class(invalid: bool) -> &'static str {
    if invalid {
        "form-field form-field--invalid"
    } else {
        "form-field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_id_derives_from_field() {
        assert_eq!(error_id("newsletter-email"), "newsletter-email-error");
    }

    #[test]
    fn invalid_field_gets_modifier() {
        assert_eq!(field_class(true), "form-field form-field--invalid");
        assert_eq!(field_class(false), "form-field");
    }
}
