//! Newsletter Signup
//!
//! Email plus consent, validated inline, then a simulated subscription.
//! The delivery and the success window run in a task owned by this
//! component; unmounting it cancels whatever transition is pending.

use dioxus::prelude::*;
use verdant_core::{
    deliver, FormError, FormField, FormHandle, Newsletter, SimulatedSubscriber,
};
use verdant_ui::{ConsentCheckbox, EmailInput, SubmitButton};

use crate::context::use_site_config;
use crate::dom::{self, GlooTimer};

const EMAIL_ID: &str = "newsletter-email";
const CONSENT_ID: &str = "newsletter-consent";

fn field_id(field: FormField) -> &'static str {
    match field {
        FormField::Email => EMAIL_ID,
        FormField::Consent => CONSENT_ID,
    }
}

/// Form state kept in a Dioxus signal
#[derive(Clone, Copy)]
struct SignalForm(Signal<Newsletter>);

impl FormHandle for SignalForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut Newsletter) -> R) -> R {
        f(&mut *self.0.write())
    }
}

#[component]
pub fn NewsletterSignup() -> Element {
    let config = use_site_config();
    let latency = config.submit_latency();
    let success_window = config.success_window();

    let mut form = use_signal(Newsletter::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = form.write().submit();
        match submitted {
            Ok(record) => {
                spawn(async move {
                    let mut handle = SignalForm(form);
                    let subscriber = SimulatedSubscriber::new(GlooTimer, latency);
                    let settled =
                        deliver(&mut handle, record, &subscriber, &GlooTimer, success_window).await;
                    tracing::debug!(state = ?settled, "Newsletter flow settled");
                });
            }
            Err(FormError::Busy) => {}
            Err(e) => {
                if let Some(field) = e.field() {
                    dom::focus(field_id(field));
                }
            }
        }
    };

    let current = form.read().clone();
    let state = current.state();
    let busy = state.is_busy();

    rsx! {
        div { class: "newsletter__card",
            if state.shows_success() {
                div { class: "newsletter__success", role: "status",
                    h3 { "You're on the list!" }
                    p { "Look out for seasonal care tips in your inbox." }
                }
            } else {
                form {
                    class: "newsletter__form",
                    "novalidate": "true",
                    onsubmit,

                    EmailInput {
                        id: EMAIL_ID.to_string(),
                        value: current.email().to_string(),
                        oninput: move |value: String| form.write().set_email(value),
                        onblur: move |_| {
                            form.write().blur();
                        },
                        error: current.field_error(FormField::Email).map(|e| e.to_string()),
                        disabled: busy,
                    }

                    ConsentCheckbox {
                        id: CONSENT_ID.to_string(),
                        checked: current.consent(),
                        onchange: move |checked: bool| form.write().set_consent(checked),
                        error: current.field_error(FormField::Consent).map(|e| e.to_string()),
                        disabled: busy,
                        "I agree to receive plant-care emails from Verdant"
                    }

                    if current.error() == Some(FormError::Unavailable) {
                        p { class: "newsletter__error", role: "alert", "{FormError::Unavailable}" }
                    }

                    SubmitButton { label: "Subscribe".to_string(), busy }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_focus_their_field() {
        assert_eq!(field_id(FormField::Email), EMAIL_ID);
        assert_eq!(field_id(FormField::Consent), CONSENT_ID);
        assert_eq!(
            FormError::EmailRequired.field().map(field_id),
            Some("newsletter-email")
        );
        assert_eq!(
            FormError::ConsentRequired.field().map(field_id),
            Some("newsletter-consent")
        );
    }
}
