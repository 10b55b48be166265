//! Newsletter signup form.
//!
//! A required email field and a required consent checkbox guard a one-shot
//! submission. The form moves through [`FormState`]:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──delivered──▶ Success ──window──▶ Idle
//!  ▲  │                  │
//!  │  └─invalid─▶ Invalid ◀──failed──┘
//!  └────input──────┘
//! ```
//!
//! Validation runs in a fixed order (empty, format, consent) and stops at
//! the first failure. Every failure is reported inline next to the control
//! it names, including the consent checkbox.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::error::VerdantResult;
use crate::logging::{self, SubmissionRecord};
use crate::timer::Timer;

/// Default simulated delivery latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Default time the success panel stays up
pub const DEFAULT_SUCCESS_WINDOW: Duration = Duration::from_millis(5000);

/// Check an address against `local@domain.tld`.
///
/// No whitespace anywhere, exactly one `@`, a non-empty local part, and a
/// `.` after the `@` with at least one character on either side of it.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Control that receives focus for an error
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Email,
    Consent,
}

/// Why the form is not submitting
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormError {
    #[error("Email address is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Please agree to receive emails from us")]
    ConsentRequired,

    /// The subscriber failed; the form keeps what was typed
    #[error("We couldn't sign you up right now. Please try again.")]
    Unavailable,

    /// Submit pressed while a submission is in flight or on display
    #[error("A submission is already in progress")]
    Busy,
}

impl FormError {
    /// Control to focus and to render the message next to
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::EmailRequired | FormError::EmailInvalid => Some(FormField::Email),
            FormError::ConsentRequired => Some(FormField::Consent),
            FormError::Unavailable | FormError::Busy => None,
        }
    }
}

/// Lifecycle of the form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormState {
    #[default]
    Idle,
    Invalid(FormError),
    Submitting,
    Success,
}

impl FormState {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    /// Whether the success panel replaces the form content
    pub fn shows_success(&self) -> bool {
        matches!(self, FormState::Success)
    }

    pub fn error(&self) -> Option<FormError> {
        match self {
            FormState::Invalid(e) => Some(*e),
            _ => None,
        }
    }
}

/// Newsletter form: field values plus lifecycle state
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Newsletter {
    email: String,
    consent: bool,
    state: FormState,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn error(&self) -> Option<FormError> {
        self.state.error()
    }

    /// The current error if it belongs next to `field`
    pub fn field_error(&self, field: FormField) -> Option<FormError> {
        self.error().filter(|e| e.field() == Some(field))
    }

    /// Email input changed. Any displayed error is cleared.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        if matches!(self.state, FormState::Invalid(_)) {
            self.state = FormState::Idle;
        }
    }

    /// Consent checkbox changed. Clears a consent error.
    pub fn set_consent(&mut self, checked: bool) {
        self.consent = checked;
        if self.state == FormState::Invalid(FormError::ConsentRequired) {
            self.state = FormState::Idle;
        }
    }

    /// Email field lost focus.
    ///
    /// A non-empty malformed address shows the format error right away; an
    /// empty field stays quiet until submit.
    pub fn blur(&mut self) -> Option<FormError> {
        if !matches!(self.state, FormState::Idle | FormState::Invalid(_)) {
            return None;
        }
        let email = self.email.trim();
        if !email.is_empty() && !validate_email(email) {
            self.state = FormState::Invalid(FormError::EmailInvalid);
            return Some(FormError::EmailInvalid);
        }
        None
    }

    fn validate(&self) -> Result<SubmissionRecord, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::EmailRequired);
        }
        if !validate_email(email) {
            return Err(FormError::EmailInvalid);
        }
        if !self.consent {
            return Err(FormError::ConsentRequired);
        }
        Ok(SubmissionRecord::new(email, self.consent))
    }

    /// Submit pressed.
    ///
    /// On success the form enters `Submitting` and the returned record is
    /// what must be delivered. On failure the form shows the error and the
    /// caller focuses [`FormError::field`].
    pub fn submit(&mut self) -> Result<SubmissionRecord, FormError> {
        if matches!(self.state, FormState::Submitting | FormState::Success) {
            return Err(FormError::Busy);
        }

        match self.validate() {
            Ok(record) => {
                logging::record_submission(&record);
                self.state = FormState::Submitting;
                Ok(record)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Newsletter validation failed");
                self.state = FormState::Invalid(e);
                Err(e)
            }
        }
    }

    /// Delivery finished. Returns whether the form entered `Success`.
    ///
    /// A successful delivery clears both fields; a failed one keeps them so
    /// the visitor can retry.
    pub fn complete(&mut self, outcome: VerdantResult<()>) -> bool {
        if self.state != FormState::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.email.clear();
                self.consent = false;
                self.state = FormState::Success;
                true
            }
            Err(e) => {
                tracing::warn!("Newsletter delivery failed: {}", e);
                self.state = FormState::Invalid(FormError::Unavailable);
                false
            }
        }
    }

    /// Success window elapsed; show the empty form again.
    pub fn dismiss(&mut self) -> bool {
        if self.state == FormState::Success {
            self.state = FormState::Idle;
            true
        } else {
            false
        }
    }
}

/// Receives accepted submissions
pub trait Subscribe {
    fn subscribe(&self, record: &SubmissionRecord) -> impl Future<Output = VerdantResult<()>>;
}

/// Stand-in for a mailing-list backend: waits, then always accepts.
#[derive(Clone, Debug)]
pub struct SimulatedSubscriber<T> {
    timer: T,
    latency: Duration,
}

impl<T: Timer> SimulatedSubscriber<T> {
    pub fn new(timer: T, latency: Duration) -> Self {
        Self { timer, latency }
    }
}

impl<T: Timer> Subscribe for SimulatedSubscriber<T> {
    async fn subscribe(&self, record: &SubmissionRecord) -> VerdantResult<()> {
        self.timer.sleep(self.latency).await;
        tracing::debug!(email = %record.email, "Simulated subscription accepted");
        Ok(())
    }
}

/// Access to a [`Newsletter`] that may live behind shared UI state
pub trait FormHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut Newsletter) -> R) -> R;
}

impl FormHandle for Newsletter {
    fn update<R>(&mut self, f: impl FnOnce(&mut Newsletter) -> R) -> R {
        f(self)
    }
}

impl FormHandle for Rc<RefCell<Newsletter>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Newsletter) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// Deliver an accepted submission and run the timed transitions after it.
///
/// Submitting → Success → (after `success_window`) Idle, or Submitting →
/// Invalid(Unavailable) when the subscriber fails. Dropping the future
/// cancels whatever transition is still pending.
pub async fn deliver<H, S, T>(
    form: &mut H,
    record: SubmissionRecord,
    subscriber: &S,
    timer: &T,
    success_window: Duration,
) -> FormState
where
    H: FormHandle,
    S: Subscribe,
    T: Timer,
{
    let outcome = subscriber.subscribe(&record).await;
    if !form.update(|f| f.complete(outcome)) {
        return form.update(|f| f.state());
    }

    timer.sleep(success_window).await;
    form.update(|f| {
        f.dismiss();
        f.state()
    })
}

/// Submit and, when validation passes, deliver.
pub async fn run_submission<H, S, T>(
    form: &mut H,
    subscriber: &S,
    timer: &T,
    success_window: Duration,
) -> FormState
where
    H: FormHandle,
    S: Subscribe,
    T: Timer,
{
    match form.update(|f| f.submit()) {
        Ok(record) => deliver(form, record, subscriber, timer, success_window).await,
        Err(_) => form.update(|f| f.state()),
    }
}
