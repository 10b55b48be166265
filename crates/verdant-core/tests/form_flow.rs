//! Newsletter flow tests under a paused tokio clock
//!
//! These drive the timed transitions (simulated latency, success window)
//! end to end and check the state at each step.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::LocalSet;
use verdant_core::{
    run_submission, FormError, FormField, FormState, Newsletter, SimulatedSubscriber,
    SubmissionRecord, Subscribe, Timer, VerdantError, VerdantResult,
};

const LATENCY: Duration = Duration::from_millis(1500);
const WINDOW: Duration = Duration::from_millis(5000);

// ============================================================================
// Test Utilities
// ============================================================================

struct PausedTimer;

impl Timer for PausedTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

struct OfflineSubscriber;

impl Subscribe for OfflineSubscriber {
    async fn subscribe(&self, _record: &SubmissionRecord) -> VerdantResult<()> {
        tokio::time::sleep(LATENCY).await;
        Err(VerdantError::Subscribe("mailing list unreachable".to_string()))
    }
}

/// Show submission records and delivery warnings in test output
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .try_init();
}

fn shared_form(email: &str, consent: bool) -> Rc<RefCell<Newsletter>> {
    let mut form = Newsletter::new();
    form.set_email(email);
    form.set_consent(consent);
    Rc::new(RefCell::new(form))
}

fn state(form: &Rc<RefCell<Newsletter>>) -> FormState {
    form.borrow().state()
}

// ============================================================================
// Validation Failures
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_empty_email_never_submits() {
    let mut form = Newsletter::new();
    form.set_consent(true);
    let subscriber = SimulatedSubscriber::new(PausedTimer, LATENCY);

    let end = run_submission(&mut form, &subscriber, &PausedTimer, WINDOW).await;

    assert_eq!(end, FormState::Invalid(FormError::EmailRequired));
    let err = form.error().unwrap();
    assert_eq!(err.to_string(), "Email address is required");
    assert_eq!(err.field(), Some(FormField::Email));
}

#[tokio::test(start_paused = true)]
async fn test_missing_consent_never_submits() {
    let mut form = Newsletter::new();
    form.set_email("fern@example.com");
    let subscriber = SimulatedSubscriber::new(PausedTimer, LATENCY);

    let end = run_submission(&mut form, &subscriber, &PausedTimer, WINDOW).await;

    assert_eq!(end, FormState::Invalid(FormError::ConsentRequired));
    assert_eq!(
        form.field_error(FormField::Consent),
        Some(FormError::ConsentRequired)
    );
    assert_eq!(form.email(), "fern@example.com");
}

// ============================================================================
// Timed Transitions
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_valid_submission_cycles_back_to_idle() {
    init_tracing();
    let form = shared_form("fern@example.com", true);
    let local = LocalSet::new();

    local
        .run_until(async {
            let mut handle = form.clone();
            let flow = tokio::task::spawn_local(async move {
                let subscriber = SimulatedSubscriber::new(PausedTimer, LATENCY);
                run_submission(&mut handle, &subscriber, &PausedTimer, WINDOW).await
            });

            tokio::task::yield_now().await;
            assert_eq!(state(&form), FormState::Submitting);

            tokio::time::sleep(Duration::from_millis(1400)).await;
            assert_eq!(state(&form), FormState::Submitting);

            tokio::time::sleep(Duration::from_millis(200)).await;
            assert_eq!(state(&form), FormState::Success);
            assert_eq!(form.borrow().email(), "");
            assert!(!form.borrow().consent());

            tokio::time::sleep(Duration::from_millis(4800)).await;
            assert_eq!(state(&form), FormState::Success);

            tokio::time::sleep(Duration::from_millis(200)).await;
            assert_eq!(state(&form), FormState::Idle);

            assert_eq!(flow.await.unwrap(), FormState::Idle);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_dropping_flow_cancels_pending_dismiss() {
    init_tracing();
    let form = shared_form("fern@example.com", true);
    let local = LocalSet::new();

    local
        .run_until(async {
            let mut handle = form.clone();
            let flow = tokio::task::spawn_local(async move {
                let subscriber = SimulatedSubscriber::new(PausedTimer, LATENCY);
                run_submission(&mut handle, &subscriber, &PausedTimer, WINDOW).await
            });

            tokio::time::sleep(Duration::from_millis(1600)).await;
            assert_eq!(state(&form), FormState::Success);

            // Component teardown
            flow.abort();
            tokio::time::sleep(Duration::from_secs(30)).await;
            assert_eq!(state(&form), FormState::Success);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_delivery_returns_inline_error_and_keeps_fields() {
    init_tracing();
    let mut form = Newsletter::new();
    form.set_email("fern@example.com");
    form.set_consent(true);

    let end = run_submission(&mut form, &OfflineSubscriber, &PausedTimer, WINDOW).await;

    assert_eq!(end, FormState::Invalid(FormError::Unavailable));
    assert_eq!(form.email(), "fern@example.com");
    assert!(form.consent());

    // Editing clears the error and allows a retry
    form.set_email("fern@example.org");
    assert_eq!(form.state(), FormState::Idle);
    assert!(form.submit().is_ok());
}
