//! Integration tests for job intake, completion reporting and redraws.

mod common;

use common::{RecordingIndicator, RecordingNotifier};
use embassy_time::Instant;
use web2wire_core::{
    IntakeError, IntakeOutcome, JobContext, JobData, NotifyError,
    PayloadFormat, SequencerEvent, SequencerState,
    job::{DEFAULT_COUNTRY_CODE, DEFAULT_NAME, DEFAULT_ORIGIN},
};

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Context with the boot frame already drawn
fn drained_context() -> JobContext {
    let mut context = JobContext::default();
    assert!(context.take_frame().is_some());
    context
}

fn run_to_completion(
    context: &mut JobContext,
    led: &mut RecordingIndicator,
    notifier: &mut RecordingNotifier,
    started_at: u64,
) {
    for step in 1..=5 {
        context.poll(at(started_at + step * 1000), led, notifier);
    }
}

// -----------------------------------------------------------------------------
// Test 1: Admission
// -----------------------------------------------------------------------------

#[test]
fn json_job_is_accepted_and_drawn_immediately() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();

    let outcome = context.submit(
        br#"{"name":"Alice Wu","origin":"Berlin","countryCode":"de"}"#,
        PayloadFormat::Json,
        at(0),
        &mut led,
    );

    assert_eq!(outcome, IntakeOutcome::Accepted);
    assert_eq!(context.job(), &JobData::new("Alice Wu", "Berlin", "DE"));

    let frame = context.take_frame().expect("start frame");
    assert_eq!(frame.state, SequencerState::Phase { index: 0 });
    assert!(frame.is_processing());
    assert!(context.take_frame().is_none());
}

#[test]
fn form_job_is_accepted() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();

    let outcome = context.submit(
        b"name=Jos%C3%A9&country=Lisboa&flag=pt",
        PayloadFormat::Form,
        at(0),
        &mut led,
    );

    assert_eq!(outcome, IntakeOutcome::Accepted);
    assert_eq!(context.job(), &JobData::new("José", "Lisboa", "PT"));
}

#[test]
fn missing_fields_use_placeholders() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();

    context.submit(br#"{"extra":1}"#, PayloadFormat::Json, at(0), &mut led);

    let job = context.job();
    assert_eq!(job.name.as_str(), DEFAULT_NAME);
    assert_eq!(job.origin.as_str(), DEFAULT_ORIGIN);
    assert_eq!(job.country_code.as_str(), DEFAULT_COUNTRY_CODE);
}

#[test]
fn busy_context_rejects_without_parsing() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();
    context.submit(br#"{"name":"First"}"#, PayloadFormat::Json, at(0), &mut led);
    context.take_frame();

    let outcome = context.submit(b"not json", PayloadFormat::Json, at(500), &mut led);

    assert_eq!(outcome, IntakeOutcome::Rejected(IntakeError::Busy));
    assert_eq!(context.job().name.as_str(), "First");
    assert_eq!(context.state(), SequencerState::Phase { index: 0 });
    assert!(context.take_frame().is_none());
}

#[test]
fn malformed_payload_changes_nothing() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();

    let outcome = context.submit(b"", PayloadFormat::Json, at(0), &mut led);

    assert_eq!(outcome, IntakeOutcome::Rejected(IntakeError::Malformed));
    assert!(context.job().is_awaiting());
    assert!(context.is_idle());
    assert!(led.history.is_empty());
    assert!(context.take_frame().is_none());
}

#[test]
fn broken_form_escape_is_malformed() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();

    let outcome = context.submit(b"name=%Z1", PayloadFormat::Form, at(0), &mut led);

    assert_eq!(outcome, IntakeOutcome::Rejected(IntakeError::Malformed));
}

#[test]
fn json_escapes_are_decoded() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();

    let outcome = context.submit(
        br#"{"name":"Al \"Ace\" Wu","origin":"Zo\u00eb\/Town","countryCode":"nl"}"#,
        PayloadFormat::Json,
        at(0),
        &mut led,
    );

    assert_eq!(outcome, IntakeOutcome::Accepted);
    assert_eq!(context.job().name.as_str(), "Al \"Ace\" Wu");
    assert_eq!(context.job().origin.as_str(), "Zo\u{eb}/Town");
}

#[test]
fn long_values_are_truncated_in_both_encodings() {
    let long_name = "a".repeat(300);
    let form = format!("name={long_name}&flag=FR");
    let json = format!(r#"{{"name":"{long_name}","flag":"FR"}}"#);
    let expected = JobData::new(&long_name, DEFAULT_ORIGIN, "FR");

    for (body, format) in [
        (form.as_bytes(), PayloadFormat::Form),
        (json.as_bytes(), PayloadFormat::Json),
    ] {
        let mut context = drained_context();
        let mut led = RecordingIndicator::off();

        let outcome = context.submit(body, format, at(0), &mut led);

        assert_eq!(outcome, IntakeOutcome::Accepted, "{format:?}");
        assert_eq!(context.job(), &expected, "{format:?}");
        assert_eq!(context.job().name.len(), 64);
    }
}

// -----------------------------------------------------------------------------
// Test 2: Completion
// -----------------------------------------------------------------------------

#[test]
fn completion_is_reported_exactly_once() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();
    let mut notifier = RecordingNotifier::default();
    context.submit(
        br#"{"name":"Alice","origin":"Berlin","countryCode":"DE"}"#,
        PayloadFormat::Json,
        at(0),
        &mut led,
    );

    run_to_completion(&mut context, &mut led, &mut notifier, 0);
    for ms in [6_000, 7_000, 60_000] {
        assert_eq!(
            context.poll(at(ms), &mut led, &mut notifier),
            SequencerEvent::None
        );
    }

    assert_eq!(notifier.reports, vec![JobData::new("Alice", "Berlin", "DE")]);
    assert_eq!(notifier.attempts, 1);
}

#[test]
fn completion_triggers_idle_redraw() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();
    let mut notifier = RecordingNotifier::default();
    context.submit(br#"{"name":"Alice"}"#, PayloadFormat::Json, at(0), &mut led);
    context.take_frame();

    context.poll(at(2_000), &mut led, &mut notifier);
    assert!(context.take_frame().is_none());

    run_to_completion(&mut context, &mut led, &mut notifier, 1_000);

    let frame = context.take_frame().expect("idle frame");
    assert_eq!(frame.state, SequencerState::Idle);
    assert_eq!(frame.job.name.as_str(), "Alice");
    assert!(context.take_frame().is_none());
}

#[test]
fn notifier_failure_does_not_block_next_job() {
    let mut context = drained_context();
    let mut led = RecordingIndicator::off();
    let mut notifier = RecordingNotifier {
        fail_with: Some(NotifyError::LinkDown),
        ..RecordingNotifier::default()
    };
    context.submit(br#"{"name":"A"}"#, PayloadFormat::Json, at(0), &mut led);

    run_to_completion(&mut context, &mut led, &mut notifier, 0);
    assert!(context.is_idle());
    for ms in [5_500, 10_000] {
        context.poll(at(ms), &mut led, &mut notifier);
    }
    assert_eq!(notifier.attempts, 1);
    assert!(notifier.reports.is_empty());

    let outcome =
        context.submit(br#"{"name":"B"}"#, PayloadFormat::Json, at(6_000), &mut led);
    assert_eq!(outcome, IntakeOutcome::Accepted);
}

#[test]
fn indicator_is_restored_after_job() {
    let idle = web2wire_core::IndicatorColor::new(20, 0, 0);
    let mut context = drained_context();
    let mut led = RecordingIndicator::showing(idle);
    let mut notifier = RecordingNotifier::default();
    context.submit(br#"{"name":"A"}"#, PayloadFormat::Json, at(0), &mut led);

    run_to_completion(&mut context, &mut led, &mut notifier, 0);

    assert_eq!(led.current, idle);
}

// -----------------------------------------------------------------------------
// Test 3: Boot frame
// -----------------------------------------------------------------------------

#[test]
fn first_frame_shows_awaiting_placeholder() {
    let mut context = JobContext::default();

    let frame = context.take_frame().expect("boot frame");

    assert!(frame.job.is_awaiting());
    assert_eq!(frame.state, SequencerState::Idle);
    assert!(context.take_frame().is_none());
}
