use journeyflow::shared::logging::EventLog;
use journeyflow::telemetry::{
    Clipboard, CopyIndicator, Environment, NotificationTarget, Snippet, TelemetrySetupSession,
};
use journeyflow::wizard::gating::StepMarker;
use journeyflow::wizard::{CursorMove, TelemetryStep, WizardError};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone, Default)]
struct SharedClipboard {
    copies: Rc<RefCell<Vec<String>>>,
}

impl Clipboard for SharedClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        self.copies.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), String> {
        Err("clipboard access denied".to_string())
    }
}

fn session_with(clipboard: Box<dyn Clipboard>) -> TelemetrySetupSession {
    TelemetrySetupSession::new(
        clipboard,
        CopyIndicator::new(Duration::from_millis(2000)),
        "TS-77",
        EventLog::disabled(),
    )
}

#[test]
fn telemetry_session_module_walks_all_steps_then_prompts_for_pricing() {
    let mut session = session_with(Box::new(SharedClipboard::default()));
    assert_eq!(session.path(), "/setup-telemetry");
    for expected in 1..8 {
        assert_eq!(session.next(), CursorMove::Moved(expected));
    }
    assert_eq!(session.step(), TelemetryStep::SetupAlerts);
    assert_eq!(session.path(), "/setup-telemetry/setup-alerts");
    assert!(!session.pricing_prompt());
    assert_eq!(session.next(), CursorMove::FlowComplete);
    assert!(session.pricing_prompt());
    assert_eq!(session.cursor().index(), 7);
    session.dismiss_pricing();
    assert!(!session.pricing_prompt());
}

#[test]
fn telemetry_session_module_copy_records_snippet_and_shows_indicator() {
    let clipboard = SharedClipboard::default();
    let copies = Rc::clone(&clipboard.copies);
    let mut session = session_with(Box::new(clipboard));
    session.next();

    let start = Instant::now();
    assert_eq!(
        session.copy_focused_snippet(start),
        Some(Snippet::TrackingScript)
    );
    assert_eq!(session.copy_label(start), "Copied!");
    assert!(session.form().step_complete(TelemetryStep::TrackPageVisits));
    assert!(copies.borrow()[0].contains("'TS-77'"));

    let later = start + Duration::from_millis(2500);
    session.tick(later);
    assert_eq!(session.copy_label(later), "Copy");
}

#[test]
fn telemetry_session_module_secondary_snippets_are_copyable() {
    let clipboard = SharedClipboard::default();
    let copies = Rc::clone(&clipboard.copies);
    let mut session = session_with(Box::new(clipboard));
    session.open_path("/setup-telemetry/track-signups");
    let now = Instant::now();

    assert_eq!(session.focused_snippet(), Some(Snippet::SignupTracking));
    assert_eq!(session.focus_next_snippet(), Some(Snippet::UserIdentify));
    assert_eq!(session.copy_focused_snippet(now), Some(Snippet::UserIdentify));
    assert!(session.form().was_copied(Snippet::UserIdentify));
    assert!(!session.form().was_copied(Snippet::SignupTracking));
    assert_eq!(copies.borrow().len(), 1);
    assert_eq!(session.focus_next_snippet(), Some(Snippet::SignupTracking));

    session.focus_next_snippet();
    session.open_path("/setup-telemetry/track-features");
    assert_eq!(session.focused_snippet(), Some(Snippet::FeatureTracking));
    session.focus_next_snippet();
    assert_eq!(session.copy_focused_snippet(now), Some(Snippet::VerifyEvent));
    assert!(session.form().was_copied(Snippet::VerifyEvent));

    session.open_path("/setup-telemetry/other-events");
    assert_eq!(session.focus_next_snippet(), None);
    assert_eq!(session.copy_focused_snippet(now), None);
}

#[test]
fn telemetry_session_module_failed_copy_still_counts() {
    let mut session = session_with(Box::new(DeniedClipboard));
    session.open_path("/setup-telemetry/track-login");
    let now = Instant::now();
    session.copy_snippet(Snippet::LoginTracking, now);
    assert_eq!(session.copy_label(now), "Copied!");
    assert!(session.form().was_copied(Snippet::LoginTracking));
}

#[test]
fn telemetry_session_module_direct_path_load_restores_position() {
    let mut session = session_with(Box::new(SharedClipboard::default()));
    assert_eq!(session.open_path("/setup-telemetry/track-features"), Some(5));
    assert_eq!(session.step(), TelemetryStep::TrackFeatures);
    assert_eq!(session.progress().label(), "6/8");
    assert_eq!(session.jump_to(2), Ok(2));
    assert_eq!(session.open_path("/setup-telemetry/nowhere"), None);
    assert_eq!(session.open_path("/setup-alerts/acquisition"), None);
    assert_eq!(session.step(), TelemetryStep::TrackSignups);
}

#[test]
fn telemetry_session_module_sidebar_marks_completion_and_locks_unreached() {
    let mut session = session_with(Box::new(SharedClipboard::default()));
    session.form_mut().product_name = "Acme".to_string();
    session.next();
    session.next();

    let markers: Vec<StepMarker> = session.sidebar().into_iter().map(|(_, m)| m).collect();
    assert_eq!(markers[0], StepMarker::Complete);
    assert_eq!(markers[1], StepMarker::Reached);
    assert_eq!(markers[2], StepMarker::Current);
    assert_eq!(markers[3], StepMarker::Locked);
    assert_eq!(
        session.jump_to(6),
        Err(WizardError::OutOfRange {
            index: 6,
            max_reachable: 2
        })
    );
}

#[test]
fn telemetry_session_module_step_actions_only_apply_on_their_step() {
    let mut session = session_with(Box::new(SharedClipboard::default()));
    assert!(!session.verify_event());
    assert!(session.cycle_environment());
    assert_eq!(session.form().environment, Environment::Staging);

    session.open_path("/setup-telemetry/track-features");
    assert!(!session.cycle_environment());
    assert!(session.verify_event());
    assert!(session.form().event_verified);

    session.open_path("/setup-telemetry/setup-alerts");
    session.focus_next();
    assert!(session.activate_focused());
    assert!(session
        .form()
        .is_channel_configured(NotificationTarget::Slack));
    assert!(session.form().step_complete(TelemetryStep::SetupAlerts));
}

#[test]
fn telemetry_session_module_summary_lists_collected_data() {
    let mut session = session_with(Box::new(SharedClipboard::default()));
    session.form_mut().product_name = "  Acme  ".to_string();
    session.form_mut().recipients = "pm@corp.io, broken".to_string();
    session.open_path("/setup-telemetry/track-signups");
    session.activate_focused();

    let summary = session.summary();
    assert!(summary.contains("product=Acme"));
    assert!(summary.contains("enrichment=firstName"));
    assert!(summary.contains("recipients=pm@corp.io"));
    assert!(summary.contains("steps_complete=3/8"));
    assert!(summary.ends_with("last_path=/setup-telemetry/track-signups"));
}
