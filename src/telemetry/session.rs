use super::clipboard::{Clipboard, CopyIndicator};
use super::form::{NotificationTarget, TelemetryForm, ENRICHMENT_FIELDS};
use super::snippets::{snippets_for, Snippet};
use crate::invite::{Team, TeamMember, TeamRoster};
use crate::journey::{OnboardingRoute, SetupProgress};
use crate::shared::logging::EventLog;
use crate::wizard::gating::{step_markers, StepMarker};
use crate::wizard::{
    path_for_step, step_for_path, CursorMove, StepRegistry, TelemetryStep, WizardCursor,
    WizardError, TELEMETRY_BASE_PATH,
};
use std::time::Instant;

pub const TELEMETRY_SETUP_MINUTES: u32 = 15;
pub const TELEMETRY_TEAMS: [TeamRoster; 2] = [
    TeamRoster {
        team: Team::Engineering,
        members: &[
            TeamMember { name: "David Park" },
            TeamMember { name: "Emily Johnson" },
            TeamMember { name: "Michael Brown" },
        ],
    },
    TeamRoster {
        team: Team::Product,
        members: &[
            TeamMember { name: "Sarah Chen" },
            TeamMember { name: "Alex Kim" },
        ],
    },
];

/// State of the product-telemetry wizard.
pub struct TelemetrySetupSession {
    cursor: WizardCursor,
    form: TelemetryForm,
    clipboard: Box<dyn Clipboard>,
    indicator: CopyIndicator,
    tracking_id: String,
    focused: usize,
    snippet_focus: usize,
    pricing_prompt: bool,
    log: EventLog,
}

impl TelemetrySetupSession {
    pub fn new(
        clipboard: Box<dyn Clipboard>,
        indicator: CopyIndicator,
        tracking_id: impl Into<String>,
        log: EventLog,
    ) -> Self {
        Self {
            cursor: WizardCursor::new(StepRegistry::telemetry()),
            form: TelemetryForm::default(),
            clipboard,
            indicator,
            tracking_id: tracking_id.into(),
            focused: 0,
            snippet_focus: 0,
            pricing_prompt: false,
            log,
        }
    }

    pub fn cursor(&self) -> &WizardCursor {
        &self.cursor
    }

    pub fn form(&self) -> &TelemetryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TelemetryForm {
        &mut self.form
    }

    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn step(&self) -> TelemetryStep {
        TelemetryStep::from_index(self.cursor.index()).unwrap_or(TelemetryStep::ProductSetup)
    }

    pub fn path(&self) -> String {
        path_for_step(TELEMETRY_BASE_PATH, self.cursor.registry(), self.cursor.index())
            .unwrap_or_else(|| TELEMETRY_BASE_PATH.to_string())
    }

    /// Recomputes the cursor from a route path, as when the page is loaded
    /// directly. Unknown paths leave the cursor where it is.
    pub fn open_path(&mut self, path: &str) -> Option<usize> {
        let index = step_for_path(TELEMETRY_BASE_PATH, self.cursor.registry(), path)?;
        let index = self.cursor.restore(index).ok()?;
        self.reset_focus();
        self.log.info("wizard.route", &format!("flow=telemetry path={path}"));
        Some(index)
    }

    pub fn progress(&self) -> SetupProgress {
        SetupProgress::from_cursor(&self.cursor, TELEMETRY_SETUP_MINUTES)
    }

    pub fn sidebar(&self) -> Vec<(&'static str, StepMarker)> {
        let markers = step_markers(&self.cursor, &self.form);
        self.cursor
            .registry()
            .steps()
            .iter()
            .zip(markers)
            .map(|(step, marker)| (step.title, marker))
            .collect()
    }

    pub fn pricing_prompt(&self) -> bool {
        self.pricing_prompt
    }

    pub fn dismiss_pricing(&mut self) {
        self.pricing_prompt = false;
    }

    pub fn exit_route(&self) -> OnboardingRoute {
        OnboardingRoute::ProductAnalytics
    }

    pub fn next(&mut self) -> CursorMove {
        let movement = self.cursor.advance();
        match movement {
            CursorMove::Moved(index) => {
                self.reset_focus();
                self.log.info(
                    "wizard.advance",
                    &format!("flow=telemetry step={} path={}", index + 1, self.path()),
                );
            }
            CursorMove::FlowComplete => {
                self.pricing_prompt = true;
                self.log.info("wizard.flow_complete", "flow=telemetry");
            }
            CursorMove::ExitFlow => {}
        }
        movement
    }

    pub fn back(&mut self) -> CursorMove {
        let movement = self.cursor.retreat();
        match movement {
            CursorMove::Moved(_) => self.reset_focus(),
            CursorMove::ExitFlow => self.log.info("wizard.exit", "flow=telemetry"),
            CursorMove::FlowComplete => {}
        }
        movement
    }

    /// Sidebar click. Steps beyond the furthest one reached are refused.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, WizardError> {
        let index = self.cursor.jump_to(index).inspect_err(|err| {
            self.log.warn("wizard.jump_refused", &err.to_string());
        })?;
        self.reset_focus();
        Ok(index)
    }

    pub fn copy_snippet(&mut self, snippet: Snippet, now: Instant) {
        let code = snippet.code(&self.tracking_id);
        if let Err(err) = self.clipboard.copy(&code) {
            self.log.warn("clipboard.copy_failed", &err);
        }
        self.form.record_copy(snippet);
        self.indicator.show(now);
    }

    pub fn focused_snippet(&self) -> Option<Snippet> {
        snippets_for(self.step()).get(self.snippet_focus).copied()
    }

    /// Moves the copy target to the step's next snippet, wrapping around.
    pub fn focus_next_snippet(&mut self) -> Option<Snippet> {
        let count = snippets_for(self.step()).len();
        if count == 0 {
            return None;
        }
        self.snippet_focus = (self.snippet_focus + 1) % count;
        self.focused_snippet()
    }

    pub fn copy_focused_snippet(&mut self, now: Instant) -> Option<Snippet> {
        let snippet = self.focused_snippet()?;
        self.copy_snippet(snippet, now);
        Some(snippet)
    }

    fn reset_focus(&mut self) {
        self.focused = 0;
        self.snippet_focus = 0;
    }

    pub fn copy_label(&self, now: Instant) -> &'static str {
        self.indicator.label(now)
    }

    pub fn tick(&mut self, now: Instant) {
        self.indicator.tick(now);
    }

    pub fn verify_event(&mut self) -> bool {
        if self.step() != TelemetryStep::TrackFeatures {
            return false;
        }
        self.form.verify_event();
        self.log.info("telemetry.event_verified", "featureName=test_event");
        true
    }

    pub fn cycle_environment(&mut self) -> bool {
        if self.step() != TelemetryStep::ProductSetup {
            return false;
        }
        self.form.environment = self.form.environment.next();
        true
    }

    /// Number of selectable options on the current step.
    pub fn option_count(&self) -> usize {
        match self.step() {
            TelemetryStep::TrackSignups => ENRICHMENT_FIELDS.len(),
            TelemetryStep::SetupAlerts => NotificationTarget::ALL.len(),
            _ => 0,
        }
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        let last = self.option_count().saturating_sub(1);
        self.focused = (self.focused + 1).min(last);
    }

    /// Space on a focused option: toggles an enrichment field or configures a
    /// notification channel.
    pub fn activate_focused(&mut self) -> bool {
        match self.step() {
            TelemetryStep::TrackSignups => ENRICHMENT_FIELDS
                .get(self.focused)
                .is_some_and(|field| self.form.toggle_enrichment(field.id)),
            TelemetryStep::SetupAlerts => match NotificationTarget::ALL.get(self.focused) {
                Some(target) => {
                    self.form.configure_channel(*target);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn summary(&self) -> String {
        let completed = (0..self.cursor.registry().len())
            .filter(|index| {
                TelemetryStep::from_index(*index).is_some_and(|step| self.form.step_complete(step))
            })
            .count();
        let configured = NotificationTarget::ALL
            .into_iter()
            .filter(|target| self.form.is_channel_configured(*target))
            .map(|target| target.label())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "telemetry setup\nproduct={}\nenvironment={}\nsteps_complete={}/{}\nenrichment={}\nevent_verified={}\nchannels={}\nrecipients={}\nlast_path={}",
            self.form.product_name.trim(),
            self.form.environment.as_str(),
            completed,
            self.cursor.registry().len(),
            self.form.selected_enrichment().join(","),
            self.form.event_verified,
            configured,
            self.form.valid_recipients().join(","),
            self.path(),
        )
    }
}
