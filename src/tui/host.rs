use super::navigation::{
    TextTarget, WizardAction, WizardEffect, WizardExit, WizardNavError, WizardTransition,
};
use crate::alerts::rules::format_threshold;
use crate::alerts::{AlertSetupSession, ALERT_TEAMS};
use crate::invite::TeamRoster;
use crate::telemetry::{
    snippets_for, NotificationTarget, TelemetrySetupSession, ENRICHMENT_FIELDS, TELEMETRY_TEAMS,
};
use crate::wizard::gating::StepMarker;
use crate::wizard::{CursorMove, TelemetryStep};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub label: String,
    pub detail: Option<String>,
    pub marker: StepMarker,
}

/// Everything the screen needs to draw one frame of a wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub title: String,
    pub headline: String,
    pub percent: u16,
    pub sidebar: Vec<SidebarRow>,
    pub intro: Vec<String>,
    pub items: Vec<String>,
    pub focused: Option<usize>,
    pub details: Vec<String>,
    pub hint: String,
}

/// A wizard session the terminal host can drive.
pub trait WizardHost {
    fn flow(&self) -> &'static str;
    fn teams(&self) -> &'static [TeamRoster];
    fn apply(
        &mut self,
        action: WizardAction,
        now: Instant,
    ) -> Result<WizardTransition, WizardNavError>;
    /// Stores text entered for `target` and returns status feedback.
    fn apply_text(&mut self, target: TextTarget, value: &str) -> Option<String>;
    fn view(&self, now: Instant) -> WizardView;
    fn summary(&self) -> String;
}

pub fn marker_symbol(marker: StepMarker) -> &'static str {
    match marker {
        StepMarker::Current => ">",
        StepMarker::Complete => "✓",
        StepMarker::Reached => "·",
        StepMarker::Locked => " ",
    }
}

fn moved_feedback(title: Option<&str>, index: usize) -> WizardTransition {
    WizardTransition::feedback(format!("Step {}: {}", index + 1, title.unwrap_or("")))
}

fn flag(changed: bool, done: &str, skipped: &str) -> WizardTransition {
    WizardTransition::feedback(if changed { done } else { skipped })
}

impl WizardHost for AlertSetupSession {
    fn flow(&self) -> &'static str {
        "alerts"
    }

    fn teams(&self) -> &'static [TeamRoster] {
        &ALERT_TEAMS
    }

    fn apply(
        &mut self,
        action: WizardAction,
        _now: Instant,
    ) -> Result<WizardTransition, WizardNavError> {
        let needs_expanded = WizardNavError::NothingSelected { action };
        let transition = match action {
            WizardAction::Next => match self.next() {
                CursorMove::Moved(index) => {
                    moved_feedback(self.cursor().current().map(|step| step.title), index)
                }
                CursorMove::FlowComplete => WizardTransition::effect(WizardEffect::Exit(
                    WizardExit::Completed(Some(self.finish_route())),
                )),
                CursorMove::ExitFlow => WizardTransition::quiet(),
            },
            WizardAction::Back => match self.back() {
                CursorMove::Moved(index) => {
                    moved_feedback(self.cursor().current().map(|step| step.title), index)
                }
                CursorMove::ExitFlow => WizardTransition::effect(WizardEffect::Exit(
                    WizardExit::Left(self.exit_route()),
                )),
                CursorMove::FlowComplete => WizardTransition::quiet(),
            },
            WizardAction::Jump(index) => match self.jump_to(index) {
                Ok(index) => moved_feedback(self.cursor().current().map(|step| step.title), index),
                Err(err) => WizardTransition::feedback(err.to_string()),
            },
            WizardAction::FocusPrev => {
                self.focus_prev();
                WizardTransition::quiet()
            }
            WizardAction::FocusNext => {
                self.focus_next();
                WizardTransition::quiet()
            }
            WizardAction::ToggleFocused => {
                if self.focused_rule().is_none() {
                    return Err(WizardNavError::NothingSelected { action });
                }
                self.toggle_focused();
                WizardTransition::quiet()
            }
            WizardAction::AddRule => {
                let id = self.add_rule();
                WizardTransition::feedback(format!("Added rule {id}"))
            }
            WizardAction::DeleteRule => {
                let Some(rule_id) = self.focused_rule().map(|rule| rule.id.clone()) else {
                    return Err(WizardNavError::NothingSelected { action });
                };
                self.delete_rule(rule_id.as_str());
                WizardTransition::feedback(format!("Deleted rule {rule_id}"))
            }
            WizardAction::AddChannel => {
                if !self.add_channel_to_expanded() {
                    return Err(needs_expanded);
                }
                WizardTransition::feedback("Channel added")
            }
            WizardAction::DeleteChannel => {
                flag(self.delete_last_channel(), "Channel removed", "No channel to remove")
            }
            WizardAction::CycleChannelKind => {
                flag(self.cycle_last_channel_kind(), "Channel type changed", "No channel to change")
            }
            WizardAction::CycleMetric => rule_edit(self.cycle_metric(), needs_expanded)?,
            WizardAction::FlipCondition => rule_edit(self.flip_condition(), needs_expanded)?,
            WizardAction::RaiseThreshold => rule_edit(self.nudge_threshold(1), needs_expanded)?,
            WizardAction::LowerThreshold => rule_edit(self.nudge_threshold(-1), needs_expanded)?,
            WizardAction::EditText => {
                let Some(channel) = self.expanded_rule().and_then(|rule| rule.channels.last())
                else {
                    return Err(needs_expanded);
                };
                WizardTransition::effect(WizardEffect::PromptText {
                    target: TextTarget::ChannelTarget,
                    initial: channel.target.clone(),
                })
            }
            WizardAction::Invite => WizardTransition::effect(WizardEffect::SelectInviteTeam),
            WizardAction::Quit => {
                WizardTransition::effect(WizardEffect::Exit(WizardExit::Canceled))
            }
            WizardAction::CopySnippet
            | WizardAction::NextSnippet
            | WizardAction::VerifyEvent
            | WizardAction::CycleEnvironment
            | WizardAction::ActivateOption => {
                return Err(WizardNavError::Unsupported {
                    flow: self.flow(),
                    action,
                })
            }
        };
        Ok(transition)
    }

    fn apply_text(&mut self, target: TextTarget, value: &str) -> Option<String> {
        match target {
            TextTarget::ChannelTarget => Some(
                if self.set_last_channel_target(value.trim()) {
                    "Channel target saved"
                } else {
                    "No channel to update"
                }
                .to_string(),
            ),
            _ => None,
        }
    }

    fn view(&self, _now: Instant) -> WizardView {
        let spec = self.spec();
        let category = self.category();
        let progress = self.progress();
        let sidebar = self
            .sidebar()
            .into_iter()
            .map(|entry| SidebarRow {
                label: entry.title.to_string(),
                detail: Some(entry.badge),
                marker: entry.marker,
            })
            .collect();
        let items: Vec<String> = self
            .current_rules()
            .iter()
            .map(|rule| {
                let open = if self.selection().is_active(category, rule.id.as_str()) {
                    "▾"
                } else {
                    "▸"
                };
                format!("{open} {}", rule.summary(category))
            })
            .collect();
        let mut details = Vec::new();
        if let Some(rule) = self.expanded_rule() {
            let metric = category
                .metric(&rule.metric)
                .map(|metric| metric.name)
                .unwrap_or(rule.metric.as_str());
            details.push(format!("Metric: {metric}"));
            details.push(format!("Condition: {}", rule.condition.as_str()));
            details.push(format!("Threshold: {}", format_threshold(rule.threshold)));
            if rule.channels.is_empty() {
                details.push("Channels: none".to_string());
            }
            for channel in &rule.channels {
                let target = if channel.target.is_empty() {
                    channel.kind.target_placeholder()
                } else {
                    channel.target.as_str()
                };
                details.push(format!("  {} -> {target}", channel.kind.label()));
            }
        }
        WizardView {
            title: format!("Set Up Alerts | {}", spec.title),
            headline: progress.headline(),
            percent: progress.percent(),
            sidebar,
            intro: vec![spec.description.to_string()],
            focused: (!items.is_empty()).then_some(self.focused_index()),
            items,
            details,
            hint: format!(
                "←/→ back/{} | ↑/↓ focus | Enter expand | a add d delete | m o +/- edit | c x t e channel | i invite | Esc quit",
                self.next_label().to_lowercase()
            ),
        }
    }

    fn summary(&self) -> String {
        AlertSetupSession::summary(self)
    }
}

fn rule_edit(
    result: Result<bool, crate::alerts::RuleError>,
    needs_expanded: WizardNavError,
) -> Result<WizardTransition, WizardNavError> {
    match result {
        Ok(true) => Ok(WizardTransition::feedback("Rule updated")),
        Ok(false) => Err(needs_expanded),
        Err(err) => Ok(WizardTransition::feedback(err.to_string())),
    }
}

impl WizardHost for TelemetrySetupSession {
    fn flow(&self) -> &'static str {
        "telemetry"
    }

    fn teams(&self) -> &'static [TeamRoster] {
        &TELEMETRY_TEAMS
    }

    fn apply(
        &mut self,
        action: WizardAction,
        now: Instant,
    ) -> Result<WizardTransition, WizardNavError> {
        let unsupported = WizardNavError::Unsupported {
            flow: self.flow(),
            action,
        };
        let transition = match action {
            WizardAction::Next => match self.next() {
                CursorMove::Moved(index) => {
                    moved_feedback(self.cursor().current().map(|step| step.title), index)
                }
                CursorMove::FlowComplete => {
                    WizardTransition::effect(WizardEffect::Exit(WizardExit::Completed(None)))
                }
                CursorMove::ExitFlow => WizardTransition::quiet(),
            },
            WizardAction::Back => match self.back() {
                CursorMove::Moved(index) => {
                    moved_feedback(self.cursor().current().map(|step| step.title), index)
                }
                CursorMove::ExitFlow => WizardTransition::effect(WizardEffect::Exit(
                    WizardExit::Left(self.exit_route()),
                )),
                CursorMove::FlowComplete => WizardTransition::quiet(),
            },
            WizardAction::Jump(index) => match self.jump_to(index) {
                Ok(index) => moved_feedback(self.cursor().current().map(|step| step.title), index),
                Err(err) => WizardTransition::feedback(err.to_string()),
            },
            WizardAction::FocusPrev => {
                self.focus_prev();
                WizardTransition::quiet()
            }
            WizardAction::FocusNext => {
                self.focus_next();
                WizardTransition::quiet()
            }
            WizardAction::ActivateOption | WizardAction::ToggleFocused => {
                if !self.activate_focused() {
                    return Err(unsupported);
                }
                WizardTransition::quiet()
            }
            WizardAction::EditText => match self.step() {
                TelemetryStep::ProductSetup => WizardTransition::effect(WizardEffect::PromptText {
                    target: TextTarget::ProductName,
                    initial: self.form().product_name.clone(),
                }),
                TelemetryStep::SetupAlerts => WizardTransition::effect(WizardEffect::PromptText {
                    target: TextTarget::Recipients,
                    initial: self.form().recipients.clone(),
                }),
                _ => return Err(unsupported),
            },
            WizardAction::CopySnippet => match self.copy_focused_snippet(now) {
                Some(snippet) => WizardTransition::feedback(format!("Copied {}", snippet.title())),
                None => return Err(unsupported),
            },
            WizardAction::NextSnippet => match self.focus_next_snippet() {
                Some(snippet) => {
                    WizardTransition::feedback(format!("Copy target: {}", snippet.title()))
                }
                None => return Err(unsupported),
            },
            WizardAction::VerifyEvent => {
                if !self.verify_event() {
                    return Err(unsupported);
                }
                WizardTransition::feedback("Test event received")
            }
            WizardAction::CycleEnvironment => {
                if !self.cycle_environment() {
                    return Err(unsupported);
                }
                WizardTransition::feedback(format!(
                    "Environment: {}",
                    self.form().environment.label()
                ))
            }
            WizardAction::Invite => WizardTransition::effect(WizardEffect::SelectInviteTeam),
            WizardAction::Quit => {
                WizardTransition::effect(WizardEffect::Exit(WizardExit::Canceled))
            }
            WizardAction::AddRule
            | WizardAction::DeleteRule
            | WizardAction::AddChannel
            | WizardAction::DeleteChannel
            | WizardAction::CycleChannelKind
            | WizardAction::CycleMetric
            | WizardAction::FlipCondition
            | WizardAction::RaiseThreshold
            | WizardAction::LowerThreshold => return Err(unsupported),
        };
        Ok(transition)
    }

    fn apply_text(&mut self, target: TextTarget, value: &str) -> Option<String> {
        match target {
            TextTarget::ProductName => {
                self.form_mut().product_name = value.to_string();
                Some("Product name saved".to_string())
            }
            TextTarget::Recipients => {
                self.form_mut().recipients = value.to_string();
                let valid = self.form().valid_recipients().len();
                Some(format!("{valid} valid recipient(s)"))
            }
            _ => None,
        }
    }

    fn view(&self, now: Instant) -> WizardView {
        let step = self.step();
        let progress = self.progress();
        let form = self.form();
        let sidebar = self
            .sidebar()
            .into_iter()
            .map(|(title, marker)| SidebarRow {
                label: title.to_string(),
                detail: None,
                marker,
            })
            .collect();
        let mut intro = Vec::new();
        let mut items = Vec::new();
        let mut details = Vec::new();
        match step {
            TelemetryStep::ProductSetup => {
                intro.push(format!("Product name: {}", form.product_name));
                intro.push(format!("Environment: {}", form.environment.label()));
            }
            TelemetryStep::TrackSignups => {
                intro.push("Enrich signups with:".to_string());
                items = ENRICHMENT_FIELDS
                    .iter()
                    .map(|field| {
                        let mark = if form.is_enrichment_selected(field.id) {
                            "[x]"
                        } else {
                            "[ ]"
                        };
                        format!("{mark} {}", field.label)
                    })
                    .collect();
            }
            TelemetryStep::TrackFeatures => {
                intro.push(if form.event_verified {
                    "Test event received".to_string()
                } else {
                    "Waiting for a test event".to_string()
                });
            }
            TelemetryStep::SetupAlerts => {
                intro.push(format!("Recipients: {}", form.recipients));
                items = NotificationTarget::ALL
                    .into_iter()
                    .map(|target| {
                        let mark = if form.is_channel_configured(target) {
                            "[configured]"
                        } else {
                            "[configure]"
                        };
                        format!("{mark} {}", target.label())
                    })
                    .collect();
            }
            TelemetryStep::TrackPageVisits
            | TelemetryStep::AccountAddUser
            | TelemetryStep::TrackLogins
            | TelemetryStep::OtherEvents => {}
        }
        let target = self.focused_snippet();
        for &snippet in snippets_for(step) {
            let mark = if Some(snippet) == target { "▸" } else { "─" };
            details.push(format!("{mark}─ {} [{}]", snippet.title(), self.copy_label(now)));
            details.extend(snippet.code(self.tracking_id()).lines().map(str::to_string));
        }
        WizardView {
            title: format!("Set Up Product Telemetry | {}", step.descriptor().title),
            headline: progress.headline(),
            percent: progress.percent(),
            sidebar,
            intro,
            focused: (!items.is_empty()).then_some(self.focused_index()),
            items,
            details,
            hint: "←/→ back/next | ↑/↓ focus | space select | e edit | y copy | s snippet | v verify | g env | i invite | Esc quit"
                .to_string(),
        }
    }

    fn summary(&self) -> String {
        TelemetrySetupSession::summary(self)
    }
}
