use super::catalog::{AlertCategory, CategorySpec};
use super::rules::{AlertRule, ChannelKind, ChannelPatch, RuleError, RulePatch, RuleStore};
use super::selection::{ActiveSelection, RuleClick};
use crate::invite::{Team, TeamMember, TeamRoster};
use crate::journey::{OnboardingRoute, SetupProgress};
use crate::shared::ids::RuleId;
use crate::shared::logging::EventLog;
use crate::wizard::gating::{step_marker, StepMarker};
use crate::wizard::{CursorMove, StepCompletion, StepRegistry, WizardCursor, WizardError};

pub const ALERT_SETUP_MINUTES: u32 = 30;
pub const ALERT_TEAMS: [TeamRoster; 3] = [
    TeamRoster {
        team: Team::Product,
        members: &[
            TeamMember { name: "Sarah Chen" },
            TeamMember { name: "Alex Kim" },
            TeamMember { name: "David Park" },
        ],
    },
    TeamRoster {
        team: Team::CustomerSuccess,
        members: &[
            TeamMember { name: "Emily Johnson" },
            TeamMember { name: "Michael Brown" },
        ],
    },
    TeamRoster {
        team: Team::GtmLeaders,
        members: &[
            TeamMember { name: "Lisa Wang" },
            TeamMember { name: "James Wilson" },
        ],
    },
];
const THRESHOLD_STEP: f64 = 1.0;

impl StepCompletion for RuleStore {
    fn is_complete(&self, step_index: usize) -> bool {
        AlertCategory::from_index(step_index).is_some_and(|category| self.count(category) > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSidebarEntry {
    pub title: &'static str,
    pub badge: String,
    pub marker: StepMarker,
}

pub fn alert_badge(count: usize) -> String {
    match count {
        0 => "No alerts".to_string(),
        1 => "1 alert".to_string(),
        n => format!("{n} alerts"),
    }
}

/// State of the alert wizard: one step per category, the rules configured so
/// far and which rule card is expanded in each category.
#[derive(Debug, Clone)]
pub struct AlertSetupSession {
    cursor: WizardCursor,
    store: RuleStore,
    selection: ActiveSelection,
    focused: usize,
    log: EventLog,
}

impl AlertSetupSession {
    pub fn new(log: EventLog) -> Self {
        Self::with_store(RuleStore::new(), log)
    }

    pub fn with_store(store: RuleStore, log: EventLog) -> Self {
        Self {
            cursor: WizardCursor::new(StepRegistry::alerts()),
            store,
            selection: ActiveSelection::new(),
            focused: 0,
            log,
        }
    }

    pub fn cursor(&self) -> &WizardCursor {
        &self.cursor
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn category(&self) -> AlertCategory {
        AlertCategory::from_index(self.cursor.index()).unwrap_or(AlertCategory::Acquisition)
    }

    pub fn spec(&self) -> &'static CategorySpec {
        self.category().spec()
    }

    pub fn current_rules(&self) -> &[AlertRule] {
        self.store.rules(self.category())
    }

    pub fn progress(&self) -> SetupProgress {
        SetupProgress::from_cursor(&self.cursor, ALERT_SETUP_MINUTES)
    }

    pub fn next_label(&self) -> &'static str {
        if self.cursor.is_last() {
            "Finish Setup"
        } else {
            "Next Step"
        }
    }

    pub fn finish_route(&self) -> OnboardingRoute {
        OnboardingRoute::Success
    }

    pub fn exit_route(&self) -> OnboardingRoute {
        OnboardingRoute::ProductAnalytics
    }

    pub fn sidebar(&self) -> Vec<AlertSidebarEntry> {
        AlertCategory::ALL
            .into_iter()
            .map(|category| AlertSidebarEntry {
                title: category.spec().title,
                badge: alert_badge(self.store.count(category)),
                marker: step_marker(&self.cursor, &self.store, category.index()),
            })
            .collect()
    }

    pub fn next(&mut self) -> CursorMove {
        let movement = self.cursor.advance();
        self.after_move(movement);
        movement
    }

    pub fn back(&mut self) -> CursorMove {
        let movement = self.cursor.retreat();
        self.after_move(movement);
        movement
    }

    pub fn jump_to(&mut self, index: usize) -> Result<usize, WizardError> {
        let index = self.cursor.jump_to(index)?;
        self.focused = 0;
        self.log.info("wizard.jump", &format!("flow=alerts step={}", index + 1));
        Ok(index)
    }

    fn after_move(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Moved(index) => {
                self.focused = 0;
                self.log
                    .info("wizard.advance", &format!("flow=alerts step={}", index + 1));
            }
            CursorMove::FlowComplete => self.log.info(
                "wizard.flow_complete",
                &format!("flow=alerts rules={}", self.store.total()),
            ),
            CursorMove::ExitFlow => self.log.info("wizard.exit", "flow=alerts"),
        }
    }

    pub fn add_rule(&mut self) -> RuleId {
        let category = self.category();
        let id = self.store.add_rule(category);
        self.selection.expand(category, id.clone());
        self.focused = self.store.count(category).saturating_sub(1);
        self.log
            .info("alerts.rule_added", &format!("category={category} rule={id}"));
        id
    }

    pub fn delete_rule(&mut self, rule_id: &str) -> bool {
        let category = self.category();
        let removed = self.store.delete_rule(category, rule_id);
        if removed {
            self.selection.clear_if(category, rule_id);
            let count = self.store.count(category);
            self.focused = self.focused.min(count.saturating_sub(1));
            self.log
                .info("alerts.rule_deleted", &format!("category={category} rule={rule_id}"));
        }
        removed
    }

    pub fn click(&mut self, click: &RuleClick) -> bool {
        self.selection.toggle(self.category(), click)
    }

    pub fn update_rule(&mut self, rule_id: &str, patch: RulePatch) -> Result<bool, RuleError> {
        let category = self.category();
        self.store.update_rule(category, rule_id, patch).inspect_err(|err| {
            self.log.warn("alerts.rule_rejected", &err.to_string());
        })
    }

    pub fn add_channel(&mut self, rule_id: &str, kind: ChannelKind) -> bool {
        self.store.add_channel(self.category(), rule_id, kind)
    }

    pub fn update_channel(&mut self, rule_id: &str, index: usize, patch: ChannelPatch) -> bool {
        self.store
            .update_channel(self.category(), rule_id, index, patch)
    }

    pub fn delete_channel(&mut self, rule_id: &str, index: usize) -> bool {
        self.store.delete_channel(self.category(), rule_id, index)
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_rule(&self) -> Option<&AlertRule> {
        self.current_rules().get(self.focused)
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        let last = self.current_rules().len().saturating_sub(1);
        self.focused = (self.focused + 1).min(last);
    }

    /// Header click on the focused card.
    pub fn toggle_focused(&mut self) -> bool {
        let Some(rule_id) = self.focused_rule().map(|rule| rule.id.clone()) else {
            return false;
        };
        self.click(&RuleClick::header(rule_id))
    }

    pub fn expanded_rule(&self) -> Option<&AlertRule> {
        let active = self.selection.active(self.category())?;
        self.store.rule(self.category(), active.as_str())
    }

    /// Panel edits below act on the expanded rule only and never collapse it.
    pub fn cycle_metric(&mut self) -> Result<bool, RuleError> {
        let Some(rule) = self.expanded_rule() else {
            return Ok(false);
        };
        let metrics = self.category().metrics();
        let position = metrics
            .iter()
            .position(|metric| metric.id == rule.metric)
            .unwrap_or(0);
        let next = metrics[(position + 1) % metrics.len()].id.to_string();
        let rule_id = rule.id.clone();
        self.update_rule(
            rule_id.as_str(),
            RulePatch {
                metric: Some(next),
                ..RulePatch::default()
            },
        )
    }

    pub fn flip_condition(&mut self) -> Result<bool, RuleError> {
        let Some(rule) = self.expanded_rule() else {
            return Ok(false);
        };
        let patch = RulePatch {
            condition: Some(rule.condition.flipped()),
            ..RulePatch::default()
        };
        let rule_id = rule.id.clone();
        self.update_rule(rule_id.as_str(), patch)
    }

    pub fn nudge_threshold(&mut self, steps: i32) -> Result<bool, RuleError> {
        let Some(rule) = self.expanded_rule() else {
            return Ok(false);
        };
        let patch = RulePatch {
            threshold: Some(rule.threshold + f64::from(steps) * THRESHOLD_STEP),
            ..RulePatch::default()
        };
        let rule_id = rule.id.clone();
        self.update_rule(rule_id.as_str(), patch)
    }

    pub fn add_channel_to_expanded(&mut self) -> bool {
        let Some(rule_id) = self.expanded_rule().map(|rule| rule.id.clone()) else {
            return false;
        };
        self.add_channel(rule_id.as_str(), ChannelKind::Slack)
    }

    pub fn delete_last_channel(&mut self) -> bool {
        let Some((rule_id, len)) = self
            .expanded_rule()
            .map(|rule| (rule.id.clone(), rule.channels.len()))
        else {
            return false;
        };
        if len == 0 {
            return false;
        }
        self.delete_channel(rule_id.as_str(), len - 1)
    }

    pub fn cycle_last_channel_kind(&mut self) -> bool {
        let Some((rule_id, index, kind)) = self.expanded_rule().and_then(|rule| {
            rule.channels
                .last()
                .map(|channel| (rule.id.clone(), rule.channels.len() - 1, channel.kind))
        }) else {
            return false;
        };
        self.update_channel(
            rule_id.as_str(),
            index,
            ChannelPatch {
                kind: Some(kind.next()),
                ..ChannelPatch::default()
            },
        )
    }

    pub fn set_last_channel_target(&mut self, target: &str) -> bool {
        let Some((rule_id, index)) = self.expanded_rule().and_then(|rule| {
            rule.channels
                .len()
                .checked_sub(1)
                .map(|index| (rule.id.clone(), index))
        }) else {
            return false;
        };
        self.update_channel(
            rule_id.as_str(),
            index,
            ChannelPatch {
                target: Some(target.to_string()),
                ..ChannelPatch::default()
            },
        )
    }

    /// Text summary printed when the wizard ends.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("alert rules configured={}", self.store.total())];
        for category in AlertCategory::ALL {
            for rule in self.store.rules(category) {
                let channels = rule
                    .channels
                    .iter()
                    .map(|channel| format!("{}:{}", channel.kind.as_str(), channel.target))
                    .collect::<Vec<_>>()
                    .join(",");
                lines.push(format!(
                    "{category}: {} channels=[{channels}]",
                    rule.summary(category)
                ));
            }
        }
        lines.join("\n")
    }
}
