use super::catalog::AlertCategory;
use crate::shared::ids::RuleId;
use crate::shared::time::now_millis;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Above,
    Below,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Above => "above",
            Condition::Below => "below",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Condition::Above => Condition::Below,
            Condition::Below => Condition::Above,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Slack,
    Teams,
    Email,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Slack, ChannelKind::Teams, ChannelKind::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelKind::Slack => "slack",
            ChannelKind::Teams => "teams",
            ChannelKind::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChannelKind::Slack => "Slack",
            ChannelKind::Teams => "Teams",
            ChannelKind::Email => "Email",
        }
    }

    pub fn target_placeholder(self) -> &'static str {
        match self {
            ChannelKind::Slack | ChannelKind::Teams => "#channel",
            ChannelKind::Email => "email@company.com",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChannelKind::Slack => ChannelKind::Teams,
            ChannelKind::Teams => ChannelKind::Email,
            ChannelKind::Email => ChannelKind::Slack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationChannel {
    pub kind: ChannelKind,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRule {
    pub id: RuleId,
    pub metric: String,
    pub condition: Condition,
    pub threshold: f64,
    pub channels: Vec<NotificationChannel>,
}

impl AlertRule {
    fn with_defaults(id: RuleId, category: AlertCategory) -> Self {
        let metric = category.default_metric();
        Self {
            id,
            metric: metric.id.to_string(),
            condition: Condition::Below,
            threshold: metric.default_threshold,
            channels: Vec::new(),
        }
    }

    /// "Alert when Daily Active Users is below 100users".
    pub fn summary(&self, category: AlertCategory) -> String {
        let (name, unit) = category
            .metric(&self.metric)
            .map(|metric| (metric.name, metric.unit))
            .unwrap_or((self.metric.as_str(), ""));
        format!(
            "Alert when {name} is {} {}{unit}",
            self.condition.as_str(),
            format_threshold(self.threshold)
        )
    }
}

pub fn format_threshold(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Partial update for a rule; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulePatch {
    pub metric: Option<String>,
    pub condition: Option<Condition>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelPatch {
    pub kind: Option<ChannelKind>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("metric `{metric}` does not belong to the {category} category")]
    UnknownMetric {
        category: AlertCategory,
        metric: String,
    },
    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
}

/// Alert rules keyed by category. Each category's list is independent and
/// kept in insertion order.
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: BTreeMap<AlertCategory, Vec<AlertRule>>,
    last_stamp: BTreeMap<AlertCategory, i64>,
    clock: fn() -> i64,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            rules: AlertCategory::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            last_stamp: BTreeMap::new(),
            clock,
        }
    }

    pub fn rules(&self, category: AlertCategory) -> &[AlertRule] {
        self.rules
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn rule(&self, category: AlertCategory, rule_id: &str) -> Option<&AlertRule> {
        self.rules(category)
            .iter()
            .find(|rule| rule.id.as_str() == rule_id)
    }

    pub fn count(&self, category: AlertCategory) -> usize {
        self.rules(category).len()
    }

    pub fn total(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Every category's rules as a JSON object keyed by category name.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rules)
    }

    pub fn add_rule(&mut self, category: AlertCategory) -> RuleId {
        let id = self.next_rule_id(category);
        self.rules
            .entry(category)
            .or_default()
            .push(AlertRule::with_defaults(id.clone(), category));
        id
    }

    pub fn delete_rule(&mut self, category: AlertCategory, rule_id: &str) -> bool {
        let Some(rules) = self.rules.get_mut(&category) else {
            return false;
        };
        let before = rules.len();
        rules.retain(|rule| rule.id.as_str() != rule_id);
        rules.len() != before
    }

    /// Returns `Ok(false)` when no rule has `rule_id`.
    pub fn update_rule(
        &mut self,
        category: AlertCategory,
        rule_id: &str,
        patch: RulePatch,
    ) -> Result<bool, RuleError> {
        let Some(rule) = self.rule_mut(category, rule_id) else {
            return Ok(false);
        };
        if let Some(metric) = &patch.metric {
            if category.metric(metric).is_none() {
                return Err(RuleError::UnknownMetric {
                    category,
                    metric: metric.clone(),
                });
            }
        }
        if let Some(threshold) = patch.threshold {
            if !threshold.is_finite() {
                return Err(RuleError::InvalidThreshold(threshold));
            }
        }
        if let Some(metric) = patch.metric {
            rule.metric = metric;
        }
        if let Some(condition) = patch.condition {
            rule.condition = condition;
        }
        if let Some(threshold) = patch.threshold {
            rule.threshold = threshold;
        }
        Ok(true)
    }

    pub fn add_channel(&mut self, category: AlertCategory, rule_id: &str, kind: ChannelKind) -> bool {
        let Some(rule) = self.rule_mut(category, rule_id) else {
            return false;
        };
        rule.channels.push(NotificationChannel {
            kind,
            target: String::new(),
        });
        true
    }

    pub fn update_channel(
        &mut self,
        category: AlertCategory,
        rule_id: &str,
        index: usize,
        patch: ChannelPatch,
    ) -> bool {
        let Some(channel) = self
            .rule_mut(category, rule_id)
            .and_then(|rule| rule.channels.get_mut(index))
        else {
            return false;
        };
        if let Some(kind) = patch.kind {
            channel.kind = kind;
        }
        if let Some(target) = patch.target {
            channel.target = target;
        }
        true
    }

    pub fn delete_channel(&mut self, category: AlertCategory, rule_id: &str, index: usize) -> bool {
        let Some(rule) = self.rule_mut(category, rule_id) else {
            return false;
        };
        if index >= rule.channels.len() {
            return false;
        }
        rule.channels.remove(index);
        true
    }

    fn rule_mut(&mut self, category: AlertCategory, rule_id: &str) -> Option<&mut AlertRule> {
        self.rules
            .get_mut(&category)?
            .iter_mut()
            .find(|rule| rule.id.as_str() == rule_id)
    }

    // Stamps are strictly increasing per category so ids never repeat, even
    // for two adds inside one clock tick or after a delete.
    fn next_rule_id(&mut self, category: AlertCategory) -> RuleId {
        let now = (self.clock)();
        let stamp = match self.last_stamp.get(&category) {
            Some(last) if *last >= now => last + 1,
            _ => now,
        };
        self.last_stamp.insert(category, stamp);
        RuleId::from_parts(category.as_str(), stamp)
    }
}
