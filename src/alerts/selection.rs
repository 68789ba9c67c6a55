use super::catalog::AlertCategory;
use crate::shared::ids::RuleId;
use std::collections::BTreeMap;

/// Where a click on a rule card landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The collapsed header row of the card.
    Header,
    /// A control inside the expanded editing panel.
    ExpandedPanel,
}

/// A click on a rule card, carried explicitly into the toggle handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleClick {
    pub rule_id: RuleId,
    pub origin: ClickOrigin,
}

impl RuleClick {
    pub fn header(rule_id: RuleId) -> Self {
        Self {
            rule_id,
            origin: ClickOrigin::Header,
        }
    }

    pub fn panel(rule_id: RuleId) -> Self {
        Self {
            rule_id,
            origin: ClickOrigin::ExpandedPanel,
        }
    }
}

/// The expanded rule per category, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSelection {
    active: BTreeMap<AlertCategory, RuleId>,
}

impl ActiveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self, category: AlertCategory) -> Option<&RuleId> {
        self.active.get(&category)
    }

    pub fn is_active(&self, category: AlertCategory, rule_id: &str) -> bool {
        self.active(category)
            .is_some_and(|active| active.as_str() == rule_id)
    }

    pub fn expand(&mut self, category: AlertCategory, rule_id: RuleId) {
        self.active.insert(category, rule_id);
    }

    pub fn clear(&mut self, category: AlertCategory) {
        self.active.remove(&category);
    }

    /// Clears the category's selection only if it points at `rule_id`.
    pub fn clear_if(&mut self, category: AlertCategory, rule_id: &str) {
        if self.is_active(category, rule_id) {
            self.clear(category);
        }
    }

    /// Returns true when the selection changed. Clicks from inside the
    /// expanded panel are scoped to its controls and never toggle.
    pub fn toggle(&mut self, category: AlertCategory, click: &RuleClick) -> bool {
        if click.origin == ClickOrigin::ExpandedPanel {
            return false;
        }
        if self.is_active(category, click.rule_id.as_str()) {
            self.clear(category);
        } else {
            self.expand(category, click.rule_id.clone());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(stamp: i64) -> RuleId {
        RuleId::from_parts("rule", stamp)
    }

    #[test]
    fn toggle_expands_one_rule_per_category() {
        let mut selection = ActiveSelection::new();
        selection.toggle(AlertCategory::Engagement, &RuleClick::header(id(1)));
        selection.toggle(AlertCategory::Engagement, &RuleClick::header(id(2)));
        selection.toggle(AlertCategory::Retention, &RuleClick::header(id(3)));

        assert_eq!(selection.active(AlertCategory::Engagement), Some(&id(2)));
        assert_eq!(selection.active(AlertCategory::Retention), Some(&id(3)));
    }

    #[test]
    fn panel_clicks_do_not_collapse() {
        let mut selection = ActiveSelection::new();
        selection.expand(AlertCategory::Acquisition, id(1));
        assert!(!selection.toggle(AlertCategory::Acquisition, &RuleClick::panel(id(1))));
        assert!(selection.is_active(AlertCategory::Acquisition, "rule_1"));
    }

    #[test]
    fn clear_if_leaves_other_rules_expanded() {
        let mut selection = ActiveSelection::new();
        selection.expand(AlertCategory::Activation, id(7));
        selection.clear_if(AlertCategory::Activation, "rule_8");
        assert!(selection.is_active(AlertCategory::Activation, "rule_7"));
        selection.clear_if(AlertCategory::Activation, "rule_7");
        assert_eq!(selection.active(AlertCategory::Activation), None);
    }
}
