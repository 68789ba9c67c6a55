use journeyflow::alerts::{
    ActiveSelection, AlertCategory, ChannelKind, ChannelPatch, Condition, RuleClick, RuleError,
    RulePatch, RuleStore,
};
use std::sync::atomic::{AtomicI64, Ordering};

static TICK: AtomicI64 = AtomicI64::new(1_700_000_000_000);

fn ticking_clock() -> i64 {
    TICK.fetch_add(1, Ordering::SeqCst)
}

fn frozen_clock() -> i64 {
    1_700_000_000_000
}

#[test]
fn alerts_rule_store_module_engagement_defaults_to_dau() {
    let mut store = RuleStore::with_clock(frozen_clock);
    let id = store.add_rule(AlertCategory::Engagement);
    let rule = store
        .rule(AlertCategory::Engagement, id.as_str())
        .expect("rule exists");
    assert_eq!(rule.metric, "dau");
    assert_eq!(rule.threshold, 100.0);
    assert_eq!(rule.condition, Condition::Below);
    assert!(rule.channels.is_empty());
    assert!(id.as_str().starts_with("engagement_"));
}

#[test]
fn alerts_rule_store_module_ids_stay_unique_within_one_millisecond() {
    let mut store = RuleStore::with_clock(frozen_clock);
    let first = store.add_rule(AlertCategory::Retention);
    let second = store.add_rule(AlertCategory::Retention);
    assert_ne!(first, second);
    assert_eq!(store.count(AlertCategory::Retention), 2);
}

#[test]
fn alerts_rule_store_module_add_then_delete_restores_list() {
    let mut store = RuleStore::with_clock(ticking_clock);
    let keep = store.add_rule(AlertCategory::Monetization);
    let before: Vec<String> = store
        .rules(AlertCategory::Monetization)
        .iter()
        .map(|rule| rule.id.to_string())
        .collect();

    let added = store.add_rule(AlertCategory::Monetization);
    assert!(store.delete_rule(AlertCategory::Monetization, added.as_str()));
    let after: Vec<String> = store
        .rules(AlertCategory::Monetization)
        .iter()
        .map(|rule| rule.id.to_string())
        .collect();
    assert_eq!(before, after);
    assert_eq!(after, vec![keep.to_string()]);
    assert!(!store.delete_rule(AlertCategory::Monetization, added.as_str()));
}

#[test]
fn alerts_rule_store_module_channels_delete_in_reverse_to_empty() {
    let mut store = RuleStore::with_clock(ticking_clock);
    let id = store.add_rule(AlertCategory::Expansion);
    for kind in [ChannelKind::Slack, ChannelKind::Teams, ChannelKind::Email] {
        assert!(store.add_channel(AlertCategory::Expansion, id.as_str(), kind));
    }
    assert!(store.update_channel(
        AlertCategory::Expansion,
        id.as_str(),
        1,
        ChannelPatch {
            target: Some("https://teams.example/hook".to_string()),
            ..ChannelPatch::default()
        }
    ));
    let rule = store
        .rule(AlertCategory::Expansion, id.as_str())
        .expect("rule");
    assert_eq!(rule.channels[1].target, "https://teams.example/hook");

    for index in (0..3).rev() {
        assert!(store.delete_channel(AlertCategory::Expansion, id.as_str(), index));
    }
    let rule = store
        .rule(AlertCategory::Expansion, id.as_str())
        .expect("rule");
    assert!(rule.channels.is_empty());
    assert!(!store.delete_channel(AlertCategory::Expansion, id.as_str(), 0));
}

#[test]
fn alerts_rule_store_module_update_validates_before_applying() {
    let mut store = RuleStore::with_clock(ticking_clock);
    let id = store.add_rule(AlertCategory::Activation);

    let err = store
        .update_rule(
            AlertCategory::Activation,
            id.as_str(),
            RulePatch {
                metric: Some("dau".to_string()),
                threshold: Some(5.0),
                ..RulePatch::default()
            },
        )
        .expect_err("foreign metric");
    assert!(matches!(err, RuleError::UnknownMetric { .. }));

    let err = store
        .update_rule(
            AlertCategory::Activation,
            id.as_str(),
            RulePatch {
                threshold: Some(f64::NAN),
                ..RulePatch::default()
            },
        )
        .expect_err("nan threshold");
    assert!(matches!(err, RuleError::InvalidThreshold(_)));

    let rule = store
        .rule(AlertCategory::Activation, id.as_str())
        .expect("rule");
    assert_eq!(rule.metric, "activation_rate");
    assert_eq!(rule.threshold, 40.0);

    let changed = store
        .update_rule(
            AlertCategory::Activation,
            id.as_str(),
            RulePatch {
                metric: Some("time_to_value".to_string()),
                condition: Some(Condition::Above),
                threshold: Some(36.5),
            },
        )
        .expect("valid patch");
    assert!(changed);
    let rule = store
        .rule(AlertCategory::Activation, id.as_str())
        .expect("rule");
    assert_eq!(
        rule.summary(AlertCategory::Activation),
        "Alert when Time to Value is above 36.5hours"
    );

    assert_eq!(
        store.update_rule(AlertCategory::Activation, "missing", RulePatch::default()),
        Ok(false)
    );
}

#[test]
fn alerts_rule_store_module_missing_rule_wins_over_invalid_patch() {
    let mut store = RuleStore::with_clock(ticking_clock);
    store.add_rule(AlertCategory::Engagement);

    assert_eq!(
        store.update_rule(
            AlertCategory::Engagement,
            "engagement_0",
            RulePatch {
                metric: Some("mrr".to_string()),
                ..RulePatch::default()
            },
        ),
        Ok(false)
    );
    assert_eq!(
        store.update_rule(
            AlertCategory::Retention,
            "missing",
            RulePatch {
                threshold: Some(f64::INFINITY),
                ..RulePatch::default()
            },
        ),
        Ok(false)
    );
    assert_eq!(store.rules(AlertCategory::Engagement)[0].metric, "dau");
}

#[test]
fn alerts_rule_store_module_double_toggle_restores_selection() {
    let mut store = RuleStore::with_clock(ticking_clock);
    let first = store.add_rule(AlertCategory::Acquisition);
    let second = store.add_rule(AlertCategory::Acquisition);
    let mut selection = ActiveSelection::new();
    selection.expand(AlertCategory::Acquisition, first.clone());
    let before = selection.clone();

    assert!(selection.toggle(AlertCategory::Acquisition, &RuleClick::header(second.clone())));
    assert_eq!(selection.active(AlertCategory::Acquisition), Some(&second));
    assert!(selection.toggle(AlertCategory::Acquisition, &RuleClick::header(second.clone())));
    assert_eq!(selection.active(AlertCategory::Acquisition), None);

    let mut selection = before.clone();
    selection.toggle(AlertCategory::Acquisition, &RuleClick::header(first.clone()));
    selection.toggle(AlertCategory::Acquisition, &RuleClick::header(first.clone()));
    assert_eq!(selection, before);

    assert!(!selection.toggle(AlertCategory::Acquisition, &RuleClick::panel(first.clone())));
    assert_eq!(selection, before);
    assert_eq!(selection.active(AlertCategory::Retention), None);
}
