use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Acquisition,
    Activation,
    Engagement,
    Monetization,
    Retention,
    Expansion,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 6] = [
        AlertCategory::Acquisition,
        AlertCategory::Activation,
        AlertCategory::Engagement,
        AlertCategory::Monetization,
        AlertCategory::Retention,
        AlertCategory::Expansion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertCategory::Acquisition => "acquisition",
            AlertCategory::Activation => "activation",
            AlertCategory::Engagement => "engagement",
            AlertCategory::Monetization => "monetization",
            AlertCategory::Retention => "retention",
            AlertCategory::Expansion => "expansion",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == raw.trim())
    }

    /// Position in the alert wizard; matches `ALERT_STEPS`.
    pub fn index(self) -> usize {
        match self {
            AlertCategory::Acquisition => 0,
            AlertCategory::Activation => 1,
            AlertCategory::Engagement => 2,
            AlertCategory::Monetization => 3,
            AlertCategory::Retention => 4,
            AlertCategory::Expansion => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn spec(self) -> &'static CategorySpec {
        &CATEGORY_SPECS[self.index()]
    }

    pub fn metrics(self) -> &'static [MetricDescriptor] {
        self.spec().metrics
    }

    pub fn default_metric(self) -> &'static MetricDescriptor {
        &self.spec().metrics[0]
    }

    pub fn metric(self, metric_id: &str) -> Option<&'static MetricDescriptor> {
        self.metrics().iter().find(|metric| metric.id == metric_id)
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub default_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySpec {
    pub category: AlertCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub metrics: &'static [MetricDescriptor],
}

const fn metric(
    id: &'static str,
    name: &'static str,
    unit: &'static str,
    default_threshold: f64,
) -> MetricDescriptor {
    MetricDescriptor {
        id,
        name,
        unit,
        default_threshold,
    }
}

pub const CATEGORY_SPECS: [CategorySpec; 6] = [
    CategorySpec {
        category: AlertCategory::Acquisition,
        title: "Acquisition Alerts",
        description: "Monitor your customer acquisition funnel and marketing performance",
        metrics: &[
            metric("visitor_conversion", "Visitor Conversion Rate", "%", 2.0),
            metric("cac", "Customer Acquisition Cost", "$", 100.0),
            metric("signup_rate", "Signup Rate", "%", 30.0),
        ],
    },
    CategorySpec {
        category: AlertCategory::Activation,
        title: "Activation Alerts",
        description: "Track how effectively new users are reaching key milestones",
        metrics: &[
            metric("activation_rate", "Activation Rate", "%", 40.0),
            metric("time_to_value", "Time to Value", "hours", 24.0),
            metric("onboarding_completion", "Onboarding Completion", "%", 70.0),
        ],
    },
    CategorySpec {
        category: AlertCategory::Engagement,
        title: "Engagement Alerts",
        description: "Monitor user activity and feature adoption trends",
        metrics: &[
            metric("dau", "Daily Active Users", "users", 100.0),
            metric("feature_adoption", "Feature Adoption Rate", "%", 50.0),
            metric("session_duration", "Avg Session Duration", "minutes", 15.0),
        ],
    },
    CategorySpec {
        category: AlertCategory::Monetization,
        title: "Monetization Alerts",
        description: "Track revenue metrics and billing events",
        metrics: &[
            metric("mrr", "Monthly Recurring Revenue", "$", 10000.0),
            metric("arpu", "Average Revenue Per User", "$", 50.0),
            metric("payment_failure", "Payment Failure Rate", "%", 5.0),
        ],
    },
    CategorySpec {
        category: AlertCategory::Retention,
        title: "Retention Alerts",
        description: "Monitor customer churn and retention metrics",
        metrics: &[
            metric("churn_rate", "Monthly Churn Rate", "%", 5.0),
            metric("retention_rate", "User Retention Rate", "%", 80.0),
            metric("dormant_users", "Dormant Users", "users", 100.0),
        ],
    },
    CategorySpec {
        category: AlertCategory::Expansion,
        title: "Expansion Alerts",
        description: "Track account expansion and upsell opportunities",
        metrics: &[
            metric("expansion_mrr", "Expansion MRR", "$", 5000.0),
            metric("upgrade_rate", "Plan Upgrade Rate", "%", 10.0),
            metric("feature_usage", "Premium Feature Usage", "%", 80.0),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::ALERT_STEPS;

    #[test]
    fn catalog_order_matches_alert_step_registry() {
        for category in AlertCategory::ALL {
            let step = &ALERT_STEPS[category.index()];
            assert_eq!(step.path, category.as_str());
            assert_eq!(step.title, category.spec().title);
            assert_eq!(category.spec().category, category);
            assert_eq!(AlertCategory::from_index(category.index()), Some(category));
        }
    }

    #[test]
    fn every_category_has_metrics_with_unique_ids() {
        for category in AlertCategory::ALL {
            let metrics = category.metrics();
            assert!(!metrics.is_empty());
            for (i, a) in metrics.iter().enumerate() {
                for b in &metrics[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn parse_accepts_snake_case_names() {
        assert_eq!(AlertCategory::parse("engagement"), Some(AlertCategory::Engagement));
        assert_eq!(AlertCategory::parse(" retention "), Some(AlertCategory::Retention));
        assert_eq!(AlertCategory::parse("growth"), None);
    }
}
