use super::routes::OnboardingRoute;
use crate::invite::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupCardId {
    Telemetry,
    Reports,
    Alerts,
}

impl SetupCardId {
    pub fn as_str(self) -> &'static str {
        match self {
            SetupCardId::Telemetry => "telemetry",
            SetupCardId::Reports => "reports",
            SetupCardId::Alerts => "alerts",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        SETUP_CARDS
            .iter()
            .map(|card| card.id)
            .find(|id| id.as_str() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupCard {
    pub id: SetupCardId,
    pub title: &'static str,
    pub short_description: &'static str,
    pub benefit: &'static str,
    pub features: &'static [&'static str],
    pub teams: &'static [Team],
    pub status: SetupStatus,
    pub setup_minutes: u32,
    pub steps: u32,
    pub completed_steps: u32,
}

impl SetupCard {
    pub fn status_text(&self) -> String {
        match self.status {
            SetupStatus::InProgress => format!(
                "{} mins • {}/{} completed",
                self.setup_minutes, self.completed_steps, self.steps
            ),
            SetupStatus::NotStarted => format!("{} mins • {} steps", self.setup_minutes, self.steps),
            SetupStatus::Completed => format!(
                "{} mins • {} steps • Setup Complete",
                self.setup_minutes, self.steps
            ),
        }
    }

    pub fn route(&self) -> Option<OnboardingRoute> {
        match self.id {
            SetupCardId::Telemetry => Some(OnboardingRoute::SetupTelemetry),
            SetupCardId::Alerts => Some(OnboardingRoute::SetupAlerts),
            SetupCardId::Reports => None,
        }
    }
}

pub const SETUP_CARDS: [SetupCard; 3] = [
    SetupCard {
        id: SetupCardId::Telemetry,
        title: "Setup Product Telemetry",
        short_description: "Track page visits, user, account, and billing events",
        benefit: "90% reduction in analytics setup time",
        features: &[
            "Page and User activity tracking",
            "Account-level analytics",
            "Billing event monitoring",
            "Automated data validation",
        ],
        teams: &[Team::Engineering],
        status: SetupStatus::NotStarted,
        setup_minutes: 15,
        steps: 8,
        completed_steps: 0,
    },
    SetupCard {
        id: SetupCardId::Reports,
        title: "Customize Analytics Reports",
        short_description: "Create custom reports without SQL",
        benefit: "60% faster report creation",
        features: &[
            "Visual query builder",
            "Automatic Customer Journey Reports",
            "Customized based on events",
            "Guided setup",
        ],
        teams: &[Team::ProductManagement, Team::Growth],
        status: SetupStatus::InProgress,
        setup_minutes: 10,
        steps: 5,
        completed_steps: 2,
    },
    SetupCard {
        id: SetupCardId::Alerts,
        title: "Configure Customer Journey Alerts",
        short_description: "Stay informed about key customer journey successes and struggles",
        benefit: "45% faster response to changes",
        features: &[
            "Custom thresholds",
            "Successes and Struggle notifications",
            "Alert grouping",
            "Anomaly detection",
        ],
        teams: &[Team::Product, Team::CustomerSuccess, Team::GtmLeaders],
        status: SetupStatus::NotStarted,
        setup_minutes: 8,
        steps: 4,
        completed_steps: 0,
    },
];

pub fn setup_card(id: SetupCardId) -> &'static SetupCard {
    match id {
        SetupCardId::Telemetry => &SETUP_CARDS[0],
        SetupCardId::Reports => &SETUP_CARDS[1],
        SetupCardId::Alerts => &SETUP_CARDS[2],
    }
}

/// Selection state of the product-analytics page. Selecting and expanding
/// are independent: expanding a card's details does not select it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductAnalyticsPage {
    selected: Option<SetupCardId>,
    expanded: Option<SetupCardId>,
}

impl ProductAnalyticsPage {
    pub fn selected(&self) -> Option<SetupCardId> {
        self.selected
    }

    pub fn expanded(&self) -> Option<SetupCardId> {
        self.expanded
    }

    pub fn select(&mut self, id: SetupCardId) {
        self.selected = Some(id);
    }

    pub fn toggle_expanded(&mut self, id: SetupCardId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Where "Continue" leads for the selected card, if anywhere.
    pub fn continue_route(&self) -> Option<OnboardingRoute> {
        self.selected.and_then(|id| setup_card(id).route())
    }
}
