#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: u32,
    pub title: &'static str,
    pub path: &'static str,
}

const fn step(id: u32, title: &'static str, path: &'static str) -> StepDescriptor {
    StepDescriptor { id, title, path }
}

pub const TELEMETRY_STEPS: [StepDescriptor; 8] = [
    step(1, "Product Setup", ""),
    step(2, "Track Page Visits", "track-page-visits"),
    step(3, "Track Signups & Identity", "track-signups"),
    step(4, "Account add User", "account-add-user"),
    step(5, "Track Logins", "track-login"),
    step(6, "Track Features", "track-features"),
    step(7, "Other SaaS Events", "other-events"),
    step(8, "Setup Alerts", "setup-alerts"),
];

/// One step per alert category, in catalog order.
pub const ALERT_STEPS: [StepDescriptor; 6] = [
    step(1, "Acquisition Alerts", "acquisition"),
    step(2, "Activation Alerts", "activation"),
    step(3, "Engagement Alerts", "engagement"),
    step(4, "Monetization Alerts", "monetization"),
    step(5, "Retention Alerts", "retention"),
    step(6, "Expansion Alerts", "expansion"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRegistry {
    steps: &'static [StepDescriptor],
}

impl StepRegistry {
    pub const fn new(steps: &'static [StepDescriptor]) -> Self {
        Self { steps }
    }

    pub const fn telemetry() -> Self {
        Self::new(&TELEMETRY_STEPS)
    }

    pub const fn alerts() -> Self {
        Self::new(&ALERT_STEPS)
    }

    pub fn steps(&self) -> &'static [StepDescriptor] {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&'static StepDescriptor> {
        self.steps.get(index)
    }

    pub fn position_of_path(&self, path: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.path == path)
    }
}
