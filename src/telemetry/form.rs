use super::snippets::Snippet;
use crate::invite::email::{parse_recipient_list, validate_email};
use crate::wizard::{StepCompletion, TelemetryStep};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Environment::Development => Environment::Staging,
            Environment::Staging => Environment::Production,
            Environment::Production => Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentField {
    pub id: &'static str,
    pub label: &'static str,
}

pub const ENRICHMENT_FIELDS: [EnrichmentField; 6] = [
    EnrichmentField { id: "firstName", label: "First Name" },
    EnrichmentField { id: "lastName", label: "Last Name" },
    EnrichmentField { id: "location", label: "Location" },
    EnrichmentField { id: "linkedin", label: "LinkedIn Profile" },
    EnrichmentField { id: "title", label: "Job Title" },
    EnrichmentField { id: "company", label: "Recent Company" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationTarget {
    Email,
    Slack,
    Teams,
}

impl NotificationTarget {
    pub const ALL: [NotificationTarget; 3] = [
        NotificationTarget::Email,
        NotificationTarget::Slack,
        NotificationTarget::Teams,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationTarget::Email => "Email Notifications",
            NotificationTarget::Slack => "Slack Integration",
            NotificationTarget::Teams => "Microsoft Teams",
        }
    }
}

/// Everything the telemetry wizard collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryForm {
    pub product_name: String,
    pub environment: Environment,
    enrichment: BTreeSet<&'static str>,
    copied: BTreeSet<Snippet>,
    pub event_verified: bool,
    configured_channels: BTreeSet<NotificationTarget>,
    pub recipients: String,
}

impl TelemetryForm {
    /// Unknown field ids are ignored.
    pub fn toggle_enrichment(&mut self, field_id: &str) -> bool {
        let Some(field) = ENRICHMENT_FIELDS.iter().find(|field| field.id == field_id) else {
            return false;
        };
        if !self.enrichment.remove(field.id) {
            self.enrichment.insert(field.id);
        }
        true
    }

    pub fn is_enrichment_selected(&self, field_id: &str) -> bool {
        self.enrichment.contains(field_id)
    }

    pub fn selected_enrichment(&self) -> Vec<&'static str> {
        ENRICHMENT_FIELDS
            .iter()
            .map(|field| field.id)
            .filter(|id| self.enrichment.contains(id))
            .collect()
    }

    pub fn record_copy(&mut self, snippet: Snippet) {
        self.copied.insert(snippet);
    }

    pub fn was_copied(&self, snippet: Snippet) -> bool {
        self.copied.contains(&snippet)
    }

    pub fn verify_event(&mut self) {
        self.event_verified = true;
    }

    pub fn configure_channel(&mut self, target: NotificationTarget) {
        self.configured_channels.insert(target);
    }

    pub fn is_channel_configured(&self, target: NotificationTarget) -> bool {
        self.configured_channels.contains(&target)
    }

    pub fn valid_recipients(&self) -> Vec<String> {
        parse_recipient_list(&self.recipients)
            .into_iter()
            .filter(|email| validate_email(email).is_ok())
            .collect()
    }

    pub fn step_complete(&self, step: TelemetryStep) -> bool {
        match step {
            TelemetryStep::ProductSetup => !self.product_name.trim().is_empty(),
            TelemetryStep::TrackPageVisits => self.was_copied(Snippet::TrackingScript),
            TelemetryStep::TrackSignups => self.was_copied(Snippet::SignupTracking),
            TelemetryStep::AccountAddUser => self.was_copied(Snippet::CompanyIdentify),
            TelemetryStep::TrackLogins => self.was_copied(Snippet::LoginTracking),
            TelemetryStep::TrackFeatures => self.event_verified,
            TelemetryStep::OtherEvents => true,
            TelemetryStep::SetupAlerts => {
                !self.configured_channels.is_empty() || !self.valid_recipients().is_empty()
            }
        }
    }
}

impl StepCompletion for TelemetryForm {
    fn is_complete(&self, step_index: usize) -> bool {
        TelemetryStep::from_index(step_index).is_some_and(|step| self.step_complete(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_setup_needs_a_non_blank_name() {
        let mut form = TelemetryForm::default();
        assert!(!form.is_complete(0));
        form.product_name = "   ".to_string();
        assert!(!form.is_complete(0));
        form.product_name = "Acme".to_string();
        assert!(form.is_complete(0));
    }

    #[test]
    fn enrichment_toggle_adds_then_removes() {
        let mut form = TelemetryForm::default();
        assert!(form.toggle_enrichment("linkedin"));
        assert!(form.toggle_enrichment("firstName"));
        assert_eq!(form.selected_enrichment(), vec!["firstName", "linkedin"]);
        assert!(form.toggle_enrichment("linkedin"));
        assert!(!form.is_enrichment_selected("linkedin"));
        assert!(!form.toggle_enrichment("shoeSize"));
    }

    #[test]
    fn alerts_step_accepts_channel_or_valid_recipient() {
        let mut form = TelemetryForm::default();
        form.recipients = "nope, also-nope".to_string();
        assert!(!form.step_complete(TelemetryStep::SetupAlerts));
        form.recipients = "nope, pm@corp.io".to_string();
        assert!(form.step_complete(TelemetryStep::SetupAlerts));

        let mut form = TelemetryForm::default();
        form.configure_channel(NotificationTarget::Slack);
        form.configure_channel(NotificationTarget::Slack);
        assert!(form.step_complete(TelemetryStep::SetupAlerts));
    }

    #[test]
    fn other_events_step_is_always_complete() {
        assert!(TelemetryForm::default().is_complete(6));
        assert!(!TelemetryForm::default().is_complete(8));
    }
}
