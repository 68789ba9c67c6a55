use crate::config::{self, ConfigError, Settings};
use crate::invite::{HttpInviteSender, InviteSender, LogInviteSender};
use crate::shared::logging::EventLog;
use crate::tui::WizardExit;

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn load_settings() -> Result<Settings, String> {
    config::load_settings().map_err(map_config_err)
}

/// HTTP delivery when an endpoint is configured, otherwise invites are only
/// recorded in the event log.
pub fn invite_sender(settings: &Settings, log: &EventLog) -> Box<dyn InviteSender> {
    match settings.invite_endpoint() {
        Some(endpoint) => Box::new(HttpInviteSender::new(endpoint)),
        None => Box::new(LogInviteSender::new(log.clone())),
    }
}

pub fn describe_exit(flow: &str, exit: Option<WizardExit>) -> String {
    match exit {
        None => format!("{flow} wizard not started: no terminal and no key script"),
        Some(WizardExit::Completed(Some(route))) => {
            format!("{flow} wizard completed; next: {}", route.path())
        }
        Some(WizardExit::Completed(None)) => {
            format!("{flow} wizard completed; next: choose a plan")
        }
        Some(WizardExit::Left(route)) => format!("{flow} wizard left; next: {}", route.path()),
        Some(WizardExit::Canceled) => format!("{flow} wizard canceled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::OnboardingRoute;

    #[test]
    fn describe_exit_names_the_next_page() {
        assert_eq!(
            describe_exit("alerts", Some(WizardExit::Completed(Some(OnboardingRoute::Success)))),
            "alerts wizard completed; next: /success"
        );
        assert_eq!(
            describe_exit(
                "telemetry",
                Some(WizardExit::Left(OnboardingRoute::ProductAnalytics))
            ),
            "telemetry wizard left; next: /product-analytics"
        );
        assert!(describe_exit("alerts", None).contains("not started"));
    }

    #[test]
    fn invite_sender_defaults_to_event_log() {
        let settings = Settings::default();
        let sender = invite_sender(&settings, &EventLog::disabled());
        sender
            .send_invites(crate::invite::Team::Product, &["pm@corp.io".to_string()])
            .expect("log sender always delivers");
    }
}
