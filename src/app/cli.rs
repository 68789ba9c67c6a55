#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Telemetry,
    Alerts,
    Steps,
    CheckEmail,
    Route,
    Cards,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "telemetry" => CliVerb::Telemetry,
        "alerts" => CliVerb::Alerts,
        "steps" => CliVerb::Steps,
        "check-email" => CliVerb::CheckEmail,
        "route" => CliVerb::Route,
        "cards" => CliVerb::Cards,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  telemetry [path]                     Run the product telemetry wizard".to_string(),
        "  alerts [--json]                      Run the customer journey alerts wizard"
            .to_string(),
        "  steps telemetry|alerts               List the steps of a wizard".to_string(),
        "  check-email <email>...               Validate email addresses".to_string(),
        "  route <path>                         Resolve an onboarding route".to_string(),
        "  cards                                Show the product analytics setup cards"
            .to_string(),
        "  help                                 Show this help".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    let mut lines = cli_help_lines();
    lines.push(String::new());
    lines.push("Environment:".to_string());
    lines.push(format!(
        "  {:36} Comma separated keys that drive a wizard without a terminal",
        crate::tui::SCRIPT_KEYS_ENV
    ));
    lines.join("\n")
}
