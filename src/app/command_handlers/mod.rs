use crate::app::cli::{help_text, parse_cli_verb, CliVerb};

pub mod catalog;
pub mod email;
pub mod wizards;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    if args.is_empty() {
        return Ok(help_text());
    }

    match parse_cli_verb(args[0].as_str()) {
        CliVerb::Telemetry => wizards::cmd_telemetry(&args[1..]),
        CliVerb::Alerts => wizards::cmd_alerts(&args[1..]),
        CliVerb::Steps => catalog::cmd_steps(&args[1..]),
        CliVerb::CheckEmail => email::cmd_check_email(&args[1..]),
        CliVerb::Route => catalog::cmd_route(&args[1..]),
        CliVerb::Cards => catalog::cmd_cards(&args[1..]),
        CliVerb::Help => Ok(help_text()),
        CliVerb::Unknown => Err(format!("unknown command `{}`", args[0])),
    }
}
