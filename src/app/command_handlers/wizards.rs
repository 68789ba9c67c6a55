use crate::alerts::AlertSetupSession;
use crate::app::command_support::{describe_exit, invite_sender, load_settings};
use crate::telemetry::{
    Clipboard, CopyIndicator, MemoryClipboard, Osc52Clipboard, TelemetrySetupSession,
};
use crate::tui::{is_interactive, run_wizard, WizardHost, SCRIPT_KEYS_ENV};

fn wizard_clipboard() -> Box<dyn Clipboard> {
    if is_interactive() && std::env::var_os(SCRIPT_KEYS_ENV).is_none() {
        Box::new(Osc52Clipboard::stdout())
    } else {
        Box::new(MemoryClipboard::default())
    }
}

pub fn cmd_telemetry(args: &[String]) -> Result<String, String> {
    if args.len() > 1 {
        return Err("usage: telemetry [path]".to_string());
    }
    let settings = load_settings()?;
    let log = settings.event_log();
    let mut session = TelemetrySetupSession::new(
        wizard_clipboard(),
        CopyIndicator::new(settings.copy_indicator()),
        settings.tracking_id.clone(),
        log.clone(),
    );
    if let Some(path) = args.first() {
        session
            .open_path(path)
            .ok_or_else(|| format!("unknown telemetry route `{path}`"))?;
    }
    let sender = invite_sender(&settings, &log);
    let exit = run_wizard(&mut session, sender.as_ref(), &log)?;
    Ok(format!(
        "{}\n{}",
        describe_exit(session.flow(), exit),
        session.summary()
    ))
}

pub fn cmd_alerts(args: &[String]) -> Result<String, String> {
    let json = match args {
        [] => false,
        [flag] if flag == "--json" => true,
        _ => return Err("usage: alerts [--json]".to_string()),
    };
    let settings = load_settings()?;
    let log = settings.event_log();
    let mut session = AlertSetupSession::new(log.clone());
    let sender = invite_sender(&settings, &log);
    let exit = run_wizard(&mut session, sender.as_ref(), &log)?;
    let mut out = format!("{}\n{}", describe_exit(session.flow(), exit), session.summary());
    if json {
        let rules = session
            .store()
            .to_json()
            .map_err(|err| format!("failed to encode alert rules: {err}"))?;
        out.push('\n');
        out.push_str(&rules);
    }
    Ok(out)
}
