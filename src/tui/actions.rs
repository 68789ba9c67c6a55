use super::controller::WizardController;
use super::host::WizardHost;
use super::navigation::{parse_scripted_keys, WizardExit, SCRIPT_KEYS_ENV};
use super::screens::draw_wizard;
use crate::invite::InviteSender;
use crate::shared::logging::EventLog;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

/// How a wizard was driven and how it ended. `None` means there was no
/// terminal and no key script, so the session was left untouched.
pub fn run_wizard(
    host: &mut dyn WizardHost,
    sender: &dyn InviteSender,
    log: &EventLog,
) -> Result<Option<WizardExit>, String> {
    if let Some(keys) = load_scripted_keys()? {
        return Ok(Some(run_wizard_scripted(host, keys, sender, log)));
    }
    if is_interactive() {
        return run_wizard_tui(host, sender, log).map(Some);
    }
    Ok(None)
}

pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

fn load_scripted_keys() -> Result<Option<Vec<KeyEvent>>, String> {
    let Ok(raw) = std::env::var(SCRIPT_KEYS_ENV) else {
        return Ok(None);
    };
    parse_scripted_keys(&raw).map(Some)
}

/// Feeds `keys` through the same controller the terminal uses. Running out of
/// keys counts as a cancel.
pub fn run_wizard_scripted(
    host: &mut dyn WizardHost,
    keys: Vec<KeyEvent>,
    sender: &dyn InviteSender,
    log: &EventLog,
) -> WizardExit {
    let mut controller = WizardController::default();
    for key in keys {
        if let Some(exit) = controller.handle_key(host, key, sender, log, Instant::now()) {
            return exit;
        }
    }
    WizardExit::Canceled
}

fn run_wizard_tui(
    host: &mut dyn WizardHost,
    sender: &dyn InviteSender,
    log: &EventLog,
) -> Result<WizardExit, String> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    let entered = execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter wizard screen: {e}"));
    restore_on_err(entered, || {
        let _ = disable_raw_mode();
    })?;
    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create wizard terminal: {e}"));
    let mut terminal = restore_on_err(terminal, || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    })?;
    let result = run_wizard_tui_loop(host, sender, log, &mut terminal);
    let raw = disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"));
    let screen = execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave wizard screen: {e}"));
    raw?;
    screen?;
    result
}

/// Undoes the terminal setup done so far when the next setup step fails.
fn restore_on_err<T>(step: Result<T, String>, restore: impl FnOnce()) -> Result<T, String> {
    step.inspect_err(|_| restore())
}

fn run_wizard_tui_loop(
    host: &mut dyn WizardHost,
    sender: &dyn InviteSender,
    log: &EventLog,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<WizardExit, String> {
    let mut controller = WizardController::default();
    loop {
        let view = host.view(Instant::now());
        let teams = host.teams();
        terminal
            .draw(|frame| draw_wizard(frame, &view, &controller, teams))
            .map_err(|e| format!("failed to render wizard: {e}"))?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll wizard input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read wizard input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        if let Some(exit) = controller.handle_key(host, key, sender, log, Instant::now()) {
            return Ok(exit);
        }
    }
}
