use crate::invite::Team;
use crate::journey::OnboardingRoute;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const SCRIPT_KEYS_ENV: &str = "JOURNEYFLOW_SCRIPT_KEYS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    Jump(usize),
    FocusPrev,
    FocusNext,
    ToggleFocused,
    AddRule,
    DeleteRule,
    AddChannel,
    DeleteChannel,
    CycleChannelKind,
    CycleMetric,
    FlipCondition,
    RaiseThreshold,
    LowerThreshold,
    EditText,
    CopySnippet,
    NextSnippet,
    VerifyEvent,
    CycleEnvironment,
    ActivateOption,
    Invite,
    Quit,
}

impl WizardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardAction::Next => "next",
            WizardAction::Back => "back",
            WizardAction::Jump(_) => "jump",
            WizardAction::FocusPrev => "focus_prev",
            WizardAction::FocusNext => "focus_next",
            WizardAction::ToggleFocused => "toggle_focused",
            WizardAction::AddRule => "add_rule",
            WizardAction::DeleteRule => "delete_rule",
            WizardAction::AddChannel => "add_channel",
            WizardAction::DeleteChannel => "delete_channel",
            WizardAction::CycleChannelKind => "cycle_channel_kind",
            WizardAction::CycleMetric => "cycle_metric",
            WizardAction::FlipCondition => "flip_condition",
            WizardAction::RaiseThreshold => "raise_threshold",
            WizardAction::LowerThreshold => "lower_threshold",
            WizardAction::EditText => "edit_text",
            WizardAction::CopySnippet => "copy_snippet",
            WizardAction::NextSnippet => "next_snippet",
            WizardAction::VerifyEvent => "verify_event",
            WizardAction::CycleEnvironment => "cycle_environment",
            WizardAction::ActivateOption => "activate_option",
            WizardAction::Invite => "invite",
            WizardAction::Quit => "quit",
        }
    }
}

/// Free-text fields a wizard can prompt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    ProductName,
    Recipients,
    ChannelTarget,
    InviteEmails(Team),
}

impl TextTarget {
    pub fn prompt(self) -> String {
        match self {
            TextTarget::ProductName => "Product name".to_string(),
            TextTarget::Recipients => "Alert recipients (comma separated)".to_string(),
            TextTarget::ChannelTarget => "Channel target".to_string(),
            TextTarget::InviteEmails(team) => {
                format!("Invite {} (comma separated emails)", team.label())
            }
        }
    }
}

/// How a wizard run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardExit {
    /// Finish on the last step. `None` means the flow ends on an in-place
    /// prompt rather than a new page.
    Completed(Option<OnboardingRoute>),
    /// Back from the first step.
    Left(OnboardingRoute),
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    None,
    PromptText { target: TextTarget, initial: String },
    SelectInviteTeam,
    Exit(WizardExit),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardTransition {
    pub effect: WizardEffect,
    pub feedback: Option<String>,
}

impl WizardTransition {
    pub fn feedback(message: impl Into<String>) -> Self {
        Self {
            effect: WizardEffect::None,
            feedback: Some(message.into()),
        }
    }

    pub fn quiet() -> Self {
        Self {
            effect: WizardEffect::None,
            feedback: None,
        }
    }

    pub fn effect(effect: WizardEffect) -> Self {
        Self {
            effect,
            feedback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardNavError {
    Unsupported {
        flow: &'static str,
        action: WizardAction,
    },
    NothingSelected {
        action: WizardAction,
    },
}

impl std::fmt::Display for WizardNavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardNavError::Unsupported { flow, action } => write!(
                f,
                "action not available here: flow={flow} action={}",
                action.as_str()
            ),
            WizardNavError::NothingSelected { action } => write!(
                f,
                "expand a rule first: action={}",
                action.as_str()
            ),
        }
    }
}

pub fn action_from_key(key: KeyEvent) -> Option<WizardAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(WizardAction::Quit);
    }
    match key.code {
        KeyCode::Right | KeyCode::Char('n') => Some(WizardAction::Next),
        KeyCode::Left | KeyCode::Char('b') => Some(WizardAction::Back),
        KeyCode::Up => Some(WizardAction::FocusPrev),
        KeyCode::Down => Some(WizardAction::FocusNext),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
            Some(WizardAction::ToggleFocused)
        }
        KeyCode::Esc => Some(WizardAction::Quit),
        KeyCode::Char(ch @ '1'..='9') => ch
            .to_digit(10)
            .map(|digit| WizardAction::Jump(digit as usize - 1)),
        KeyCode::Char('a') => Some(WizardAction::AddRule),
        KeyCode::Char('d') => Some(WizardAction::DeleteRule),
        KeyCode::Char('c') => Some(WizardAction::AddChannel),
        KeyCode::Char('x') => Some(WizardAction::DeleteChannel),
        KeyCode::Char('t') => Some(WizardAction::CycleChannelKind),
        KeyCode::Char('m') => Some(WizardAction::CycleMetric),
        KeyCode::Char('o') => Some(WizardAction::FlipCondition),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(WizardAction::RaiseThreshold),
        KeyCode::Char('-') => Some(WizardAction::LowerThreshold),
        KeyCode::Char('e') => Some(WizardAction::EditText),
        KeyCode::Char('y') => Some(WizardAction::CopySnippet),
        KeyCode::Tab | KeyCode::Char('s') => Some(WizardAction::NextSnippet),
        KeyCode::Char('v') => Some(WizardAction::VerifyEvent),
        KeyCode::Char('g') => Some(WizardAction::CycleEnvironment),
        KeyCode::Char(' ') => Some(WizardAction::ActivateOption),
        KeyCode::Char('i') => Some(WizardAction::Invite),
        _ => None,
    }
}

fn char_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
}

/// Parses a comma separated key script. `text:<literal>` expands to one key
/// per character, so a literal cannot contain a comma.
pub fn parse_scripted_keys(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(literal) = trimmed.strip_prefix("text:") {
            keys.extend(literal.chars().map(char_key));
            continue;
        }
        let normalized = trimmed.to_ascii_lowercase();
        let key = match normalized.as_str() {
            "left" => KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            "right" => KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "tab" => KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            "space" => char_key(' '),
            "backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            other if other.chars().count() == 1 => {
                let Some(ch) = trimmed.chars().next() else {
                    continue;
                };
                char_key(ch)
            }
            other => {
                return Err(format!(
                    "invalid {SCRIPT_KEYS_ENV} token `{other}`; valid tokens: left,right,up,down,enter,esc,tab,space,backspace,ctrl-c,<char>,text:<literal>"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}
