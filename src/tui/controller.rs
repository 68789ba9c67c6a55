use super::host::WizardHost;
use super::navigation::{action_from_key, TextTarget, WizardEffect, WizardExit};
use crate::invite::{parse_recipient_list, InviteForm, InviteSender, Team, TeamRoster};
use crate::shared::logging::EventLog;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

const READY_STATUS_TEXT: &str = "Use the arrows to move between steps. Esc quits.";

/// Input captured by an overlay instead of the wizard itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    None,
    SelectTeam { selected: usize },
    Text { target: TextTarget, value: String },
}

/// Routes keys to the wizard or to the open overlay and keeps the status
/// line. Interactive and scripted runs share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardController {
    pub modal: Modal,
    pub status_text: String,
}

impl Default for WizardController {
    fn default() -> Self {
        Self {
            modal: Modal::None,
            status_text: READY_STATUS_TEXT.to_string(),
        }
    }
}

impl WizardController {
    pub fn handle_key(
        &mut self,
        host: &mut dyn WizardHost,
        key: KeyEvent,
        sender: &dyn InviteSender,
        log: &EventLog,
        now: Instant,
    ) -> Option<WizardExit> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match std::mem::replace(&mut self.modal, Modal::None) {
            Modal::None => self.handle_wizard_key(host, key, now),
            Modal::SelectTeam { selected } => {
                self.handle_team_key(host.teams(), selected, key);
                None
            }
            Modal::Text { target, value } => {
                self.handle_text_key(host, target, value, key, sender, log);
                None
            }
        }
    }

    fn handle_wizard_key(
        &mut self,
        host: &mut dyn WizardHost,
        key: KeyEvent,
        now: Instant,
    ) -> Option<WizardExit> {
        let action = action_from_key(key)?;
        let transition = match host.apply(action, now) {
            Ok(transition) => transition,
            Err(err) => {
                self.status_text = err.to_string();
                return None;
            }
        };
        if let Some(feedback) = transition.feedback {
            self.status_text = feedback;
        }
        match transition.effect {
            WizardEffect::None => None,
            WizardEffect::PromptText { target, initial } => {
                self.modal = Modal::Text {
                    target,
                    value: initial,
                };
                None
            }
            WizardEffect::SelectInviteTeam => {
                self.modal = Modal::SelectTeam { selected: 0 };
                None
            }
            WizardEffect::Exit(exit) => Some(exit),
        }
    }

    fn handle_team_key(&mut self, teams: &[TeamRoster], selected: usize, key: KeyEvent) {
        let last = teams.len().saturating_sub(1);
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Up => {
                self.modal = Modal::SelectTeam {
                    selected: selected.saturating_sub(1),
                }
            }
            KeyCode::Down => {
                self.modal = Modal::SelectTeam {
                    selected: (selected + 1).min(last),
                }
            }
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                if let Some(roster) = teams.get(selected) {
                    self.modal = Modal::Text {
                        target: TextTarget::InviteEmails(roster.team),
                        value: String::new(),
                    };
                }
            }
            _ => self.modal = Modal::SelectTeam { selected },
        }
    }

    fn handle_text_key(
        &mut self,
        host: &mut dyn WizardHost,
        target: TextTarget,
        mut value: String,
        key: KeyEvent,
        sender: &dyn InviteSender,
        log: &EventLog,
    ) {
        match key.code {
            KeyCode::Esc => return,
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                let feedback = match target {
                    TextTarget::InviteEmails(team) => Some(send_invites(team, &value, sender, log)),
                    _ => host.apply_text(target, &value),
                };
                if let Some(feedback) = feedback {
                    self.status_text = feedback;
                }
                return;
            }
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(ch),
            _ => {}
        }
        self.modal = Modal::Text { target, value };
    }
}

/// Fills an invite form from a comma separated list and submits it.
pub fn send_invites(team: Team, raw: &str, sender: &dyn InviteSender, log: &EventLog) -> String {
    let emails = parse_recipient_list(raw);
    if emails.is_empty() {
        return "Email is required".to_string();
    }
    let mut form = InviteForm::new(team);
    for (index, email) in emails.iter().enumerate() {
        if index > 0 {
            form.add_field();
        }
        form.set_email(index, email);
    }
    match form.submit(sender, log) {
        Ok(outcome) => outcome.confirmation(),
        Err(err) => err.to_string(),
    }
}
