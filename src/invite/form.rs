use super::email::{validate_email, EmailError};
use super::sender::{InviteError, InviteSender};
use super::teams::Team;
use crate::shared::logging::EventLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteOutcome {
    pub team: Team,
    pub delivered: usize,
}

impl InviteOutcome {
    pub fn confirmation(&self) -> String {
        format!(
            "Invitations Sent! {} {} member(s) will receive an email invitation shortly.",
            self.delivered,
            self.team.label()
        )
    }
}

/// Email fields of the invite dialog. `errors[i]` always belongs to
/// `emails[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteForm {
    team: Team,
    emails: Vec<String>,
    errors: Vec<Option<EmailError>>,
}

impl InviteForm {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            emails: vec![String::new()],
            errors: vec![None],
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn errors(&self) -> &[Option<EmailError>] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Updates a field and re-validates it immediately.
    pub fn set_email(&mut self, index: usize, value: &str) -> bool {
        let Some(email) = self.emails.get_mut(index) else {
            return false;
        };
        *email = value.to_string();
        self.errors[index] = validate_email(value).err();
        true
    }

    pub fn add_field(&mut self) -> usize {
        self.emails.push(String::new());
        self.errors.push(None);
        self.emails.len() - 1
    }

    pub fn remove_field(&mut self, index: usize) -> bool {
        if index >= self.emails.len() {
            return false;
        }
        self.emails.remove(index);
        self.errors.remove(index);
        true
    }

    /// Re-validates every field and, when all pass, hands the trimmed
    /// non-empty addresses to `sender`. A successful send resets the form.
    pub fn submit(
        &mut self,
        sender: &dyn InviteSender,
        log: &EventLog,
    ) -> Result<InviteOutcome, InviteError> {
        self.errors = self
            .emails
            .iter()
            .map(|email| validate_email(email).err())
            .collect();
        let invalid = self.errors.iter().filter(|error| error.is_some()).count();
        if invalid > 0 {
            return Err(InviteError::Validation { invalid });
        }

        let emails: Vec<String> = self
            .emails
            .iter()
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
            .collect();
        match sender.send_invites(self.team, &emails) {
            Ok(()) => {
                log.info(
                    "invite.sent",
                    &format!("team={} count={}", self.team.label(), emails.len()),
                );
                let outcome = InviteOutcome {
                    team: self.team,
                    delivered: emails.len(),
                };
                *self = Self::new(self.team);
                Ok(outcome)
            }
            Err(err) => {
                log.error("invite.failed", &err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSender {
        calls: RefCell<Vec<Vec<String>>>,
        fail: bool,
    }

    impl InviteSender for RecordingSender {
        fn send_invites(&self, _team: Team, emails: &[String]) -> Result<(), InviteError> {
            self.calls.borrow_mut().push(emails.to_vec());
            if self.fail {
                return Err(InviteError::Delivery("offline".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn edits_validate_per_field() {
        let mut form = InviteForm::new(Team::Product);
        form.add_field();
        assert!(form.set_email(0, "bad"));
        assert!(form.set_email(1, "ok@corp.io"));
        assert_eq!(form.errors(), &[Some(EmailError::InvalidFormat), None]);
        assert!(!form.set_email(5, "x@y.z"));
    }

    #[test]
    fn submit_blocks_on_empty_field_without_calling_sender() {
        let sender = RecordingSender::default();
        let mut form = InviteForm::new(Team::GtmLeaders);
        form.set_email(0, "lead@corp.io");
        form.add_field();

        let err = form
            .submit(&sender, &EventLog::disabled())
            .expect_err("blank field blocks submit");
        assert_eq!(err, InviteError::Validation { invalid: 1 });
        assert_eq!(form.errors()[1], Some(EmailError::Required));
        assert!(sender.calls.borrow().is_empty());
    }

    #[test]
    fn successful_submit_resets_form() {
        let sender = RecordingSender::default();
        let mut form = InviteForm::new(Team::Engineering);
        form.set_email(0, "dev@corp.io");
        let second = form.add_field();
        form.set_email(second, "ops@corp.io");

        let outcome = form.submit(&sender, &EventLog::disabled()).expect("sent");
        assert_eq!(outcome.delivered, 2);
        assert_eq!(
            sender.calls.borrow()[0],
            vec!["dev@corp.io".to_string(), "ops@corp.io".to_string()]
        );
        assert_eq!(form, InviteForm::new(Team::Engineering));
    }

    #[test]
    fn failed_delivery_keeps_entered_addresses() {
        let sender = RecordingSender {
            fail: true,
            ..RecordingSender::default()
        };
        let mut form = InviteForm::new(Team::Growth);
        form.set_email(0, "g@corp.io");
        assert!(matches!(
            form.submit(&sender, &EventLog::disabled()),
            Err(InviteError::Delivery(_))
        ));
        assert_eq!(form.emails(), &["g@corp.io".to_string()]);
        assert_eq!(sender.calls.borrow().len(), 1);
    }
}
