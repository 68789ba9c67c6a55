use super::teams::Team;
use crate::shared::logging::EventLog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InviteError {
    #[error("{invalid} email field(s) need attention before invites can be sent")]
    Validation { invalid: usize },
    #[error("failed to send invites: {0}")]
    Delivery(String),
}

/// Delivers invitations. Callers never retry a failed delivery.
pub trait InviteSender {
    fn send_invites(&self, team: Team, emails: &[String]) -> Result<(), InviteError>;
}

#[derive(Debug, Serialize)]
struct InviteRequest<'a> {
    team: Team,
    emails: &'a [String],
}

/// POSTs `{"team": ..., "emails": [...]}` to an invite endpoint.
#[derive(Debug, Clone)]
pub struct HttpInviteSender {
    endpoint: String,
}

impl HttpInviteSender {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl InviteSender for HttpInviteSender {
    fn send_invites(&self, team: Team, emails: &[String]) -> Result<(), InviteError> {
        let body = serde_json::to_value(InviteRequest { team, emails })
            .map_err(|e| InviteError::Delivery(e.to_string()))?;
        ureq::post(&self.endpoint)
            .send_json(body)
            .map_err(|e| InviteError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Used when no invite endpoint is configured: the request is recorded in
/// the event log and reported as delivered.
#[derive(Debug, Clone, Default)]
pub struct LogInviteSender {
    log: EventLog,
}

impl LogInviteSender {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl InviteSender for LogInviteSender {
    fn send_invites(&self, team: Team, emails: &[String]) -> Result<(), InviteError> {
        self.log.info(
            "invite.recorded",
            &format!("team={} emails={}", team.label(), emails.join(",")),
        );
        Ok(())
    }
}
