//! Team invitations: email validation, the invite form and the sender that
//! delivers invites.

pub mod email;
pub mod form;
pub mod sender;
pub mod teams;

pub use email::{parse_recipient_list, validate_email, EmailError};
pub use form::{InviteForm, InviteOutcome};
pub use sender::{HttpInviteSender, InviteError, InviteSender, LogInviteSender};
pub use teams::{Team, TeamMember, TeamRoster};
