//! Invitation domain module
//!
//! An invitation links a team and a user. Saving a valid invitation flags the
//! user as invited; every invitation, saved or not, can describe itself with
//! an event log statement.

mod entity;
mod event_log;
mod repository;
mod validation;

pub use entity::{Invitation, InvitationId, RecordState};
pub use event_log::{EventLogStatement, INVALID_TOKEN, PENDING_TOKEN};
pub use repository::{InvitationQuery, InvitationRepository};
pub use validation::{validate_invitation, validate_invitation_id, InvitationValidationError};

#[cfg(test)]
pub use repository::MockInvitationRepository;
