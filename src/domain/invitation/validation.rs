//! Invitation validation
//!
//! Validation is a pure predicate over the references an invitation holds, so
//! it can run before persistence and while rendering log statements.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::team::Team;
use crate::domain::user::User;

/// Errors that can occur during invitation validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvitationValidationError {
    #[error("Invitation must reference a team")]
    MissingTeam,

    #[error("Invitation must reference a user")]
    MissingUser,

    #[error("Invitation must reference a team and a user")]
    MissingTeamAndUser,

    #[error("Invitation ID '{0}' is not a valid UUID")]
    InvalidId(String),
}

/// Validate the references of an invitation
///
/// Both a team and a user are required. Neither can be "empty" once present:
/// their own constructors reject blank names and malformed emails.
pub fn validate_invitation(
    team: Option<&Team>,
    user: Option<&User>,
) -> Result<(), InvitationValidationError> {
    match (team, user) {
        (Some(_), Some(_)) => Ok(()),
        (None, Some(_)) => Err(InvitationValidationError::MissingTeam),
        (Some(_), None) => Err(InvitationValidationError::MissingUser),
        (None, None) => Err(InvitationValidationError::MissingTeamAndUser),
    }
}

/// Validate an invitation ID
pub fn validate_invitation_id(id: &str) -> Result<(), InvitationValidationError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| InvitationValidationError::InvalidId(id.to_string()))
}
