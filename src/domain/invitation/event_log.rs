//! Event log statements for invitations

use std::fmt;

use super::entity::Invitation;
use super::validation::InvitationValidationError;

/// Token carried by statements about invitations that cannot be saved
pub const INVALID_TOKEN: &str = "INVALID";

/// Token carried by statements about valid invitations that are not saved yet
pub const PENDING_TOKEN: &str = "PENDING";

/// Summary of an invitation's current state for the audit log
///
/// Rendering goes through [`fmt::Display`]; the same invitation state always
/// renders the same line.
#[derive(Debug, Clone, PartialEq)]
pub enum EventLogStatement<'a> {
    /// A team or user reference is missing
    Invalid(InvitationValidationError),
    /// Valid, not yet saved
    Pending { team: &'a str, email: &'a str },
    /// Valid and saved
    Invited { team: &'a str, email: &'a str },
}

impl<'a> EventLogStatement<'a> {
    /// Describe an invitation as it currently is
    pub fn for_invitation(invitation: &'a Invitation) -> Self {
        match (invitation.team(), invitation.user()) {
            (Some(team), Some(user)) if invitation.is_saved() => Self::Invited {
                team: team.name(),
                email: user.email(),
            },
            (Some(team), Some(user)) => Self::Pending {
                team: team.name(),
                email: user.email(),
            },
            _ => Self::Invalid(
                invitation
                    .validate()
                    .err()
                    .unwrap_or(InvitationValidationError::MissingTeamAndUser),
            ),
        }
    }
}

impl fmt::Display for EventLogStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(reason) => write!(f, "{} - {}", INVALID_TOKEN, reason),
            Self::Pending { team, email } => write!(
                f,
                "{} - {} has not been invited to {} yet",
                PENDING_TOKEN, email, team
            ),
            Self::Invited { team, email } => write!(f, "{} was invited to {}", email, team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{Team, TeamId};
    use crate::domain::user::{User, UserId};

    fn invitation() -> Invitation {
        let team = Team::new(TeamId::generate(), "A fine team").unwrap();
        let user = User::new(UserId::generate(), "rookie@example.com").unwrap();
        Invitation::new(Some(team), Some(user))
    }

    #[test]
    fn test_pending_statement() {
        let invitation = invitation();
        let statement = invitation.event_log_statement();

        assert!(statement.contains("A fine team"));
        assert!(statement.contains("rookie@example.com"));
        assert!(statement.contains(PENDING_TOKEN));
        assert_eq!(
            statement,
            "PENDING - rookie@example.com has not been invited to A fine team yet"
        );
    }

    #[test]
    fn test_invited_statement() {
        let saved = invitation().saved_snapshot(None).unwrap();
        let statement = saved.event_log_statement();

        assert!(statement.contains("A fine team"));
        assert!(statement.contains("rookie@example.com"));
        assert!(!statement.contains(PENDING_TOKEN));
        assert!(!statement.contains(INVALID_TOKEN));
        assert_eq!(
            saved.event_log(),
            EventLogStatement::Invited {
                team: "A fine team",
                email: "rookie@example.com"
            }
        );
    }

    #[test]
    fn test_missing_user_is_invalid() {
        let mut invitation = invitation();
        invitation.set_user(None);

        let statement = invitation.event_log_statement();
        assert!(statement.contains(INVALID_TOKEN));
        assert_eq!(statement, "INVALID - Invitation must reference a user");
    }

    #[test]
    fn test_missing_team_is_invalid() {
        let mut invitation = invitation();
        invitation.set_team(None);

        assert_eq!(
            invitation.event_log(),
            EventLogStatement::Invalid(InvitationValidationError::MissingTeam)
        );
    }

    #[test]
    fn test_saved_invitation_losing_team_is_invalid() {
        let mut saved = invitation().saved_snapshot(None).unwrap();
        saved.set_team(None);

        assert!(saved.event_log_statement().starts_with(INVALID_TOKEN));
    }

    #[test]
    fn test_statement_is_deterministic() {
        let invitation = invitation();
        assert_eq!(
            invitation.event_log_statement(),
            invitation.event_log_statement()
        );
    }
}
