//! Team validation
//!
//! Team IDs are either caller-chosen slugs or generated UUIDs. Names are what
//! invitations print, so they must be single-line.

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Team ID contains invalid character '{0}'")]
    InvalidIdCharacter(char),

    #[error("Team ID must start and end with an alphanumeric character")]
    InvalidIdBoundary,

    #[error("Team name cannot be blank")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Team name must fit on a single line")]
    MultilineName,
}

const MAX_TEAM_ID_LENGTH: usize = 50;
const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team ID: ASCII alphanumerics and inner hyphens only
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    let (first, last) = match (id.chars().next(), id.chars().last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TeamValidationError::EmptyId),
    };

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(TeamValidationError::IdTooLong(MAX_TEAM_ID_LENGTH));
    }

    if let Some(bad) = id.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(TeamValidationError::InvalidIdCharacter(bad));
    }

    if first == '-' || last == '-' {
        return Err(TeamValidationError::InvalidIdBoundary);
    }

    Ok(())
}

/// Validate a team display name
///
/// Surrounding whitespace does not count towards the name.
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    let name = name.trim();

    match name.chars().count() {
        0 => Err(TeamValidationError::EmptyName),
        n if n > MAX_TEAM_NAME_LENGTH => Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH)),
        _ if name.chars().any(char::is_control) => Err(TeamValidationError::MultilineName),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_slugs_and_uuids() {
        assert!(validate_team_id("fine").is_ok());
        assert!(validate_team_id("fine-team-2").is_ok());
        assert!(validate_team_id("3f0c6a7e-1b2d-4c5e-9f80-0a1b2c3d4e5f").is_ok());
    }

    #[test]
    fn test_rejects_bad_ids() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
        assert_eq!(
            validate_team_id(&"a".repeat(51)),
            Err(TeamValidationError::IdTooLong(50))
        );
        assert_eq!(
            validate_team_id("a fine team"),
            Err(TeamValidationError::InvalidIdCharacter(' '))
        );
        assert_eq!(
            validate_team_id("fine_team"),
            Err(TeamValidationError::InvalidIdCharacter('_'))
        );
        assert_eq!(
            validate_team_id("-fine"),
            Err(TeamValidationError::InvalidIdBoundary)
        );
    }

    #[test]
    fn test_team_names() {
        assert!(validate_team_name("A fine team").is_ok());
        assert!(validate_team_name("  Padded  ").is_ok());
        assert!(validate_team_name(&"é".repeat(100)).is_ok());

        assert_eq!(validate_team_name("   "), Err(TeamValidationError::EmptyName));
        assert_eq!(
            validate_team_name(&"a".repeat(101)),
            Err(TeamValidationError::NameTooLong(100))
        );
        assert_eq!(
            validate_team_name("A fine\nteam"),
            Err(TeamValidationError::MultilineName)
        );
    }
}
