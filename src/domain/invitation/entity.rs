//! Invitation entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event_log::EventLogStatement;
use super::validation::{validate_invitation, validate_invitation_id, InvitationValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::team::Team;
use crate::domain::user::User;

/// Invitation identifier - a UUID string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvitationId(String);

impl InvitationId {
    /// Create an InvitationId from an existing UUID string
    pub fn new(id: impl Into<String>) -> Result<Self, InvitationValidationError> {
        let id = id.into();
        validate_invitation_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InvitationId {
    type Error = InvitationValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InvitationId> for String {
    fn from(id: InvitationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for InvitationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for InvitationId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persistence state of an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    /// Only exists in memory
    #[default]
    New,
    /// Persisted by a successful save; terminal
    Saved,
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Saved => write!(f, "saved"),
        }
    }
}

/// Invitation of a user to a team
///
/// Either reference may be missing; such an invitation is invalid and can
/// never be saved. The transition to [`RecordState::Saved`] happens only
/// through `InvitationService::save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    id: InvitationId,
    #[serde(default)]
    team: Option<Team>,
    #[serde(default)]
    user: Option<User>,
    state: RecordState,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Create a new, unsaved invitation
    pub fn new(team: Option<Team>, user: Option<User>) -> Self {
        Self {
            id: InvitationId::generate(),
            team,
            user,
            state: RecordState::New,
            created_at: Utc::now(),
            saved_at: None,
        }
    }

    // Getters

    pub fn id(&self) -> &InvitationId {
        &self.id
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    /// True until a save succeeds
    pub fn is_new_record(&self) -> bool {
        self.state == RecordState::New
    }

    pub fn is_saved(&self) -> bool {
        self.state == RecordState::Saved
    }

    // Mutators

    /// Replace or remove the team reference
    pub fn set_team(&mut self, team: Option<Team>) {
        self.team = team;
    }

    /// Replace or remove the user reference
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    // Validation and reporting

    /// Validate the current references
    pub fn validate(&self) -> Result<(), InvitationValidationError> {
        validate_invitation(self.team(), self.user())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Typed summary of the current state
    pub fn event_log(&self) -> EventLogStatement<'_> {
        EventLogStatement::for_invitation(self)
    }

    /// Human-readable line describing the current state, for the audit log
    pub fn event_log_statement(&self) -> String {
        self.event_log().to_string()
    }

    /// Build the state this invitation has once a save has gone through
    ///
    /// The copy is marked saved and carries its user flagged as invited.
    /// `current_user` is the stored version of the referenced user; when given
    /// it replaces the possibly stale copy held by the invitation. The receiver
    /// is left untouched so a failed persistence step changes nothing.
    pub(crate) fn saved_snapshot(
        &self,
        current_user: Option<User>,
    ) -> Result<Self, InvitationValidationError> {
        self.validate()?;

        let mut snapshot = self.clone();
        snapshot.state = RecordState::Saved;
        snapshot.saved_at.get_or_insert_with(Utc::now);

        if let Some(user) = current_user {
            snapshot.user = Some(user);
        }

        if let Some(user) = snapshot.user.as_mut() {
            user.mark_invited();
        }

        Ok(snapshot)
    }
}

impl StorageEntity for Invitation {
    type Key = InvitationId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
