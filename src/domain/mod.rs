//! Domain layer - Core business logic and entities

pub mod error;
pub mod invitation;
pub mod storage;
pub mod team;
pub mod user;

pub use error::DomainError;
pub use invitation::{
    EventLogStatement, Invitation, InvitationId, InvitationQuery, InvitationRepository,
    InvitationValidationError, RecordState,
};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{Team, TeamId, TeamQuery, TeamRepository};
pub use user::{User, UserId, UserRepository};
