//! Invitation infrastructure implementations

mod repository;
mod service;

pub use repository::StorageInvitationRepository;
pub use service::{InvitationService, EVENT_LOG_TARGET};
