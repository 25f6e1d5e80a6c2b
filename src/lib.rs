//! Team Invitations
//!
//! Invites users to teams and keeps an audit trail of every invitation:
//! - Invitations validate that both a team and a user are referenced
//! - Saving an invitation flags its user as invited
//! - Every invitation can describe itself with an event log statement
//! - In-memory or PostgreSQL storage, selected by configuration

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub use config::AppConfig;
pub use state::{create_app_state, AppState};
