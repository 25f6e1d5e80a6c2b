//! Team domain module
//!
//! Teams are what users get invited to. Invitations only read the display
//! name of a team.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId};
pub use repository::{TeamQuery, TeamRepository};
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};
