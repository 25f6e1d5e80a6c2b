//! User domain
//!
//! Users are invitees: an email address plus the "invited" flag that a
//! successful invitation save turns on.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_user_id, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
