//! User infrastructure module
//!
//! Storage-backed user repository and the service that registers invitees.

mod repository;
mod service;

pub use repository::StorageUserRepository;
pub use service::{RegisterUserRequest, UserService};
