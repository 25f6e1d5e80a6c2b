//! User service for invitee management

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for registering a new user
#[derive(Debug, Clone, Validate)]
pub struct RegisterUserRequest {
    /// Explicit ID; a random one is generated when absent
    pub id: Option<String>,
    #[validate(email)]
    pub email: String,
}

impl RegisterUserRequest {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into().trim().to_string(),
        }
    }
}

/// User service for managing invitees
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        info!(email = %request.email, "Registering user");

        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let user_id = match request.id {
            Some(ref id) => UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?,
            None => UserId::generate(),
        };

        let user =
            User::new(user_id, &request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(user).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(&user_id).await
    }

    /// Get a user by email address
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_email(email).await
    }

    /// Look a user up by email, registering them when unknown
    pub async fn get_or_register(&self, email: &str) -> Result<User, DomainError> {
        if let Some(user) = self.repository.get_by_email(email).await? {
            debug!(user_id = %user.id(), "User already registered");
            return Ok(user);
        }

        self.register(RegisterUserRequest::with_email(email)).await
    }

    /// List users, optionally only the invited ones
    pub async fn list(&self, invited: Option<bool>) -> Result<Vec<User>, DomainError> {
        self.repository.list(invited).await
    }
}
