//! User domain models and parameters.
//!
//! Provides the administrator account model along with the validated inputs for
//! account creation and login.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{CreateAdminDto, LoginDto, UserDto},
    server::error::validation::ValidationError,
};

/// Administrator account.
///
/// The password hash stays inside the server; `into_dto` never exposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The account without its password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// Validated input for creating an administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAdminParams {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl CreateAdminParams {
    /// Requires username, password and email, reporting every missing one.
    pub fn from_dto(dto: CreateAdminDto) -> Result<Self, ValidationError> {
        let presence = [
            ("username", is_present(&dto.username)),
            ("password", is_present(&dto.password)),
            ("email", is_present(&dto.email)),
        ];

        match (dto.username, dto.password, dto.email) {
            (Some(username), Some(password), Some(email))
                if presence.iter().all(|(_, present)| *present) =>
            {
                Ok(Self {
                    username,
                    password,
                    email,
                })
            }
            _ => Err(ValidationError::missing(&presence)),
        }
    }
}

/// Validated login attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationError> {
        let presence = [
            ("username", is_present(&dto.username)),
            ("password", is_present(&dto.password)),
        ];

        match (dto.username, dto.password) {
            (Some(username), Some(password)) if presence.iter().all(|(_, present)| *present) => {
                Ok(Self { username, password })
            }
            _ => Err(ValidationError::missing(&presence)),
        }
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
