//! User data repository for database operations.
//!
//! Provides the `UserRepository` for administrator accounts: lookups for login and
//! idempotent admin creation, and inserting new accounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::User;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user whose username or email matches.
    ///
    /// Used to keep admin creation idempotent: either identifier already being taken
    /// means the account exists.
    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a user with an already-hashed password.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    /// - `email` - Unique email address
    /// - `password_hash` - Argon2 PHC string
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
