//! Administrator accounts, password hashing and session tokens.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateAdminParams, LoginParams, User},
};

/// How long an issued token stays valid.
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Claims carried by session tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Result of an admin creation request.
pub enum AdminAccount {
    Created(User),
    /// A user with the same username or email was already present.
    Existing(User),
}

/// Service for administrator bootstrap and login.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// Secret used to sign session tokens.
    pub jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt_secret` - HMAC secret for signing tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Creates an administrator unless one with the same username or email exists.
    ///
    /// An existing account is returned untouched; its password is not compared or
    /// replaced.
    ///
    /// # Returns
    /// - `Ok(AdminAccount::Created)` - New account stored with a hashed password
    /// - `Ok(AdminAccount::Existing)` - Matching account already present
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn create_admin(&self, params: CreateAdminParams) -> Result<AdminAccount, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(existing) = repo
            .find_by_username_or_email(&params.username, &params.email)
            .await?
        {
            tracing::info!("Admin user {} already exists", existing.username);
            return Ok(AdminAccount::Existing(existing));
        }

        let password_hash = hash_password(&params.password)?;
        let user = repo
            .create(params.username, params.email, password_hash)
            .await?;

        tracing::info!("Created admin user {}", user.username);

        Ok(AdminAccount::Created(user))
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown usernames and wrong passwords both produce `AuthError::InvalidCredentials`.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Signed token and the authenticated user
    /// - `Err(AppError::AuthErr)` - Invalid credentials or token signing failure
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, params: LoginParams) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(&params.username).await? else {
            tracing::debug!("Login attempt for unknown user");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&user.password_hash, &params.password)? {
            tracing::debug!("Login attempt with wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = issue_token(&user, self.jwt_secret)?;

        Ok((token, user))
    }
}

/// Hashes a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::PasswordHash)` - Stored hash could not be parsed or verified
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AuthError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash(e.to_string())),
    }
}

/// Signs an HS256 token for a user, valid for 24 hours.
pub fn issue_token(user: &User, secret: &str) -> Result<String, AuthError> {
    let issued_at = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
    };

    Ok(jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
