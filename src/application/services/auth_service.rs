//! User registration, login and session token handling.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::application::error::ServiceError;
use crate::domain::StoreError;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};
use tracing::{debug, info};

type HmacSha256 = Hmac<Sha256>;

/// Service for user accounts and Bearer session tokens.
///
/// Tokens are stateless: `"{user_id}.{mac}"` where `mac` is the hex-encoded
/// HMAC-SHA256 of the user id keyed by `signing_secret`. Nothing is stored
/// server-side, so rotating the secret invalidates every issued token.
pub struct AuthService<U: UserRepository + ?Sized> {
    users: Arc<U>,
    signing_secret: String,
}

impl<U: UserRepository + ?Sized> AuthService<U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository
    /// - `signing_secret` - HMAC key; must match the value used when tokens were issued
    pub fn new(users: Arc<U>, signing_secret: String) -> Self {
        Self {
            users,
            signing_secret,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Registers a new user with an Argon2-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UsernameTaken`] if the username exists,
    /// including when a concurrent registration wins the store insert.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(ServiceError::UsernameTaken(username.to_string()));
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ServiceError::PasswordHash(e.to_string()))?
            .map_err(ServiceError::PasswordHash)?;

        let user = self
            .users
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => ServiceError::UsernameTaken(username.to_string()),
                other => other.into(),
            })?;

        info!(user_id = user.id, username = %user.username, "user registered");

        Ok(user)
    }

    /// Checks a username and password.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidCredentials`] for an unknown username
    /// and for a wrong password alike.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(username = %username, "login for unknown user");
            return Err(ServiceError::InvalidCredentials);
        };

        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .map_err(|e| ServiceError::PasswordHash(e.to_string()))?;

        if !verified {
            debug!(user_id = user.id, "login with wrong password");
            return Err(ServiceError::InvalidCredentials);
        }

        info!(user_id = user.id, "user logged in");

        Ok(user)
    }

    /// Issues a session token for `user_id`.
    pub fn issue_token(&self, user_id: i64) -> String {
        let mut mac = self.mac();
        mac.update(user_id.to_string().as_bytes());
        format!("{user_id}.{}", hex::encode(mac.finalize().into_bytes()))
    }

    /// Verifies a session token and returns the user id it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidToken`] if the token is malformed, its
    /// MAC does not verify, or the user no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<i64, ServiceError> {
        let (id_part, mac_part) = token.split_once('.').ok_or(ServiceError::InvalidToken)?;
        let user_id: i64 = id_part.parse().map_err(|_| ServiceError::InvalidToken)?;
        let tag = hex::decode(mac_part).map_err(|_| ServiceError::InvalidToken)?;

        let mut mac = self.mac();
        mac.update(id_part.as_bytes());
        mac.verify_slice(&tag)
            .map_err(|_| ServiceError::InvalidToken)?;

        if self.users.find_by_id(user_id).await?.is_none() {
            debug!(user_id, "token for deleted user");
            return Err(ServiceError::InvalidToken);
        }

        Ok(user_id)
    }
}
