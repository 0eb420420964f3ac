//! Account service.
//!
//! Handles user signup and login against the `users` table with bcrypt
//! password hashing.

mod error;

pub use error::AccountError;

use sqlx::PgPool;

use glamora_core::User;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;

/// Bcrypt cost factor for new password hashes.
const BCRYPT_COST: u32 = 10;

/// Account service.
///
/// Per request the steps run in a fixed order: lookup, then hash or
/// compare, then persist. There is no locking around the duplicate-email
/// pre-check; the unique index on `users.email` is the final arbiter under
/// concurrent signups.
pub struct AccountService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::EmailTaken` if the email is already registered,
    /// whether caught by the pre-check or by the unique index at insert time.
    pub async fn signup(&self, email: &str, password: &str) -> Result<User, AccountError> {
        // Pre-check is best effort; a concurrent signup can still reach the
        // insert and lose on the unique index.
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AccountError::EmailTaken,
                other => AccountError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidCredentials` for an unknown email or a
    /// wrong password; the caller cannot tell the two apart.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        let (user, password_hash) = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !verify_password(password, &password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }
}

/// Hash a password with bcrypt at the configured cost.
fn hash_password(password: &str) -> Result<String, AccountError> {
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Verify a candidate password against a stored bcrypt hash.
fn verify_password(password: &str, hash: &str) -> Result<bool, AccountError> {
    Ok(bcrypt::verify(password, hash)?)
}
