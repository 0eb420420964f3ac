//! Account service errors.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from signup and login operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// The email/password combination is wrong, or the user does not exist.
    ///
    /// The two cases are deliberately indistinguishable so callers cannot
    /// probe which emails are registered.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Password hashing or verification failed.
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
