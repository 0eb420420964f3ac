//! Account route handlers.
//!
//! Signup and login are the whole surface: no tokens, no sessions, no
//! logout. Login returns identity fields only and callers must resend
//! credentials for anything that needs them.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use glamora_core::UserId;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::services::{AccountError, AccountService};
use crate::state::AppState;

/// Request body for signup and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Response from a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Response from a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_id: UserId,
    pub email: String,
}

/// Register a new user.
///
/// POST /api/signup
///
/// # Errors
///
/// Returns 400 if the email is already registered (whether caught by the
/// pre-check or by the unique index), 500 on any other fault.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(body): AppJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    AccountService::new(state.pool())
        .signup(&body.email, &body.password)
        .await
        .map_err(|e| match e {
            AccountError::EmailTaken => {
                AppError::BadRequest("Email already registered".to_owned())
            }
            other => {
                tracing::error!(error = %other, "signup failed");
                AppError::Internal("Error creating user".to_owned())
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully!".to_owned(),
        }),
    ))
}

/// Verify credentials.
///
/// POST /api/login
///
/// An unknown email and a wrong password produce the same 401 payload.
///
/// # Errors
///
/// Returns 401 on bad credentials, 500 on any other fault.
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = AccountService::new(state.pool())
        .login(&body.email, &body.password)
        .await
        .map_err(|e| match e {
            AccountError::InvalidCredentials => {
                AppError::Unauthorized("Invalid email or password".to_owned())
            }
            other => {
                tracing::error!(error = %other, "login failed");
                AppError::Internal("Server error during login".to_owned())
            }
        })?;

    Ok(Json(LoginResponse {
        message: "Login successful!".to_owned(),
        user_id: user.id,
        email: user.email,
    }))
}
