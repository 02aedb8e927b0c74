use crate::database::JsonStore;
use crate::models::User;
use crate::utils::error::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub pseudo: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Reduced user view returned on login. Never carries the password.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub pseudo: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
}

/// Creates a new account after scanning the full user collection for
/// collisions. The email check runs strictly before the pseudo check, so a
/// request colliding on both reports the duplicate email.
///
/// The check-then-append sequence is not guarded: two concurrent signups with
/// the same email can both pass the scan before either saves.
pub fn signup(store: &JsonStore, request: &SignupRequest) -> Result<MessageResponse, AppError> {
    let mut document = store.load_users()?;

    if document.users.iter().any(|u| u.email == request.email) {
        return Err(AppError::DuplicateEmail);
    }
    if document.users.iter().any(|u| u.pseudo == request.pseudo) {
        return Err(AppError::DuplicatePseudo);
    }

    let user = User {
        id: Utc::now().timestamp_millis().to_string(),
        email: request.email.clone(),
        pseudo: request.pseudo.clone(),
        password: request.password.clone(),
    };

    document.users.push(user);
    store.save_users(&document)?;

    Ok(MessageResponse {
        message: "Account created successfully".to_string(),
    })
}

/// Authenticates by exact email + password equality over the stored
/// collection. Unknown email and wrong password return the same error so the
/// response does not leak which part failed.
pub fn login(store: &JsonStore, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let document = store.load_users()?;

    let user = document
        .users
        .iter()
        .find(|u| u.email == request.email && u.password == request.password)
        .ok_or(AppError::InvalidCredentials)?;

    Ok(LoginResponse {
        message: "Login successful".to_string(),
        user: UserInfo {
            id: user.id.clone(),
            email: user.email.clone(),
            pseudo: user.pseudo.clone(),
        },
    })
}
