use axum::{extract::State, Json};

use crate::{
    error::{AppError, Result},
    models::{AuthResponse, LoginRequest},
    utils::jwt,
    AppState,
};

pub async fn login_admin(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let is_valid = bcrypt::verify(&payload.password, &state.admin_password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !is_valid {
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    let token = jwt::generate_admin_token()?;

    Ok(Json(AuthResponse { token }))
}
