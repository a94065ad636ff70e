use axum::{extract::State, Json};

use crate::{
    error::Result,
    models::{ApiResponse, CreateUserRequest, MessageResponse},
    services::user_service,
};

use super::AppState;

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>> {
    let user = user_service::register(&state.store, &req.user_name, req.email).await?;

    Ok(Json(ApiResponse::success(MessageResponse {
        message: format!("User {} created!", user.name),
    })))
}
