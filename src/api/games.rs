use axum::{
    extract::{Path, State},
    Json,
};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    constants::DEFAULT_ATTEMPTS,
    error::Result,
    models::{
        ApiResponse, GameView, HistoryGameView, MakeMoveRequest, MessageResponse, NewGameRequest,
    },
    services::game_service,
};

use super::AppState;

/// POST /api/v1/games
pub async fn new_game(
    State(state): State<AppState>,
    Json(req): Json<NewGameRequest>,
) -> Result<Json<ApiResponse<GameView>>> {
    let attempts = req.attempts.unwrap_or(DEFAULT_ATTEMPTS);
    // ThreadRng is !Send; a fresh StdRng keeps the handler future Send
    let mut rng = StdRng::from_os_rng();
    let view = game_service::new_game(&state.store, &req.user_name, attempts, &mut rng).await?;
    Ok(Json(ApiResponse::success(view)))
}

/// PUT /api/v1/games/{game_key}
pub async fn make_move(
    State(state): State<AppState>,
    Path(game_key): Path<String>,
    Json(req): Json<MakeMoveRequest>,
) -> Result<Json<ApiResponse<GameView>>> {
    let view = game_service::make_move(&state.store, &game_key, req.guess).await?;
    Ok(Json(ApiResponse::success(view)))
}

/// DELETE /api/v1/games/{game_key}
pub async fn cancel_game(
    State(state): State<AppState>,
    Path(game_key): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>> {
    game_service::cancel_game(&state.store, &game_key).await?;
    Ok(Json(ApiResponse::success(MessageResponse {
        message: "Game deleted!".to_string(),
    })))
}

/// GET /api/v1/users/{user_name}/games
pub async fn get_user_games(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<ApiResponse<Vec<GameView>>>> {
    let views = game_service::active_games(&state.store, &user_name).await?;
    Ok(Json(ApiResponse::success(views)))
}

/// GET /api/v1/users/{user_name}/history
pub async fn get_game_history(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<ApiResponse<Vec<HistoryGameView>>>> {
    let views = game_service::game_history(&state.store, &user_name).await?;
    Ok(Json(ApiResponse::success(views)))
}
