use axum::{extract::State, Json};

use crate::{
    constants::LEADERBOARD_LIMIT,
    error::Result,
    models::{ApiResponse, HighScoreEntry, RankingEntry},
    services::score_service,
};

use super::AppState;

/// GET /api/v1/leaderboard — most wins first.
pub async fn get_high_scores(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HighScoreEntry>>>> {
    let entries = score_service::high_scores(&state.store, LEADERBOARD_LIMIT).await;
    Ok(Json(ApiResponse::success(entries)))
}

/// GET /api/v1/rankings — best win percentage first.
pub async fn get_user_rankings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RankingEntry>>>> {
    let entries = score_service::rankings(&state.store, LEADERBOARD_LIMIT).await;
    Ok(Json(ApiResponse::success(entries)))
}
