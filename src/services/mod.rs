// All service modules
pub mod game_service;
pub mod score_service;
pub mod user_service;
