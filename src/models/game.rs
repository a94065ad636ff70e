use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board;

// ==================== USER ====================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: &str, email: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            email,
            created_at: Utc::now(),
        }
    }
}

// ==================== GAME ====================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub key: String,
    pub owner: String,
    pub ship_location: u8,
    pub attempts_allowed: u8,
    pub attempts_remaining: u8,
    pub guesses: Vec<u8>,
    pub game_over: bool,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(key: String, owner: &str, ship_location: u8, attempts_allowed: u8) -> Self {
        Self {
            key,
            owner: owner.to_string(),
            ship_location,
            attempts_allowed,
            attempts_remaining: attempts_allowed,
            guesses: Vec::new(),
            game_over: false,
            created_at: Utc::now(),
        }
    }

    /// True once the ship cell appears in the guess history.
    pub fn ship_hit(&self) -> bool {
        self.guesses.contains(&self.ship_location)
    }
}

// ==================== SCORE ====================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub owner: String,
    pub victories: u32,
    pub losses: u32,
    pub win_percentage: f64,
}

impl Score {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            victories: 0,
            losses: 0,
            win_percentage: 0.0,
        }
    }

    /// Recompute the derived percentage; must run after every counter
    /// change so the stored value is never stale.
    pub fn recompute(&mut self) {
        let total = self.victories + self.losses;
        self.win_percentage = if total == 0 {
            0.0
        } else {
            f64::from(self.victories) / f64::from(total)
        };
    }
}

// ==================== REQUESTS ====================
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewGameRequest {
    pub user_name: String,
    pub attempts: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct MakeMoveRequest {
    pub guess: u8,
}

// ==================== VIEWS ====================
/// Outbound game state: the post-move and active-games shape. The ship
/// cell is revealed on the board only once the game is over.
#[derive(Debug, Serialize)]
pub struct GameView {
    pub game_key: String,
    pub user_name: String,
    pub attempts_remaining: u8,
    pub guesses: Vec<u8>,
    pub row_a: String,
    pub row_b: String,
    pub row_c: String,
    pub row_d: String,
    pub row_e: String,
    pub game_over: bool,
    pub message: String,
}

impl GameView {
    pub fn from_game(game: &Game, message: &str) -> Self {
        let [row_a, row_b, row_c, row_d, row_e] =
            board::render(&game.guesses, game.game_over, game.ship_location);
        Self {
            game_key: game.key.clone(),
            user_name: game.owner.clone(),
            attempts_remaining: game.attempts_remaining,
            guesses: game.guesses.clone(),
            row_a,
            row_b,
            row_c,
            row_d,
            row_e,
            game_over: game.game_over,
            message: message.to_string(),
        }
    }
}

/// History shape: adds the allowed-attempt count and a synthesized
/// outcome message instead of a per-move one.
#[derive(Debug, Serialize)]
pub struct HistoryGameView {
    pub attempts_allowed: u8,
    pub attempts_remaining: u8,
    pub guesses: Vec<u8>,
    pub row_a: String,
    pub row_b: String,
    pub row_c: String,
    pub row_d: String,
    pub row_e: String,
    pub game_over: bool,
    pub message: String,
}

impl HistoryGameView {
    pub fn from_game(game: &Game) -> Self {
        let message = if game.ship_hit() {
            "You Won!"
        } else if game.game_over {
            "You Lost"
        } else {
            "Game Not Finished!"
        };
        let [row_a, row_b, row_c, row_d, row_e] =
            board::render(&game.guesses, game.game_over, game.ship_location);
        Self {
            attempts_allowed: game.attempts_allowed,
            attempts_remaining: game.attempts_remaining,
            guesses: game.guesses.clone(),
            row_a,
            row_b,
            row_c,
            row_d,
            row_e,
            game_over: game.game_over,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HighScoreEntry {
    pub user_name: String,
    pub total_wins: u32,
}

impl HighScoreEntry {
    pub fn from_score(score: &Score) -> Self {
        Self {
            user_name: score.owner.clone(),
            total_wins: score.victories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankingEntry {
    pub user_name: String,
    pub win_percentage: f64,
}

impl RankingEntry {
    pub fn from_score(score: &Score) -> Self {
        Self {
            user_name: score.owner.clone(),
            win_percentage: score.win_percentage,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================== API RESPONSE ====================
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
