/// Application constants

// Board geometry
pub const BOARD_SIZE: usize = 5;
pub const BOARD_CELLS: u8 = 25;

// Attempt limits per game
pub const MIN_ATTEMPTS: u8 = 1;
pub const MAX_ATTEMPTS: u8 = 25;
pub const DEFAULT_ATTEMPTS: u8 = 5;

// Game keys: 16 random bytes, base64 url-safe without padding
pub const GAME_KEY_BYTES: usize = 16;
pub const GAME_KEY_LEN: usize = 22;

// Leaderboard / ranking result size
pub const LEADERBOARD_LIMIT: usize = 5;

// API version
pub const API_VERSION: &str = "v1";
