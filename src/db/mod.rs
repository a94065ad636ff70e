//! In-process key-value store backing the service. Lookup-by-id and
//! query-by-field only; each operation takes the lock once, so every
//! mutation is atomic per entity.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, Result},
    models::{Game, Score, User},
};

#[derive(Default)]
struct StoreInner {
    users: HashMap<String, User>,
    games: HashMap<String, Game>,
    scores: HashMap<String, Score>,
}

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

// ==================== USER QUERIES ====================
impl Store {
    pub async fn insert_user(&self, user: User) -> Result<User> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.name) {
            return Err(AppError::Conflict(
                "A user with that name already exists".to_string(),
            ));
        }
        inner.users.insert(user.name.clone(), user.clone());
        Ok(user)
    }

    pub async fn get_user(&self, name: &str) -> Option<User> {
        self.inner.read().await.users.get(name).cloned()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

// ==================== GAME QUERIES ====================
impl Store {
    pub async fn insert_game(&self, game: Game) {
        let mut inner = self.inner.write().await;
        inner.games.insert(game.key.clone(), game);
    }

    pub async fn get_game(&self, key: &str) -> Option<Game> {
        self.inner.read().await.games.get(key).cloned()
    }

    /// Read-modify-write on one game under the write lock. Returns `None`
    /// when the key is absent, otherwise the closure's result.
    pub async fn update_game<T>(&self, key: &str, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        let mut inner = self.inner.write().await;
        inner.games.get_mut(key).map(f)
    }

    pub async fn delete_game(&self, key: &str) -> bool {
        self.inner.write().await.games.remove(key).is_some()
    }

    pub async fn games_by_owner(&self, owner: &str) -> Vec<Game> {
        let inner = self.inner.read().await;
        let mut games: Vec<Game> = inner
            .games
            .values()
            .filter(|game| game.owner == owner)
            .cloned()
            .collect();
        games.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        games
    }

    pub async fn game_count(&self) -> usize {
        self.inner.read().await.games.len()
    }
}

// ==================== SCORE QUERIES ====================
impl Store {
    /// Read-modify-write on one score under the write lock, inserting a
    /// zero-counter record for the owner on first use.
    pub async fn update_score<T>(&self, owner: &str, f: impl FnOnce(&mut Score) -> T) -> T {
        let mut inner = self.inner.write().await;
        let score = inner
            .scores
            .entry(owner.to_string())
            .or_insert_with(|| Score::new(owner));
        f(score)
    }

    pub async fn get_score(&self, owner: &str) -> Option<Score> {
        self.inner.read().await.scores.get(owner).cloned()
    }

    pub async fn all_scores(&self) -> Vec<Score> {
        self.inner.read().await.scores.values().cloned().collect()
    }
}
