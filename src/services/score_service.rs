//! Cumulative per-user win/loss aggregation and the ordered
//! leaderboard/ranking queries over it.

use crate::{
    db::Store,
    models::{HighScoreEntry, RankingEntry},
};

/// Record a victory for `owner`, creating their score record on first use.
pub async fn record_win(store: &Store, owner: &str) {
    let score = store
        .update_score(owner, |score| {
            score.victories += 1;
            score.recompute();
            score.clone()
        })
        .await;
    tracing::info!(user = %owner, victories = score.victories, "Recorded win");
}

/// Record a loss for `owner`, creating their score record on first use.
pub async fn record_loss(store: &Store, owner: &str) {
    let score = store
        .update_score(owner, |score| {
            score.losses += 1;
            score.recompute();
            score.clone()
        })
        .await;
    tracing::info!(user = %owner, losses = score.losses, "Recorded loss");
}

/// Top scores by total victories, descending. Ties break on owner name
/// so repeated queries return a stable order.
pub async fn high_scores(store: &Store, limit: usize) -> Vec<HighScoreEntry> {
    let mut scores = store.all_scores().await;
    scores.sort_by(|a, b| {
        b.victories
            .cmp(&a.victories)
            .then_with(|| a.owner.cmp(&b.owner))
    });
    scores.truncate(limit);
    scores.iter().map(HighScoreEntry::from_score).collect()
}

/// Top scores by win percentage, descending, same tie-break.
pub async fn rankings(store: &Store, limit: usize) -> Vec<RankingEntry> {
    let mut scores = store.all_scores().await;
    scores.sort_by(|a, b| {
        b.win_percentage
            .total_cmp(&a.win_percentage)
            .then_with(|| a.owner.cmp(&b.owner))
    });
    scores.truncate(limit);
    scores.iter().map(RankingEntry::from_score).collect()
}
