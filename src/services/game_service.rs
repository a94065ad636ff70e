//! Game lifecycle: creation, guess application, win/loss resolution,
//! cancellation, and the per-user game listings.

use rand::Rng;

use crate::{
    db::Store,
    error::{AppError, Result},
    models::{Game, GameView, HistoryGameView},
    services::{score_service, user_service},
    utils,
};

use crate::constants::{BOARD_CELLS, MAX_ATTEMPTS, MIN_ATTEMPTS};

/// What a single applied guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveOutcome {
    AlreadyOver,
    Win,
    Loss,
    Miss,
}

/// Start a new game for `user_name` with a hidden ship drawn from the
/// supplied generator.
pub async fn new_game<R: Rng>(
    store: &Store,
    user_name: &str,
    attempts: u8,
    rng: &mut R,
) -> Result<GameView> {
    let user = user_service::find_by_name(store, user_name).await?;

    if !(MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&attempts) {
        return Err(AppError::InvalidArgument(format!(
            "Attempts must be between {} and {}",
            MIN_ATTEMPTS, MAX_ATTEMPTS
        )));
    }

    let ship_location = rng.random_range(1..=BOARD_CELLS);
    let game = Game::new(utils::new_game_key(), &user.name, ship_location, attempts);
    store.insert_game(game.clone()).await;

    tracing::info!(user = %user.name, game_key = %game.key, attempts, "Game created");
    Ok(GameView::from_game(&game, "Good luck playing Battleship!"))
}

/// Apply one guess against `game_key` and report the resulting state.
/// A guess against a finished game is answered, not rejected.
pub async fn make_move(store: &Store, game_key: &str, guess: u8) -> Result<GameView> {
    utils::validate_game_key(game_key)?;

    let applied = store
        .update_game(game_key, |game| {
            let outcome = apply_guess(game, guess)?;
            Ok::<_, AppError>((outcome, game.clone()))
        })
        .await
        .ok_or_else(|| AppError::NotFound("Game does not exist".to_string()))?;
    let (outcome, game) = applied?;

    let message = match outcome {
        MoveOutcome::AlreadyOver => "Game already over!",
        MoveOutcome::Win => {
            score_service::record_win(store, &game.owner).await;
            "You win!"
        }
        MoveOutcome::Loss => {
            score_service::record_loss(store, &game.owner).await;
            "Game over!"
        }
        MoveOutcome::Miss => "You Missed!",
    };

    Ok(GameView::from_game(&game, message))
}

/// The guessing rules. Terminal games are left untouched; invalid and
/// duplicate guesses reject before any mutation. The win check runs
/// before the exhausted-attempts check, so hitting the ship on the last
/// attempt is a win.
fn apply_guess(game: &mut Game, guess: u8) -> Result<MoveOutcome> {
    if game.game_over {
        return Ok(MoveOutcome::AlreadyOver);
    }
    if !(1..=BOARD_CELLS).contains(&guess) {
        return Err(AppError::InvalidArgument(
            "Invalid move, outside grid boundaries".to_string(),
        ));
    }
    if game.guesses.contains(&guess) {
        return Err(AppError::DuplicateGuess);
    }

    game.guesses.push(guess);
    game.attempts_remaining -= 1;

    if guess == game.ship_location {
        game.game_over = true;
        return Ok(MoveOutcome::Win);
    }
    if game.attempts_remaining == 0 {
        game.game_over = true;
        return Ok(MoveOutcome::Loss);
    }
    Ok(MoveOutcome::Miss)
}

/// Delete a game in progress. Finished games stay on record.
pub async fn cancel_game(store: &Store, game_key: &str) -> Result<()> {
    utils::validate_game_key(game_key)?;

    let game = store
        .get_game(game_key)
        .await
        .ok_or_else(|| AppError::NotFound("Game does not exist".to_string()))?;
    if game.game_over {
        return Err(AppError::AlreadyOver);
    }

    store.delete_game(game_key).await;
    tracing::info!(user = %game.owner, game_key, "Game cancelled");
    Ok(())
}

/// All of a user's open games. A user with no open games gets an empty
/// list, not an error.
pub async fn active_games(store: &Store, user_name: &str) -> Result<Vec<GameView>> {
    let user = user_service::find_by_name(store, user_name).await?;

    let games = store.games_by_owner(&user.name).await;
    Ok(games
        .iter()
        .filter(|game| !game.game_over)
        .map(|game| GameView::from_game(game, "Time to make a move"))
        .collect())
}

/// Every game the user has played, finished or not.
pub async fn game_history(store: &Store, user_name: &str) -> Result<Vec<HistoryGameView>> {
    let user = user_service::find_by_name(store, user_name).await?;

    let games = store.games_by_owner(&user.name).await;
    Ok(games.iter().map(HistoryGameView::from_game).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    async fn store_with_user(name: &str) -> Store {
        let store = Store::new();
        user_service::register(&store, name, None)
            .await
            .expect("register");
        store
    }

    /// Insert a game with a known ship cell so tests are deterministic.
    async fn seeded_game(store: &Store, owner: &str, ship: u8, attempts: u8) -> String {
        let game = Game::new(utils::new_game_key(), owner, ship, attempts);
        let key = game.key.clone();
        store.insert_game(game).await;
        key
    }

    #[tokio::test]
    async fn new_game_holds_creation_invariants_across_attempt_range() {
        let store = store_with_user("alice").await;
        let mut rng = StdRng::seed_from_u64(7);

        for attempts in 1..=25u8 {
            let view = new_game(&store, "alice", attempts, &mut rng)
                .await
                .expect("create");
            assert_eq!(view.attempts_remaining, attempts);
            assert!(view.guesses.is_empty());
            assert!(!view.game_over);

            let game = store.get_game(&view.game_key).await.unwrap();
            assert!((1..=25).contains(&game.ship_location));
            assert_eq!(game.attempts_allowed, attempts);
        }
    }

    #[tokio::test]
    async fn new_game_rejects_out_of_range_attempts() {
        let store = store_with_user("alice").await;
        let mut rng = StdRng::seed_from_u64(7);

        for attempts in [0u8, 26, 200] {
            let err = new_game(&store, "alice", attempts, &mut rng)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument(_)));
        }
    }

    #[tokio::test]
    async fn new_game_requires_existing_user() {
        let store = Store::new();
        let mut rng = StdRng::seed_from_u64(7);
        let err = new_game(&store, "ghost", 5, &mut rng).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn hitting_the_ship_wins_and_scores() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 3).await;

        let miss = make_move(&store, &key, 1).await.expect("miss");
        assert_eq!(miss.message, "You Missed!");
        assert!(!miss.game_over);
        assert_eq!(miss.attempts_remaining, 2);

        let win = make_move(&store, &key, 13).await.expect("win");
        assert_eq!(win.message, "You win!");
        assert!(win.game_over);

        let score = store.get_score("alice").await.unwrap();
        assert_eq!(score.victories, 1);
        assert_eq!(score.losses, 0);
    }

    #[tokio::test]
    async fn ship_hit_on_last_attempt_is_a_win_not_a_loss() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 2).await;

        make_move(&store, &key, 1).await.expect("miss");
        let view = make_move(&store, &key, 13).await.expect("last-attempt hit");
        assert_eq!(view.message, "You win!");
        assert_eq!(view.attempts_remaining, 0);

        let score = store.get_score("alice").await.unwrap();
        assert_eq!(score.victories, 1);
        assert_eq!(score.losses, 0);
    }

    #[tokio::test]
    async fn exhausting_attempts_loses_and_scores() {
        let store = store_with_user("bob").await;
        let key = seeded_game(&store, "bob", 13, 1).await;

        let view = make_move(&store, &key, 1).await.expect("final miss");
        assert_eq!(view.message, "Game over!");
        assert!(view.game_over);
        assert_eq!(view.attempts_remaining, 0);

        let score = store.get_score("bob").await.unwrap();
        assert_eq!(score.losses, 1);
        assert_eq!(score.victories, 0);
    }

    #[tokio::test]
    async fn duplicate_guess_rejects_without_mutation() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 5).await;

        make_move(&store, &key, 7).await.expect("first guess");
        let err = make_move(&store, &key, 7).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateGuess));

        let game = store.get_game(&key).await.unwrap();
        assert_eq!(game.guesses, vec![7]);
        assert_eq!(game.attempts_remaining, 4);
    }

    #[tokio::test]
    async fn out_of_range_guess_rejects_without_mutation() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 5).await;

        for guess in [0u8, 26, 255] {
            let err = make_move(&store, &key, guess).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument(_)));
        }

        let game = store.get_game(&key).await.unwrap();
        assert!(game.guesses.is_empty());
        assert_eq!(game.attempts_remaining, 5);
    }

    #[tokio::test]
    async fn finished_game_answers_already_over_without_rescoring() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 3).await;
        make_move(&store, &key, 13).await.expect("win");

        let view = make_move(&store, &key, 2).await.expect("already over");
        assert_eq!(view.message, "Game already over!");
        assert!(view.game_over);

        // neither the game nor the score moved
        let game = store.get_game(&key).await.unwrap();
        assert_eq!(game.guesses, vec![13]);
        assert_eq!(game.attempts_remaining, 2);
        let score = store.get_score("alice").await.unwrap();
        assert_eq!(score.victories, 1);
        assert_eq!(score.losses, 0);
    }

    #[tokio::test]
    async fn guess_count_matches_attempts_spent() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 25, 10).await;

        for guess in 1..=4u8 {
            make_move(&store, &key, guess).await.expect("miss");
        }

        let game = store.get_game(&key).await.unwrap();
        assert_eq!(game.guesses.len(), 4);
        assert_eq!(
            game.guesses.len() as u8,
            game.attempts_allowed - game.attempts_remaining
        );
        let mut unique = game.guesses.clone();
        unique.dedup();
        assert_eq!(unique.len(), game.guesses.len());
    }

    #[tokio::test]
    async fn make_move_rejects_malformed_and_missing_keys() {
        let store = store_with_user("alice").await;

        let err = make_move(&store, "not-a-real-key", 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = make_move(&store, &utils::new_game_key(), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn cancel_removes_open_games_only() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 3).await;

        cancel_game(&store, &key).await.expect("cancel open game");
        assert!(store.get_game(&key).await.is_none());

        let err = cancel_game(&store, &key).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn cancel_rejects_finished_games() {
        let store = store_with_user("alice").await;
        let key = seeded_game(&store, "alice", 13, 3).await;
        make_move(&store, &key, 13).await.expect("win");

        let err = cancel_game(&store, &key).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyOver));
        assert!(store.get_game(&key).await.is_some());
    }

    #[tokio::test]
    async fn active_games_lists_open_games_and_allows_empty() {
        let store = store_with_user("alice").await;

        // no games yet: success, empty list
        assert!(active_games(&store, "alice").await.expect("empty").is_empty());

        let open_key = seeded_game(&store, "alice", 13, 3).await;
        let finished_key = seeded_game(&store, "alice", 20, 3).await;
        make_move(&store, &finished_key, 20).await.expect("win");

        let views = active_games(&store, "alice").await.expect("list");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].game_key, open_key);
        assert_eq!(views[0].message, "Time to make a move");
    }

    #[tokio::test]
    async fn listings_require_existing_user() {
        let store = Store::new();
        assert!(matches!(
            active_games(&store, "ghost").await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            game_history(&store, "ghost").await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn history_includes_finished_games_with_outcomes() {
        let store = store_with_user("alice").await;

        let won = seeded_game(&store, "alice", 5, 3).await;
        make_move(&store, &won, 5).await.expect("win");

        let lost = seeded_game(&store, "alice", 5, 1).await;
        make_move(&store, &lost, 1).await.expect("loss");

        seeded_game(&store, "alice", 5, 3).await;

        let views = game_history(&store, "alice").await.expect("history");
        assert_eq!(views.len(), 3);
        let messages: Vec<&str> = views.iter().map(|v| v.message.as_str()).collect();
        assert!(messages.contains(&"You Won!"));
        assert!(messages.contains(&"You Lost"));
        assert!(messages.contains(&"Game Not Finished!"));
    }
}
