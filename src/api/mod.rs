// API endpoint modules
pub mod games;
pub mod health;
pub mod scores;
pub mod users;

use crate::config::Config;
use crate::db::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}
