use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::models::{sample_users, User};

/// Number of users seeded into a fresh [`AppState`].
pub const SEED_USERS: u32 = 25;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// In-memory user list backing the demo routes.
    pub users: Arc<RwLock<Vec<User>>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_users(config, sample_users(SEED_USERS))
    }

    pub fn with_users(config: ServerConfig, users: Vec<User>) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(RwLock::new(users)),
        }
    }
}
