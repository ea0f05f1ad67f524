pub mod config;
pub mod error;
pub mod listeners;
pub mod listing;
pub mod storage;

// Wire DTOs
pub mod academic;
pub mod models;

// Role table: menus, landing dashboards, reachable paths
pub mod role;

pub use config::*;
pub use error::*;
pub use listeners::*;
pub use listing::*;
pub use storage::{default_store, KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, THEME_KEY, USER_KEY};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;

pub use academic::*;
pub use models::*;
pub use role::*;
