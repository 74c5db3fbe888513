//! user-api: JSON-over-HTTP CRUD service for a single user entity,
//! backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_users_table, PgStore, Querier, User};
