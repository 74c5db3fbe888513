//! Shared application state for all routes.

use crate::store::Querier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Accessor seam: `PgStore` in production, a mock in handler tests.
    pub querier: Arc<dyn Querier>,
}
