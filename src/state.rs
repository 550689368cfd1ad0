use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::store::MarketStore;

/// Shared handle for the HTTP layer. The store itself is synchronous;
/// handlers take the mutex for the duration of one operation.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<Mutex<MarketStore>>,
}
