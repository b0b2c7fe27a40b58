//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use feriapp_core::StoreState;

use crate::config::StorefrontConfig;
use crate::services::DescribeClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The session store sits
/// behind a `RwLock`: the demo serves one customer session, so there is no
/// finer-grained coordination to do - handlers take the lock for the length
/// of a single state transition.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<StoreState>,
    describe: DescribeClient,
}

impl AppState {
    /// Create a new application state around a seeded session store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: StoreState) -> Self {
        let describe = DescribeClient::new(config.gemini_api_key.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
                describe,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the session store lock.
    #[must_use]
    pub fn store(&self) -> &RwLock<StoreState> {
        &self.inner.store
    }

    /// Get a reference to the description-generation client.
    #[must_use]
    pub fn describe(&self) -> &DescribeClient {
        &self.inner.describe
    }
}
