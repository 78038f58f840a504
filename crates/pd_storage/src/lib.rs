use std::sync::Arc;
use pd_core::{Config, ContentStore, Result};

pub mod backends;

pub use backends::*;

/// Builds the store that talks to the configured save-content API.
pub fn create_store(config: &Config) -> Result<Arc<dyn ContentStore>> {
    Ok(Arc::new(HttpContentStore::new(&config.save_content)?))
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_store;
}
