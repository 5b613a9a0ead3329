// Application state module
// Holds the configuration and the demo catalog for the process lifetime

use crate::catalog::Catalog;

use super::types::Config;

/// Application state
///
/// Everything here is immutable after startup, so concurrent request
/// handlers share it without locking.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppState {
    /// Build the process-wide state from loaded configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Catalog::demo(),
        }
    }
}
