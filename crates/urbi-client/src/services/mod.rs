//! REST access and the async actions built on it.

pub mod actions;
pub mod api;
mod upload;

use std::sync::OnceLock;

use urbi_core::AppConfig;

pub use api::ApiClient;

/// Process-wide configuration, built on first use.
pub fn config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = AppConfig::default();
        tracing::info!("{} using API at {}", config.app_name, config.base_url);
        config
    })
}
