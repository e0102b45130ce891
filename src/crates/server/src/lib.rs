pub mod consts;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod native_api;

use application::auth::RequestVerifier;
use domain::catalog::CatalogRepository;
use infra::{AppConfigImpl, HmacRequestVerifier, InMemoryCatalogRepository};
use log::info;
use std::sync::Arc;

pub use native_api::configure_service;

pub struct AppState {
    pub app_cfg: AppConfigImpl,
    pub catalog: Arc<dyn CatalogRepository>,
    pub verifier: Arc<dyn RequestVerifier>,
}

impl AppState {
    pub fn new(app_cfg: AppConfigImpl) -> Self {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalogRepository::new());
        let verifier: Arc<dyn RequestVerifier> =
            Arc::new(HmacRequestVerifier::new(app_cfg.hmac_secret()));
        info!(
            "catalog seeded, reset endpoint {}",
            if app_cfg.expose_reset() { "enabled" } else { "disabled" }
        );
        Self {
            app_cfg,
            catalog,
            verifier,
        }
    }
}
