use domain::catalog::CatalogRepository;
use log::info;
use std::sync::Arc;

/// Puts the catalog back into its seed state. Used to isolate test runs.
#[derive(Clone)]
pub struct ResetCatalog {
    catalog: Arc<dyn CatalogRepository>,
}

impl ResetCatalog {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) {
        self.catalog.reset().await;
        info!("catalog reset to seed state");
    }
}
