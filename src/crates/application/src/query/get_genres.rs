use domain::catalog::CatalogRepository;
use domain::genre::Genre;
use std::sync::Arc;

#[derive(Clone)]
pub struct GetGenres {
    catalog: Arc<dyn CatalogRepository>,
}

impl GetGenres {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Vec<Genre> {
        self.catalog.list_genres().await
    }
}
