use crate::error::AppError;
use domain::book::Book;
use domain::catalog::CatalogRepository;
use std::sync::Arc;

const FILTER_PARAM: &str = "filter";

#[derive(Debug, Default, PartialEq)]
pub struct ListBooksQuery {
    pub genre_name: Option<String>,
}

impl ListBooksQuery {
    /// Only `filter` is understood; any other key rejects the whole query.
    /// An empty filter is the same as no filter.
    pub fn parse<'a, I>(params: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut genre_name = None;
        for (key, value) in params {
            if key != FILTER_PARAM {
                return Err(AppError::InvalidInput(
                    "Invalid query parameter. Only \"filter\" is allowed.".to_string(),
                ));
            }
            genre_name = (!value.is_empty()).then(|| value.to_string());
        }
        Ok(Self { genre_name })
    }
}

#[derive(Clone)]
pub struct GetBooks {
    catalog: Arc<dyn CatalogRepository>,
}

impl GetBooks {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListBooksQuery) -> Vec<Book> {
        self.catalog.list_books(query.genre_name.as_deref()).await
    }
}
