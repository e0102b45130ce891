use crate::error::AppError;
use crate::input::parse_id;
use domain::book::Book;
use domain::catalog::{CatalogError, CatalogRepository};
use domain::value::{BookId, GenreId};
use std::sync::Arc;

#[derive(Clone)]
pub struct GetBook {
    catalog: Arc<dyn CatalogRepository>,
}

impl GetBook {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Path segments that are not integers cannot name any book, so they end
    /// up as "not found" instead of a validation error.
    pub async fn handle(&self, raw_genre_id: &str, raw_book_id: &str) -> Result<Book, AppError> {
        let not_found = || AppError::NotFound(format!("Book with id {} does not exist", raw_book_id));
        let book_id = parse_id(raw_book_id, "bookId").map_err(|_| not_found())?;
        let Ok(genre_id) = parse_id(raw_genre_id, "genreId") else {
            return match self.catalog.find_book(BookId::from(book_id)).await {
                Some(_) => Err(misfiled(raw_book_id, raw_genre_id)),
                None => Err(not_found()),
            };
        };

        self.catalog
            .get_book(GenreId::from(genre_id), BookId::from(book_id))
            .await
            .map_err(|e| match e {
                CatalogError::BookNotInGenre { .. } => misfiled(raw_book_id, raw_genre_id),
                _ => not_found(),
            })
    }
}

fn misfiled(book_id: &str, genre_id: &str) -> AppError {
    AppError::Conflict(format!(
        "Book with id {} does not belong to genre with id {}.",
        book_id, genre_id
    ))
}
