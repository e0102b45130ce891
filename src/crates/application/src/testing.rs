//! A mutex-guarded catalog for exercising the services without the infra crate.

use async_trait::async_trait;
use domain::book::{Book, BookAuthor, BookPatch, BookTitle, NewBook};
use domain::catalog::{Catalog, CatalogError, CatalogRepository};
use domain::genre::{Genre, GenreName};
use domain::value::{BookId, GenreId};
use parking_lot::Mutex;
use std::sync::Arc;

pub(crate) struct LockedCatalog {
    inner: Mutex<Catalog>,
    seed: Catalog,
}

fn seed() -> Catalog {
    let genre = |id: i64, name: &str| Genre::new(GenreId::from(id), GenreName::new(name).unwrap());
    let book = |id: i64, title: &str| Book {
        id: BookId::from(id),
        title: BookTitle::new(title).unwrap(),
        author: BookAuthor::new("Author").unwrap(),
        genre_id: GenreId::from(1),
    };
    Catalog::from_parts(
        vec![genre(1, "Fiction"), genre(2, "Fantasy"), genre(3, "Science Fiction")],
        vec![book(1, "One"), book(2, "Two"), book(3, "Three")],
        4,
        4,
    )
}

/// Genres 1 Fiction, 2 Fantasy, 3 Science Fiction; books 1..=3 all in genre 1.
pub(crate) fn seeded_catalog() -> Arc<dyn CatalogRepository> {
    Arc::new(LockedCatalog {
        inner: Mutex::new(seed()),
        seed: seed(),
    })
}

#[async_trait]
impl CatalogRepository for LockedCatalog {
    async fn list_books(&self, genre_name: Option<&str>) -> Vec<Book> {
        let catalog = self.inner.lock();
        match genre_name {
            Some(name) => catalog.books_in_genre_named(name),
            None => catalog.books().to_vec(),
        }
    }

    async fn find_book(&self, book_id: BookId) -> Option<Book> {
        self.inner.lock().find_book(book_id).cloned()
    }

    async fn get_book(&self, genre_id: GenreId, book_id: BookId) -> Result<Book, CatalogError> {
        self.inner
            .lock()
            .book_in_genre(genre_id, book_id)
            .cloned()
    }

    async fn create_book(&self, new_book: NewBook) -> Result<Book, CatalogError> {
        self.inner.lock().add_book(new_book)
    }

    async fn update_book(
        &self,
        genre_id: GenreId,
        book_id: BookId,
        patch: BookPatch,
    ) -> Result<Book, CatalogError> {
        self.inner
            .lock()
            .update_book(genre_id, book_id, patch)
    }

    async fn delete_book(&self, book_id: BookId) -> Result<Book, CatalogError> {
        self.inner.lock().remove_book(book_id)
    }

    async fn list_genres(&self) -> Vec<Genre> {
        self.inner.lock().genres().to_vec()
    }

    async fn create_genre(&self, name: GenreName) -> Result<Genre, CatalogError> {
        self.inner.lock().add_genre(name)
    }

    async fn delete_genre(&self, genre_id: GenreId) -> Result<Genre, CatalogError> {
        self.inner.lock().remove_genre(genre_id)
    }

    async fn reset(&self) {
        *self.inner.lock() = self.seed.clone();
    }
}
