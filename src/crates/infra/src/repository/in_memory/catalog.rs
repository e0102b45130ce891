use super::seed::seed_catalog;
use async_trait::async_trait;
use domain::book::{Book, BookPatch, NewBook};
use domain::catalog::{Catalog, CatalogError, CatalogRepository};
use domain::genre::{Genre, GenreName};
use domain::value::{BookId, GenreId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Both collections and both counters sit behind one lock, so every
/// operation sees and leaves a consistent catalog.
#[derive(Clone)]
pub struct InMemoryCatalogRepository {
    catalog: Arc<Mutex<Catalog>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Catalog {
        self.catalog.lock().clone()
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_books(&self, genre_name: Option<&str>) -> Vec<Book> {
        let catalog = self.catalog.lock();
        match genre_name {
            Some(name) => catalog.books_in_genre_named(name),
            None => catalog.books().to_vec(),
        }
    }

    async fn find_book(&self, book_id: BookId) -> Option<Book> {
        self.catalog.lock().find_book(book_id).cloned()
    }

    async fn get_book(&self, genre_id: GenreId, book_id: BookId) -> Result<Book, CatalogError> {
        self.catalog
            .lock()
            .book_in_genre(genre_id, book_id)
            .cloned()
    }

    async fn create_book(&self, new_book: NewBook) -> Result<Book, CatalogError> {
        self.catalog.lock().add_book(new_book)
    }

    async fn update_book(
        &self,
        genre_id: GenreId,
        book_id: BookId,
        patch: BookPatch,
    ) -> Result<Book, CatalogError> {
        self.catalog.lock().update_book(genre_id, book_id, patch)
    }

    async fn delete_book(&self, book_id: BookId) -> Result<Book, CatalogError> {
        self.catalog.lock().remove_book(book_id)
    }

    async fn list_genres(&self) -> Vec<Genre> {
        self.catalog.lock().genres().to_vec()
    }

    async fn create_genre(&self, name: GenreName) -> Result<Genre, CatalogError> {
        self.catalog.lock().add_genre(name)
    }

    async fn delete_genre(&self, genre_id: GenreId) -> Result<Genre, CatalogError> {
        self.catalog.lock().remove_genre(genre_id)
    }

    async fn reset(&self) {
        *self.catalog.lock() = seed_catalog();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::book::{BookAuthor, BookTitle};

    fn new_book(genre_id: i64) -> NewBook {
        NewBook {
            title: BookTitle::new("Dune").unwrap(),
            author: BookAuthor::new("Frank Herbert").unwrap(),
            genre_id: GenreId::from(genre_id),
        }
    }

    #[tokio::test]
    async fn reset_is_idempotent() {
        let repo = InMemoryCatalogRepository::new();
        repo.create_book(new_book(3)).await.unwrap();
        repo.create_genre(GenreName::new("Poetry").unwrap())
            .await
            .unwrap();
        repo.delete_book(BookId::from(3)).await.unwrap();

        repo.reset().await;
        let first = repo.snapshot();
        repo.reset().await;
        let second = repo.snapshot();

        assert_eq!(first, second);
        assert_eq!(first, seed_catalog());
        assert_eq!(second.next_book_id(), 4);
        assert_eq!(second.next_genre_id(), 5);
    }

    #[tokio::test]
    async fn book_ids_grow_across_creates() {
        let repo = InMemoryCatalogRepository::new();
        let mut last = repo
            .list_books(None)
            .await
            .iter()
            .map(|b| b.id.as_i64())
            .max()
            .unwrap();
        for genre_id in [1, 2, 3, 4, 1] {
            let book = repo.create_book(new_book(genre_id)).await.unwrap();
            assert!(book.id.as_i64() > last);
            last = book.id.as_i64();
        }
    }

    #[tokio::test]
    async fn filter_on_seed_returns_fiction_books() {
        let repo = InMemoryCatalogRepository::new();
        let ids: Vec<i64> = repo
            .list_books(Some("fiction"))
            .await
            .iter()
            .map(|b| b.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemoryCatalogRepository::new();
        let other = repo.clone();
        other.delete_genre(GenreId::from(4)).await.unwrap();
        assert_eq!(repo.list_genres().await.len(), 3);
    }
}
