//! The catalog aggregate: both collections, both id counters and the
//! referential-integrity rules between books and genres.

use crate::book::{Book, BookPatch, NewBook};
use crate::genre::{Genre, GenreName};
use crate::value::{BookId, GenreId, IdCounter};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("book {0} not found")]
    BookNotFound(BookId),
    #[error("book {book_id} does not belong to genre {genre_id}")]
    BookNotInGenre { book_id: BookId, genre_id: GenreId },
    #[error("genre {0} not found")]
    GenreNotFound(GenreId),
    #[error("genre named {0} already exists")]
    GenreNameTaken(String),
    #[error("genre {0} is used by at least one book")]
    GenreInUse(GenreId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    genres: Vec<Genre>,
    books: Vec<Book>,
    genre_ids: IdCounter,
    book_ids: IdCounter,
}

impl Catalog {
    /// Builds a catalog from existing records. The caller is responsible for
    /// handing in a consistent snapshot (every book's genre present, counters
    /// above every used id).
    pub fn from_parts(
        genres: Vec<Genre>,
        books: Vec<Book>,
        next_genre_id: i64,
        next_book_id: i64,
    ) -> Self {
        Self {
            genres,
            books,
            genre_ids: IdCounter::starting_at(next_genre_id),
            book_ids: IdCounter::starting_at(next_book_id),
        }
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn next_genre_id(&self) -> i64 {
        self.genre_ids.peek()
    }

    pub fn next_book_id(&self) -> i64 {
        self.book_ids.peek()
    }

    pub fn genre_exists(&self, genre_id: GenreId) -> bool {
        self.genres.iter().any(|g| g.id == genre_id)
    }

    pub fn find_genre_by_name(&self, name: &str) -> Option<&Genre> {
        self.genres.iter().find(|g| g.name.matches(name))
    }

    /// Books of the genre whose name matches `name` ignoring case. An unknown
    /// name yields an empty list.
    pub fn books_in_genre_named(&self, name: &str) -> Vec<Book> {
        let Some(genre) = self.find_genre_by_name(name) else {
            return Vec::new();
        };
        self.books
            .iter()
            .filter(|b| b.belongs_to(genre.id))
            .cloned()
            .collect()
    }

    pub fn find_book(&self, book_id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    pub fn book_in_genre(&self, genre_id: GenreId, book_id: BookId) -> Result<&Book, CatalogError> {
        let book = self
            .find_book(book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;
        if !book.belongs_to(genre_id) {
            return Err(CatalogError::BookNotInGenre { book_id, genre_id });
        }
        Ok(book)
    }

    pub fn add_book(&mut self, new_book: NewBook) -> Result<Book, CatalogError> {
        if !self.genre_exists(new_book.genre_id) {
            return Err(CatalogError::GenreNotFound(new_book.genre_id));
        }
        let book = Book {
            id: BookId::from(self.book_ids.advance()),
            title: new_book.title,
            author: new_book.author,
            genre_id: new_book.genre_id,
        };
        self.books.push(book.clone());
        Ok(book)
    }

    /// Applies `patch` to the book `book_id` filed under `genre_id`. Every
    /// check runs before the first field is written.
    pub fn update_book(
        &mut self,
        genre_id: GenreId,
        book_id: BookId,
        patch: BookPatch,
    ) -> Result<Book, CatalogError> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;
        if !self.books[index].belongs_to(genre_id) {
            return Err(CatalogError::BookNotInGenre { book_id, genre_id });
        }
        if let Some(target) = patch.genre_id {
            if !self.genre_exists(target) {
                return Err(CatalogError::GenreNotFound(target));
            }
        }

        let book = &mut self.books[index];
        if let Some(target) = patch.genre_id {
            book.genre_id = target;
        }
        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        Ok(book.clone())
    }

    pub fn remove_book(&mut self, book_id: BookId) -> Result<Book, CatalogError> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;
        Ok(self.books.remove(index))
    }

    pub fn add_genre(&mut self, name: GenreName) -> Result<Genre, CatalogError> {
        if self.find_genre_by_name(name.value()).is_some() {
            return Err(CatalogError::GenreNameTaken(name.value().to_string()));
        }
        let genre = Genre::new(GenreId::from(self.genre_ids.advance()), name);
        self.genres.push(genre.clone());
        Ok(genre)
    }

    pub fn remove_genre(&mut self, genre_id: GenreId) -> Result<Genre, CatalogError> {
        let index = self
            .genres
            .iter()
            .position(|g| g.id == genre_id)
            .ok_or(CatalogError::GenreNotFound(genre_id))?;
        if self.books.iter().any(|b| b.belongs_to(genre_id)) {
            return Err(CatalogError::GenreInUse(genre_id));
        }
        Ok(self.genres.remove(index))
    }
}

// 仓储接口 - 依赖反转。实现方必须让每个操作独占整个目录。
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_books(&self, genre_name: Option<&str>) -> Vec<Book>;

    async fn find_book(&self, book_id: BookId) -> Option<Book>;

    async fn get_book(&self, genre_id: GenreId, book_id: BookId) -> Result<Book, CatalogError>;

    async fn create_book(&self, new_book: NewBook) -> Result<Book, CatalogError>;

    async fn update_book(
        &self,
        genre_id: GenreId,
        book_id: BookId,
        patch: BookPatch,
    ) -> Result<Book, CatalogError>;

    async fn delete_book(&self, book_id: BookId) -> Result<Book, CatalogError>;

    async fn list_genres(&self) -> Vec<Genre>;

    async fn create_genre(&self, name: GenreName) -> Result<Genre, CatalogError>;

    async fn delete_genre(&self, genre_id: GenreId) -> Result<Genre, CatalogError>;

    /// Restores the seed collections and counters.
    async fn reset(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{BookAuthor, BookTitle};

    fn genre(id: i64, name: &str) -> Genre {
        Genre::new(GenreId::from(id), GenreName::new(name).unwrap())
    }

    fn book(id: i64, title: &str, genre_id: i64) -> Book {
        Book {
            id: BookId::from(id),
            title: BookTitle::new(title).unwrap(),
            author: BookAuthor::new("Someone").unwrap(),
            genre_id: GenreId::from(genre_id),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_parts(
            vec![genre(1, "Fiction"), genre(2, "Non-Fiction"), genre(3, "Fantasy")],
            vec![book(1, "A", 1), book(2, "B", 1), book(3, "C", 2)],
            4,
            4,
        )
    }

    fn new_book(title: &str, genre_id: i64) -> NewBook {
        NewBook {
            title: BookTitle::new(title).unwrap(),
            author: BookAuthor::new("Author").unwrap(),
            genre_id: GenreId::from(genre_id),
        }
    }

    #[test]
    fn filter_matches_whole_name_ignoring_case() {
        let catalog = catalog();
        let ids: Vec<i64> = catalog
            .books_in_genre_named("fiction")
            .iter()
            .map(|b| b.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(catalog.books_in_genre_named("poetry").is_empty());
        assert!(catalog.books_in_genre_named("fantasy").is_empty());
    }

    #[test]
    fn book_lookup_distinguishes_missing_from_misfiled() {
        let catalog = catalog();
        assert_eq!(
            catalog.book_in_genre(GenreId::from(1), BookId::from(9)),
            Err(CatalogError::BookNotFound(BookId::from(9)))
        );
        assert_eq!(
            catalog.book_in_genre(GenreId::from(2), BookId::from(1)),
            Err(CatalogError::BookNotInGenre {
                book_id: BookId::from(1),
                genre_id: GenreId::from(2)
            })
        );
        assert!(catalog.book_in_genre(GenreId::from(1), BookId::from(1)).is_ok());
    }

    #[test]
    fn created_book_ids_keep_increasing_after_deletes() {
        let mut catalog = catalog();
        let first = catalog.add_book(new_book("D", 3)).unwrap();
        catalog.remove_book(first.id).unwrap();
        let second = catalog.add_book(new_book("E", 3)).unwrap();
        assert_eq!(first.id.as_i64(), 4);
        assert_eq!(second.id.as_i64(), 5);
        assert!(catalog.books().iter().all(|b| b.id != first.id));
    }

    #[test]
    fn book_for_unknown_genre_is_rejected_without_consuming_an_id() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.add_book(new_book("D", 42)),
            Err(CatalogError::GenreNotFound(GenreId::from(42)))
        );
        assert_eq!(catalog.next_book_id(), 4);
        assert_eq!(catalog.books().len(), 3);
    }

    #[test]
    fn update_checks_everything_before_writing() {
        let mut catalog = catalog();
        let patch = BookPatch {
            title: Some(BookTitle::new("Changed").unwrap()),
            genre_id: Some(GenreId::from(99)),
            ..Default::default()
        };
        assert_eq!(
            catalog.update_book(GenreId::from(1), BookId::from(1), patch),
            Err(CatalogError::GenreNotFound(GenreId::from(99)))
        );
        assert_eq!(catalog.books()[0].title.value(), "A");
    }

    #[test]
    fn update_moves_book_and_keeps_unpatched_fields() {
        let mut catalog = catalog();
        let patch = BookPatch {
            genre_id: Some(GenreId::from(3)),
            ..Default::default()
        };
        let updated = catalog
            .update_book(GenreId::from(1), BookId::from(2), patch)
            .unwrap();
        assert_eq!(updated.genre_id, GenreId::from(3));
        assert_eq!(updated.title.value(), "B");
        assert_eq!(updated.author.value(), "Someone");
    }

    #[test]
    fn update_in_wrong_genre_is_rejected() {
        let mut catalog = catalog();
        let patch = BookPatch {
            title: Some(BookTitle::new("X").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            catalog.update_book(GenreId::from(2), BookId::from(1), patch),
            Err(CatalogError::BookNotInGenre {
                book_id: BookId::from(1),
                genre_id: GenreId::from(2)
            })
        );
    }

    #[test]
    fn genre_names_are_unique_ignoring_case() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.add_genre(GenreName::new("FICTION").unwrap()),
            Err(CatalogError::GenreNameTaken("FICTION".to_string()))
        );
        assert_eq!(catalog.next_genre_id(), 4);
        let poetry = catalog.add_genre(GenreName::new("Poetry").unwrap()).unwrap();
        assert_eq!(poetry.id.as_i64(), 4);
    }

    #[test]
    fn genre_in_use_cannot_be_removed() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.remove_genre(GenreId::from(1)),
            Err(CatalogError::GenreInUse(GenreId::from(1)))
        );
        assert!(catalog.genre_exists(GenreId::from(1)));
    }

    #[test]
    fn every_unused_genre_can_be_removed() {
        let mut catalog = catalog();
        let unused: Vec<GenreId> = catalog
            .genres()
            .iter()
            .filter(|g| !catalog.books().iter().any(|b| b.belongs_to(g.id)))
            .map(|g| g.id)
            .collect();
        assert_eq!(unused, vec![GenreId::from(3)]);
        for id in unused {
            let removed = catalog.remove_genre(id).unwrap();
            assert_eq!(removed.id, id);
            assert!(!catalog.genre_exists(id));
        }
        assert_eq!(
            catalog.remove_genre(GenreId::from(3)),
            Err(CatalogError::GenreNotFound(GenreId::from(3)))
        );
    }
}
