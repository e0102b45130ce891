use crate::error::AppError;
use crate::input::{id_field, parse_id, text_field, IdField, TextField};
use domain::book::{Book, BookAuthor, BookPatch, BookTitle, NewBook};
use domain::catalog::{CatalogError, CatalogRepository};
use domain::value::{BookId, GenreId};
use log::info;
use serde_json::Value;
use std::sync::Arc;

const MSG_STRINGS_ONLY: &str = "title, and author should be strings";

#[derive(Debug)]
pub struct CreateBookCmd {
    pub genre_id: GenreId,
    pub title: BookTitle,
    pub author: BookAuthor,
}

impl CreateBookCmd {
    pub fn parse(raw_genre_id: &str, body: &Value) -> Result<Self, AppError> {
        let genre_id = GenreId::from(parse_id(raw_genre_id, "genreId")?);
        let (title, author) = match (text_field(body, "title"), text_field(body, "author")) {
            (TextField::Absent, _) | (_, TextField::Absent) => {
                return Err(AppError::InvalidInput(
                    "Missing required book fields within the body (title, author).".to_string(),
                ))
            }
            (TextField::Text(title), TextField::Text(author)) => (title, author),
            _ => return Err(AppError::InvalidInput(MSG_STRINGS_ONLY.to_string())),
        };
        Ok(Self {
            genre_id,
            title: BookTitle::new(title)?,
            author: BookAuthor::new(author)?,
        })
    }
}

#[derive(Debug)]
pub struct UpdateBookCmd {
    pub genre_id: GenreId,
    pub book_id: BookId,
    pub patch: BookPatch,
    /// A body `genreId` that is not an integer. No genre can carry it, so the
    /// update fails as "genre does not exist" once the book checks pass.
    pub unknown_genre: Option<String>,
}

impl UpdateBookCmd {
    pub fn parse(raw_genre_id: &str, raw_book_id: &str, body: &Value) -> Result<Self, AppError> {
        let book_id = BookId::from(parse_id(raw_book_id, "bookId")?);
        let genre_id = GenreId::from(parse_id(raw_genre_id, "genreId")?);

        let title = text_field(body, "title");
        let author = text_field(body, "author");
        let (new_genre_id, unknown_genre) = match id_field(body, "genreId") {
            IdField::Absent => (None, None),
            IdField::Id(id) => (Some(GenreId::from(id)), None),
            IdField::NotId(raw) => (None, Some(raw)),
        };

        let patch = BookPatch {
            title: match &title {
                TextField::Text(t) => Some(BookTitle::new(t.as_str())?),
                _ => None,
            },
            author: match &author {
                TextField::Text(a) => Some(BookAuthor::new(a.as_str())?),
                _ => None,
            },
            genre_id: new_genre_id,
        };
        if patch.is_empty() && unknown_genre.is_none() {
            return Err(AppError::InvalidInput(
                "To update a book, you need to provide a title, an author, or a new genreId."
                    .to_string(),
            ));
        }
        if title == TextField::NotText || author == TextField::NotText {
            return Err(AppError::InvalidInput(MSG_STRINGS_ONLY.to_string()));
        }

        Ok(Self {
            genre_id,
            book_id,
            patch,
            unknown_genre,
        })
    }
}

#[derive(Debug)]
pub struct DeleteBookCmd {
    pub book_id: BookId,
}

impl DeleteBookCmd {
    pub fn parse(raw_book_id: &str) -> Result<Self, AppError> {
        Ok(Self {
            book_id: BookId::from(parse_id(raw_book_id, "bookId")?),
        })
    }
}

#[derive(Clone)]
pub struct BookService {
    catalog: Arc<dyn CatalogRepository>,
}

impl BookService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn create_book(&self, cmd: CreateBookCmd) -> Result<Book, AppError> {
        let new_book = NewBook {
            title: cmd.title,
            author: cmd.author,
            genre_id: cmd.genre_id,
        };
        let book = self
            .catalog
            .create_book(new_book)
            .await
            .map_err(|e| match e {
                CatalogError::GenreNotFound(_) => AppError::InvalidInput(
                    "Error when creating book, cannot create a book for a genre that does not exists"
                        .to_string(),
                ),
                other => unexpected(other),
            })?;
        info!("created book {} in genre {}", book.id, book.genre_id);
        Ok(book)
    }

    pub async fn update_book(&self, cmd: UpdateBookCmd) -> Result<Book, AppError> {
        if let Some(raw) = cmd.unknown_genre {
            // 书和原流派的检查仍然优先
            self.catalog
                .get_book(cmd.genre_id, cmd.book_id)
                .await
                .map_err(update_failure)?;
            return Err(AppError::NotFound(format!(
                "Genre with id {} does not exist.",
                raw
            )));
        }
        let book = self
            .catalog
            .update_book(cmd.genre_id, cmd.book_id, cmd.patch)
            .await
            .map_err(update_failure)?;
        info!("updated book {}", book.id);
        Ok(book)
    }

    pub async fn delete_book(&self, cmd: DeleteBookCmd) -> Result<Book, AppError> {
        let book = self
            .catalog
            .delete_book(cmd.book_id)
            .await
            .map_err(|e| match e {
                CatalogError::BookNotFound(id) => {
                    AppError::NotFound(format!("Book with id {} does not exist.", id))
                }
                other => unexpected(other),
            })?;
        info!("deleted book {}", book.id);
        Ok(book)
    }
}

fn update_failure(err: CatalogError) -> AppError {
    match err {
        CatalogError::BookNotFound(id) => {
            AppError::NotFound(format!("Book with id {} does not exist.", id))
        }
        CatalogError::BookNotInGenre { book_id, genre_id } => AppError::NotFound(format!(
            "Book with id {} does not exists in genre id {}.",
            book_id, genre_id
        )),
        CatalogError::GenreNotFound(id) => {
            AppError::NotFound(format!("Genre with id {} does not exist.", id))
        }
        other => unexpected(other),
    }
}

/// Catalog errors an operation cannot produce still need somewhere to go.
pub(crate) fn unexpected(err: CatalogError) -> AppError {
    log::warn!("unexpected catalog error: {}", err);
    AppError::InvalidInput(err.to_string())
}
