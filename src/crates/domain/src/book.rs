use crate::value::{BookId, GenreId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BookError {
    #[error("validation error: {0}")]
    ValidationErr(String),
}

macro_rules! non_empty_text {
    ($name:ident, $label:expr) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, BookError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(BookError::ValidationErr(format!(
                        "{} must not be empty",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }
    };
}

non_empty_text!(BookTitle, "title");
non_empty_text!(BookAuthor, "author");

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub genre_id: GenreId,
}

impl Book {
    pub fn belongs_to(&self, genre_id: GenreId) -> bool {
        self.genre_id == genre_id
    }
}

/// A book that has not been given an id yet.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: BookTitle,
    pub author: BookAuthor,
    pub genre_id: GenreId,
}

/// Partial update. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<BookTitle>,
    pub author: Option<BookAuthor>,
    pub genre_id: Option<GenreId>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre_id.is_none()
    }
}
