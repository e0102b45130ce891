use domain::book::{Book, BookAuthor, BookTitle};
use domain::catalog::Catalog;
use domain::genre::{Genre, GenreName};
use domain::value::{BookId, GenreId};

const GENRES: [(i64, &str); 4] = [
    (1, "Fiction"),
    (2, "Non-Fiction"),
    (3, "Science Fiction"),
    (4, "Fantasy"),
];

const BOOKS: [(i64, &str, &str, i64); 3] = [
    (1, "Pride and Prejudice", "Jane Austin", 1),
    (2, "Independent People", "Halldór Laxnes", 1),
    (3, "Brief Answers to the Big Questions", "Stephen Hawking", 2),
];

const NEXT_GENRE_ID: i64 = 5;
const NEXT_BOOK_ID: i64 = 4;

/// The fixed data set the catalog starts from and returns to on reset.
pub fn seed_catalog() -> Catalog {
    let genres = GENRES
        .iter()
        .filter_map(|(id, name)| {
            GenreName::new(*name)
                .ok()
                .map(|name| Genre::new(GenreId::from(*id), name))
        })
        .collect();
    let books = BOOKS
        .iter()
        .filter_map(|(id, title, author, genre_id)| {
            Some(Book {
                id: BookId::from(*id),
                title: BookTitle::new(*title).ok()?,
                author: BookAuthor::new(*author).ok()?,
                genre_id: GenreId::from(*genre_id),
            })
        })
        .collect();
    Catalog::from_parts(genres, books, NEXT_GENRE_ID, NEXT_BOOK_ID)
}
