use domain::book::Book;
use domain::genre::Genre;
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre_id: i64,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.as_i64(),
            title: book.title.value().to_string(),
            author: book.author.value().to_string(),
            genre_id: book.genre_id.as_i64(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Genre> for GenreResponse {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id.as_i64(),
            name: genre.name().to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub fn books(books: &[Book]) -> Vec<BookResponse> {
    books.iter().map(BookResponse::from).collect()
}

pub fn genres(genres: &[Genre]) -> Vec<GenreResponse> {
    genres.iter().map(GenreResponse::from).collect()
}
