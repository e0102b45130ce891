use super::response::{self, BookResponse};
use crate::error::RestfulError;
use crate::extract::{json_body, query_pairs};
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use application::command::book::{BookService, CreateBookCmd, DeleteBookCmd, UpdateBookCmd};
use application::query::get_book::GetBook;
use application::query::get_books::{GetBooks, ListBooksQuery};

pub async fn list_books(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, RestfulError> {
    let pairs = query_pairs(&req);
    let query = ListBooksQuery::parse(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    let books = GetBooks::new(state.catalog.clone()).handle(query).await;
    Ok(HttpResponse::Ok().json(response::books(&books)))
}

pub async fn get_book(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, RestfulError> {
    let (genre_id, book_id) = path.into_inner();
    let book = GetBook::new(state.catalog.clone())
        .handle(&genre_id, &book_id)
        .await?;
    Ok(HttpResponse::Ok().json(BookResponse::from(&book)))
}

pub async fn create_book(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, RestfulError> {
    let cmd = CreateBookCmd::parse(&path.into_inner(), &json_body(&body))?;
    let book = BookService::new(state.catalog.clone())
        .create_book(cmd)
        .await?;
    Ok(HttpResponse::Created().json(BookResponse::from(&book)))
}

pub async fn update_book(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> Result<HttpResponse, RestfulError> {
    let (genre_id, book_id) = path.into_inner();
    let cmd = UpdateBookCmd::parse(&genre_id, &book_id, &json_body(&body))?;
    let book = BookService::new(state.catalog.clone())
        .update_book(cmd)
        .await?;
    Ok(HttpResponse::Ok().json(BookResponse::from(&book)))
}

pub async fn delete_book(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, RestfulError> {
    let cmd = DeleteBookCmd::parse(&path.into_inner())?;
    let book = BookService::new(state.catalog.clone())
        .delete_book(cmd)
        .await?;
    Ok(HttpResponse::Ok().json(BookResponse::from(&book)))
}
