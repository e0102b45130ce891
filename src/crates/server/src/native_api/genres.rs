use super::response::{self, GenreResponse};
use crate::error::RestfulError;
use crate::extract::{json_body, SignedRequest};
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::genre::{DeleteGenreCmd, GenreService};
use application::query::get_genres::GetGenres;

fn genre_service(state: &AppState) -> GenreService {
    GenreService::new(state.catalog.clone(), state.verifier.clone())
}

pub async fn list_genres(state: web::Data<AppState>) -> HttpResponse {
    let genres = GetGenres::new(state.catalog.clone()).handle().await;
    HttpResponse::Ok().json(response::genres(&genres))
}

pub async fn create_genre(
    state: web::Data<AppState>,
    signed: SignedRequest,
    body: web::Bytes,
) -> Result<HttpResponse, RestfulError> {
    let genre = genre_service(&state)
        .create_genre(&signed, &json_body(&body))
        .await?;
    Ok(HttpResponse::Created().json(GenreResponse::from(&genre)))
}

pub async fn delete_genre(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, RestfulError> {
    let cmd = DeleteGenreCmd::parse(&path.into_inner())?;
    let genre = genre_service(&state).delete_genre(cmd).await?;
    Ok(HttpResponse::Ok().json(GenreResponse::from(&genre)))
}
