pub mod books;
pub mod genres;
pub mod response;
pub mod system;

use crate::consts;
use actix_web::{web, Resource};
use log::info;

/// Methods a resource does not route answer like an unknown path.
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(system::not_found))
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    info!("http config for {}", consts::URL_PATH_API);
    svc.service(
        web::scope(consts::URL_PATH_API)
            .service(
                resource("/books")
                    .route(web::get().to(books::list_books))
                    .route(web::delete().to(system::method_not_allowed)),
            )
            .service(resource("/books/{book_id}").route(web::delete().to(books::delete_book)))
            .service(
                resource("/genres")
                    .route(web::get().to(genres::list_genres))
                    .route(web::post().to(genres::create_genre))
                    .route(web::delete().to(system::method_not_allowed)),
            )
            .service(resource("/genres/{genre_id}").route(web::delete().to(genres::delete_genre)))
            .service(resource("/genres/{genre_id}/books").route(web::post().to(books::create_book)))
            .service(
                resource("/genres/{genre_id}/books/{book_id}")
                    .route(web::get().to(books::get_book))
                    .route(web::patch().to(books::update_book)),
            )
            .service(resource("/reset").route(web::get().to(system::reset))),
    )
    .default_service(web::to(system::not_found));
}
