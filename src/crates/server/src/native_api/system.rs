use super::response::MessageResponse;
use crate::error::RestfulError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::catalog::ResetCatalog;

pub async fn reset(state: web::Data<AppState>) -> Result<HttpResponse, RestfulError> {
    if !state.app_cfg.expose_reset() {
        return Err(RestfulError::RouteNotFound);
    }
    ResetCatalog::new(state.catalog.clone()).handle().await;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "State reset successful.".to_string(),
    }))
}

pub async fn method_not_allowed() -> Result<HttpResponse, RestfulError> {
    Err(RestfulError::MethodNotAllowed)
}

pub async fn not_found() -> Result<HttpResponse, RestfulError> {
    Err(RestfulError::RouteNotFound)
}
