use crate::consts;
use actix_web::{web, FromRequest, HttpRequest};
use application::auth::RequestCredential;
use log::debug;
use serde_json::Value;
use std::future::{ready, Ready};
use std::ops::Deref;

/// Method, path and `Authorization` header of the request, handed to the
/// credential verifier.
#[derive(Debug, Clone)]
pub struct SignedRequest(pub RequestCredential);

impl Deref for SignedRequest {
    type Target = RequestCredential;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for SignedRequest {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let authorization = req
            .headers()
            .get(consts::AUTHORIZATION_HEADER)
            .and_then(|v| v.to_str().ok());
        ready(Ok(SignedRequest(RequestCredential::new(
            req.method().as_str(),
            req.path(),
            authorization,
        ))))
    }
}

/// Parses a request body as JSON. An empty or malformed body becomes `null`,
/// which has no fields and so fails the usual field checks.
pub fn json_body(body: &web::Bytes) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!("ignoring unparsable request body: {}", e);
        Value::Null
    })
}

/// Decoded `key=value` pairs of the query string, in order.
pub fn query_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
