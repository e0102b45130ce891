use crate::error::AppError;

/// What a verifier gets to see of an incoming request.
#[derive(Debug, Clone)]
pub struct RequestCredential {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

impl RequestCredential {
    pub fn new(method: &str, path: &str, authorization: Option<&str>) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            authorization: authorization.map(|s| s.to_string()),
        }
    }
}

/// Decides whether a request may perform a protected operation.
///
/// Implementations return `AppError::Unauthenticated` when no credential was
/// presented and `AppError::Unauthorized` when it was presented but is wrong.
pub trait RequestVerifier: Send + Sync {
    fn verify(&self, credential: &RequestCredential) -> Result<(), AppError>;
}
