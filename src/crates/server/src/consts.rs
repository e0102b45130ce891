pub const URL_PATH_API: &str = "/api/v1";
pub const AUTHORIZATION_HEADER: &str = "Authorization";
