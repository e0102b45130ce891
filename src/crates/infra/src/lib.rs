pub mod auth;
pub use auth::HmacRequestVerifier;

pub mod config;
pub use config::{AppConfigImpl, LogConfig, ServerConfig};

pub mod repository;
pub use repository::in_memory::catalog::InMemoryCatalogRepository;
