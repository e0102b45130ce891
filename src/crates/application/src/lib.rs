pub mod auth;
pub mod command;
pub mod error;
pub mod input;
pub mod query;

#[cfg(test)]
mod testing;
