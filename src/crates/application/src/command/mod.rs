pub mod book;
pub mod catalog;
pub mod genre;
