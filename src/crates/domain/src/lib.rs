pub mod book;
pub mod catalog;
pub mod genre;
pub mod value;
