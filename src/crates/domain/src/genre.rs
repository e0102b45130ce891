use crate::value::GenreId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GenreError {
    #[error("validation error: {0}")]
    ValidationErr(String),
}

// 流派名称值对象 - 非空，比较时忽略大小写
#[derive(Debug, Clone, PartialEq)]
pub struct GenreName(String);

impl GenreName {
    pub fn new(name: impl Into<String>) -> Result<Self, GenreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GenreError::ValidationErr(
                "genre name must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for filtering and for the uniqueness check.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: GenreId,
    pub name: GenreName,
}

impl Genre {
    pub fn new(id: GenreId, name: GenreName) -> Self {
        Self { id, name }
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(GenreName::new("").is_err());
    }

    #[test]
    fn names_match_ignoring_case() {
        let name = GenreName::new("Science Fiction").unwrap();
        assert!(name.matches("science fiction"));
        assert!(name.matches("SCIENCE FICTION"));
        assert!(!name.matches("science"));
    }
}
