use crate::auth::{RequestCredential, RequestVerifier};
use crate::command::book::unexpected;
use crate::error::AppError;
use crate::input::{parse_id, text_field, TextField};
use domain::catalog::{CatalogError, CatalogRepository};
use domain::genre::{Genre, GenreName};
use domain::value::GenreId;
use log::{info, warn};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug)]
pub struct CreateGenreCmd {
    pub name: GenreName,
}

impl CreateGenreCmd {
    pub fn parse(body: &Value) -> Result<Self, AppError> {
        match text_field(body, "name") {
            TextField::Absent => Err(AppError::InvalidInput(
                "Genre creation requires a name.".to_string(),
            )),
            TextField::NotText => Err(AppError::InvalidInput(
                "name should be a string".to_string(),
            )),
            TextField::Text(name) => Ok(Self {
                name: GenreName::new(name)?,
            }),
        }
    }
}

#[derive(Debug)]
pub struct DeleteGenreCmd {
    pub genre_id: GenreId,
}

impl DeleteGenreCmd {
    pub fn parse(raw_genre_id: &str) -> Result<Self, AppError> {
        Ok(Self {
            genre_id: GenreId::from(parse_id(raw_genre_id, "genreId")?),
        })
    }
}

#[derive(Clone)]
pub struct GenreService {
    catalog: Arc<dyn CatalogRepository>,
    verifier: Arc<dyn RequestVerifier>,
}

impl GenreService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, verifier: Arc<dyn RequestVerifier>) -> Self {
        Self { catalog, verifier }
    }

    /// Verifies the credential first; the body is only looked at once the
    /// caller is known to be allowed in.
    pub async fn create_genre(
        &self,
        credential: &RequestCredential,
        body: &Value,
    ) -> Result<Genre, AppError> {
        if let Err(e) = self.verifier.verify(credential) {
            warn!(
                "rejected {} {}: {}",
                credential.method, credential.path, e
            );
            return Err(e);
        }
        let cmd = CreateGenreCmd::parse(body)?;
        let genre = self
            .catalog
            .create_genre(cmd.name)
            .await
            .map_err(|e| match e {
                CatalogError::GenreNameTaken(name) => {
                    AppError::AlreadyExists(format!("A genre with name {} already exists.", name))
                }
                other => unexpected(other),
            })?;
        info!("created genre {} ({})", genre.id, genre.name());
        Ok(genre)
    }

    pub async fn delete_genre(&self, cmd: DeleteGenreCmd) -> Result<Genre, AppError> {
        let genre = self
            .catalog
            .delete_genre(cmd.genre_id)
            .await
            .map_err(|e| match e {
                CatalogError::GenreNotFound(id) => {
                    AppError::NotFound(format!("Genre with id {} does not exist.", id))
                }
                CatalogError::GenreInUse(_) => AppError::FailedPrecondition(
                    "Cannot delete genre, as it is used by at least one book.".to_string(),
                ),
                other => unexpected(other),
            })?;
        info!("deleted genre {}", genre.id);
        Ok(genre)
    }
}
