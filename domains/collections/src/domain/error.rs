//! Collection errors

use artdealer_common::{Error, RepositoryError};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Artwork {0} is already marked as seen")]
    AlreadySeen(Uuid),

    #[error("Artwork {0} not found")]
    ArtworkNotFound(Uuid),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl From<sqlx::Error> for CollectionError {
    fn from(err: sqlx::Error) -> Self {
        CollectionError::Store(RepositoryError::from_sqlx(err))
    }
}

impl From<CollectionError> for Error {
    fn from(err: CollectionError) -> Self {
        match err {
            CollectionError::AlreadySeen(_) => Error::Conflict(err.to_string()),
            CollectionError::ArtworkNotFound(_) => Error::NotFound(err.to_string()),
            CollectionError::Store(e) => e.into(),
        }
    }
}
