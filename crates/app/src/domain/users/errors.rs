//! Users service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
