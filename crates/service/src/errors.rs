use thiserror::Error;

/// Failures surfaced by the service layer.
///
/// `Validation`, `NotFound` and `Duplicate` display as their bare message so
/// the transport layer can hand it to the caller unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn country_not_found(code: i32) -> Self {
        Self::NotFound(format!("Country with code {code} not found"))
    }

    pub fn country_id_not_found(id: i32) -> Self {
        Self::NotFound(format!("Country with id {id} not found"))
    }

    pub fn country_duplicated(code: i32) -> Self {
        Self::Duplicate(format!("Country with code {code} duplicated"))
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(m) => Self::Validation(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
