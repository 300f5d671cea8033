pub mod init;
pub mod storage;
pub mod web;

use config::ConfigError;
use init::InitError;
use sea_orm::{DbErr, TransactionError};
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use web::WebError;

pub type FvResult<T, E = FvError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

#[derive(Error, Debug)]
pub enum FvError {
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitError(#[from] InitError),
    #[error("{0}")]
    WebError(#[from] WebError),
}

impl From<String> for FvError {
    #[inline]
    fn from(e: String) -> Self {
        FvError::Msg(e)
    }
}

impl From<&str> for FvError {
    #[inline]
    fn from(e: &str) -> Self {
        FvError::Msg(e.to_string())
    }
}

impl From<DbErr> for FvError {
    #[inline]
    fn from(e: DbErr) -> Self {
        FvError::StorageError(StorageError::DBError(e))
    }
}

impl From<TransactionError<FvError>> for FvError {
    #[inline]
    fn from(e: TransactionError<FvError>) -> Self {
        FvError::Msg(e.to_string())
    }
}
