use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] sea_orm::DbErr),
}

impl From<sea_orm::TransactionError<StorageError>> for StorageError {
    fn from(e: sea_orm::TransactionError<StorageError>) -> Self {
        match e {
            sea_orm::TransactionError::Connection(db_err) => StorageError::from(db_err),
            sea_orm::TransactionError::Transaction(err) => err,
        }
    }
}
