use crate::domain::errors::DomainError;

const CNT_DOCUMENT_DATA_OBJECT: &str = "documents_data_is_object_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_DOCUMENT_DATA_OBJECT) {
                return DomainError::Validation("document data must be a JSON object".into());
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
