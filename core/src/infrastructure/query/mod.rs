pub mod translator;

use sea_orm::DbErr;

use crate::domain::query::errors::QueryError;

/// Database failures propagate unchanged as `Store`; logged here once.
pub fn store_error(e: DbErr) -> QueryError {
    tracing::error!("Store query failed: {}", e);
    QueryError::Store(e.to_string())
}
