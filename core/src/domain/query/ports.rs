use crate::domain::query::{entities::QueryRequest, errors::QueryError};

/// Narrow store interface of the list-query contract: a filtered, ordered,
/// paginated fetch plus an independent count over the same predicate. Any
/// store that can answer these two calls can back a list endpoint.
pub trait EntityStore<T>: Send + Sync {
    fn fetch(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<Vec<T>, QueryError>> + Send;

    fn count(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<u64, QueryError>> + Send;
}
