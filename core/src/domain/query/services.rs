use crate::domain::query::{
    entities::{QueryRequest, QueryResult},
    errors::QueryError,
    ports::EntityStore,
};

/// Runs the filtered fetch and the filtered count and wraps both into a
/// [`QueryResult`]. The two statements are issued separately; the count is
/// not transactionally consistent with the page under concurrent writes,
/// which the contract accepts.
pub async fn fetch_paged<T, S>(
    store: &S,
    request: &QueryRequest,
) -> Result<QueryResult<T>, QueryError>
where
    S: EntityStore<T>,
{
    let items = store.fetch(request).await?;
    let total_count = store.count(request).await?;

    Ok(QueryResult::new(items, total_count, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store over a fixed row set; pagination math only, no filtering.
    struct FixedStore {
        rows: Vec<u64>,
    }

    impl EntityStore<u64> for FixedStore {
        async fn fetch(&self, request: &QueryRequest) -> Result<Vec<u64>, QueryError> {
            let offset = request.offset() as usize;
            Ok(self
                .rows
                .iter()
                .skip(offset)
                .take(request.page_limit as usize)
                .copied()
                .collect())
        }

        async fn count(&self, _request: &QueryRequest) -> Result<u64, QueryError> {
            Ok(self.rows.len() as u64)
        }
    }

    struct FailingStore;

    impl EntityStore<u64> for FailingStore {
        async fn fetch(&self, _request: &QueryRequest) -> Result<Vec<u64>, QueryError> {
            Err(QueryError::Store("connection reset".to_string()))
        }

        async fn count(&self, _request: &QueryRequest) -> Result<u64, QueryError> {
            Ok(0)
        }
    }

    fn request(page_number: u64, page_limit: u64) -> QueryRequest {
        QueryRequest {
            filters: Vec::new(),
            sort: Vec::new(),
            page_number,
            page_limit,
        }
    }

    #[tokio::test]
    async fn page_length_follows_the_contract() {
        let store = FixedStore {
            rows: (0..23).collect(),
        };

        // items.len() == max(0, min(L, total - (P-1)*L)) for every page
        for (page, expected) in [(1u64, 10usize), (2, 10), (3, 3), (4, 0)] {
            let result = fetch_paged(&store, &request(page, 10)).await.unwrap();
            assert_eq!(result.items.len(), expected, "page {page}");
            assert_eq!(result.total_count, 23);
        }
    }

    #[tokio::test]
    async fn pages_partition_the_result_set() {
        let store = FixedStore {
            rows: (0..23).collect(),
        };

        let mut seen = Vec::new();
        for page in 1..=3 {
            let result = fetch_paged(&store, &request(page, 10)).await.unwrap();
            seen.extend(result.items);
        }
        assert_eq!(seen, (0..23).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn total_count_ignores_the_page_window() {
        let store = FixedStore {
            rows: (0..50).collect(),
        };
        let result = fetch_paged(&store, &request(1, 5)).await.unwrap();
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.total_count, 50);
    }

    #[tokio::test]
    async fn store_failures_propagate_unchanged() {
        let result = fetch_paged(&FailingStore, &request(1, 10)).await;
        assert_eq!(result.unwrap_err(), QueryError::Store("connection reset".to_string()));
    }
}
