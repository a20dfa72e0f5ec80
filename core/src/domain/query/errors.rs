use thiserror::Error;

/// Failure modes of the list-query contract. Everything except `Store` and
/// `UnknownField` is a client-input error raised before any database access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown filter field `{path}`")]
    InvalidField { path: String },

    #[error("operator `{operator}` is not supported for field `{path}`")]
    UnsupportedOperator { path: String, operator: String },

    #[error("invalid value for field `{path}`: {detail}")]
    InvalidValue { path: String, detail: String },

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    /// A normalized field reached the translator without a column mapping.
    /// Cannot happen for requests that went through the normalizer.
    #[error("field `{path}` has no column mapping")]
    UnknownField { path: String },

    #[error("store query failed: {0}")]
    Store(String),
}

impl QueryError {
    /// Client-input errors surface as 400-class responses; the rest are
    /// infrastructure failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, QueryError::UnknownField { .. } | QueryError::Store(_))
    }
}
