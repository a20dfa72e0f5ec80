use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filter operator of a single clause, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equals,
    Contains,
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    Not,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::Contains => "contains",
            FilterOperator::Gt => "gt",
            FilterOperator::Lt => "lt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lte => "lte",
            FilterOperator::In => "in",
            FilterOperator::Not => "not",
        }
    }

    /// Ordering operators compare with `<`/`>` and make no sense on booleans.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            FilterOperator::Gt | FilterOperator::Lt | FilterOperator::Gte | FilterOperator::Lte
        )
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(FilterOperator::Equals),
            "contains" => Ok(FilterOperator::Contains),
            "gt" => Ok(FilterOperator::Gt),
            "lt" => Ok(FilterOperator::Lt),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            "not" => Ok(FilterOperator::Not),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// A filter value already parsed against the declared kind of its field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
    TextList(Vec<String>),
    IntegerList(Vec<i64>),
    UuidList(Vec<Uuid>),
}

/// One predicate condition: field path, operator, typed value and the
/// case-sensitivity flag (text fields only).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub path: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
    pub insensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub field: String,
    pub direction: SortDirection,
}

/// A validated, normalized list request. Immutable once built; constructed
/// only by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub filters: Vec<FilterClause>,
    pub sort: Vec<SortClause>,
    pub page_number: u64,
    pub page_limit: u64,
}

impl QueryRequest {
    pub fn offset(&self) -> u64 {
        (self.page_number - 1) * self.page_limit
    }
}

/// One page of results plus the metadata the client needs to paginate.
/// `total_count` reflects the filter predicate only, never the page window.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_limit: u64,
}

impl<T> QueryResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: &QueryRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: request.page_number,
            page_limit: request.page_limit,
        }
    }
}

/// Untyped wire request as extracted from the query string. Nothing here is
/// trusted; the normalizer turns it into a [`QueryRequest`] or rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQueryRequest {
    pub page_number: Option<String>,
    pub page_limit: Option<String>,
    pub filters: Vec<RawFilterClause>,
    pub sort: Vec<RawSortClause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilterClause {
    pub path: String,
    pub operator: String,
    pub value: String,
    pub insensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSortClause {
    pub field: String,
    pub criteria: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page_number: u64, page_limit: u64) -> QueryRequest {
        QueryRequest {
            filters: Vec::new(),
            sort: Vec::new(),
            page_number,
            page_limit,
        }
    }

    #[test]
    fn offset_is_zero_on_first_page() {
        assert_eq!(request(1, 10).offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(request(3, 25).offset(), 50);
    }

    #[test]
    fn result_carries_request_pagination() {
        let result = QueryResult::new(vec![1, 2, 3], 42, &request(2, 3));
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.total_count, 42);
        assert_eq!(result.page_number, 2);
        assert_eq!(result.page_limit, 3);
    }

    #[test]
    fn operator_round_trips_through_wire_name() {
        for op in [
            FilterOperator::Equals,
            FilterOperator::Contains,
            FilterOperator::Gt,
            FilterOperator::Lt,
            FilterOperator::Gte,
            FilterOperator::Lte,
            FilterOperator::In,
            FilterOperator::Not,
        ] {
            assert_eq!(op.as_str().parse::<FilterOperator>(), Ok(op));
        }
    }
}
