//! Client-side counterpart of the list-query wire format: flattens
//! filter/sort/page state into the query string consumed by
//! [`super::query_extractor::QueryParamsExtractor`]. Serialization only; the
//! server-side normalizer is the single source of validation.

#[derive(Debug, Clone, Default)]
pub struct QueryStringBuilder {
    page_number: Option<u64>,
    page_limit: Option<u64>,
    filters: Vec<FilterEntry>,
    sorts: Vec<SortEntry>,
}

#[derive(Debug, Clone)]
struct FilterEntry {
    path: String,
    operator: String,
    value: String,
    insensitive: bool,
}

#[derive(Debug, Clone)]
struct SortEntry {
    field: String,
    criteria: String,
}

impl QueryStringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page_number: u64) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn limit(mut self, page_limit: u64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn filter(self, path: &str, operator: &str, value: &str) -> Self {
        self.push_filter(path, operator, value, false)
    }

    pub fn filter_insensitive(self, path: &str, operator: &str, value: &str) -> Self {
        self.push_filter(path, operator, value, true)
    }

    pub fn sort(mut self, field: &str, criteria: &str) -> Self {
        self.sorts.push(SortEntry {
            field: field.to_string(),
            criteria: criteria.to_string(),
        });
        self
    }

    fn push_filter(mut self, path: &str, operator: &str, value: &str, insensitive: bool) -> Self {
        self.filters.push(FilterEntry {
            path: path.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
            insensitive,
        });
        self
    }

    pub fn build(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();

        if let Some(page_number) = self.page_number {
            pairs.push(("page_number".to_string(), page_number.to_string()));
        }
        if let Some(page_limit) = self.page_limit {
            pairs.push(("page_limit".to_string(), page_limit.to_string()));
        }
        for (index, filter) in self.filters.iter().enumerate() {
            pairs.push((format!("filter[{index}][path]"), filter.path.clone()));
            pairs.push((format!("filter[{index}][operator]"), filter.operator.clone()));
            pairs.push((format!("filter[{index}][value]"), filter.value.clone()));
            if filter.insensitive {
                pairs.push((format!("filter[{index}][insensitive]"), "true".to_string()));
            }
        }
        for (index, sort) in self.sorts.iter().enumerate() {
            pairs.push((format!("sort[{index}][field]"), sort.field.clone()));
            pairs.push((format!("sort[{index}][criteria]"), sort.criteria.clone()));
        }

        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::application::http::query_params;

    #[test]
    fn built_query_string_parses_back_into_the_same_request() {
        let query = QueryStringBuilder::new()
            .page(1)
            .limit(10)
            .filter_insensitive("nome", "contains", "ana")
            .filter("situacao", "equals", "ATIVO")
            .sort("criado_em", "desc")
            .build();

        let map: HashMap<String, String> = serde_urlencoded::from_str(&query).unwrap();
        let raw = query_params::from_query_map(&map);

        assert_eq!(raw.page_number.as_deref(), Some("1"));
        assert_eq!(raw.page_limit.as_deref(), Some("10"));
        assert_eq!(raw.filters.len(), 2);
        assert_eq!(raw.filters[0].path, "nome");
        assert!(raw.filters[0].insensitive);
        assert_eq!(raw.filters[1].path, "situacao");
        assert!(!raw.filters[1].insensitive);
        assert_eq!(raw.sort.len(), 1);
        assert_eq!(raw.sort[0].field, "criado_em");
        assert_eq!(raw.sort[0].criteria, "desc");
    }

    #[test]
    fn values_are_percent_encoded() {
        let query = QueryStringBuilder::new()
            .filter("nome", "contains", "João & Maria")
            .build();

        assert!(!query.contains(' '));
        assert!(query.contains("filter%5B0%5D%5Bpath%5D=nome"));
    }
}
