//! Parses the bracketed list-query wire format into a raw request:
//!
//! ```text
//! page_number=1&page_limit=10
//! &filter[0][path]=nome&filter[0][operator]=contains&filter[0][value]=ana&filter[0][insensitive]=true
//! &sort[0][field]=criado_em&sort[0][criteria]=desc
//! ```
//!
//! Parsing is lenient: entries without a `path`/`field` are dropped and
//! nothing is validated here. The core normalizer is the source of truth
//! for semantics.

use std::collections::{BTreeMap, HashMap};

use recanto_core::domain::query::entities::{RawFilterClause, RawQueryRequest, RawSortClause};

#[derive(Debug, Default)]
struct PartialFilter {
    path: Option<String>,
    operator: Option<String>,
    value: Option<String>,
    insensitive: bool,
}

#[derive(Debug, Default)]
struct PartialSort {
    field: Option<String>,
    criteria: Option<String>,
}

pub fn from_query_map(query_map: &HashMap<String, String>) -> RawQueryRequest {
    let mut page_number = None;
    let mut page_limit = None;
    let mut filters: BTreeMap<usize, PartialFilter> = BTreeMap::new();
    let mut sorts: BTreeMap<usize, PartialSort> = BTreeMap::new();

    for (key, value) in query_map {
        if key == "page_number" {
            page_number = Some(value.clone());
        } else if key == "page_limit" {
            page_limit = Some(value.clone());
        } else if let Some((index, attribute)) = indexed_attribute(key, "filter") {
            let entry = filters.entry(index).or_default();
            match attribute {
                "path" => entry.path = Some(value.clone()),
                "operator" => entry.operator = Some(value.clone()),
                "value" => entry.value = Some(value.clone()),
                "insensitive" => entry.insensitive = value == "true",
                _ => {}
            }
        } else if let Some((index, attribute)) = indexed_attribute(key, "sort") {
            let entry = sorts.entry(index).or_default();
            match attribute {
                "field" => entry.field = Some(value.clone()),
                "criteria" => entry.criteria = Some(value.clone()),
                _ => {}
            }
        }
    }

    RawQueryRequest {
        page_number,
        page_limit,
        filters: filters
            .into_values()
            .filter_map(|entry| {
                Some(RawFilterClause {
                    path: entry.path?,
                    operator: entry.operator.unwrap_or_else(|| "equals".to_string()),
                    value: entry.value.unwrap_or_default(),
                    insensitive: entry.insensitive,
                })
            })
            .collect(),
        sort: sorts
            .into_values()
            .filter_map(|entry| {
                Some(RawSortClause {
                    field: entry.field?,
                    criteria: entry.criteria.unwrap_or_else(|| "asc".to_string()),
                })
            })
            .collect(),
    }
}

/// Splits `filter[2][path]` into `(2, "path")`.
fn indexed_attribute<'a>(key: &'a str, prefix: &str) -> Option<(usize, &'a str)> {
    let rest = key.strip_prefix(prefix)?.strip_prefix('[')?;
    let (index, rest) = rest.split_once(']')?;
    let index = index.parse::<usize>().ok()?;
    let attribute = rest.strip_prefix('[')?.strip_suffix(']')?;

    Some((index, attribute))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_pagination_keys() {
        let raw = from_query_map(&map(&[("page_number", "2"), ("page_limit", "25")]));
        assert_eq!(raw.page_number.as_deref(), Some("2"));
        assert_eq!(raw.page_limit.as_deref(), Some("25"));
    }

    #[test]
    fn parses_a_full_filter_clause() {
        let raw = from_query_map(&map(&[
            ("filter[0][path]", "nome"),
            ("filter[0][operator]", "contains"),
            ("filter[0][value]", "ana"),
            ("filter[0][insensitive]", "true"),
        ]));

        assert_eq!(
            raw.filters,
            vec![RawFilterClause {
                path: "nome".to_string(),
                operator: "contains".to_string(),
                value: "ana".to_string(),
                insensitive: true,
            }]
        );
    }

    #[test]
    fn missing_operator_defaults_to_equals() {
        let raw = from_query_map(&map(&[
            ("filter[0][path]", "situacao"),
            ("filter[0][value]", "ATIVO"),
        ]));

        assert_eq!(raw.filters[0].operator, "equals");
        assert!(!raw.filters[0].insensitive);
    }

    #[test]
    fn clauses_keep_index_order() {
        let raw = from_query_map(&map(&[
            ("filter[1][path]", "situacao"),
            ("filter[1][value]", "ATIVO"),
            ("filter[0][path]", "nome"),
            ("filter[0][value]", "ana"),
        ]));

        assert_eq!(raw.filters[0].path, "nome");
        assert_eq!(raw.filters[1].path, "situacao");
    }

    #[test]
    fn filter_without_path_is_dropped() {
        let raw = from_query_map(&map(&[("filter[0][value]", "ATIVO")]));
        assert!(raw.filters.is_empty());
    }

    #[test]
    fn parses_sort_clauses() {
        let raw = from_query_map(&map(&[
            ("sort[0][field]", "criado_em"),
            ("sort[0][criteria]", "desc"),
        ]));

        assert_eq!(
            raw.sort,
            vec![RawSortClause {
                field: "criado_em".to_string(),
                criteria: "desc".to_string(),
            }]
        );
    }
}
