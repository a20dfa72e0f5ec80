use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::query::{
    entities::{
        FilterClause, FilterOperator, FilterValue, QueryRequest, RawFilterClause, RawQueryRequest,
        RawSortClause, SortClause, SortDirection,
    },
    errors::QueryError,
    schema::{EntitySchema, FieldKind, FieldSpec},
};

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Validates and defaults a raw wire request into a [`QueryRequest`].
///
/// Fails before any store access: unknown fields, incompatible operators,
/// malformed values and non-positive pagination are all rejected here.
/// Multiple clauses on the same field are kept and ANDed, in request order.
/// An empty sort list falls back to the schema's fallback key, descending,
/// so offset pagination stays deterministic across pages.
pub fn normalize(raw: &RawQueryRequest, schema: &EntitySchema) -> Result<QueryRequest, QueryError> {
    let page_number = positive_integer(raw.page_number.as_deref(), "page_number", 1)?;
    let page_limit = positive_integer(raw.page_limit.as_deref(), "page_limit", DEFAULT_PAGE_LIMIT)?
        .min(MAX_PAGE_LIMIT);

    let filters = raw
        .filters
        .iter()
        .map(|clause| parse_clause(clause, schema))
        .collect::<Result<Vec<_>, _>>()?;

    let sort = if raw.sort.is_empty() {
        vec![SortClause {
            field: schema.fallback_sort.to_string(),
            direction: SortDirection::Desc,
        }]
    } else {
        raw.sort
            .iter()
            .map(|clause| parse_sort(clause, schema))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(QueryRequest {
        filters,
        sort,
        page_number,
        page_limit,
    })
}

fn positive_integer(value: Option<&str>, key: &str, default: u64) -> Result<u64, QueryError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed >= 1 => Ok(parsed),
        _ => Err(QueryError::InvalidPagination(format!(
            "{key} must be a positive integer, got `{value}`"
        ))),
    }
}

fn parse_clause(raw: &RawFilterClause, schema: &EntitySchema) -> Result<FilterClause, QueryError> {
    let spec = filterable_field(&raw.path, schema)?;

    let operator = FilterOperator::from_str(&raw.operator).map_err(|()| {
        QueryError::UnsupportedOperator {
            path: raw.path.clone(),
            operator: raw.operator.clone(),
        }
    })?;
    ensure_operator_compatible(&raw.path, operator, spec, raw.insensitive)?;

    let value = parse_value(&raw.path, spec.kind, operator, &raw.value)?;

    Ok(FilterClause {
        path: raw.path.clone(),
        operator,
        value,
        insensitive: raw.insensitive,
    })
}

fn parse_sort(raw: &RawSortClause, schema: &EntitySchema) -> Result<SortClause, QueryError> {
    let spec = schema
        .field(&raw.field)
        .ok_or_else(|| QueryError::InvalidField {
            path: raw.field.clone(),
        })?;
    if !spec.sortable {
        return Err(QueryError::InvalidField {
            path: raw.field.clone(),
        });
    }

    let direction =
        SortDirection::from_str(&raw.criteria).map_err(|()| QueryError::InvalidValue {
            path: raw.field.clone(),
            detail: format!("sort criteria must be `asc` or `desc`, got `{}`", raw.criteria),
        })?;

    Ok(SortClause {
        field: raw.field.clone(),
        direction,
    })
}

fn filterable_field<'a>(
    path: &str,
    schema: &'a EntitySchema,
) -> Result<&'a FieldSpec, QueryError> {
    let spec = schema.field(path).ok_or_else(|| QueryError::InvalidField {
        path: path.to_string(),
    })?;
    if !spec.filterable {
        return Err(QueryError::InvalidField {
            path: path.to_string(),
        });
    }
    Ok(spec)
}

fn ensure_operator_compatible(
    path: &str,
    operator: FilterOperator,
    spec: &FieldSpec,
    insensitive: bool,
) -> Result<(), QueryError> {
    let incompatible = || QueryError::UnsupportedOperator {
        path: path.to_string(),
        operator: operator.as_str().to_string(),
    };

    if operator == FilterOperator::Contains && spec.kind != FieldKind::Text {
        return Err(incompatible());
    }
    if insensitive && spec.kind != FieldKind::Text {
        return Err(incompatible());
    }
    if operator.is_ordering()
        && matches!(spec.kind, FieldKind::Boolean | FieldKind::Uuid)
    {
        return Err(incompatible());
    }
    if operator == FilterOperator::In
        && !matches!(
            spec.kind,
            FieldKind::Text | FieldKind::Integer | FieldKind::Uuid
        )
    {
        return Err(incompatible());
    }

    Ok(())
}

fn parse_value(
    path: &str,
    kind: FieldKind,
    operator: FilterOperator,
    raw: &str,
) -> Result<FilterValue, QueryError> {
    if operator != FilterOperator::In {
        return parse_scalar(path, kind, raw);
    }

    let items: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return Err(QueryError::InvalidValue {
            path: path.to_string(),
            detail: "`in` requires a non-empty comma-separated list".to_string(),
        });
    }

    match kind {
        FieldKind::Text => Ok(FilterValue::TextList(
            items.into_iter().map(str::to_string).collect(),
        )),
        FieldKind::Integer => items
            .into_iter()
            .map(|item| {
                item.parse::<i64>().map_err(|_| QueryError::InvalidValue {
                    path: path.to_string(),
                    detail: format!("`{item}` is not an integer"),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FilterValue::IntegerList),
        FieldKind::Uuid => items
            .into_iter()
            .map(|item| {
                Uuid::parse_str(item).map_err(|_| QueryError::InvalidValue {
                    path: path.to_string(),
                    detail: format!("`{item}` is not a UUID"),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FilterValue::UuidList),
        _ => Err(QueryError::UnsupportedOperator {
            path: path.to_string(),
            operator: FilterOperator::In.as_str().to_string(),
        }),
    }
}

fn parse_scalar(path: &str, kind: FieldKind, raw: &str) -> Result<FilterValue, QueryError> {
    let invalid = |detail: String| QueryError::InvalidValue {
        path: path.to_string(),
        detail,
    };

    match kind {
        FieldKind::Text => Ok(FilterValue::Text(raw.to_string())),
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(FilterValue::Integer)
            .map_err(|_| invalid(format!("`{raw}` is not an integer"))),
        FieldKind::Decimal => raw
            .parse::<f64>()
            .map(FilterValue::Decimal)
            .map_err(|_| invalid(format!("`{raw}` is not a number"))),
        FieldKind::Boolean => raw
            .parse::<bool>()
            .map(FilterValue::Boolean)
            .map_err(|_| invalid(format!("`{raw}` is not `true` or `false`"))),
        FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(FilterValue::Date)
            .map_err(|_| invalid(format!("`{raw}` is not a date (YYYY-MM-DD)"))),
        FieldKind::DateTime => DateTime::parse_from_rfc3339(raw)
            .map(|dt| FilterValue::DateTime(dt.with_timezone(&Utc)))
            .map_err(|_| invalid(format!("`{raw}` is not an RFC 3339 timestamp"))),
        FieldKind::Uuid => Uuid::parse_str(raw)
            .map(FilterValue::Uuid)
            .map_err(|_| invalid(format!("`{raw}` is not a UUID"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::schema::FieldSpec;

    const SCHEMA: EntitySchema = EntitySchema::new(
        "idoso",
        &[
            ("nome", FieldSpec::text()),
            ("situacao", FieldSpec::text()),
            ("id_cargo", FieldSpec::uuid()),
            ("peso_kg", FieldSpec::decimal()),
            ("ativo", FieldSpec::boolean()),
            ("data_nascimento", FieldSpec::date()),
            ("criado_em", FieldSpec::date_time()),
        ],
        "criado_em",
    );

    fn raw_filter(path: &str, operator: &str, value: &str) -> RawFilterClause {
        RawFilterClause {
            path: path.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
            insensitive: false,
        }
    }

    #[test]
    fn empty_request_gets_defaults() {
        let request = normalize(&RawQueryRequest::default(), &SCHEMA).unwrap();
        assert_eq!(request.page_number, 1);
        assert_eq!(request.page_limit, DEFAULT_PAGE_LIMIT);
        assert!(request.filters.is_empty());
        assert_eq!(
            request.sort,
            vec![SortClause {
                field: "criado_em".to_string(),
                direction: SortDirection::Desc,
            }]
        );
    }

    #[test]
    fn page_number_zero_is_rejected() {
        let raw = RawQueryRequest {
            page_number: Some("0".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::InvalidPagination(_))
        ));
    }

    #[test]
    fn non_numeric_page_limit_is_rejected() {
        let raw = RawQueryRequest {
            page_limit: Some("muitos".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::InvalidPagination(_))
        ));
    }

    #[test]
    fn oversized_page_limit_clamps_silently() {
        let raw = RawQueryRequest {
            page_limit: Some("5000".to_string()),
            ..Default::default()
        };
        let request = normalize(&raw, &SCHEMA).unwrap();
        assert_eq!(request.page_limit, MAX_PAGE_LIMIT);
    }

    #[test]
    fn unknown_filter_field_is_rejected() {
        let raw = RawQueryRequest {
            filters: vec![raw_filter("idade", "equals", "80")],
            ..Default::default()
        };
        assert_eq!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::InvalidField {
                path: "idade".to_string()
            })
        );
    }

    #[test]
    fn contains_on_non_text_field_is_rejected() {
        let raw = RawQueryRequest {
            filters: vec![raw_filter("peso_kg", "contains", "70")],
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn insensitive_flag_requires_text_field() {
        let mut clause = raw_filter("id_cargo", "equals", Uuid::nil().to_string().as_str());
        clause.insensitive = true;
        let raw = RawQueryRequest {
            filters: vec![clause],
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn ordering_on_boolean_is_rejected() {
        let raw = RawQueryRequest {
            filters: vec![raw_filter("ativo", "gt", "true")],
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn malformed_date_value_is_rejected() {
        let raw = RawQueryRequest {
            filters: vec![raw_filter("data_nascimento", "gte", "31/12/1940")],
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::InvalidValue { .. })
        ));
    }

    #[test]
    fn in_list_parses_each_item() {
        let raw = RawQueryRequest {
            filters: vec![raw_filter("situacao", "in", "ATIVO, INATIVO")],
            ..Default::default()
        };
        let request = normalize(&raw, &SCHEMA).unwrap();
        assert_eq!(
            request.filters[0].value,
            FilterValue::TextList(vec!["ATIVO".to_string(), "INATIVO".to_string()])
        );
    }

    #[test]
    fn repeated_field_clauses_are_kept_in_order() {
        let raw = RawQueryRequest {
            filters: vec![
                raw_filter("criado_em", "gte", "2024-01-01T00:00:00Z"),
                raw_filter("criado_em", "lt", "2025-01-01T00:00:00Z"),
            ],
            ..Default::default()
        };
        let request = normalize(&raw, &SCHEMA).unwrap();
        assert_eq!(request.filters.len(), 2);
        assert_eq!(request.filters[0].operator, FilterOperator::Gte);
        assert_eq!(request.filters[1].operator, FilterOperator::Lt);
    }

    #[test]
    fn explicit_sort_replaces_fallback() {
        let raw = RawQueryRequest {
            sort: vec![RawSortClause {
                field: "nome".to_string(),
                criteria: "asc".to_string(),
            }],
            ..Default::default()
        };
        let request = normalize(&raw, &SCHEMA).unwrap();
        assert_eq!(
            request.sort,
            vec![SortClause {
                field: "nome".to_string(),
                direction: SortDirection::Asc,
            }]
        );
    }

    #[test]
    fn invalid_sort_criteria_is_rejected() {
        let raw = RawQueryRequest {
            sort: vec![RawSortClause {
                field: "nome".to_string(),
                criteria: "down".to_string(),
            }],
            ..Default::default()
        };
        assert!(matches!(
            normalize(&raw, &SCHEMA),
            Err(QueryError::InvalidValue { .. })
        ));
    }
}
