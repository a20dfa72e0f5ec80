//! Translates a normalized [`QueryRequest`] into a sea-orm select:
//! AND-combined predicate, ORDER BY list with a stable tie-break, and
//! LIMIT/OFFSET computed from the page window.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, IntoSimpleExpr, Order, QueryFilter, QueryOrder,
    QuerySelect, Select, Value,
    sea_query::{Expr, Func, SimpleExpr},
};

use crate::domain::query::{
    entities::{FilterClause, FilterOperator, FilterValue, QueryRequest, SortDirection},
    errors::QueryError,
};

/// Maps wire field paths onto the columns of one entity. Implemented next
/// to each Postgres repository.
pub trait ColumnMap: EntityTrait {
    fn resolve(path: &str) -> Option<Self::Column>;

    /// Unique column appended ascending to every ORDER BY so that rows with
    /// equal sort keys keep a deterministic order across pages.
    fn tie_break_column() -> Self::Column;
}

/// Select with the request's predicate only. Used for the parallel count.
pub fn filtered<E: ColumnMap>(request: &QueryRequest) -> Result<Select<E>, QueryError> {
    Ok(E::find().filter(condition::<E>(request)?))
}

/// Select with predicate, ordering and the page window applied.
pub fn paged<E: ColumnMap>(request: &QueryRequest) -> Result<Select<E>, QueryError> {
    let mut select = filtered::<E>(request)?;

    for sort in &request.sort {
        let column = E::resolve(&sort.field).ok_or_else(|| QueryError::UnknownField {
            path: sort.field.clone(),
        })?;
        let order = match sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        select = select.order_by(column, order);
    }

    Ok(select
        .order_by(E::tie_break_column(), Order::Asc)
        .limit(request.page_limit)
        .offset(request.offset()))
}

fn condition<E: ColumnMap>(request: &QueryRequest) -> Result<Condition, QueryError> {
    let mut condition = Condition::all();

    for clause in &request.filters {
        let column = E::resolve(&clause.path).ok_or_else(|| QueryError::UnknownField {
            path: clause.path.clone(),
        })?;
        condition = condition.add(clause_expr(column, clause)?);
    }

    Ok(condition)
}

fn clause_expr<C: ColumnTrait>(column: C, clause: &FilterClause) -> Result<SimpleExpr, QueryError> {
    if clause.insensitive {
        return insensitive_expr(column, clause);
    }

    match (clause.operator, &clause.value) {
        (FilterOperator::Contains, FilterValue::Text(value)) => Ok(column.contains(value.as_str())),
        (FilterOperator::In, FilterValue::TextList(items)) => Ok(column.is_in(items.clone())),
        (FilterOperator::In, FilterValue::IntegerList(items)) => Ok(column.is_in(items.clone())),
        (FilterOperator::In, FilterValue::UuidList(items)) => Ok(column.is_in(items.clone())),
        (operator, value) => {
            let value = scalar_value(&clause.path, value)?;
            match operator {
                FilterOperator::Equals => Ok(column.eq(value)),
                FilterOperator::Not => Ok(column.ne(value)),
                FilterOperator::Gt => Ok(column.gt(value)),
                FilterOperator::Gte => Ok(column.gte(value)),
                FilterOperator::Lt => Ok(column.lt(value)),
                FilterOperator::Lte => Ok(column.lte(value)),
                FilterOperator::Contains | FilterOperator::In => {
                    Err(QueryError::UnsupportedOperator {
                        path: clause.path.clone(),
                        operator: operator.as_str().to_string(),
                    })
                }
            }
        }
    }
}

/// Case folding is explicit (`LOWER()` on both sides) instead of relying on
/// store collation, so the behavior is identical on any Postgres setup.
fn insensitive_expr<C: ColumnTrait>(
    column: C,
    clause: &FilterClause,
) -> Result<SimpleExpr, QueryError> {
    let folded = Expr::expr(Func::lower(column.into_simple_expr()));

    match (clause.operator, &clause.value) {
        (FilterOperator::Equals, FilterValue::Text(value)) => Ok(folded.eq(value.to_lowercase())),
        (FilterOperator::Not, FilterValue::Text(value)) => Ok(folded.ne(value.to_lowercase())),
        (FilterOperator::Contains, FilterValue::Text(value)) => {
            Ok(folded.like(format!("%{}%", value.to_lowercase())))
        }
        (FilterOperator::Gt, FilterValue::Text(value)) => Ok(folded.gt(value.to_lowercase())),
        (FilterOperator::Gte, FilterValue::Text(value)) => Ok(folded.gte(value.to_lowercase())),
        (FilterOperator::Lt, FilterValue::Text(value)) => Ok(folded.lt(value.to_lowercase())),
        (FilterOperator::Lte, FilterValue::Text(value)) => Ok(folded.lte(value.to_lowercase())),
        (FilterOperator::In, FilterValue::TextList(items)) => {
            Ok(folded.is_in(items.iter().map(|item| item.to_lowercase())))
        }
        (operator, _) => Err(QueryError::UnsupportedOperator {
            path: clause.path.clone(),
            operator: operator.as_str().to_string(),
        }),
    }
}

fn scalar_value(path: &str, value: &FilterValue) -> Result<Value, QueryError> {
    match value {
        FilterValue::Text(v) => Ok(v.clone().into()),
        FilterValue::Integer(v) => Ok((*v).into()),
        FilterValue::Decimal(v) => Ok((*v).into()),
        FilterValue::Boolean(v) => Ok((*v).into()),
        FilterValue::Date(v) => Ok((*v).into()),
        FilterValue::DateTime(v) => Ok(v.fixed_offset().into()),
        FilterValue::Uuid(v) => Ok((*v).into()),
        FilterValue::TextList(_) | FilterValue::IntegerList(_) | FilterValue::UuidList(_) => {
            Err(QueryError::InvalidValue {
                path: path.to_string(),
                detail: "list value is only valid with the `in` operator".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::{
        domain::{
            idoso::entities::QUERY_SCHEMA,
            query::{
                entities::{RawFilterClause, RawQueryRequest, RawSortClause, SortClause},
                normalizer,
            },
        },
        entity::idosos,
    };

    fn normalized(raw: &RawQueryRequest) -> QueryRequest {
        normalizer::normalize(raw, &QUERY_SCHEMA).unwrap()
    }

    fn sql(request: &QueryRequest) -> String {
        paged::<idosos::Entity>(request)
            .unwrap()
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn equals_filter_renders_a_qualified_predicate() {
        let request = normalized(&RawQueryRequest {
            filters: vec![RawFilterClause {
                path: "situacao".to_string(),
                operator: "equals".to_string(),
                value: "ATIVO".to_string(),
                insensitive: false,
            }],
            ..Default::default()
        });

        let sql = sql(&request);
        assert!(sql.contains(r#""idosos"."situacao" = 'ATIVO'"#), "{sql}");
    }

    #[test]
    fn insensitive_contains_folds_both_sides() {
        let request = normalized(&RawQueryRequest {
            filters: vec![RawFilterClause {
                path: "nome".to_string(),
                operator: "contains".to_string(),
                value: "Ana".to_string(),
                insensitive: true,
            }],
            ..Default::default()
        });

        let sql = sql(&request);
        assert!(sql.contains(r#"LOWER("idosos"."nome") LIKE '%ana%'"#), "{sql}");
    }

    #[test]
    fn clauses_combine_with_and() {
        let request = normalized(&RawQueryRequest {
            filters: vec![
                RawFilterClause {
                    path: "situacao".to_string(),
                    operator: "equals".to_string(),
                    value: "ATIVO".to_string(),
                    insensitive: false,
                },
                RawFilterClause {
                    path: "sexo".to_string(),
                    operator: "equals".to_string(),
                    value: "F".to_string(),
                    insensitive: false,
                },
            ],
            ..Default::default()
        });

        let sql = sql(&request);
        assert!(
            sql.contains(r#""idosos"."situacao" = 'ATIVO' AND "idosos"."sexo" = 'F'"#),
            "{sql}"
        );
    }

    #[test]
    fn order_by_always_ends_with_the_tie_break() {
        let request = normalized(&RawQueryRequest {
            sort: vec![RawSortClause {
                field: "criado_em".to_string(),
                criteria: "desc".to_string(),
            }],
            ..Default::default()
        });

        let sql = sql(&request);
        assert!(
            sql.contains(r#"ORDER BY "idosos"."criado_em" DESC, "idosos"."id" ASC"#),
            "{sql}"
        );
    }

    #[test]
    fn page_window_becomes_limit_and_offset() {
        let request = normalized(&RawQueryRequest {
            page_number: Some("3".to_string()),
            page_limit: Some("20".to_string()),
            ..Default::default()
        });

        let sql = sql(&request);
        assert!(sql.contains("LIMIT 20 OFFSET 40"), "{sql}");
    }

    #[test]
    fn in_filter_renders_a_list() {
        let request = normalized(&RawQueryRequest {
            filters: vec![RawFilterClause {
                path: "situacao".to_string(),
                operator: "in".to_string(),
                value: "ATIVO,INATIVO".to_string(),
                insensitive: false,
            }],
            ..Default::default()
        });

        let sql = sql(&request);
        assert!(
            sql.contains(r#""idosos"."situacao" IN ('ATIVO', 'INATIVO')"#),
            "{sql}"
        );
    }

    #[test]
    fn unmapped_field_is_a_translator_error() {
        // Bypasses the normalizer on purpose: the defensive check must hold
        // even for hand-built requests.
        let request = QueryRequest {
            filters: Vec::new(),
            sort: vec![SortClause {
                field: "inexistente".to_string(),
                direction: crate::domain::query::entities::SortDirection::Asc,
            }],
            page_number: 1,
            page_limit: 10,
        };

        assert!(matches!(
            paged::<idosos::Entity>(&request),
            Err(QueryError::UnknownField { .. })
        ));
    }
}
