use serde_json::Value;
use std::cmp::Ordering;

use super::types::{Clause, Filters, Predicate};
use crate::record::Record;

/// True when `record` passes every top-level clause and, if `$or` branches
/// are present, at least one of their clauses.
pub fn matches_filters(record: &Record, filters: &Filters) -> bool {
    if !filters.clauses.iter().all(|c| matches_clause(record, c)) {
        return false;
    }
    if filters.any_of.is_empty() {
        return true;
    }
    // Every clause of every `$or` sub-mapping is an independent branch; one
    // matching clause satisfies the whole `$or`, even within a multi-key
    // sub-mapping.
    filters.any_of.iter().flatten().any(|c| matches_clause(record, c))
}

fn matches_clause(record: &Record, clause: &Clause) -> bool {
    eval_predicate(record.get(&clause.field), &clause.predicate)
}

/// Exhaustive predicate dispatch. `value` is `None` when the record lacks
/// the field; only `Ne` and `Nin` pass in that case.
pub fn eval_predicate(value: Option<&Value>, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::ContainsI(needle) => value.is_some_and(|v| {
            coerce_str(v).to_lowercase().contains(&coerce_str(needle).to_lowercase())
        }),
        Predicate::Contains(needle) => {
            value.is_some_and(|v| coerce_str(v).contains(&coerce_str(needle)))
        }
        Predicate::Eq(expected) => value == Some(expected),
        Predicate::Ne(expected) => value != Some(expected),
        Predicate::In(set) => value.is_some_and(|v| set.contains(v)),
        Predicate::Nin(set) => !value.is_some_and(|v| set.contains(v)),
        Predicate::Equals(expected) => match value {
            Some(Value::Array(items)) => items.contains(expected),
            Some(v) => v == expected,
            None => false,
        },
    }
}

fn coerce_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Relational ordering for sort keys. Only same-typed numbers, strings and
/// bools order; any other pairing (including a missing field) compares
/// `Equal`, so a stable sort leaves the input order untouched.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
