use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::types::{Clause, Filters, Predicate};
use crate::errors::StoreError;

impl Filters {
    /// Builds typed filters from a JSON filter mapping.
    ///
    /// Each non-`$` key maps to either an operator bundle (a mapping with
    /// `$`-prefixed keys, one clause per operator) or a bare value (direct
    /// equality). The reserved `$or` key takes a sequence of sub-mappings.
    ///
    /// # Errors
    /// `INVALID_FILTER` for unknown operators, non-array `$in`/`$nin`/`$or`
    /// payloads, or a non-object top level.
    pub fn from_value(value: &Value) -> Result<Self, StoreError> {
        let Value::Object(map) = value else {
            return Err(StoreError::Filter("filters must be a JSON object".into()));
        };

        let mut filters = Self::default();
        for (key, entry) in map {
            if key == "$or" {
                let Value::Array(branches) = entry else {
                    return Err(StoreError::Filter("$or expects an array of filter objects".into()));
                };
                for branch in branches {
                    let Value::Object(sub) = branch else {
                        return Err(StoreError::Filter("$or entries must be filter objects".into()));
                    };
                    let mut clauses = Vec::with_capacity(sub.len());
                    for (field, v) in sub {
                        for predicate in predicates_for(v)? {
                            clauses.push(Clause::new(field.clone(), predicate));
                        }
                    }
                    filters.any_of.push(clauses);
                }
            } else if key.starts_with('$') {
                return Err(StoreError::Filter(format!("unknown filter key: {key}")));
            } else {
                for predicate in predicates_for(entry)? {
                    filters.clauses.push(Clause::new(key.clone(), predicate));
                }
            }
        }
        Ok(filters)
    }
}

/// A mapping value with any `$`-prefixed key is an operator bundle; anything
/// else is direct equality against the value as-is.
fn predicates_for(value: &Value) -> Result<Vec<Predicate>, StoreError> {
    if let Value::Object(map) = value
        && map.keys().any(|k| k.starts_with('$'))
    {
        return bundle_predicates(map);
    }
    Ok(vec![Predicate::Equals(value.clone())])
}

fn bundle_predicates(map: &Map<String, Value>) -> Result<Vec<Predicate>, StoreError> {
    let mut out = Vec::with_capacity(map.len());
    for (op, v) in map {
        let predicate = match op.as_str() {
            "$containsi" => Predicate::ContainsI(v.clone()),
            "$contains" => Predicate::Contains(v.clone()),
            "$eq" => Predicate::Eq(v.clone()),
            "$ne" => Predicate::Ne(v.clone()),
            "$in" => Predicate::In(value_list(op, v)?),
            "$nin" => Predicate::Nin(value_list(op, v)?),
            other => return Err(StoreError::Filter(format!("unknown operator: {other}"))),
        };
        out.push(predicate);
    }
    Ok(out)
}

fn value_list(op: &str, value: &Value) -> Result<Vec<Value>, StoreError> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        _ => Err(StoreError::Filter(format!("{op} expects an array"))),
    }
}

/// # Errors
/// Returns an error if the JSON string cannot be parsed into a filter
/// mapping.
pub fn parse_filters_json(json: &str) -> Result<Filters, StoreError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| StoreError::Filter(e.to_string()))?;
    Filters::from_value(&value)
}

impl<'de> Deserialize<'de> for Filters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
