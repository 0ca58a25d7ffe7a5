use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// A single predicate applied to one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `$containsi`: case-insensitive substring match, both sides coerced to
    /// strings.
    ContainsI(Value),
    /// `$contains`: case-sensitive substring match.
    Contains(Value),
    /// `$eq`: strict equality.
    Eq(Value),
    /// `$ne`: strict inequality.
    Ne(Value),
    /// `$in`: field value is a member of the list.
    In(Vec<Value>),
    /// `$nin`: field value is not a member of the list.
    Nin(Vec<Value>),
    /// Bare-value filter: strict equality, except against an array-valued
    /// field where it tests membership.
    Equals(Value),
}

/// One field-to-predicate entry of a filter mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub predicate: Predicate,
}

impl Clause {
    #[must_use]
    pub fn new(field: impl Into<String>, predicate: Predicate) -> Self {
        Self { field: field.into(), predicate }
    }
}

/// A parsed filter mapping. `clauses` are a conjunction; `any_of` holds the
/// clause lists of the `$or` sub-mappings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub clauses: Vec<Clause>,
    pub any_of: Vec<Vec<Clause>>,
}

impl Filters {
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, predicate: Predicate) -> Self {
        self.clauses.push(Clause::new(field, predicate));
        self
    }

    /// Appends one `$or` sub-mapping.
    #[must_use]
    pub fn or_branch(mut self, branch: Vec<Clause>) -> Self {
        self.any_of.push(branch);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.any_of.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    /// Parses a `"<field>:<direction>"` spec. The direction defaults to
    /// `asc` when omitted. Returns `None` for an empty field or an unknown
    /// direction token; callers treat that as a no-op sort.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        let (field, direction) = match spec.split_once(':') {
            Some((field, direction)) => (field, direction),
            None => (spec, "asc"),
        };
        if field.is_empty() {
            return None;
        }
        let direction = match direction {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            _ => return None,
        };
        Some(Self { field: field.to_string(), direction })
    }
}

/// Page selection. Both values are one-based and clamped to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub(crate) fn normalize(self) -> (usize, usize) {
        (self.page.max(1), self.page_size.max(1))
    }
}

/// Options for `query_records`. All parts are independent and optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub filters: Option<Filters>,
    pub sort: Option<String>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub data: Vec<Record>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub pagination: PageInfo,
}

/// Pagination metadata. `total` counts the filtered set, not the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}
