use super::eval::{compare_values, matches_filters};
use super::types::{Direction, Meta, PageInfo, QueryParams, QueryResult, Sort};
use crate::errors::StoreError;
use crate::record::{Record, RecordId};

/// Runs a query over an in-memory collection: filter, stable sort, paginate.
///
/// `total` reflects the filtered set, before the page slice. An out-of-range
/// page yields empty `data` rather than an error, and an absent pagination
/// param returns the whole filtered set as one page. The input slice is
/// never mutated.
#[must_use]
pub fn query_records(records: &[Record], params: &QueryParams) -> QueryResult {
    let mut rows: Vec<&Record> = match &params.filters {
        Some(filters) => records.iter().filter(|r| matches_filters(r, filters)).collect(),
        None => records.iter().collect(),
    };

    // Desc reverses the comparison, not the slice, so ties keep input order.
    if let Some(sort) = params.sort.as_deref().and_then(Sort::parse) {
        rows.sort_by(|a, b| {
            let ord = compare_values(a.get(&sort.field), b.get(&sort.field));
            match sort.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        });
    }

    let total = rows.len();
    let (page, page_size) = match params.pagination {
        Some(p) => p.normalize(),
        None => (1, total),
    };

    let start = (page - 1).saturating_mul(page_size);
    let data: Vec<Record> = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size).min(total);
        rows[start..end].iter().map(|r| (*r).clone()).collect()
    };

    QueryResult { data, meta: Meta { pagination: PageInfo { total, page, page_size } } }
}

/// Looks up a record by exact `id` equality over the whole collection,
/// ignoring any filter, sort or pagination state.
///
/// # Errors
/// `ITEM_NOT_FOUND` when no record carries the id.
pub fn find_record<'a>(records: &'a [Record], id: &RecordId) -> Result<&'a Record, StoreError> {
    records
        .iter()
        .find(|r| r.get("id").is_some_and(|v| id.matches(v)))
        .ok_or_else(|| StoreError::ItemNotFound { id: id.clone() })
}
