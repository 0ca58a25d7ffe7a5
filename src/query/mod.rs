// Submodules for separation of concerns
mod eval;
mod exec;
mod parse;
mod types;

// Public API re-exports
pub use eval::{compare_values, eval_predicate, matches_filters};
pub use exec::{find_record, query_records};
pub use parse::parse_filters_json;
pub use types::{
    Clause, Direction, Filters, Meta, PageInfo, Pagination, Predicate, QueryParams, QueryResult,
    Sort,
};
