//! Heuristic extraction of numbers, labels and line lists from summary prose.
//!
//! `patterns` holds the generic, total extractor functions; `fields` compiles
//! per-domain field tables on top of them.

pub mod fields;
pub mod patterns;

pub use fields::{FieldKind, FieldSpec, FieldTable};
pub use patterns::{
    extract_category, extract_list_by_keyword, extract_number, extract_tags, mentions_any,
};
