// src/specs/mod.rs
//! # Feed “specs” module
//!
//! Knows how to read the product feed once it is text: which header names map
//! to which semantic column, and how a data row becomes a `Product`.
//!
//! ## What lives here
//! - **Column resolution** (`columns`): header names → indices, with a
//!   selectable strategy (`exact` or `substring`, both case-insensitive).
//! - **Row normalization** (`products`): per-row checks (blank, too short,
//!   URL policy), id assignment, and the per-pass skip ledger.
//!
//! ## What does **not** live here
//! - **Retrieval** – `feed` fetches the text and picks the fallback dataset.
//! - **Tokenizing** – `csv::parse_rows` has already split lines into fields.
//! - **Filtering/presentation** – `data::Catalog` and the front-ends.
//!
//! ## Typical call chain
//! ```text
//! feed::load → csv::parse_rows → specs::products::normalize
//!                                  ↘ ColumnMap::resolve (fails fast on schema)
//! ```
//!
//! ## Conventions & invariants
//! - A schema failure aborts the whole pass; it never yields partial output.
//! - Row problems are never errors: they are recorded as `RowSkipped`.
//! - Output order is source order.
pub mod columns;
pub mod products;

pub use columns::{Column, ColumnMap, ColumnMatch, SchemaError};
pub use products::{normalize, parse_products, NormalizeOptions, Normalized, RowSkipped, SkipReason, UrlPolicy};
