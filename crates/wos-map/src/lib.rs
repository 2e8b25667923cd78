//! Header-to-field-name mapping for the WooCommerce order CSV export.
//!
//! The crate turns a CSV header line into mapping-table rows:
//!
//! 1. [`headers`] splits the line into raw column names, honoring quotes.
//! 2. [`normalize`] derives the `wos_` internal field name for each column.
//! 3. [`row`] renders one mapping-table declaration per column.
//!
//! [`HeaderMapper`] runs the three steps in order and [`MappingReport`]
//! summarizes the result.

#![deny(unsafe_code)]

pub mod error;
pub mod headers;
pub mod mapper;
pub mod normalize;
pub mod report;
pub mod row;
pub mod source;

pub use error::{MapError, Result};
pub use headers::{Header, parse_headers, split_headers};
pub use mapper::HeaderMapper;
pub use normalize::{FIELD_PREFIX, Resolution, ResolutionRule, base_key, field_name, resolve};
pub use report::{FieldCollision, MappingReport};
pub use row::{MappingRow, RowTemplate};
pub use source::{ORDER_EXPORT_COLUMN_COUNT, ORDER_EXPORT_HEADERS};
