//! Header line to mapping rows.

use tracing::{debug, info};

use crate::error::Result;
use crate::headers::{Header, parse_headers};
use crate::normalize::{base_key, resolve};
use crate::row::{MappingRow, RowTemplate};

/// Turns header lines into [`MappingRow`]s using a fixed [`RowTemplate`].
#[derive(Debug, Clone, Default)]
pub struct HeaderMapper {
    template: RowTemplate,
}

impl HeaderMapper {
    pub fn new(template: RowTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &RowTemplate {
        &self.template
    }

    /// Parses a header line and maps every column, in input order.
    ///
    /// # Errors
    ///
    /// Fails on blank or unbalanced input, and when any column cannot be
    /// resolved. No rows are returned in that case.
    pub fn map_line(&self, line: &str) -> Result<Vec<MappingRow>> {
        let headers = parse_headers(line)?;
        info!(columns = headers.len(), "parsed header line");
        self.map_headers(headers)
    }

    /// Maps already split headers, in order.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error.
    pub fn map_headers(&self, headers: Vec<Header>) -> Result<Vec<MappingRow>> {
        headers
            .into_iter()
            .map(|header| self.map_header(header))
            .collect()
    }

    /// Maps a single header.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn map_header(&self, header: Header) -> Result<MappingRow> {
        let key = base_key(header.as_str());
        let resolution = resolve(&key)?;
        debug!(
            header = %header,
            base_key = %key,
            field_name = %resolution.field_name,
            rule = %resolution.rule,
            "resolved header"
        );
        Ok(MappingRow::new(&self.template, header, resolution))
    }
}
