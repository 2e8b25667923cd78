//! Input selection and row output for the `generate` command.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use wos_map::headers::read_header_line;
use wos_map::{HeaderMapper, MappingRow, ORDER_EXPORT_HEADERS, RowTemplate};

/// Where the header line comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// The WooCommerce order export header compiled into the binary.
    #[default]
    Embedded,
    /// First line of a CSV file.
    File(PathBuf),
}

impl InputSource {
    pub fn from_path(path: Option<&Path>) -> Self {
        path.map_or(Self::Embedded, |path| Self::File(path.to_path_buf()))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded order export header".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// How mapping rows are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowFormat {
    /// Indented single-quoted array literals, one per line.
    #[default]
    Rows,
    /// One CSV record per row, placeholders included, no header record.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

pub fn load_header_line(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Embedded => Ok(ORDER_EXPORT_HEADERS.to_string()),
        InputSource::File(path) => {
            let file =
                File::open(path).with_context(|| format!("open {}", path.display()))?;
            read_header_line(BufReader::new(file))
                .with_context(|| format!("read header line from {}", path.display()))
        }
    }
}

/// Loads the header line and maps every column.
pub fn map_source(source: &InputSource, template: RowTemplate) -> Result<Vec<MappingRow>> {
    let line = load_header_line(source)?;
    let rows = HeaderMapper::new(template)
        .map_line(&line)
        .with_context(|| format!("map headers from {}", source.describe()))?;
    info!(rows = rows.len(), source = %source.describe(), "mapped headers");
    Ok(rows)
}

pub fn write_rows<W: Write>(rows: &[MappingRow], format: RowFormat, mut writer: W) -> Result<()> {
    match format {
        RowFormat::Rows => {
            for row in rows {
                writeln!(writer, "{row}").context("write row")?;
            }
        }
        RowFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut writer);
            for row in rows {
                csv_writer.write_record(row.fields()).context("write csv record")?;
            }
            csv_writer.flush().context("flush csv output")?;
        }
        RowFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows).context("write json")?;
            writeln!(writer).context("write json")?;
        }
    }
    writer.flush().context("flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<MappingRow> {
        HeaderMapper::default()
            .map_line(r#"order_id,"Product Item 1 Name""#)
            .unwrap()
    }

    #[test]
    fn input_source_from_optional_path() {
        assert_eq!(InputSource::from_path(None), InputSource::Embedded);
        assert_eq!(
            InputSource::from_path(Some(Path::new("orders.csv"))),
            InputSource::File(PathBuf::from("orders.csv"))
        );
    }

    #[test]
    fn rows_format_writes_one_line_per_row() {
        let mut out = Vec::new();
        write_rows(&sample_rows(), RowFormat::Rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("'Product Item 1 Name', 'wos_ProductItem1Name'"));
        assert!(text.ends_with("],\n"));
    }

    #[test]
    fn csv_format_keeps_placeholder_columns() {
        let mut out = Vec::new();
        write_rows(&sample_rows(), RowFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "map.web.order_columns,Maps WooCommerce CSV headers to internal field names for staging.,stable,order_id,wos_OrderId,,,,,,,,"
        );
    }

    #[test]
    fn json_format_is_an_array_of_rows() {
        let mut out = Vec::new();
        write_rows(&sample_rows(), RowFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["field_name"], "wos_ProductItem1Name");
        assert_eq!(rows[1]["rule"], "product_item");
    }
}
