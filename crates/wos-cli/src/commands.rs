use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wos_cli::generate::{InputSource, RowFormat, map_source, write_rows};
use wos_map::{MappingReport, RowTemplate};

use crate::cli::{GenerateArgs, InputArgs, RowFormatArg};
use crate::summary::{print_preview, print_report};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let source = InputSource::from_path(args.input.input.as_deref());
    let span = info_span!("generate", source = %source.describe());
    let _guard = span.enter();

    let rows = map_source(&source, row_template(args))?;
    let report = MappingReport::from_rows(&rows);
    if report.has_collisions() {
        info!(
            collisions = report.collisions.len(),
            "rows written despite duplicate field names; run `check` for details"
        );
    }

    let format = row_format(args.format);
    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_rows(&rows, format, BufWriter::new(file))?;
            info!(rows = rows.len(), path = %path.display(), "wrote mapping rows");
        }
        None => write_rows(&rows, format, io::stdout().lock())?,
    }
    Ok(())
}

pub fn run_preview(args: &InputArgs) -> Result<()> {
    let source = InputSource::from_path(args.input.as_deref());
    let rows = map_source(&source, RowTemplate::default())?;
    print_preview(&rows);
    Ok(())
}

/// Returns `true` when no two headers share a field name.
pub fn run_check(args: &InputArgs) -> Result<bool> {
    let source = InputSource::from_path(args.input.as_deref());
    let rows = map_source(&source, RowTemplate::default())?;
    let report = MappingReport::from_rows(&rows);
    print_report(&report);
    Ok(!report.has_collisions())
}

fn row_template(args: &GenerateArgs) -> RowTemplate {
    let mut template = RowTemplate::default();
    if let Some(group_tag) = &args.group_tag {
        template = template.with_group_tag(group_tag);
    }
    if let Some(description) = &args.description {
        template = template.with_description(description);
    }
    if let Some(stability) = &args.stability {
        template = template.with_stability(stability);
    }
    template
}

fn row_format(format: RowFormatArg) -> RowFormat {
    match format {
        RowFormatArg::Rows => RowFormat::Rows,
        RowFormatArg::Csv => RowFormat::Csv,
        RowFormatArg::Json => RowFormat::Json,
    }
}
