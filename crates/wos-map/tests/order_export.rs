//! Mapping of the embedded WooCommerce order export header.

use wos_map::{
    HeaderMapper, MappingReport, ORDER_EXPORT_COLUMN_COUNT, ORDER_EXPORT_HEADERS, ResolutionRule,
    field_name, split_headers,
};

fn render_all() -> String {
    HeaderMapper::default()
        .map_line(ORDER_EXPORT_HEADERS)
        .unwrap()
        .iter()
        .map(|row| format!("{}\n", row.render()))
        .collect()
}

#[test]
fn one_row_per_column_in_input_order() {
    let headers = split_headers(ORDER_EXPORT_HEADERS);
    let rows = HeaderMapper::default().map_line(ORDER_EXPORT_HEADERS).unwrap();
    assert_eq!(headers.len(), ORDER_EXPORT_COLUMN_COUNT);
    assert_eq!(rows.len(), headers.len());
    for (row, header) in rows.iter().zip(&headers) {
        assert_eq!(&row.header, header);
    }
}

#[test]
fn output_is_deterministic() {
    assert_eq!(render_all(), render_all());
}

#[test]
fn field_names_rederive_from_headers() {
    let rows = HeaderMapper::default().map_line(ORDER_EXPORT_HEADERS).unwrap();
    for row in &rows {
        assert_eq!(field_name(row.header.as_str()).unwrap(), row.field_name);
    }
}

#[test]
fn rule_counts_and_no_collisions() {
    let rows = HeaderMapper::default().map_line(ORDER_EXPORT_HEADERS).unwrap();
    let report = MappingReport::from_rows(&rows);
    assert_eq!(report.total, 224);
    assert_eq!(report.count(ResolutionRule::Lookup), 56);
    assert_eq!(report.count(ResolutionRule::LineItem), 24);
    assert_eq!(report.count(ResolutionRule::ProductItem), 144);
    assert_eq!(report.count(ResolutionRule::Fallback), 0);
    assert!(!report.has_collisions());
}

#[test]
fn selected_rows_render_as_expected() {
    let output = render_all();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "        ['map.web.order_columns', 'Maps WooCommerce CSV headers to internal field names for staging.', 'stable', 'order_id', 'wos_OrderId', '', '', '', '', '', '', '', ''],");
    assert_eq!(lines[55], "        ['map.web.order_columns', 'Maps WooCommerce CSV headers to internal field names for staging.', 'stable', 'meta:wpml_language', 'wos_MetaWpmlLanguage', '', '', '', '', '', '', '', ''],");
    assert_eq!(lines[56], "        ['map.web.order_columns', 'Maps WooCommerce CSV headers to internal field names for staging.', 'stable', 'line_item_1', 'wos_LineItem1', '', '', '', '', '', '', '', ''],");
    assert_eq!(lines[80], "        ['map.web.order_columns', 'Maps WooCommerce CSV headers to internal field names for staging.', 'stable', 'Product Item 1 Name', 'wos_ProductItem1Name', '', '', '', '', '', '', '', ''],");
    assert_eq!(lines[223], "        ['map.web.order_columns', 'Maps WooCommerce CSV headers to internal field names for staging.', 'stable', 'Product Item 24 Subtotal', 'wos_ProductItem24Subtotal', '', '', '', '', '', '', '', ''],");
}
