//! Mapping-table row declarations.

use std::fmt;

use serde::Serialize;

use crate::headers::Header;
use crate::normalize::{Resolution, ResolutionRule};

pub const DEFAULT_GROUP_TAG: &str = "map.web.order_columns";
pub const DEFAULT_DESCRIPTION: &str =
    "Maps WooCommerce CSV headers to internal field names for staging.";
pub const DEFAULT_STABILITY: &str = "stable";
/// Trailing empty columns of the downstream mapping table.
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 8;

const ROW_INDENT: &str = "        ";

/// Constant metadata stamped onto every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowTemplate {
    pub group_tag: String,
    pub description: String,
    pub stability: String,
    pub placeholders: usize,
}

impl Default for RowTemplate {
    fn default() -> Self {
        Self {
            group_tag: DEFAULT_GROUP_TAG.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            stability: DEFAULT_STABILITY.to_string(),
            placeholders: DEFAULT_PLACEHOLDER_COUNT,
        }
    }
}

impl RowTemplate {
    #[must_use]
    pub fn with_group_tag(mut self, group_tag: impl Into<String>) -> Self {
        self.group_tag = group_tag.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_stability(mut self, stability: impl Into<String>) -> Self {
        self.stability = stability.into();
        self
    }

    #[must_use]
    pub fn with_placeholders(mut self, placeholders: usize) -> Self {
        self.placeholders = placeholders;
        self
    }
}

/// One header paired with its internal field name and the template metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRow {
    pub group_tag: String,
    pub description: String,
    pub stability: String,
    pub header: Header,
    pub field_name: String,
    pub rule: ResolutionRule,
    #[serde(skip)]
    pub placeholders: usize,
}

impl MappingRow {
    pub fn new(template: &RowTemplate, header: Header, resolution: Resolution) -> Self {
        Self {
            group_tag: template.group_tag.clone(),
            description: template.description.clone(),
            stability: template.stability.clone(),
            header,
            field_name: resolution.field_name,
            rule: resolution.rule,
            placeholders: template.placeholders,
        }
    }

    /// All table columns in order, placeholders included.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.group_tag.as_str(),
            self.description.as_str(),
            self.stability.as_str(),
            self.header.as_str(),
            self.field_name.as_str(),
        ];
        fields.extend(std::iter::repeat_n("", self.placeholders));
        fields
    }

    /// Renders the row as an indented, single-quoted array literal with a
    /// trailing comma.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MappingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROW_INDENT)?;
        f.write_str("[")?;
        for (position, field) in self.fields().into_iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{field}'")?;
        }
        f.write_str("],")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_id_row(template: &RowTemplate) -> MappingRow {
        MappingRow::new(
            template,
            Header::new("order_id"),
            Resolution {
                field_name: "wos_OrderId".to_string(),
                rule: ResolutionRule::Lookup,
            },
        )
    }

    #[test]
    fn renders_default_row() {
        let row = order_id_row(&RowTemplate::default());
        let rendered = row.render();
        assert!(rendered.starts_with("        ['"));
        insta::assert_snapshot!(
            rendered.trim_start(),
            @"['map.web.order_columns', 'Maps WooCommerce CSV headers to internal field names for staging.', 'stable', 'order_id', 'wos_OrderId', '', '', '', '', '', '', '', ''],"
        );
    }

    #[test]
    fn template_overrides_flow_into_row() {
        let template = RowTemplate::default()
            .with_group_tag("map.web.refund_columns")
            .with_description("Refund columns.")
            .with_stability("draft")
            .with_placeholders(2);
        let row = order_id_row(&template);
        assert_eq!(
            row.render(),
            "        ['map.web.refund_columns', 'Refund columns.', 'draft', 'order_id', 'wos_OrderId', '', ''],"
        );
    }

    #[test]
    fn fields_include_placeholders() {
        let row = order_id_row(&RowTemplate::default());
        let fields = row.fields();
        assert_eq!(fields.len(), 5 + DEFAULT_PLACEHOLDER_COUNT);
        assert!(fields[5..].iter().all(|field| field.is_empty()));
    }

    #[test]
    fn json_omits_placeholders() {
        let row = order_id_row(&RowTemplate::default());
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["header"], "order_id");
        assert_eq!(value["field_name"], "wos_OrderId");
        assert_eq!(value["rule"], "lookup");
        assert!(value.get("placeholders").is_none());
    }
}
