//! Summary of a mapping run: counts per rule and duplicate field names.

use std::collections::BTreeMap;

use tracing::warn;

use crate::headers::Header;
use crate::normalize::ResolutionRule;
use crate::row::MappingRow;

/// Several headers that resolved to the same internal field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCollision {
    pub field_name: String,
    /// Colliding headers, in input order.
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    pub total: usize,
    pub rule_counts: BTreeMap<ResolutionRule, usize>,
    /// Sorted by field name.
    pub collisions: Vec<FieldCollision>,
}

impl MappingReport {
    pub fn from_rows(rows: &[MappingRow]) -> Self {
        let mut rule_counts = BTreeMap::new();
        let mut by_field: BTreeMap<&str, Vec<Header>> = BTreeMap::new();
        for row in rows {
            *rule_counts.entry(row.rule).or_insert(0) += 1;
            by_field
                .entry(row.field_name.as_str())
                .or_default()
                .push(row.header.clone());
        }
        let collisions: Vec<FieldCollision> = by_field
            .into_iter()
            .filter(|(_, headers)| headers.len() > 1)
            .map(|(field_name, headers)| FieldCollision {
                field_name: field_name.to_string(),
                headers,
            })
            .collect();
        for collision in &collisions {
            warn!(
                field_name = %collision.field_name,
                headers = collision.headers.len(),
                "several headers map to the same field name"
            );
        }
        Self {
            total: rows.len(),
            rule_counts,
            collisions,
        }
    }

    pub fn count(&self, rule: ResolutionRule) -> usize {
        self.rule_counts.get(&rule).copied().unwrap_or(0)
    }

    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}
