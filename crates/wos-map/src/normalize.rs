//! Base-key normalization and internal field-name resolution.
//!
//! A raw header is first reduced to a base key (lower-case, spaces and colons
//! turned into underscores, quotes dropped). The base key is then resolved by
//! the first matching rule:
//!
//! 1. exact lookup in [`KNOWN_FIELDS`];
//! 2. `line_item_<n>` becomes `wos_LineItem<n>`;
//! 3. `product_item_<index>_<field>` becomes `wos_ProductItem<index><Field>`;
//! 4. anything else becomes `wos_<base_key>`.

use std::fmt;

use serde::Serialize;

use crate::error::{MapError, Result};

/// Namespace prefix shared by every internal field name.
pub const FIELD_PREFIX: &str = "wos_";

const LINE_ITEM_PREFIX: &str = "line_item_";
const PRODUCT_ITEM_PREFIX: &str = "product_item_";

/// Order-level columns with a hand-picked internal name, keyed by base key.
pub static KNOWN_FIELDS: &[(&str, &str)] = &[
    ("order_id", "wos_OrderId"),
    ("order_number", "wos_OrderNumber"),
    ("order_date", "wos_OrderDate"),
    ("paid_date", "wos_PaidDate"),
    ("status", "wos_Status"),
    ("shipping_total", "wos_ShippingTotal"),
    ("shipping_tax_total", "wos_ShippingTaxTotal"),
    ("fee_total", "wos_FeeTotal"),
    ("fee_tax_total", "wos_FeeTaxTotal"),
    ("tax_total", "wos_TaxTotal"),
    ("cart_discount", "wos_CartDiscount"),
    ("order_discount", "wos_OrderDiscount"),
    ("discount_total", "wos_DiscountTotal"),
    ("order_total", "wos_OrderTotal"),
    ("order_subtotal", "wos_OrderSubtotal"),
    ("order_currency", "wos_OrderCurrency"),
    ("payment_method", "wos_PaymentMethod"),
    ("payment_method_title", "wos_PaymentMethodTitle"),
    ("transaction_id", "wos_TransactionId"),
    ("customer_ip_address", "wos_CustomerIpAddress"),
    ("customer_user_agent", "wos_CustomerUserAgent"),
    ("shipping_method", "wos_ShippingMethod"),
    ("customer_id", "wos_CustomerId"),
    ("customer_user", "wos_CustomerUser"),
    ("customer_email", "wos_CustomerEmail"),
    ("billing_first_name", "wos_BillingFirstName"),
    ("billing_last_name", "wos_BillingLastName"),
    ("billing_company", "wos_BillingCompany"),
    ("billing_email", "wos_BillingEmail"),
    ("billing_phone", "wos_BillingPhone"),
    ("billing_address_1", "wos_BillingAddress1"),
    ("billing_address_2", "wos_BillingAddress2"),
    ("billing_postcode", "wos_BillingPostcode"),
    ("billing_city", "wos_BillingCity"),
    ("billing_state", "wos_BillingState"),
    ("billing_country", "wos_BillingCountry"),
    ("shipping_first_name", "wos_ShippingFirstName"),
    ("shipping_last_name", "wos_ShippingLastName"),
    ("shipping_company", "wos_ShippingCompany"),
    ("shipping_phone", "wos_ShippingPhone"),
    ("shipping_address_1", "wos_ShippingAddress1"),
    ("shipping_address_2", "wos_ShippingAddress2"),
    ("shipping_postcode", "wos_ShippingPostcode"),
    ("shipping_city", "wos_ShippingCity"),
    ("shipping_state", "wos_ShippingState"),
    ("shipping_country", "wos_ShippingCountry"),
    ("customer_note", "wos_CustomerNote"),
    ("wt_import_key", "wos_WtImportKey"),
    ("shipping_items", "wos_ShippingItems"),
    ("fee_items", "wos_FeeItems"),
    ("tax_items", "wos_TaxItems"),
    ("coupon_items", "wos_CouponItems"),
    ("refund_items", "wos_RefundItems"),
    ("order_notes", "wos_OrderNotes"),
    ("download_permissions", "wos_DownloadPermissions"),
    ("meta_wpml_language", "wos_MetaWpmlLanguage"),
];

/// Which resolution rule produced an internal field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    /// Exact match in [`KNOWN_FIELDS`].
    Lookup,
    /// `line_item_<n>` columns.
    LineItem,
    /// `product_item_<index>_<field>` columns.
    ProductItem,
    /// Unrecognized key, prefixed as-is.
    Fallback,
}

impl ResolutionRule {
    pub const ALL: [Self; 4] = [
        Self::Lookup,
        Self::LineItem,
        Self::ProductItem,
        Self::Fallback,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lookup => "lookup",
            Self::LineItem => "line item",
            Self::ProductItem => "product item",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved internal field name and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub field_name: String,
    pub rule: ResolutionRule,
}

impl Resolution {
    fn new(field_name: String, rule: ResolutionRule) -> Self {
        Self { field_name, rule }
    }
}

/// Reduces a raw header to its lookup key.
pub fn base_key(header: &str) -> String {
    header
        .replace([' ', ':'], "_")
        .replace(['"', '\''], "")
        .to_lowercase()
}

/// Looks up a base key in [`KNOWN_FIELDS`].
pub fn known_field(base_key: &str) -> Option<&'static str> {
    KNOWN_FIELDS
        .iter()
        .find(|(key, _)| *key == base_key)
        .map(|(_, name)| *name)
}

/// Resolves a base key to its internal field name.
///
/// # Errors
///
/// Returns [`MapError::MalformedProductItem`] when a `product_item_` key has
/// no item index.
pub fn resolve(base_key: &str) -> Result<Resolution> {
    if let Some(name) = known_field(base_key) {
        return Ok(Resolution::new(name.to_string(), ResolutionRule::Lookup));
    }
    if let Some(number) = base_key.strip_prefix(LINE_ITEM_PREFIX) {
        return Ok(Resolution::new(
            format!("{FIELD_PREFIX}LineItem{number}"),
            ResolutionRule::LineItem,
        ));
    }
    if base_key.starts_with(PRODUCT_ITEM_PREFIX) {
        return resolve_product_item(base_key);
    }
    Ok(Resolution::new(
        format!("{FIELD_PREFIX}{base_key}"),
        ResolutionRule::Fallback,
    ))
}

fn resolve_product_item(base_key: &str) -> Result<Resolution> {
    let segments: Vec<&str> = base_key.split('_').collect();
    let (Some(index), Some(field_segments)) = (segments.get(2), segments.get(3..)) else {
        return Err(malformed(base_key));
    };
    if index.is_empty() {
        return Err(malformed(base_key));
    }
    let field = capitalize_first(&field_segments.join("_"));
    Ok(Resolution::new(
        format!("{FIELD_PREFIX}ProductItem{index}{field}"),
        ResolutionRule::ProductItem,
    ))
}

fn malformed(base_key: &str) -> MapError {
    MapError::MalformedProductItem {
        base_key: base_key.to_string(),
    }
}

/// Upper-cases the first character only.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the internal field name for a raw header.
///
/// # Errors
///
/// See [`resolve`].
pub fn field_name(header: &str) -> Result<String> {
    resolve(&base_key(header)).map(|resolution| resolution.field_name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn base_key_normalizes_spaces_colons_and_case() {
        assert_eq!(base_key("Product Item 12 Quantity"), "product_item_12_quantity");
        assert_eq!(base_key("meta:wpml_language"), "meta_wpml_language");
        assert_eq!(base_key(r#""Order ID""#), "order_id");
    }

    #[test]
    fn lookup_table_cases() {
        assert_eq!(field_name("order_id").unwrap(), "wos_OrderId");
        assert_eq!(field_name("order_date").unwrap(), "wos_OrderDate");
        assert_eq!(
            field_name("meta:wpml_language").unwrap(),
            "wos_MetaWpmlLanguage"
        );
        assert_eq!(field_name("billing_address_1").unwrap(), "wos_BillingAddress1");
    }

    #[test]
    fn line_item_prefix_rule() {
        let resolution = resolve("line_item_3").unwrap();
        assert_eq!(resolution.field_name, "wos_LineItem3");
        assert_eq!(resolution.rule, ResolutionRule::LineItem);
        assert_eq!(field_name("line_item_24").unwrap(), "wos_LineItem24");
    }

    #[test]
    fn product_item_rule_capitalizes_first_letter_only() {
        let resolution = resolve("product_item_12_quantity").unwrap();
        assert_eq!(resolution.field_name, "wos_ProductItem12Quantity");
        assert_eq!(resolution.rule, ResolutionRule::ProductItem);
        assert_eq!(field_name("Product Item 1 SKU").unwrap(), "wos_ProductItem1Sku");
        assert_eq!(field_name("Product Item 3 id").unwrap(), "wos_ProductItem3Id");
    }

    #[test]
    fn product_item_field_keeps_inner_underscores() {
        assert_eq!(
            field_name("Product Item 2 Tax Class").unwrap(),
            "wos_ProductItem2Tax_class"
        );
    }

    #[test]
    fn product_item_without_field_uses_index_only() {
        assert_eq!(field_name("product_item_7").unwrap(), "wos_ProductItem7");
    }

    #[test]
    fn product_item_without_index_is_malformed() {
        let err = resolve("product_item_").unwrap_err();
        assert!(matches!(
            err,
            MapError::MalformedProductItem { ref base_key } if base_key == "product_item_"
        ));
        assert!(resolve("product_item__name").is_err());
    }

    #[test]
    fn unknown_key_falls_back_without_recasing() {
        let resolution = resolve("foo_bar").unwrap();
        assert_eq!(resolution.field_name, "wos_foo_bar");
        assert_eq!(resolution.rule, ResolutionRule::Fallback);
        assert_eq!(field_name("Shipping Zone").unwrap(), "wos_shipping_zone");
    }

    #[test]
    fn known_fields_are_unique_and_prefixed() {
        let keys: HashSet<_> = KNOWN_FIELDS.iter().map(|(key, _)| *key).collect();
        let names: HashSet<_> = KNOWN_FIELDS.iter().map(|(_, name)| *name).collect();
        assert_eq!(keys.len(), KNOWN_FIELDS.len());
        assert_eq!(names.len(), KNOWN_FIELDS.len());
        assert_eq!(KNOWN_FIELDS.len(), 56);
        assert!(names.iter().all(|name| name.starts_with(FIELD_PREFIX)));
    }
}
