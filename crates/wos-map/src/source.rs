//! Embedded source header lines.

/// Column header line of the WooCommerce order CSV export.
///
/// 224 columns: the order and customer fields, 24 `line_item_N` columns and
/// six `"Product Item N ..."` columns for each of 24 product slots. The
/// product columns are quoted in the export and carry spaces in their names.
pub const ORDER_EXPORT_HEADERS: &str = concat!(
    r#"order_id,order_number,order_date,paid_date,status,shipping_total,shipping_tax_total,"#,
    r#"fee_total,fee_tax_total,tax_total,cart_discount,order_discount,discount_total,"#,
    r#"order_total,order_subtotal,order_currency,payment_method,payment_method_title,"#,
    r#"transaction_id,customer_ip_address,customer_user_agent,shipping_method,customer_id,"#,
    r#"customer_user,customer_email,billing_first_name,billing_last_name,billing_company,"#,
    r#"billing_email,billing_phone,billing_address_1,billing_address_2,billing_postcode,"#,
    r#"billing_city,billing_state,billing_country,shipping_first_name,shipping_last_name,"#,
    r#"shipping_company,shipping_phone,shipping_address_1,shipping_address_2,shipping_postcode,"#,
    r#"shipping_city,shipping_state,shipping_country,customer_note,wt_import_key,"#,
    r#"shipping_items,fee_items,tax_items,coupon_items,refund_items,order_notes,"#,
    r#"download_permissions,meta:wpml_language,line_item_1,line_item_2,line_item_3,"#,
    r#"line_item_4,line_item_5,line_item_6,line_item_7,line_item_8,line_item_9,"#,
    r#"line_item_10,line_item_11,line_item_12,line_item_13,line_item_14,line_item_15,"#,
    r#"line_item_16,line_item_17,line_item_18,line_item_19,line_item_20,line_item_21,"#,
    r#"line_item_22,line_item_23,line_item_24,"Product Item 1 Name","Product Item 1 id","#,
    r#""Product Item 1 SKU","Product Item 1 Quantity","Product Item 1 Total","Product Item 1 Subtotal","#,
    r#""Product Item 2 Name","Product Item 2 id","Product Item 2 SKU","Product Item 2 Quantity","#,
    r#""Product Item 2 Total","Product Item 2 Subtotal","Product Item 3 Name","Product Item 3 id","#,
    r#""Product Item 3 SKU","Product Item 3 Quantity","Product Item 3 Total","Product Item 3 Subtotal","#,
    r#""Product Item 4 Name","Product Item 4 id","Product Item 4 SKU","Product Item 4 Quantity","#,
    r#""Product Item 4 Total","Product Item 4 Subtotal","Product Item 5 Name","Product Item 5 id","#,
    r#""Product Item 5 SKU","Product Item 5 Quantity","Product Item 5 Total","Product Item 5 Subtotal","#,
    r#""Product Item 6 Name","Product Item 6 id","Product Item 6 SKU","Product Item 6 Quantity","#,
    r#""Product Item 6 Total","Product Item 6 Subtotal","Product Item 7 Name","Product Item 7 id","#,
    r#""Product Item 7 SKU","Product Item 7 Quantity","Product Item 7 Total","Product Item 7 Subtotal","#,
    r#""Product Item 8 Name","Product Item 8 id","Product Item 8 SKU","Product Item 8 Quantity","#,
    r#""Product Item 8 Total","Product Item 8 Subtotal","Product Item 9 Name","Product Item 9 id","#,
    r#""Product Item 9 SKU","Product Item 9 Quantity","Product Item 9 Total","Product Item 9 Subtotal","#,
    r#""Product Item 10 Name","Product Item 10 id","Product Item 10 SKU","Product Item 10 Quantity","#,
    r#""Product Item 10 Total","Product Item 10 Subtotal","Product Item 11 Name","#,
    r#""Product Item 11 id","Product Item 11 SKU","Product Item 11 Quantity","Product Item 11 Total","#,
    r#""Product Item 11 Subtotal","Product Item 12 Name","Product Item 12 id","Product Item 12 SKU","#,
    r#""Product Item 12 Quantity","Product Item 12 Total","Product Item 12 Subtotal","#,
    r#""Product Item 13 Name","Product Item 13 id","Product Item 13 SKU","Product Item 13 Quantity","#,
    r#""Product Item 13 Total","Product Item 13 Subtotal","Product Item 14 Name","#,
    r#""Product Item 14 id","Product Item 14 SKU","Product Item 14 Quantity","Product Item 14 Total","#,
    r#""Product Item 14 Subtotal","Product Item 15 Name","Product Item 15 id","Product Item 15 SKU","#,
    r#""Product Item 15 Quantity","Product Item 15 Total","Product Item 15 Subtotal","#,
    r#""Product Item 16 Name","Product Item 16 id","Product Item 16 SKU","Product Item 16 Quantity","#,
    r#""Product Item 16 Total","Product Item 16 Subtotal","Product Item 17 Name","#,
    r#""Product Item 17 id","Product Item 17 SKU","Product Item 17 Quantity","Product Item 17 Total","#,
    r#""Product Item 17 Subtotal","Product Item 18 Name","Product Item 18 id","Product Item 18 SKU","#,
    r#""Product Item 18 Quantity","Product Item 18 Total","Product Item 18 Subtotal","#,
    r#""Product Item 19 Name","Product Item 19 id","Product Item 19 SKU","Product Item 19 Quantity","#,
    r#""Product Item 19 Total","Product Item 19 Subtotal","Product Item 20 Name","#,
    r#""Product Item 20 id","Product Item 20 SKU","Product Item 20 Quantity","Product Item 20 Total","#,
    r#""Product Item 20 Subtotal","Product Item 21 Name","Product Item 21 id","Product Item 21 SKU","#,
    r#""Product Item 21 Quantity","Product Item 21 Total","Product Item 21 Subtotal","#,
    r#""Product Item 22 Name","Product Item 22 id","Product Item 22 SKU","Product Item 22 Quantity","#,
    r#""Product Item 22 Total","Product Item 22 Subtotal","Product Item 23 Name","#,
    r#""Product Item 23 id","Product Item 23 SKU","Product Item 23 Quantity","Product Item 23 Total","#,
    r#""Product Item 23 Subtotal","Product Item 24 Name","Product Item 24 id","Product Item 24 SKU","#,
    r#""Product Item 24 Quantity","Product Item 24 Total","Product Item 24 Subtotal""#,
);

/// Number of columns in [`ORDER_EXPORT_HEADERS`].
pub const ORDER_EXPORT_COLUMN_COUNT: usize = 224;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_line_is_a_single_line() {
        assert!(!ORDER_EXPORT_HEADERS.contains('\n'));
        assert!(ORDER_EXPORT_HEADERS.starts_with("order_id,order_number,"));
        assert!(ORDER_EXPORT_HEADERS.ends_with(r#""Product Item 24 Subtotal""#));
    }
}
