use crate::model::InvoiceItem;

/// Subtotal, tax and total derived from a set of line items. Plain f64
/// arithmetic; rounding happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Derive invoice totals from line items: subtotal is the sum of
/// quantity * rate in the order given, tax is `subtotal * tax_rate`,
/// total is their sum. An empty item list yields all zeros.
pub fn compute_totals(items: &[InvoiceItem], tax_rate: f64) -> Totals {
    let subtotal: f64 = items.iter().map(|i| i.quantity as f64 * i.rate).sum();
    let tax = subtotal * tax_rate;
    let total = subtotal + tax;
    Totals {
        subtotal,
        tax,
        total,
    }
}

/// Format a money amount as fixed USD with two decimal places and
/// thousands separators (e.g., 1234.5 -> "$1,234.50").
pub fn format_money(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if value < 0.0 {
        format!("-${grouped}.{frac}")
    } else {
        format!("${grouped}.{frac}")
    }
}
