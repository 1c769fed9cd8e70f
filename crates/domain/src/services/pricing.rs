//! Invoice pricing and amount formatting.

use chrono::{DateTime, FixedOffset, Utc};

/// GST portion of a price.
pub fn gst_amount(price: f64, gst_percentage: f64) -> f64 {
    price * gst_percentage / 100.0
}

/// Tax-inclusive total: price + price × gst / 100.
///
/// The value is not rounded; rounding happens only when formatting.
pub fn total_amount(price: f64, gst_percentage: f64) -> f64 {
    price + gst_amount(price, gst_percentage)
}

/// Formats an amount with Indian digit grouping and at most two fraction
/// digits, e.g. `12,34,567.5`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = group_indian(whole);
    if fraction != 0 {
        let digits = format!("{:02}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    if amount < 0.0 && cents != 0 {
        out.insert(0, '-');
    }
    out
}

/// Formats an amount in rupees, e.g. `₹11,800`.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{}", format_inr(amount))
}

/// Renders an invoice date as `d/m/yyyy` in the display offset.
pub fn format_invoice_date(created_at: DateTime<Utc>, offset: FixedOffset) -> String {
    created_at.with_timezone(&offset).format("%-d/%-m/%Y").to_string()
}

/// Groups the last three digits, then pairs: 1234567 -> 12,34,567.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
