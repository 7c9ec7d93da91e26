//! Price formatting for the menu.

/// Format a price in Turkish lira: no decimals, `.` as the thousands
/// separator, `₺` in front. An absent price renders as nothing at all, so
/// cards without one simply omit the tag.
pub fn format_price(price: Option<f64>) -> String {
    let Some(value) = price else {
        return String::new();
    };

    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();

    // Insert dots every 3 digits from the right.
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded < 0 {
        format!("-₺{grouped}")
    } else {
        format!("₺{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(45.0)), "₺45");
        assert_eq!(format_price(Some(1250.0)), "₺1.250");
        assert_eq!(format_price(Some(1234567.0)), "₺1.234.567");
    }

    #[test]
    fn test_rounds_to_whole_lira() {
        assert_eq!(format_price(Some(49.5)), "₺50");
        assert_eq!(format_price(Some(49.4)), "₺49");
    }

    #[test]
    fn test_absent_price_is_empty() {
        assert_eq!(format_price(None), "");
    }
}
