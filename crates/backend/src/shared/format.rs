/// Formats a number with thousands separators (commas)
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Two-decimal weight string shown to the customer. This is the unrounded
/// chargeable weight; billing rounds up separately.
pub fn format_weight_kg(kg: f64) -> String {
    format!("{:.2}", kg)
}
