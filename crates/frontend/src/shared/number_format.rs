//! Number formatting for Brazilian currency display.

/// Group the integer digits with `sep` every three positions
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// `1234.5` -> `"1.234,50"`
pub fn format_decimal_br(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let negative = value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.');
    let sign = if negative { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, group_thousands(integer_part, '.'), d),
        None => format!("{}{}", sign, group_thousands(integer_part, '.')),
    }
}

/// `1234.56` -> `"R$ 1.234,56"`
pub fn format_brl(value: f64) -> String {
    let text = format_decimal_br(value, 2);
    match text.strip_prefix('-') {
        Some(rest) => format!("-R$ {}", rest),
        None => format!("R$ {}", text),
    }
}

/// `12.345` -> `"12,3%"`
pub fn format_pct(value: f64) -> String {
    format!("{}%", format_decimal_br(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
        assert_eq!(format_brl(-1500.5), "-R$ 1.500,50");
    }

    #[test]
    fn test_tiny_negative_is_not_signed() {
        assert_eq!(format_brl(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(12.345), "12,3%");
        assert_eq!(format_pct(100.0), "100,0%");
    }
}
