//! Fixed-notation number formatting by significant digits.

/// Formats `value` with `digits` significant digits, trimming trailing zeros.
///
/// Integer digits are never rounded away, so the result can carry more than
/// `digits` significant digits for large values. Exponent notation is never used.
pub fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    trim_fraction(format!("{:.*}", decimals, value))
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_keep_their_digits() {
        assert_eq!(significant(40.7128, 9), "40.7128");
        assert_eq!(significant(-74.0060, 9), "-74.006");
        assert_eq!(significant(-0.1278, 9), "-0.1278");
        assert_eq!(significant(12.3456789012, 9), "12.3456789");
        assert_eq!(significant(180.0, 9), "180");
    }

    #[test]
    fn distances_keep_integer_digits() {
        assert_eq!(significant(5576.342, 4), "5576");
        assert_eq!(significant(20037.0779, 4), "20037");
        assert_eq!(significant(12.34567, 4), "12.35");
    }

    #[test]
    fn small_values_use_fraction_digits() {
        assert_eq!(significant(0.0011131709, 4), "0.001113");
        assert_eq!(significant(0.5, 4), "0.5");
    }

    #[test]
    fn zero() {
        assert_eq!(significant(0.0, 4), "0");
        assert_eq!(significant(-0.0, 9), "0");
    }
}
