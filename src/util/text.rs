/// Formats a number with comma thousands separators and a fixed number of
/// decimal places, e.g. `format_with_commas(65000.5, 2)` => `"65,000.50"`.
pub fn format_with_commas(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }

    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(65000.5, 2), "65,000.50");
        assert_eq!(format_with_commas(9_800_000.0, 0), "9,800,000");
        assert_eq!(format_with_commas(60000.1, 2), "60,000.10");
        assert_eq!(format_with_commas(123.0, 2), "123.00");
        assert_eq!(format_with_commas(0.0, 2), "0.00");
        assert_eq!(format_with_commas(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_with_commas(-1234.5, 2), "-1,234.50");
    }
}
