/// Compact number formatting, e.g. `1200` becomes `1.2k`
pub fn format_number(number: i64) -> String {
    use numfmt::*;
    if number.abs() < 1000 {
        return number.to_string();
    }
    let mut formatter = Formatter::default()
        .scales(Scales::metric())
        .precision(Precision::Decimals(1));
    formatter.fmt(number as f64).replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_verbatim() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn large_numbers_are_scaled() {
        let formatted = format_number(1200);
        assert!(formatted.starts_with("1.2"), "{formatted}");
        assert!(formatted.len() < 6, "{formatted}");
    }
}
