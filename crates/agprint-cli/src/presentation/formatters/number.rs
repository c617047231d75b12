/// `1234567` -> `1,234,567`
pub fn format_grouped(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Milliseconds as seconds with two decimals: `5000` -> `5.00s`
pub fn format_seconds(millis: f64) -> String {
    format!("{:.2}s", millis / 1000.0)
}

/// `0.04213` -> `$0.0421`
pub fn format_cost(usd: f64) -> String {
    format!("${:.4}", usd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(100000), "100,000");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(5000.0), "5.00s");
        assert_eq!(format_seconds(1234.0), "1.23s");
        assert_eq!(format_seconds(0.0), "0.00s");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0.04213), "$0.0421");
        assert_eq!(format_cost(0.0), "$0.0000");
        assert_eq!(format_cost(1.5), "$1.5000");
    }
}
