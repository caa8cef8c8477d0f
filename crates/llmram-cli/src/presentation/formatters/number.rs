use llmram_types::BYTES_PER_GB;

/// Parameter counts are always shown with two decimals, negatives included.
pub fn format_billions(billions: f64) -> String {
    format!("{:.2}", billions)
}

/// Up to three decimals with trailing zeros dropped: `16`, `1.5`, `1.024`.
pub fn format_gb(gb: f64) -> String {
    let text = format!("{:.3}", gb);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

pub fn format_bytes_as_gb(bytes: f64) -> String {
    format_gb(bytes / BYTES_PER_GB)
}

pub fn format_percent(ratio: f64) -> String {
    format!("{}%", format_gb(ratio * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_billions() {
        assert_eq!(format_billions(25.952), "25.95");
        assert_eq!(format_billions(16.0), "16.00");
        assert_eq!(format_billions(-4.048), "-4.05");
    }

    #[test]
    fn test_format_gb() {
        assert_eq!(format_gb(16.0), "16");
        assert_eq!(format_gb(1.5), "1.5");
        assert_eq!(format_gb(1.024), "1.024");
        assert_eq!(format_gb(0.0), "0");
        assert_eq!(format_gb(-0.0001), "0");
        assert_eq!(format_gb(-2.5), "-2.5");
    }

    #[test]
    fn test_format_bytes_and_percent() {
        assert_eq!(format_bytes_as_gb(1_024_000_000.0), "1.024");
        assert_eq!(format_percent(0.3), "30%");
        assert_eq!(format_percent(0.125), "12.5%");
    }
}
