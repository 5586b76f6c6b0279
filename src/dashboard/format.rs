use chrono::NaiveDateTime;

use crate::types::Price;

/// Shown wherever a price is unknown or not positive.
pub const PLACEHOLDER: &str = "—";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `67000.5` → `$67,000.50`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

pub fn format_price(price: Price) -> String {
    price
        .displayable()
        .map_or_else(|| PLACEHOLDER.to_string(), format_usd)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Cuts on a char boundary and appends an ellipsis when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(format_usd(67000.5), "$67,000.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(999.0), "$999.00");
        assert_eq!(format_usd(0.5), "$0.50");
        assert_eq!(format_usd(-1500.0), "-$1,500.00");
    }

    #[test]
    fn price_placeholder_for_unknown_and_non_positive() {
        assert_eq!(format_price(Price::Unknown), PLACEHOLDER);
        assert_eq!(format_price(Price::Known(0.0)), PLACEHOLDER);
        assert_eq!(format_price(Price::Known(-2.0)), PLACEHOLDER);
        assert_eq!(format_price(Price::Known(64_250.0)), "$64,250.00");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Bitcoin ₿ surges past", 10), "Bitcoin ₿…");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"ETF" & 'flows'</b>"#),
            "&lt;b&gt;&quot;ETF&quot; &amp; &#39;flows&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn timestamp_is_second_precision() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_milli_opt(9, 5, 7, 250)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01 09:05:07");
    }
}
