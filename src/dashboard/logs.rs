use crate::dashboard::format::{escape_html, format_price, format_timestamp};
use crate::types::SentimentRecord;

/// One collapsible entry per record, in fetch order.
pub fn render_logs(records: &[SentimentRecord]) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"logs\">\n");
    for record in records {
        out.push_str(&render_entry(record));
    }
    out.push_str("</section>\n");
    out
}

fn render_entry(record: &SentimentRecord) -> String {
    format!(
        "<details class=\"log-entry\"><summary>{icon} {headline}</summary>\
         <div class=\"log-body\"><p><strong>AI Reasoning:</strong> {reason}</p>\
         <div class=\"caption\">Price: {price} | Score: {score} | Time: {time}</div></div></details>\n",
        icon = record.sentiment.icon(),
        headline = escape_html(&record.headline),
        reason = escape_html(&record.reason),
        price = format_price(record.price),
        score = record.score,
        time = format_timestamp(&record.created_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Price, Sentiment};
    use chrono::NaiveDate;

    fn record(headline: &str, sentiment: Sentiment, price: Price) -> SentimentRecord {
        SentimentRecord {
            headline: headline.to_string(),
            sentiment,
            label: sentiment.label().to_string(),
            score: 0.82,
            reason: "ETF inflows".to_string(),
            price,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn entry_shows_icon_reason_and_caption() {
        let html = render_logs(&[record("BTC rallies", Sentiment::Positive, Price::Known(67000.5))]);
        assert_eq!(html.matches("<details").count(), 1);
        assert!(html.contains("<summary>🟢 BTC rallies</summary>"));
        assert!(html.contains("ETF inflows"));
        assert!(html.contains("Price: $67,000.50 | Score: 0.82 | Time: 2024-03-01 12:00:00"));
    }

    #[test]
    fn entries_keep_fetch_order() {
        let html = render_logs(&[
            record("newest", Sentiment::Negative, Price::Unknown),
            record("older", Sentiment::Neutral, Price::Unknown),
        ]);
        let newest = html.find("🔴 newest").unwrap();
        let older = html.find("⚪ older").unwrap();
        assert!(newest < older);
    }

    #[test]
    fn unknown_price_caption_uses_placeholder() {
        let html = render_logs(&[record("flat", Sentiment::Neutral, Price::Unknown)]);
        assert!(html.contains("Price: — |"));
    }

    #[test]
    fn headline_markup_is_escaped() {
        let html = render_logs(&[record("<img src=x>", Sentiment::Neutral, Price::Unknown)]);
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(!html.contains("<img"));
    }
}
