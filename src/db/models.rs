use chrono::NaiveDateTime;

use crate::types::{Price, Sentiment, SentimentRecord};

/// Raw row as returned by the dashboard query.
/// Everything the ingestion job may leave NULL is optional so one bad row
/// cannot fail the whole read. Price arrives as text so malformed values can be coerced.
#[derive(Debug, sqlx::FromRow)]
pub struct SentimentRow {
    pub headline: Option<String>,
    pub sentiment: Option<String>,
    pub score: Option<f64>,
    pub reason: Option<String>,
    pub price: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<SentimentRow> for SentimentRecord {
    fn from(row: SentimentRow) -> Self {
        let raw_label = row.sentiment.as_deref().map(str::trim).unwrap_or_default();
        let sentiment = Sentiment::from_label(raw_label);
        let label = if raw_label.is_empty() {
            sentiment.label().to_string()
        } else {
            raw_label.to_string()
        };
        Self {
            sentiment,
            label,
            price: Price::parse(row.price.as_deref()),
            headline: row.headline.unwrap_or_default(),
            score: row.score.unwrap_or(0.0),
            reason: row.reason.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}
