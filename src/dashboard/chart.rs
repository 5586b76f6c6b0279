//! Dual-axis trend chart as a Vega-Lite v5 spec.
//!
//! Price and score share the temporal x-axis but get independent y scales.
//! The price layer is a faded line so it reads as context; scores are points
//! coloured by sentiment. Pan/zoom comes from an interval selection bound to scales.

use serde_json::{json, Value};

use crate::dashboard::format::format_timestamp;
use crate::types::{Sentiment, SentimentRecord};

pub const CHART_ELEMENT_ID: &str = "trend-chart";

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
const PRICE_LINE_COLOR: &str = "#f7931a";
const PRICE_LINE_OPACITY: f64 = 0.35;
const CHART_HEIGHT: u32 = 380;
/// Breaks the line at null prices and keeps them out of the y domain.
const PRICE_LINE_INVALID_MODE: &str = "break-paths-filter-domains";

/// One chart datum per record. Unknown prices become `null` and leave a gap in the price line.
pub fn chart_rows(records: &[SentimentRecord]) -> Vec<Value> {
    records
        .iter()
        .map(|r| {
            json!({
                "created_at": r.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "time": format_timestamp(&r.created_at),
                "score": r.score,
                "price": r.price.displayable(),
                "sentiment": r.sentiment.label(),
                "label": r.label,
                "headline": r.headline,
                "reason": r.reason,
            })
        })
        .collect()
}

pub fn chart_spec(records: &[SentimentRecord]) -> Value {
    let domain: Vec<&str> = Sentiment::ALL.iter().map(|s| s.label()).collect();
    let range: Vec<&str> = Sentiment::ALL.iter().map(|s| s.color()).collect();

    let tooltip = json!([
        { "field": "label", "type": "nominal", "title": "Sentiment" },
        { "field": "headline", "type": "nominal", "title": "Headline" },
        { "field": "reason", "type": "nominal", "title": "Reason" },
        { "field": "score", "type": "quantitative", "title": "Score", "format": ".2f" },
        { "field": "price", "type": "quantitative", "title": "BTC Price", "format": "$,.2f" },
        { "field": "time", "type": "nominal", "title": "Time" }
    ]);

    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "width": "container",
        "height": CHART_HEIGHT,
        "data": { "values": chart_rows(records) },
        "encoding": {
            "x": { "field": "created_at", "type": "temporal", "title": "Time" }
        },
        "layer": [
            {
                "mark": {
                    "type": "line",
                    "color": PRICE_LINE_COLOR,
                    "opacity": PRICE_LINE_OPACITY,
                    "point": false,
                    "invalid": PRICE_LINE_INVALID_MODE
                },
                "encoding": {
                    "y": {
                        "field": "price",
                        "type": "quantitative",
                        "title": "BTC Price (USD)",
                        "scale": { "zero": false },
                        "axis": { "titleColor": PRICE_LINE_COLOR }
                    },
                    "tooltip": tooltip
                }
            },
            {
                "params": [
                    { "name": "pan_zoom", "select": "interval", "bind": "scales" }
                ],
                "mark": { "type": "circle", "size": 100 },
                "encoding": {
                    "y": {
                        "field": "score",
                        "type": "quantitative",
                        "title": "Sentiment Score (-1 to 1)"
                    },
                    "color": {
                        "field": "sentiment",
                        "type": "nominal",
                        "title": "Sentiment",
                        "scale": { "domain": domain, "range": range }
                    },
                    "tooltip": tooltip
                }
            }
        ],
        "resolve": { "scale": { "y": "independent" } }
    })
}

/// Serializes the spec for inline `<script>` use; `</` is escaped so text
/// inside the data cannot close the script element.
pub fn embed_json(spec: &Value) -> String {
    spec.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;
    use chrono::NaiveDate;

    fn record(price: Price) -> SentimentRecord {
        SentimentRecord {
            headline: "BTC rallies".to_string(),
            sentiment: Sentiment::Positive,
            label: "POSITIVE".to_string(),
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
    fn axes_are_independent_and_colours_fixed() {
        let spec = chart_spec(&[record(Price::Known(67000.5))]);
        assert_eq!(spec["resolve"]["scale"]["y"], "independent");
        assert_eq!(spec["encoding"]["x"]["type"], "temporal");

        let points = &spec["layer"][1];
        assert_eq!(
            points["encoding"]["color"]["scale"]["domain"],
            json!(["POSITIVE", "NEGATIVE", "NEUTRAL"])
        );
        assert_eq!(
            points["encoding"]["color"]["scale"]["range"],
            json!(["green", "red", "gray"])
        );
        assert_eq!(points["params"][0]["bind"], "scales");

        let line = &spec["layer"][0];
        assert_eq!(line["mark"]["type"], "line");
        assert!(line["mark"]["opacity"].as_f64().unwrap() < 1.0);
        assert_eq!(line["mark"]["invalid"], "break-paths-filter-domains");
    }

    #[test]
    fn single_record_yields_one_point_and_one_vertex() {
        let rows = chart_rows(&[record(Price::Known(67000.5))]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["created_at"], "2024-03-01T12:00:00");
        assert_eq!(rows[0]["score"], 0.82);
        assert_eq!(rows[0]["price"], 67000.5);
        assert_eq!(rows[0]["sentiment"], "POSITIVE");
    }

    #[test]
    fn unknown_price_is_null_in_chart_data() {
        let rows = chart_rows(&[record(Price::Unknown), record(Price::Known(-4.0))]);
        assert!(rows[0]["price"].is_null());
        assert!(rows[1]["price"].is_null());
    }

    #[test]
    fn unrecognized_label_keeps_neutral_colour_but_raw_tooltip() {
        let mut r = record(Price::Unknown);
        r.sentiment = Sentiment::Neutral;
        r.label = "MIXED".to_string();
        let rows = chart_rows(&[r]);
        assert_eq!(rows[0]["sentiment"], "NEUTRAL");
        assert_eq!(rows[0]["label"], "MIXED");
    }

    #[test]
    fn tooltips_expose_all_fields() {
        let spec = chart_spec(&[record(Price::Unknown)]);
        let fields: Vec<&str> = spec["layer"][1]["encoding"]["tooltip"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["label", "headline", "reason", "score", "price", "time"]);
    }

    #[test]
    fn embedded_json_cannot_close_script_tag() {
        let mut r = record(Price::Unknown);
        r.headline = "</script><script>alert(1)</script>".to_string();
        let embedded = embed_json(&chart_spec(&[r]));
        assert!(!embedded.contains("</script>"));
    }
}
