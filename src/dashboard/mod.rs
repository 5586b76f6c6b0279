//! Server-rendered sentiment dashboard.
//!
//! - `metrics.rs`: headline metrics from the newest record
//! - `chart.rs`: Vega-Lite dual-axis trend chart
//! - `logs.rs`: expandable per-record reasoning log
//! - `css.rs`: embedded stylesheet
//!
//! Everything is rendered from one in-memory record slice per request.

mod chart;
mod css;
pub mod format;
mod logs;
mod metrics;

use chrono::{DateTime, Utc};

use crate::dashboard::format::escape_html;
use crate::types::{Notice, SentimentRecord};

const VEGA_SCRIPTS: &str = r#"    <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
"#;

const WAITING_MESSAGE: &str = "Waiting for data... Run your Lambda Producer to fetch news!";

/// Everything one render cycle needs.
#[derive(Debug)]
pub struct Page<'a> {
    pub records: &'a [SentimentRecord],
    pub notice: Option<&'a Notice>,
    pub rendered_at: DateTime<Utc>,
}

/// Renders the full HTML document.
pub fn render_page(page: &Page<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("    <title>Crypto Sentiment AI</title>\n");
    out.push_str("    <style>");
    out.push_str(css::STYLES);
    out.push_str("</style>\n");
    if !page.records.is_empty() {
        out.push_str(VEGA_SCRIPTS);
    }
    out.push_str("</head>\n<body>\n<div class=\"container\">\n");

    out.push_str(&render_header(page));

    if let Some(notice) = page.notice {
        out.push_str(&format!(
            "<div class=\"alert alert-error\" id=\"notice\">{}</div>\n",
            escape_html(&notice.message())
        ));
    }

    match page.records.first() {
        None => {
            out.push_str(&format!(
                "<div class=\"alert alert-info\" id=\"waiting\">{WAITING_MESSAGE}</div>\n"
            ));
        }
        Some(latest) => {
            out.push_str(&metrics::render_metrics(latest, page.records.len()));

            out.push_str("<hr>\n");
            out.push_str(&format!(
                "<h2>Sentiment Trend (Last {} News Items)</h2>\n",
                page.records.len()
            ));
            out.push_str(&render_chart(page.records));

            out.push_str("<hr>\n");
            out.push_str("<h2>🔍 Analyst Logs (Llama 3 Reasoning)</h2>\n");
            out.push_str(&logs::render_logs(page.records));
        }
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn render_header(page: &Page<'_>) -> String {
    format!(
        "<header><div><h1>🧠 AI Crypto Analyst</h1>\
         <div class=\"caption\">Tracking Bitcoin Sentiment using Llama 3 &amp; AWS Lambda \
         · rendered {}</div></div>\
         <form method=\"post\" action=\"/refresh\">\
         <button class=\"btn\" type=\"submit\" id=\"refresh\">🔄 Refresh Data</button>\
         </form></header>\n",
        page.rendered_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn render_chart(records: &[SentimentRecord]) -> String {
    let spec = chart::embed_json(&chart::chart_spec(records));
    format!(
        "<div id=\"{id}\"></div>\n\
         <script>\n\
         vegaEmbed('#{id}', {spec}, {{ actions: false }}).catch(console.error);\n\
         </script>\n",
        id = chart::CHART_ELEMENT_ID,
    )
}
