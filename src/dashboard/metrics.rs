use crate::config::HEADLINE_PREVIEW_CHARS;
use crate::dashboard::format::{escape_html, format_price, truncate};
use crate::types::SentimentRecord;

/// Headline metrics for the newest record plus the total row count.
pub fn render_metrics(latest: &SentimentRecord, count: usize) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"metrics\">\n");

    out.push_str(&format!(
        "<div class=\"metric\" id=\"metric-sentiment\"><div class=\"metric-label\">Latest Sentiment</div>\
         <div class=\"metric-value\">{}</div>\
         <span class=\"metric-delta {}\">{:.2}</span></div>\n",
        escape_html(&latest.label),
        latest.sentiment.emphasis().css_class(),
        latest.score,
    ));

    out.push_str(&format!(
        "<div class=\"metric\" id=\"metric-price\"><div class=\"metric-label\">BTC Price</div>\
         <div class=\"metric-value\">{}</div></div>\n",
        format_price(latest.price),
    ));

    out.push_str(&format!(
        "<div class=\"metric\" id=\"metric-count\"><div class=\"metric-label\">Data Points Analyzed</div>\
         <div class=\"metric-value\">{count}</div></div>\n",
    ));

    out.push_str(&format!(
        "<div class=\"metric\" id=\"metric-headline\"><div class=\"metric-label\">Latest Headline</div>\
         <div class=\"headline-preview\">{}</div></div>\n",
        escape_html(&truncate(&latest.headline, HEADLINE_PREVIEW_CHARS)),
    ));

    out.push_str("</section>\n");
    out
}
