use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::db::connection::ConnectionProvider;
use crate::db::models::SentimentRow;
use crate::error::{AppError, Result};
use crate::types::{Notice, Price, SentimentRecord};

/// Where the dashboard reads from. Names are validated as identifiers by `Config`.
#[derive(Debug, Clone)]
pub struct RecordSource {
    pub table: String,
    pub price_column: String,
}

impl RecordSource {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            table: cfg.sentiment_table.clone(),
            price_column: cfg.price_column.clone(),
        }
    }

    /// The single read the dashboard issues: newest rows first, capped by `$1`.
    /// Sorting uses the source column, not the `::timestamp` output alias.
    pub fn query(&self) -> String {
        format!(
            "SELECT s.headline, s.sentiment, s.score::float8 AS score, s.reason, \
             s.{price}::text AS price, s.created_at::timestamp AS created_at \
             FROM {table} AS s \
             WHERE s.created_at IS NOT NULL \
             ORDER BY s.created_at DESC \
             LIMIT $1",
            price = self.price_column,
            table = self.table,
        )
    }
}

/// Result of one fetch. Degraded cycles carry an empty record set and a notice.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub records: Vec<SentimentRecord>,
    pub notice: Option<Notice>,
}

impl FetchOutcome {
    fn degraded(notice: Notice) -> Self {
        Self {
            records: Vec::new(),
            notice: Some(notice),
        }
    }
}

/// Runs the dashboard query. Never fails: connection and query errors
/// become notices on an empty outcome.
pub async fn fetch_recent(
    provider: &ConnectionProvider,
    source: &RecordSource,
    limit: i64,
) -> FetchOutcome {
    let mut lease = match provider.lease().await {
        Ok(lease) => lease,
        Err(e) => return FetchOutcome::degraded(Notice::ConnectionFailed(e.to_string())),
    };
    let Some(conn) = lease.connection() else {
        return FetchOutcome::default();
    };

    let started = Instant::now();
    let rows: Result<Vec<SentimentRow>> = sqlx::query_as::<_, SentimentRow>(&source.query())
        .bind(limit)
        .fetch_all(conn)
        .await
        .map_err(AppError::from);

    match rows {
        Ok(rows) => {
            let records = normalize_rows(rows);
            info!(
                rows = records.len(),
                limit,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Fetched sentiment records"
            );
            FetchOutcome {
                records,
                notice: None,
            }
        }
        Err(e) => {
            warn!(table = %source.table, "Sentiment query failed: {e}");
            if e.is_connection_lost() {
                lease.discard();
            }
            FetchOutcome::degraded(Notice::QueryFailed(e.to_string()))
        }
    }
}

fn normalize_rows(rows: Vec<SentimentRow>) -> Vec<SentimentRecord> {
    rows.into_iter()
        .map(|row| {
            if row.price.is_some() && Price::parse(row.price.as_deref()) == Price::Unknown {
                debug!(
                    raw_price = ?row.price,
                    created_at = %row.created_at,
                    "Unparseable price coerced to unknown"
                );
            }
            SentimentRecord::from(row)
        })
        .collect()
}
