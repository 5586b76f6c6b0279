//! Process-lifetime Postgres connection, opened on first use.
//! Only a successful open is memoized; a failed attempt is retried on the next lease.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;

pub struct ConnectionProvider {
    options: PgConnectOptions,
    slot: Mutex<Option<PgConnection>>,
}

/// Exclusive access to the memoized connection for one render cycle.
pub struct ConnectionLease<'a> {
    slot: MutexGuard<'a, Option<PgConnection>>,
}

impl ConnectionProvider {
    pub fn new(cfg: &Config) -> Self {
        let options = PgConnectOptions::new()
            .host(&cfg.db_host)
            .port(cfg.db_port)
            .database(&cfg.db_name)
            .username(&cfg.db_user)
            .password(&cfg.db_password);
        Self::with_options(options)
    }

    pub fn with_options(options: PgConnectOptions) -> Self {
        Self {
            options,
            slot: Mutex::new(None),
        }
    }

    /// Locks the slot and opens the connection if none is cached yet.
    pub async fn lease(&self) -> Result<ConnectionLease<'_>> {
        let mut slot = self.slot.lock().await;
        if slot.is_none() {
            match PgConnection::connect_with(&self.options).await {
                Ok(conn) => {
                    info!(
                        host = %self.options.get_host(),
                        database = ?self.options.get_database(),
                        "Database connection established"
                    );
                    *slot = Some(conn);
                }
                Err(e) => {
                    error!(host = %self.options.get_host(), "Error connecting to DB: {e}");
                    return Err(e.into());
                }
            }
        }
        Ok(ConnectionLease { slot })
    }

    pub async fn is_connected(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Closes the cached connection, if any. Called once at shutdown.
    pub async fn close(&self) {
        let Some(conn) = self.slot.lock().await.take() else {
            return;
        };
        match conn.close().await {
            Ok(()) => info!("Database connection closed"),
            Err(e) => warn!("Error closing DB connection: {e}"),
        }
    }
}

impl ConnectionLease<'_> {
    pub fn connection(&mut self) -> Option<&mut PgConnection> {
        self.slot.as_mut()
    }

    /// Drops the cached handle so the next lease opens a fresh connection.
    pub fn discard(&mut self) {
        if self.slot.take().is_some() {
            warn!("Discarding broken DB connection");
        }
    }
}
