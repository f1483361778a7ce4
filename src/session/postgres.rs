use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, Pool, Postgres};
use tokio::runtime::Runtime;
use tracing::trace;

use super::Session;
use crate::error::{DriverError, Error, Result};
use crate::util::{sanitize_connection_error, sanitize_url};

/// Blocking [`Session`] over the PostgreSQL wire protocol, usable for
/// PostgreSQL and Redshift.
///
/// The pool is capped at one connection that never idles out, so every
/// call lands on the same backend session.
pub struct PgSession {
    runtime: Runtime,
    pool: Pool<Postgres>,
}

impl PgSession {
    pub fn connect(connection_string: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::runtime(e.to_string()))?;

        let pool = runtime
            .block_on(
                PgPoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(connection_string),
            )
            .map_err(|e| {
                Error::connection(
                    sanitize_url(connection_string),
                    sanitize_connection_error(connection_string, &e.to_string()),
                )
            })?;

        Ok(PgSession { runtime, pool })
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

impl Session for PgSession {
    fn execute(&self, sql: &str) -> std::result::Result<(), DriverError> {
        trace!(sql, "execute");
        self.runtime.block_on(self.pool.execute(sql))?;
        Ok(())
    }

    fn query_names(
        &self,
        sql: &str,
        params: &[&str],
    ) -> std::result::Result<Vec<String>, DriverError> {
        trace!(sql, ?params, "query names");
        let mut query = sqlx::query_scalar::<_, String>(sql);
        for param in params {
            query = query.bind(*param);
        }
        Ok(self.runtime.block_on(query.fetch_all(&self.pool))?)
    }

    fn query_count(&self, sql: &str, params: &[&str]) -> std::result::Result<i64, DriverError> {
        trace!(sql, ?params, "query count");
        let mut query = sqlx::query_scalar::<_, i64>(sql);
        for param in params {
            query = query.bind(*param);
        }
        Ok(self.runtime.block_on(query.fetch_one(&self.pool))?)
    }
}
