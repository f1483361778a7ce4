//! The connection seam: everything dbsweep needs from a database driver.

mod postgres;

pub use postgres::PgSession;

use crate::error::DriverError;

/// A synchronous, single-session handle to a database.
///
/// Every call is one blocking round trip. Implementations must run all
/// calls on the same underlying session so that locks taken by one
/// statement are visible to the next.
pub trait Session {
    /// Runs a statement and discards any result.
    fn execute(&self, sql: &str) -> Result<(), DriverError>;

    /// Runs a query returning one text column and collects it.
    fn query_names(&self, sql: &str, params: &[&str]) -> Result<Vec<String>, DriverError>;

    /// Runs a query returning a single integer.
    fn query_count(&self, sql: &str, params: &[&str]) -> Result<i64, DriverError>;
}
