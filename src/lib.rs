//! dbsweep - schema inventory and ordered cleanup across SQL dialects.
//!
//! This crate gives a migration engine a dialect-neutral view of one schema:
//! whether it exists, which base tables it holds, whether a table has a
//! column, and a destructive [`Schema::clean`](schema::Schema::clean) that
//! drops views, tables, stages, file formats, and sequences in a fixed order.
//!
//! # Quick Start
//!
//! ```no_run
//! use dbsweep::prelude::*;
//!
//! let session = PgSession::connect("postgres://localhost/mydb").unwrap();
//! let schema = Schema::new(&session, &POSTGRES, "analytics");
//!
//! if schema.exists().unwrap() {
//!     let report = schema.clean().unwrap();
//!     println!("dropped {} objects", report.dropped.len());
//! }
//! ```
//!
//! # Modules
//!
//! - [`dialect`] - Dialect descriptors: quoting, capabilities, catalog queries
//! - [`catalog`] - Read-only metadata lookups
//! - [`session`] - The connection seam and its sqlx implementation
//! - [`schema`] - Schema and table entities, including cleanup
//! - [`prelude`] - Convenient re-exports for common usage

pub mod catalog;
pub mod dialect;
pub mod error;
pub mod prelude;
pub mod schema;
pub mod session;
pub mod util;

pub use error::{DriverError, Error, Result};
