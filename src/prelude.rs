//! Convenient re-exports for common dbsweep usage.
//!
//! # Example
//!
//! ```no_run
//! use dbsweep::prelude::*;
//!
//! let session = PgSession::connect("postgres://localhost/mydb").unwrap();
//! let table = Schema::new(&session, &POSTGRES, "public").get_table("schema_history");
//!
//! println!("has checksum column: {}", table.has_column("checksum").unwrap());
//! ```

pub use crate::dialect::{Dialect, ObjectKind, POSTGRES, REDSHIFT, SNOWFLAKE};
pub use crate::error::{DriverError, Error, Result};
pub use crate::schema::{CleanReport, DropStatement, DroppedObject, Schema, Table};
pub use crate::session::{PgSession, Session};
