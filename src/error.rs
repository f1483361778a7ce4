use thiserror::Error;

use crate::dialect::ObjectKind;

/// Error raised by a [`Session`](crate::session::Session) implementation.
///
/// The library never inspects it; it is carried as the source of the
/// domain error so callers can downcast to their driver's error type.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Structured error type for dbsweep operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to connect to {url}: {message}")]
    Connection { url: String, message: String },

    /// A read-only catalog query failed. Never means "not found".
    #[error("Unable to {action}: {source}")]
    Catalog {
        action: String,
        #[source]
        source: DriverError,
    },

    #[error("Unable to check whether table {table} has a column named {column}: {source}")]
    ColumnCheck {
        table: String,
        column: String,
        #[source]
        source: DriverError,
    },

    #[error("Unable to drop {kind} {object}: {source}")]
    Drop {
        kind: ObjectKind,
        object: String,
        #[source]
        source: DriverError,
    },

    /// Any other DDL or locking statement failed.
    #[error("Unable to {action}: {source}")]
    Statement {
        action: String,
        sql: String,
        #[source]
        source: DriverError,
    },

    #[error("Unknown dialect '{name}'. Valid dialects: {valid}")]
    UnknownDialect { name: String, valid: String },

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

impl Error {
    pub fn connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn catalog(action: impl Into<String>, source: DriverError) -> Self {
        Self::Catalog {
            action: action.into(),
            source,
        }
    }

    pub fn column_check(
        table: impl Into<String>,
        column: impl Into<String>,
        source: DriverError,
    ) -> Self {
        Self::ColumnCheck {
            table: table.into(),
            column: column.into(),
            source,
        }
    }

    pub fn drop_failed(kind: ObjectKind, object: impl Into<String>, source: DriverError) -> Self {
        Self::Drop {
            kind,
            object: object.into(),
            source,
        }
    }

    pub fn statement(
        action: impl Into<String>,
        sql: impl Into<String>,
        source: DriverError,
    ) -> Self {
        Self::Statement {
            action: action.into(),
            sql: sql.into(),
            source,
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// The driver error underneath, if this error wraps one.
    pub fn driver_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Catalog { source, .. }
            | Self::ColumnCheck { source, .. }
            | Self::Drop { source, .. }
            | Self::Statement { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
