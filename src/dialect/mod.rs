//! Dialect descriptors: identifier quoting, capability sets, and catalog
//! query texts for each supported database family.

mod postgres;
mod redshift;
mod snowflake;

pub use postgres::POSTGRES;
pub use redshift::REDSHIFT;
pub use snowflake::SNOWFLAKE;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogQueries;
use crate::error::{Error, Result};

/// Kinds of schema objects that a cleanup pass can destroy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    View,
    Table,
    Stage,
    FileFormat,
    Sequence,
}

impl ObjectKind {
    /// Order in which `clean()` visits object kinds. Views go first because
    /// they may reference tables.
    pub const CLEAN_ORDER: [ObjectKind; 5] = [
        ObjectKind::View,
        ObjectKind::Table,
        ObjectKind::Stage,
        ObjectKind::FileFormat,
        ObjectKind::Sequence,
    ];

    /// DDL keyword used after `DROP`.
    pub fn keyword(&self) -> &'static str {
        match self {
            ObjectKind::View => "VIEW",
            ObjectKind::Table => "TABLE",
            ObjectKind::Stage => "STAGE",
            ObjectKind::FileFormat => "FILE FORMAT",
            ObjectKind::Sequence => "SEQUENCE",
        }
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.trim_end_matches('s') {
            "view" => Ok(ObjectKind::View),
            "table" => Ok(ObjectKind::Table),
            "stage" => Ok(ObjectKind::Stage),
            "file format" => Ok(ObjectKind::FileFormat),
            "sequence" => Ok(ObjectKind::Sequence),
            _ => Err(format!(
                "Invalid object kind '{}'. Valid kinds: view, table, stage, file format, sequence",
                s
            )),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::View => "view",
            ObjectKind::Table => "table",
            ObjectKind::Stage => "stage",
            ObjectKind::FileFormat => "file format",
            ObjectKind::Sequence => "sequence",
        };
        write!(f, "{}", s)
    }
}

/// Capability descriptor for one database family.
///
/// Instances are `static` and never mutated. Everything that differs between
/// databases lives here; the schema and table entities hold a reference to
/// one of these and contain no per-dialect branches.
pub struct Dialect {
    pub name: &'static str,
    /// Quotes a single identifier part.
    pub quote_ident: fn(&str) -> String,
    /// Destructible object kinds present in this database family.
    pub kinds: &'static [ObjectKind],
    /// Whether `Table::lock` issues a native lock. When false, locking is a
    /// documented no-op and coordination falls to the caller.
    pub supports_locking: bool,
    /// Lock statement with a `{table}` placeholder. Ignored unless
    /// `supports_locking` is set.
    pub lock_template: &'static str,
    /// Appended to `DROP SCHEMA` so contained objects go with it.
    pub cascade_clause: &'static str,
    /// Whether the dialect can be driven over the PostgreSQL wire protocol.
    pub wire_compatible: bool,
    pub catalog: CatalogQueries,
}

pub static DIALECTS: [&Dialect; 3] = [&SNOWFLAKE, &POSTGRES, &REDSHIFT];

impl Dialect {
    /// Looks up a built-in dialect by name, case-insensitively.
    pub fn by_name(name: &str) -> Result<&'static Dialect> {
        DIALECTS
            .iter()
            .copied()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownDialect {
                name: name.to_string(),
                valid: DIALECTS
                    .iter()
                    .map(|d| d.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Renders a fully qualified identifier, quoting every part.
    pub fn quote(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| (self.quote_ident)(*part))
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn supports(&self, kind: ObjectKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Supported kinds in clean order.
    pub fn clean_kinds(&self) -> impl Iterator<Item = ObjectKind> + '_ {
        ObjectKind::CLEAN_ORDER
            .into_iter()
            .filter(move |kind| self.supports(*kind))
    }

    pub fn drop_statement(&self, kind: ObjectKind, schema: &str, name: &str) -> String {
        format!("DROP {} {}", kind.keyword(), self.quote(&[schema, name]))
    }

    pub fn create_schema_statement(&self, schema: &str) -> String {
        format!("CREATE SCHEMA {}", self.quote(&[schema]))
    }

    pub fn drop_schema_statement(&self, schema: &str) -> String {
        format!("DROP SCHEMA {}{}", self.quote(&[schema]), self.cascade_clause)
    }

    /// Native lock statement for a table, or `None` when the dialect has no
    /// locking primitive.
    pub fn lock_statement(&self, schema: &str, table: &str) -> Option<String> {
        if !self.supports_locking {
            return None;
        }
        Some(
            self.lock_template
                .replace("{table}", &self.quote(&[schema, table])),
        )
    }
}

impl PartialEq for Dialect {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Dialect {}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("kinds", &self.kinds)
            .field("supports_locking", &self.supports_locking)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// ANSI double-quote identifier quoting. Embedded quotes are doubled, so
/// distinct identifiers (including ones differing only in case) never
/// render to the same string.
pub fn double_quoted(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}
