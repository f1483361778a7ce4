//! Schema and table entities driven by the external migration engine.

mod clean;
mod table;

pub use clean::{CleanReport, DropStatement, DroppedObject};
pub use table::Table;

use std::fmt;

use tracing::info;

use crate::catalog::Catalog;
use crate::dialect::{Dialect, ObjectKind};
use crate::error::{Error, Result};
use crate::session::Session;

/// A live handle to one schema (namespace) on a session.
///
/// Like [`Table`], this holds no state beyond its identity; every method
/// asks the catalog again.
#[derive(Clone)]
pub struct Schema<'s> {
    session: &'s dyn Session,
    dialect: &'static Dialect,
    name: String,
}

impl<'s> Schema<'s> {
    pub fn new(session: &'s dyn Session, dialect: &'static Dialect, name: impl Into<String>) -> Self {
        Self {
            session,
            dialect,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    fn catalog(&self) -> Catalog<'s> {
        Catalog::new(self.session, self.dialect)
    }

    pub fn exists(&self) -> Result<bool> {
        self.catalog()
            .schema_exists(&self.name)
            .map_err(|e| Error::catalog(format!("check whether schema {self} exists"), e))
    }

    /// True when the schema holds no base tables. Views, sequences, and
    /// other kinds are not counted.
    pub fn empty(&self) -> Result<bool> {
        let count = self
            .catalog()
            .count_tables(&self.name)
            .map_err(|e| Error::catalog(format!("check whether schema {self} is empty"), e))?;
        Ok(count == 0)
    }

    /// Issues `CREATE SCHEMA`. Does not check whether it already exists.
    pub fn create(&self) -> Result<()> {
        let sql = self.dialect.create_schema_statement(&self.name);
        self.session
            .execute(&sql)
            .map_err(|e| Error::statement(format!("create schema {self}"), sql.as_str(), e))?;
        info!(schema = %self, "created schema");
        Ok(())
    }

    /// Drops the schema and everything in it with one cascading statement.
    pub fn drop(&self) -> Result<()> {
        let sql = self.dialect.drop_schema_statement(&self.name);
        self.session
            .execute(&sql)
            .map_err(|e| Error::statement(format!("drop schema {self}"), sql.as_str(), e))?;
        info!(schema = %self, "dropped schema");
        Ok(())
    }

    /// Every base table in the schema, in catalog order.
    pub fn all_tables(&self) -> Result<Vec<Table<'s>>> {
        let names = self
            .catalog()
            .list(ObjectKind::Table, &self.name)
            .map_err(|e| Error::catalog(format!("retrieve all tables in schema {self}"), e))?;
        Ok(names
            .into_iter()
            .map(|name| self.get_table(name))
            .collect())
    }

    /// A handle to a table in this schema. Existence is not checked.
    pub fn get_table(&self, name: impl Into<String>) -> Table<'s> {
        Table::new(self.session, self.dialect, self.name.as_str(), name)
    }

    /// Names of every object of one kind in this schema.
    pub fn list(&self, kind: ObjectKind) -> Result<Vec<String>> {
        self.catalog()
            .list(kind, &self.name)
            .map_err(|e| Error::catalog(format!("list {kind}s in schema {self}"), e))
    }
}

impl PartialEq for Schema<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dialect == other.dialect && self.name == other.name
    }
}

impl Eq for Schema<'_> {}

impl fmt::Display for Schema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dialect.quote(&[&self.name]))
    }
}

impl fmt::Debug for Schema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("dialect", &self.dialect.name)
            .field("name", &self.name)
            .finish()
    }
}
