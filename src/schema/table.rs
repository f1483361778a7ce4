use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::catalog::Catalog;
use crate::dialect::{Dialect, ObjectKind};
use crate::error::{Error, Result};
use crate::session::Session;

/// A live handle to one relation.
///
/// Nothing is cached: every method is a round trip, and constructing a
/// `Table` costs nothing. Two handles naming the same `(dialect, schema,
/// name)` compare equal regardless of the session they were built on.
#[derive(Clone)]
pub struct Table<'s> {
    session: &'s dyn Session,
    dialect: &'static Dialect,
    schema: String,
    name: String,
}

impl<'s> Table<'s> {
    pub fn new(
        session: &'s dyn Session,
        dialect: &'static Dialect,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            session,
            dialect,
            schema: schema.into(),
            name: name.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// Dialect-quoted `schema.name`.
    pub fn qualified_name(&self) -> String {
        self.dialect.quote(&[&self.schema, &self.name])
    }

    fn catalog(&self) -> Catalog<'s> {
        Catalog::new(self.session, self.dialect)
    }

    /// Whether a base table with this name exists. Views and other
    /// relations of the same name do not count.
    pub fn exists(&self) -> Result<bool> {
        self.catalog()
            .table_exists(&self.schema, &self.name)
            .map_err(|e| Error::catalog(format!("check whether table {self} exists"), e))
    }

    /// Whether the table has a column with exactly this name, compared the
    /// way the database's catalog compares it.
    pub fn has_column(&self, column: &str) -> Result<bool> {
        self.catalog()
            .has_column(&self.schema, &self.name, column)
            .map_err(|e| Error::column_check(self.to_string(), column, e))
    }

    /// Takes the dialect's native lock on this table.
    ///
    /// On dialects without `supports_locking` this does nothing and returns
    /// `Ok`; serializing concurrent runners is then up to the caller.
    pub fn lock(&self) -> Result<()> {
        let Some(sql) = self.dialect.lock_statement(&self.schema, &self.name) else {
            debug!(
                dialect = self.dialect.name,
                table = %self,
                "dialect has no native table lock, skipping"
            );
            return Ok(());
        };

        debug!(%sql, "locking table");
        self.session
            .execute(&sql)
            .map_err(|e| Error::statement(format!("lock table {self}"), sql.as_str(), e))
    }

    /// Drops the table unconditionally. A missing table surfaces the
    /// database's own error.
    pub fn drop(&self) -> Result<()> {
        let sql = self
            .dialect
            .drop_statement(ObjectKind::Table, &self.schema, &self.name);
        debug!(%sql, "dropping table");
        self.session
            .execute(&sql)
            .map_err(|e| Error::drop_failed(ObjectKind::Table, self.to_string(), e))
    }
}

impl PartialEq for Table<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dialect == other.dialect && self.schema == other.schema && self.name == other.name
    }
}

impl Eq for Table<'_> {}

impl Hash for Table<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dialect.name.hash(state);
        self.schema.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("dialect", &self.dialect.name)
            .field("schema", &self.schema)
            .field("name", &self.name)
            .finish()
    }
}
