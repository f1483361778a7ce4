//! Read-only metadata queries against a database's information schema.

use tracing::debug;

use crate::dialect::{Dialect, ObjectKind};
use crate::error::DriverError;
use crate::session::Session;

/// Catalog query texts for one dialect.
///
/// Parameters are bound positionally in the order documented on each field,
/// using the dialect's own placeholder syntax.
#[derive(Debug, Clone, Copy)]
pub struct CatalogQueries {
    /// `(schema)` -> count of matching schemas.
    pub schema_exists: &'static str,
    /// `(schema)` -> count of base tables.
    pub count_tables: &'static str,
    /// `(schema, table)` -> count of matching base tables.
    pub table_exists: &'static str,
    /// `(schema, table, column)` -> names of matching columns' tables.
    pub column_exists: &'static str,
    /// `(schema)` -> base table names.
    pub list_tables: &'static str,
    /// `(schema)` -> view names.
    pub list_views: &'static str,
    pub list_stages: Option<&'static str>,
    pub list_file_formats: Option<&'static str>,
    pub list_sequences: Option<&'static str>,
}

impl CatalogQueries {
    /// The listing query for one kind, if this catalog has one.
    pub fn list_query(&self, kind: ObjectKind) -> Option<&'static str> {
        match kind {
            ObjectKind::View => Some(self.list_views),
            ObjectKind::Table => Some(self.list_tables),
            ObjectKind::Stage => self.list_stages,
            ObjectKind::FileFormat => self.list_file_formats,
            ObjectKind::Sequence => self.list_sequences,
        }
    }
}

/// A session paired with the dialect whose catalog it queries.
///
/// Errors are returned raw; the schema and table entities add the
/// identifiers involved.
#[derive(Clone, Copy)]
pub struct Catalog<'s> {
    session: &'s dyn Session,
    dialect: &'static Dialect,
}

impl<'s> Catalog<'s> {
    pub fn new(session: &'s dyn Session, dialect: &'static Dialect) -> Self {
        Self { session, dialect }
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    pub fn schema_exists(&self, schema: &str) -> Result<bool, DriverError> {
        let count = self
            .session
            .query_count(self.dialect.catalog.schema_exists, &[schema])?;
        Ok(count > 0)
    }

    pub fn count_tables(&self, schema: &str) -> Result<i64, DriverError> {
        self.session
            .query_count(self.dialect.catalog.count_tables, &[schema])
    }

    pub fn table_exists(&self, schema: &str, table: &str) -> Result<bool, DriverError> {
        let count = self
            .session
            .query_count(self.dialect.catalog.table_exists, &[schema, table])?;
        Ok(count > 0)
    }

    pub fn has_column(&self, schema: &str, table: &str, column: &str) -> Result<bool, DriverError> {
        let rows = self.session.query_names(
            self.dialect.catalog.column_exists,
            &[schema, table, column],
        )?;
        Ok(!rows.is_empty())
    }

    /// Names of every object of `kind` in `schema`, in catalog order. Kinds
    /// the dialect does not have yield an empty list without a round trip.
    pub fn list(&self, kind: ObjectKind, schema: &str) -> Result<Vec<String>, DriverError> {
        if !self.dialect.supports(kind) {
            return Ok(Vec::new());
        }
        let Some(sql) = self.dialect.catalog.list_query(kind) else {
            return Ok(Vec::new());
        };
        let names = self.session.query_names(sql, &[schema])?;
        debug!(
            dialect = self.dialect.name,
            schema,
            %kind,
            count = names.len(),
            "listed catalog objects"
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{POSTGRES, REDSHIFT, SNOWFLAKE};

    #[test]
    fn list_query_per_kind() {
        let catalog = &SNOWFLAKE.catalog;
        for kind in ObjectKind::CLEAN_ORDER {
            assert!(catalog.list_query(kind).is_some(), "{kind} missing");
        }

        assert!(POSTGRES.catalog.list_query(ObjectKind::Sequence).is_some());
        assert!(POSTGRES.catalog.list_query(ObjectKind::Stage).is_none());
        assert!(REDSHIFT.catalog.list_query(ObjectKind::FileFormat).is_none());
    }

    #[test]
    fn every_supported_kind_has_a_listing_query() {
        for dialect in crate::dialect::DIALECTS.iter() {
            for kind in dialect.clean_kinds() {
                assert!(
                    dialect.catalog.list_query(kind).is_some(),
                    "{} supports {} but cannot list it",
                    dialect.name,
                    kind
                );
            }
        }
    }

    #[test]
    fn base_table_queries_exclude_views() {
        for dialect in crate::dialect::DIALECTS.iter() {
            let q = &dialect.catalog;
            for sql in [q.count_tables, q.table_exists, q.list_tables] {
                assert!(
                    sql.contains("'BASE TABLE'"),
                    "{} query lacks base table filter: {sql}",
                    dialect.name
                );
            }
        }
    }
}
