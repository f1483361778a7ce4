#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::collections::BTreeMap;

pub use dbsweep::dialect::{Dialect, ObjectKind, POSTGRES, REDSHIFT, SNOWFLAKE};
pub use dbsweep::error::{DriverError, Error};
pub use dbsweep::schema::{CleanReport, DropStatement, Schema, Table};
pub use dbsweep::session::Session;

/// In-memory stand-in for one database, answering the catalog queries of a
/// single dialect and applying the drop statements it generates.
pub struct FakeSession {
    dialect: &'static Dialect,
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    schemas: BTreeMap<String, FakeSchema>,
    executed: Vec<String>,
    catalog_queries: usize,
    failing_statements: BTreeMap<String, String>,
    failing_catalog: Option<String>,
}

#[derive(Default)]
struct FakeSchema {
    objects: BTreeMap<ObjectKind, Vec<String>>,
    columns: BTreeMap<String, Vec<String>>,
}

impl FakeSession {
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            dialect,
            state: RefCell::new(State::default()),
        }
    }

    pub fn with_schema(self, schema: &str) -> Self {
        self.state
            .borrow_mut()
            .schemas
            .entry(schema.to_string())
            .or_default();
        self
    }

    pub fn with_object(self, schema: &str, kind: ObjectKind, name: &str) -> Self {
        self.state
            .borrow_mut()
            .schemas
            .entry(schema.to_string())
            .or_default()
            .objects
            .entry(kind)
            .or_default()
            .push(name.to_string());
        self
    }

    pub fn with_table(self, schema: &str, table: &str, columns: &[&str]) -> Self {
        let session = self.with_object(schema, ObjectKind::Table, table);
        session
            .state
            .borrow_mut()
            .schemas
            .entry(schema.to_string())
            .or_default()
            .columns
            .insert(
                table.to_string(),
                columns.iter().map(|c| c.to_string()).collect(),
            );
        session
    }

    /// Makes one exact statement fail with `message`.
    pub fn fail_statement(self, sql: &str, message: &str) -> Self {
        self.state
            .borrow_mut()
            .failing_statements
            .insert(sql.to_string(), message.to_string());
        self
    }

    /// Makes every catalog query fail with `message`.
    pub fn fail_catalog(self, message: &str) -> Self {
        self.state.borrow_mut().failing_catalog = Some(message.to_string());
        self
    }

    /// Every statement passed to `execute`, including ones that failed.
    pub fn executed(&self) -> Vec<String> {
        self.state.borrow().executed.clone()
    }

    pub fn catalog_queries(&self) -> usize {
        self.state.borrow().catalog_queries
    }

    pub fn names(&self, schema: &str, kind: ObjectKind) -> Vec<String> {
        self.state
            .borrow()
            .schemas
            .get(schema)
            .and_then(|s| s.objects.get(&kind))
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_schema(&self, schema: &str) -> bool {
        self.state.borrow().schemas.contains_key(schema)
    }

    fn check_catalog(&self) -> Result<(), DriverError> {
        let mut state = self.state.borrow_mut();
        state.catalog_queries += 1;
        match &state.failing_catalog {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

fn unquote(quoted: &str) -> String {
    quoted
        .trim()
        .trim_start_matches('"')
        .trim_end_matches('"')
        .replace("\"\"", "\"")
}

impl Session for FakeSession {
    fn execute(&self, sql: &str) -> Result<(), DriverError> {
        let mut state = self.state.borrow_mut();
        state.executed.push(sql.to_string());

        if let Some(message) = state.failing_statements.get(sql) {
            return Err(message.clone().into());
        }

        if let Some(rest) = sql.strip_prefix("CREATE SCHEMA ") {
            let name = unquote(rest);
            if state.schemas.contains_key(&name) {
                return Err(format!("schema {name} already exists").into());
            }
            state.schemas.insert(name, FakeSchema::default());
            return Ok(());
        }

        if let Some(rest) = sql.strip_prefix("DROP SCHEMA ") {
            let name = unquote(rest.trim_end_matches(self.dialect.cascade_clause));
            return match state.schemas.remove(&name) {
                Some(_) => Ok(()),
                None => Err(format!("schema {name} does not exist").into()),
            };
        }

        if sql.starts_with("DROP ") {
            let dialect = self.dialect;
            for (schema_name, schema) in state.schemas.iter_mut() {
                for (kind, names) in schema.objects.iter_mut() {
                    let position = names
                        .iter()
                        .position(|n| dialect.drop_statement(*kind, schema_name, n) == sql);
                    if let Some(position) = position {
                        let name = names.remove(position);
                        if *kind == ObjectKind::Table {
                            schema.columns.remove(&name);
                        }
                        return Ok(());
                    }
                }
            }
            return Err(format!("object does not exist: {sql}").into());
        }

        Ok(())
    }

    fn query_names(&self, sql: &str, params: &[&str]) -> Result<Vec<String>, DriverError> {
        self.check_catalog()?;
        let state = self.state.borrow();
        let catalog = &self.dialect.catalog;
        let schema = state.schemas.get(params[0]);

        if sql == catalog.column_exists {
            let (table, column) = (params[1], params[2]);
            let found = schema
                .and_then(|s| s.columns.get(table))
                .is_some_and(|columns| columns.iter().any(|c| c == column));
            return Ok(if found { vec![table.to_string()] } else { Vec::new() });
        }

        for kind in ObjectKind::CLEAN_ORDER {
            if catalog.list_query(kind) == Some(sql) {
                return Ok(schema
                    .and_then(|s| s.objects.get(&kind))
                    .cloned()
                    .unwrap_or_default());
            }
        }

        Err(format!("unexpected name query: {sql}").into())
    }

    fn query_count(&self, sql: &str, params: &[&str]) -> Result<i64, DriverError> {
        self.check_catalog()?;
        let state = self.state.borrow();
        let catalog = &self.dialect.catalog;
        let schema = state.schemas.get(params[0]);
        let tables = schema.and_then(|s| s.objects.get(&ObjectKind::Table));

        if sql == catalog.schema_exists {
            Ok(schema.is_some() as i64)
        } else if sql == catalog.count_tables {
            Ok(tables.map_or(0, |t| t.len() as i64))
        } else if sql == catalog.table_exists {
            Ok(tables.is_some_and(|t| t.iter().any(|n| n == params[1])) as i64)
        } else {
            Err(format!("unexpected count query: {sql}").into())
        }
    }
}

/// `ANALYTICS` with one table, one view over it, one stage, one file format,
/// and one sequence.
pub fn analytics() -> FakeSession {
    FakeSession::new(&SNOWFLAKE)
        .with_schema("ANALYTICS")
        .with_table("ANALYTICS", "T1", &["ID", "AMOUNT"])
        .with_object("ANALYTICS", ObjectKind::View, "V1")
        .with_object("ANALYTICS", ObjectKind::Stage, "LANDING")
        .with_object("ANALYTICS", ObjectKind::FileFormat, "CSV")
        .with_object("ANALYTICS", ObjectKind::Sequence, "SEQ1")
}
