use serde::Serialize;
use tracing::{debug, info};

use super::Schema;
use crate::dialect::ObjectKind;
use crate::error::{Error, Result};

/// One `DROP` statement of a cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropStatement {
    pub kind: ObjectKind,
    pub name: String,
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedObject {
    pub kind: ObjectKind,
    pub name: String,
}

/// What a successful `clean()` removed, in the order it was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub schema: String,
    pub dropped: Vec<DroppedObject>,
}

impl CleanReport {
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.dropped.iter().filter(|o| o.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }
}

impl<'s> Schema<'s> {
    /// Removes every view, table, stage, file format, and sequence in the
    /// schema, one kind at a time in [`ObjectKind::CLEAN_ORDER`], skipping
    /// kinds the dialect does not have.
    ///
    /// Each kind is listed from the catalog when its pass starts and its
    /// objects are dropped one statement at a time, in catalog order. The
    /// first failing statement aborts the whole clean; objects dropped
    /// before it stay dropped. Tables are dropped in catalog order, so
    /// foreign keys between tables of the same schema can make this fail.
    pub fn clean(&self) -> Result<CleanReport> {
        let mut report = CleanReport {
            schema: self.name.clone(),
            dropped: Vec::new(),
        };

        for kind in self.dialect.clean_kinds() {
            let dropped = match kind {
                ObjectKind::Table => self.drop_tables()?,
                _ => self.drop_objects(kind)?,
            };
            info!(schema = %self, %kind, count = dropped.len(), "clean pass complete");
            report
                .dropped
                .extend(dropped.into_iter().map(|name| DroppedObject { kind, name }));
        }

        Ok(report)
    }

    /// The statements `clean()` would issue if run now, without executing
    /// any of them.
    ///
    /// Every kind is listed up front, so objects created or removed between
    /// this call and a real clean are not reflected.
    pub fn clean_plan(&self) -> Result<Vec<DropStatement>> {
        let mut statements = Vec::new();
        for kind in self.dialect.clean_kinds() {
            statements.extend(self.drop_statements(kind)?);
        }
        Ok(statements)
    }

    /// Lists one kind and renders a drop statement per name.
    fn drop_statements(&self, kind: ObjectKind) -> Result<Vec<DropStatement>> {
        Ok(self
            .list(kind)?
            .into_iter()
            .map(|name| DropStatement {
                kind,
                sql: self.dialect.drop_statement(kind, &self.name, &name),
                name,
            })
            .collect())
    }

    fn drop_tables(&self) -> Result<Vec<String>> {
        let tables = self.all_tables()?;
        let mut dropped = Vec::with_capacity(tables.len());
        for table in tables {
            table.drop()?;
            dropped.push(table.name().to_string());
        }
        Ok(dropped)
    }

    fn drop_objects(&self, kind: ObjectKind) -> Result<Vec<String>> {
        let statements = self.drop_statements(kind)?;
        let mut dropped = Vec::with_capacity(statements.len());
        for statement in statements {
            debug!(sql = %statement.sql, "dropping {kind}");
            self.session.execute(&statement.sql).map_err(|e| {
                Error::drop_failed(kind, self.dialect.quote(&[&self.name, &statement.name]), e)
            })?;
            dropped.push(statement.name);
        }
        Ok(dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_per_kind() {
        let report = CleanReport {
            schema: "ANALYTICS".to_string(),
            dropped: vec![
                DroppedObject {
                    kind: ObjectKind::View,
                    name: "V1".to_string(),
                },
                DroppedObject {
                    kind: ObjectKind::Table,
                    name: "T1".to_string(),
                },
                DroppedObject {
                    kind: ObjectKind::Table,
                    name: "T2".to_string(),
                },
            ],
        };
        assert_eq!(report.count(ObjectKind::Table), 2);
        assert_eq!(report.count(ObjectKind::View), 1);
        assert_eq!(report.count(ObjectKind::Stage), 0);
        assert!(!report.is_empty());
        assert!(CleanReport::default().is_empty());
    }

    #[test]
    fn report_serializes_kinds_in_snake_case() {
        let report = CleanReport {
            schema: "RAW".to_string(),
            dropped: vec![DroppedObject {
                kind: ObjectKind::FileFormat,
                name: "CSV".to_string(),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dropped"][0]["kind"], "file_format");
        assert_eq!(json["dropped"][0]["name"], "CSV");
    }
}
