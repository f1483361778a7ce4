use super::{double_quoted, Dialect, ObjectKind};
use crate::catalog::CatalogQueries;

/// Snowflake. Has stages and file formats, but no row or advisory locks.
pub static SNOWFLAKE: Dialect = Dialect {
    name: "snowflake",
    quote_ident: double_quoted,
    kinds: &[
        ObjectKind::View,
        ObjectKind::Table,
        ObjectKind::Stage,
        ObjectKind::FileFormat,
        ObjectKind::Sequence,
    ],
    supports_locking: false,
    lock_template: "",
    cascade_clause: " CASCADE",
    wire_compatible: false,
    catalog: CatalogQueries {
        schema_exists: "SELECT COUNT(*) FROM INFORMATION_SCHEMA.SCHEMATA WHERE SCHEMA_NAME=?",
        count_tables: "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'BASE TABLE'",
        table_exists: "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'BASE TABLE' AND TABLE_NAME = ?",
        column_exists: "SELECT TABLE_NAME FROM INFORMATION_SCHEMA.COLUMNS WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? AND COLUMN_NAME = ?",
        list_tables: "SELECT TABLE_NAME FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'BASE TABLE'",
        list_views: "SELECT TABLE_NAME FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'VIEW'",
        list_stages: Some("SELECT STAGE_NAME FROM INFORMATION_SCHEMA.STAGES WHERE STAGE_SCHEMA = ?"),
        list_file_formats: Some(
            "SELECT FILE_FORMAT_NAME FROM INFORMATION_SCHEMA.FILE_FORMATS WHERE FILE_FORMAT_SCHEMA = ?",
        ),
        list_sequences: Some(
            "SELECT SEQUENCE_NAME FROM INFORMATION_SCHEMA.SEQUENCES WHERE SEQUENCE_SCHEMA = ?",
        ),
    },
};
