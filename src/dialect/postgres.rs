use super::{double_quoted, Dialect, ObjectKind};
use crate::catalog::CatalogQueries;

/// PostgreSQL. Locks are row locks taken with `FOR UPDATE`, so they only
/// hold inside a transaction the caller has opened on the same session.
pub static POSTGRES: Dialect = Dialect {
    name: "postgres",
    quote_ident: double_quoted,
    kinds: &[ObjectKind::View, ObjectKind::Table, ObjectKind::Sequence],
    supports_locking: true,
    lock_template: "SELECT * FROM {table} FOR UPDATE",
    cascade_clause: " CASCADE",
    wire_compatible: true,
    catalog: CatalogQueries {
        schema_exists: r#"
            SELECT COUNT(*)
            FROM information_schema.schemata
            WHERE schema_name = $1
        "#,
        count_tables: r#"
            SELECT COUNT(*)
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_type = 'BASE TABLE'
        "#,
        table_exists: r#"
            SELECT COUNT(*)
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_name = $2 AND table_type = 'BASE TABLE'
        "#,
        column_exists: r#"
            SELECT table_name::text
            FROM information_schema.columns
            WHERE table_schema = $1 AND table_name = $2 AND column_name = $3
        "#,
        list_tables: r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_type = 'BASE TABLE'
        "#,
        list_views: r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_type = 'VIEW'
        "#,
        list_stages: None,
        list_file_formats: None,
        list_sequences: Some(
            r#"
            SELECT sequence_name::text
            FROM information_schema.sequences
            WHERE sequence_schema = $1
            "#,
        ),
    },
};
