use super::{double_quoted, Dialect, ObjectKind};
use crate::catalog::CatalogQueries;

/// Amazon Redshift. Speaks the PostgreSQL wire protocol but has no
/// sequences, and locks whole tables with `LOCK`.
pub static REDSHIFT: Dialect = Dialect {
    name: "redshift",
    quote_ident: double_quoted,
    kinds: &[ObjectKind::View, ObjectKind::Table],
    supports_locking: true,
    lock_template: "LOCK TABLE {table}",
    cascade_clause: " CASCADE",
    wire_compatible: true,
    catalog: CatalogQueries {
        schema_exists: "SELECT COUNT(*) FROM pg_namespace WHERE nspname = $1",
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
        list_sequences: None,
    },
};
