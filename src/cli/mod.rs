use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dbsweep::dialect::{Dialect, DIALECTS};
use dbsweep::schema::Schema;
use dbsweep::session::PgSession;

#[derive(Parser)]
#[command(name = "dbsweep")]
#[command(about = "Inspect and reset database schemas", long_about = None)]
struct Cli {
    /// Connection URL of the target database
    #[arg(long, global = true, env = "DBSWEEP_DATABASE_URL")]
    database_url: Option<String>,

    /// Target dialect (see `dbsweep dialects`)
    #[arg(long, global = true, env = "DBSWEEP_DIALECT", default_value = "postgres")]
    dialect: String,

    /// Schema to operate on
    #[arg(long, global = true, env = "DBSWEEP_SCHEMA")]
    schema: Option<String>,

    /// Log every statement issued
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether the schema exists and what it contains, as JSON
    Inspect,

    /// Drop every view, table, stage, file format, and sequence in the schema
    Clean {
        /// Print the statements instead of running them
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        allow_destructive: bool,
    },

    /// Create the schema
    Create,

    /// Drop the schema and everything in it
    Drop {
        #[arg(long)]
        allow_destructive: bool,
    },

    /// Check whether a table has a column
    HasColumn {
        #[arg(long)]
        table: String,
        #[arg(long)]
        column: String,
    },

    /// List built-in dialects and their capabilities
    Dialects,
}

#[derive(Serialize)]
struct InspectReport {
    dialect: &'static str,
    schema: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<bool>,
    objects: BTreeMap<String, Vec<String>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dialect = Dialect::by_name(&cli.dialect)?;

    if let Commands::Dialects = cli.command {
        for d in DIALECTS.iter() {
            let kinds: Vec<String> = d.kinds.iter().map(|k| k.to_string()).collect();
            println!(
                "{:<10} kinds: {:<48} locking: {:<3} cli: {}",
                d.name,
                kinds.join(", "),
                if d.supports_locking { "yes" } else { "no" },
                if d.wire_compatible { "yes" } else { "no" },
            );
        }
        return Ok(());
    }

    let schema_name = cli
        .schema
        .clone()
        .context("--schema (or DBSWEEP_SCHEMA) is required")?;
    let session = connect(&cli, dialect)?;
    let schema = Schema::new(&session, dialect, schema_name);

    match cli.command {
        Commands::Inspect => {
            let exists = schema.exists()?;
            let mut objects = BTreeMap::new();
            let mut empty = None;
            if exists {
                empty = Some(schema.empty()?);
                for kind in dialect.clean_kinds() {
                    objects.insert(kind.to_string(), schema.list(kind)?);
                }
            }
            let report = InspectReport {
                dialect: dialect.name,
                schema: schema.name().to_string(),
                exists,
                empty,
                objects,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Clean {
            dry_run,
            allow_destructive,
        } => {
            if dry_run {
                for statement in schema.clean_plan()? {
                    println!("{};", statement.sql);
                }
                return Ok(());
            }
            if !allow_destructive {
                bail!("clean drops every object in {schema}; pass --allow-destructive to proceed");
            }
            let report = schema.clean()?;
            info!(schema = %schema, dropped = report.dropped.len(), "clean finished");
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Create => {
            schema.create()?;
            Ok(())
        }
        Commands::Drop { allow_destructive } => {
            if !allow_destructive {
                bail!("drop removes {schema} and everything in it; pass --allow-destructive to proceed");
            }
            schema.drop()?;
            Ok(())
        }
        Commands::HasColumn { table, column } => {
            let present = schema.get_table(table).has_column(&column)?;
            println!("{present}");
            Ok(())
        }
        Commands::Dialects => Ok(()),
    }
}

fn connect(cli: &Cli, dialect: &'static Dialect) -> Result<PgSession> {
    if !dialect.wire_compatible {
        bail!(
            "dialect {} has no built-in driver; embed dbsweep as a library and provide a Session",
            dialect.name
        );
    }
    let url = cli
        .database_url
        .as_deref()
        .context("--database-url (or DBSWEEP_DATABASE_URL) is required")?;
    Ok(PgSession::connect(url)?)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "dbsweep=debug" } else { "dbsweep=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
