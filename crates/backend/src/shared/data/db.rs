use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;
use std::time::Duration;

use super::seed;
use crate::shared::config::{self, Config};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created at start-up if missing
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_consultant",
        r#"
        CREATE TABLE IF NOT EXISTS a001_consultant (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            fixed_cost REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_client",
        r#"
        CREATE TABLE IF NOT EXISTS a002_client (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            legal_name TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_invoice",
        r#"
        CREATE TABLE IF NOT EXISTS a003_invoice (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            consultant_ref TEXT NOT NULL,
            client_ref TEXT NOT NULL,
            service_order TEXT NOT NULL DEFAULT '',
            issue_date TEXT NOT NULL,
            gross_amount REAL NOT NULL DEFAULT 0,
            tax_pct REAL NOT NULL DEFAULT 0,
            commission_pct REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'issued',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "idx_a003_invoice_issue_date",
        "CREATE INDEX IF NOT EXISTS idx_a003_invoice_issue_date ON a003_invoice (issue_date);",
    ),
    (
        "a004_task",
        r#"
        CREATE TABLE IF NOT EXISTS a004_task (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            is_done INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_keyword",
        r#"
        CREATE TABLE IF NOT EXISTS a004_keyword (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "a004_task_keyword",
        r#"
        CREATE TABLE IF NOT EXISTS a004_task_keyword (
            task_id INTEGER NOT NULL,
            keyword_id INTEGER NOT NULL,
            PRIMARY KEY (task_id, keyword_id)
        );
        "#,
    ),
];

/// Build the sqlite URL for a file path (normalizing Windows separators)
fn sqlite_file_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Open a connection for the configured database
pub async fn connect(config: &Config) -> anyhow::Result<DatabaseConnection> {
    match config::get_database_path(config) {
        Some(path) => {
            let url = sqlite_file_url(&path)?;
            tracing::info!("Opening SQLite database at {}", path.display());
            let mut options = ConnectOptions::new(url);
            options.sqlx_logging(false);
            Ok(Database::connect(options).await?)
        }
        None => {
            tracing::info!("Opening in-memory SQLite database");
            connect_in_memory().await
        }
    }
}

/// Single-connection in-memory database. The pool must never recycle
/// its connection, otherwise the data disappears with it.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let keep_alive = Duration::from_secs(60 * 60 * 24 * 365);
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(keep_alive)
        .max_lifetime(keep_alive)
        .sqlx_logging(false);
    Ok(Database::connect(options).await?)
}

/// Create missing tables and indexes
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (name, sql) in SCHEMA {
        tracing::debug!("Ensuring schema object {}", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

/// Connect, bootstrap the schema and seed demo data; stores the global connection
pub async fn initialize_database(config: &Config) -> anyhow::Result<()> {
    let conn = connect(config).await?;
    bootstrap_schema(&conn).await?;

    if config.database.seed_demo_data {
        seed::seed_demo_data(&conn).await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Fresh in-memory database with the schema applied (tests only)
#[cfg(test)]
pub async fn test_connection() -> DatabaseConnection {
    let conn = connect_in_memory().await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    conn
}
