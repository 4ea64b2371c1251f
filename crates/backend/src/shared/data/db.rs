use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // a001_serving_unit
    let check_serving_unit_table = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='a001_serving_unit';
    "#;
    let serving_unit_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_serving_unit_table.to_string(),
        ))
        .await?;

    if serving_unit_table_exists.is_empty() {
        tracing::info!("Creating a001_serving_unit table");
        let create_serving_unit_table_sql = r#"
            CREATE TABLE a001_serving_unit (
                id TEXT PRIMARY KEY NOT NULL,
                en_name TEXT NOT NULL,
                abbreviation TEXT NOT NULL,
                base_unit TEXT NOT NULL DEFAULT '',
                name_localized TEXT NOT NULL DEFAULT '{}',
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_serving_unit_table_sql.to_string(),
        ))
        .await?;
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
