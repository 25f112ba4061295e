use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

/// Open (creating if necessary) the SQLite database at `db_path` and make
/// sure the schema exists. The connection is returned to the caller; nothing
/// is stored globally so tests can hold their own handles.
pub async fn connect(db_path: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// In-memory database with the same schema, for tests.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let conn = Database::connect("sqlite::memory:").await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Idempotent schema bootstrap: create the recipe table if it is missing.
async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let check_recipe_table = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='recipe';
    "#;
    let recipe_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_recipe_table.to_string(),
        ))
        .await?;

    if recipe_table_exists.is_empty() {
        tracing::info!("Creating recipe table");
        let create_recipe_table_sql = r#"
            CREATE TABLE recipe (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                tags TEXT,
                image_url TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_recipe_table_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
