//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, parents before children so that foreign
//! keys resolve, and creation is idempotent so it can run on every start.

use crate::entities::{
    District, Document, Party, Payment, PriorDocument, Property, SubRegistrarOffice, Taluk,
    Village,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default database location, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/deed_drafter.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or the default path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database at `database_url`.
///
/// The returned connection is the single client passed into every persistence
/// and lookup function.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    ensure_database_dir(database_url)?;
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// File path of an `SQLite` URL, or `None` for in-memory databases.
fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.contains(":memory:") {
        None
    } else {
        Some(Path::new(path))
    }
}

/// Creates the parent directory of a file database so `mode=rwc` can create the file.
fn ensure_database_dir(database_url: &str) -> Result<()> {
    if let Some(parent) = sqlite_file_path(database_url)
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates all tables that do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    // Reference hierarchy
    create_table(db, &schema, District).await?;
    create_table(db, &schema, Taluk).await?;
    create_table(db, &schema, Village).await?;
    create_table(db, &schema, SubRegistrarOffice).await?;

    // Documents and their child rows
    create_table(db, &schema, Document).await?;
    create_table(db, &schema, Party).await?;
    create_table(db, &schema, PriorDocument).await?;
    create_table(db, &schema, Property).await?;
    create_table(db, &schema, Payment).await?;

    info!("Database tables ensured");
    Ok(())
}
