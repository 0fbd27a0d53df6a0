use std::time::Duration;

use log::info;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Schema,
    Statement,
};

use crate::config::StorageConfig;
use crate::storage::entity;

/// Connects a pool and bootstraps the schema from the entity definitions.
pub async fn establish_connection(config: &StorageConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA journal_mode=WAL;".to_string(),
        ))
        .await?;
    }

    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let stmt = builder.build(
        schema
            .create_table_from_entity(entity::Listing)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(schema.create_table_from_entity(entity::Hall).if_not_exists());
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(entity::Venue)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(entity::Score)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(entity::ListingImage)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(entity::AiReview)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    info!("database ready at {}", config.url);

    Ok(db)
}
