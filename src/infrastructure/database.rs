use crate::config::AppConfig;
use crate::entities::{api_keys, blog_images, blogs, books, comments, events, forms};
use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, Statement};
use std::env;
use std::time::Duration;
use tracing::info;

pub async fn setup_database(config: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut opt = ConnectOptions::new(&db_url);
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to the database")?;

    info!("✅ Database connected successfully");

    run_migrations(&db).await?;

    Ok(db)
}

/// Creates missing tables and indexes. Parents come before children so the
/// foreign keys resolve.
pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    info!("🔄 Running auto-migrations...");

    let stmts = vec![
        (
            "forms",
            schema
                .create_table_from_entity(forms::Entity)
                .if_not_exists()
                .to_owned(),
        ),
        (
            "blogs",
            schema
                .create_table_from_entity(blogs::Entity)
                .if_not_exists()
                .to_owned(),
        ),
        (
            "blog_images",
            schema
                .create_table_from_entity(blog_images::Entity)
                .if_not_exists()
                .to_owned(),
        ),
        (
            "comments",
            schema
                .create_table_from_entity(comments::Entity)
                .if_not_exists()
                .to_owned(),
        ),
        (
            "events",
            schema
                .create_table_from_entity(events::Entity)
                .if_not_exists()
                .to_owned(),
        ),
        (
            "books",
            schema
                .create_table_from_entity(books::Entity)
                .if_not_exists()
                .to_owned(),
        ),
        (
            "api_keys",
            schema
                .create_table_from_entity(api_keys::Entity)
                .if_not_exists()
                .to_owned(),
        ),
    ];

    for (name, stmt) in stmts {
        db.execute(builder.build(&stmt))
            .await
            .with_context(|| format!("Failed to create table '{}'", name))?;
        info!("   - Table '{}' checked/created", name);
    }

    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_forms_created_at ON forms(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_blogs_created_at ON blogs(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_blog_images_blog_id ON blog_images(blog_id)",
        "CREATE INDEX IF NOT EXISTS idx_comments_blog_id ON comments(blog_id)",
        "CREATE INDEX IF NOT EXISTS idx_comments_blog_slug ON comments(blog_slug)",
        "CREATE INDEX IF NOT EXISTS idx_comments_status ON comments(status)",
        "CREATE INDEX IF NOT EXISTS idx_events_start_date ON events(start_date)",
        "CREATE INDEX IF NOT EXISTS idx_books_created_at ON books(created_at)",
    ];

    for query in indexes {
        if let Err(e) = db
            .execute(Statement::from_string(builder, query.to_owned()))
            .await
        {
            tracing::warn!("   - Index creation warning: {} -> {}", query, e);
        }
    }

    Ok(())
}
