use author::AuthorRepository;
use entity::prelude::*;
use migration::Migrator;
use migration::MigratorTrait;
use post::PostRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use serde::Deserialize;

mod active_models;
pub mod author;
pub mod post;

#[derive(Clone, Debug)]
pub struct Repository {
    pub author: AuthorRepository,
    pub post: PostRepository,
    db: DatabaseConnection,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 1,
            sqlx_logging: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("rejected record: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("record was not found. id: {id}")]
    NotFound { id: i32 },
}

pub type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Maps the failure of an insert or update of the record `id`.
fn into_write_error(e: DbErr, id: i32, message: &str) -> RepositoryError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return RepositoryError::NotFound { id };
    }
    RepositoryError::InSeaOrmDbErr {
        message: message.to_string(),
        source: e,
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl Repository {
    pub async fn new(db_url: &str, config: &DatabaseConfig) -> Response<Self> {
        let db = init_db(db_url, config).await?;

        let repository = Repository {
            author: AuthorRepository::new(db.clone()),
            post: PostRepository::new(db.clone()),
            db,
        };

        Ok(repository)
    }

    pub async fn ping(&self) -> Response<()> {
        self.db.ping().await.into_response("in database ping")
    }
}

async fn init_db(
    db_url: &str,
    config: &DatabaseConfig,
) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(config.sqlx_logging)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}

#[cfg(test)]
pub(crate) async fn memory_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
    };
    init_db("sqlite::memory:", &config).await.unwrap()
}
