use repository::Repository;
use shuttle_runtime::{Error, SecretStore, Secrets};

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres(local_uri = "{secrets.LOCAL_DATABASE_URL}")]
    conn_string: String,
) -> shuttle_axum::ShuttleAxum {
    if secret_store.get("ENV").as_deref() != Some("dev") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let config = api::load_config("Config.toml")
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let repository = Repository::new(&conn_string, &config.database)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let router = api::serve(repository, &config)
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
