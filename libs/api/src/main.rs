use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{load_config, serve};
use repository::Repository;
use tokio::net::TcpListener;
use tracing::info;
use util::{load_env, secret};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let secrets = load_env("Secrets.dev.toml")?;
    let conn_string = secret(&secrets, "LOCAL_DATABASE_URL")?;

    let config = load_config("Config.toml")?;
    let repository = Repository::new(conn_string, &config.database)
        .await
        .context("failed to init repository")?;

    let router = serve(repository, &config)?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "listen", address = %address);

    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}
