use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use entity::prelude::*;
use repository::{DatabaseConfig, Repository};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

pub mod author;
pub mod healthz;
pub mod not_found;
pub mod post;
mod response;

pub enum ApiError {
    NotFound(String),
    ValidationError(ValidationErrors),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: Cors,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub port: u16,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Cors {
    pub allow_origins: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        author::get_authors,
        author::get_author,
        author::post_author,
        author::patch_author,
        author::delete_author,
        post::get_posts,
        post::get_post,
        post::post_post,
        post::patch_post,
        post::delete_post,
    ),
    components(schemas(
        author::request::PostAuthorParam,
        author::request::PatchAuthorParam,
        author::response::AuthorResp,
        author::response::GetAuthorsResp,
        post::request::PostPostParam,
        post::request::PatchPostParam,
        post::response::PostResp,
        post::response::GetPostsResp,
        response::ValidationResp,
        response::FieldErrorResp,
    )),
    tags(
        (name = "publisher", description = "Author and post management API")
    )
)]
struct ApiDoc;

pub fn load_config(config_name: &str) -> anyhow::Result<Config> {
    util::load_config::<Config>(config_name)
        .with_context(|| format!("failed to load {}", config_name))
}

pub fn serve(
    repository: Repository,
    config: &Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let state = ApiState { repo: repository };

    let origins = config
        .cors
        .allow_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // authors
    let author_router = Router::new()
        .route("/", get(author::get_authors).post(author::post_author))
        .route(
            "/:id",
            get(author::get_author)
                .patch(author::patch_author)
                .delete(author::delete_author),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // posts
    let post_router = Router::new()
        .route("/", get(post::get_posts).post(post::post_post))
        .route(
            "/:id",
            get(post::get_post)
                .patch(post::patch_post)
                .delete(post::delete_post),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let router = Router::new()
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(
            RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi())
                .path("/rapidoc"),
        )
        .route(
            "/healthz",
            get(healthz::get_health).with_state(state.clone()),
        )
        .nest("/authors", author_router)
        .nest("/posts", post_router)
        .layer(cors)
        .fallback(not_found::get_404);

    Ok(router)
}
