use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse, ValidationResp};
use crate::{ApiError, ApiState};

use self::request::{PatchPostParam, PostPostParam};
use self::response::{GetPostsResp, PostResp};

/// List all posts
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "List all posts successfully", body = GetPostsResp)
    )
)]
pub async fn get_posts(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetPostsResp>> {
    let posts = state.repo.post.find_all().await.into_response("502-006")?;

    Ok(Json(GetPostsResp {
        posts: posts.into_iter().map(PostResp::from).collect(),
    }))
}

/// Get a post
#[utoipa::path(
    get,
    path = "/posts/{id}",
    responses(
        (status = 200, description = "Get post successfully", body = PostResp),
        (status = 404, description = "Post was not found")
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn get_post(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<PostResp>> {
    let post = find_post(&state, id, "502-007").await?;

    Ok(Json(PostResp::from(post)))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/posts",
    request_body = PostPostParam,
    responses(
        (status = 201, description = "Create post successfully", body = PostResp),
        (status = 422, description = "Post is invalid", body = ValidationResp)
    )
)]
pub async fn post_post(
    State(state): State<ApiState>,
    Json(params): Json<PostPostParam>,
) -> ApiResponse<(StatusCode, Json<PostResp>)> {
    let post = PostDraft::from(params)
        .into_post(i32::default())
        .map_err(ApiError::ValidationError)?;

    let post = state.repo.post.save(post).await.into_response("502-008")?;

    Ok((StatusCode::CREATED, Json(PostResp::from(post))))
}

/// Update a post
#[utoipa::path(
    patch,
    path = "/posts/{id}",
    request_body = PatchPostParam,
    responses(
        (status = 200, description = "Update post successfully", body = PostResp),
        (status = 404, description = "Post was not found"),
        (status = 422, description = "Post is invalid", body = ValidationResp)
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn patch_post(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(params): Json<PatchPostParam>,
) -> ApiResponse<Json<PostResp>> {
    let stored = find_post(&state, id, "502-009").await?;
    let post = params
        .merged_over(&stored)
        .into_post(id)
        .map_err(ApiError::ValidationError)?;

    let post = state.repo.post.save(post).await.into_response("502-009")?;

    Ok(Json(PostResp::from(post)))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    responses(
        (status = 204, description = "Delete post successfully"),
        (status = 404, description = "Post was not found")
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn delete_post(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<StatusCode> {
    state.repo.post.delete(id).await.into_response("502-010")?;

    Ok(StatusCode::NO_CONTENT)
}

async fn find_post(
    state: &ApiState,
    id: i32,
    error_code: &str,
) -> ApiResponse<PostEntity> {
    let post = state
        .repo
        .post
        .find_by_id(id)
        .await
        .into_response(error_code)?;

    let Some(post) = post else {
        return Err(ApiError::NotFound(format!(
            "post was not found. id: {}",
            id
        )));
    };

    Ok(post)
}
