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

use self::request::{PatchAuthorParam, PostAuthorParam};
use self::response::{AuthorResp, GetAuthorsResp};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    responses(
        (status = 200, description = "List all authors successfully", body = GetAuthorsResp)
    )
)]
pub async fn get_authors(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetAuthorsResp>> {
    let authors = state
        .repo
        .author
        .find_all()
        .await
        .into_response("502-001")?;

    Ok(Json(GetAuthorsResp {
        authors: authors.into_iter().map(AuthorResp::from).collect(),
    }))
}

/// Get an author
#[utoipa::path(
    get,
    path = "/authors/{id}",
    responses(
        (status = 200, description = "Get author successfully", body = AuthorResp),
        (status = 404, description = "Author was not found")
    ),
    params(
        ("id", description = "author id"),
    )
)]
pub async fn get_author(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<AuthorResp>> {
    let author = find_author(&state, id, "502-002").await?;

    Ok(Json(AuthorResp::from(author)))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    request_body = PostAuthorParam,
    responses(
        (status = 201, description = "Create author successfully", body = AuthorResp),
        (status = 422, description = "Author is invalid", body = ValidationResp)
    )
)]
pub async fn post_author(
    State(state): State<ApiState>,
    Json(params): Json<PostAuthorParam>,
) -> ApiResponse<(StatusCode, Json<AuthorResp>)> {
    let author = AuthorDraft::from(params).into_author(i32::default());

    let author = state
        .repo
        .author
        .save(author)
        .await
        .into_response("502-003")?;

    Ok((StatusCode::CREATED, Json(AuthorResp::from(author))))
}

/// Update an author
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    request_body = PatchAuthorParam,
    responses(
        (status = 200, description = "Update author successfully", body = AuthorResp),
        (status = 404, description = "Author was not found"),
        (status = 422, description = "Author is invalid", body = ValidationResp)
    ),
    params(
        ("id", description = "author id"),
    )
)]
pub async fn patch_author(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(params): Json<PatchAuthorParam>,
) -> ApiResponse<Json<AuthorResp>> {
    let stored = find_author(&state, id, "502-004").await?;
    let author = AuthorDraft::from(params).merged_over(&stored).into_author(id);

    let author = state
        .repo
        .author
        .save(author)
        .await
        .into_response("502-004")?;

    Ok(Json(AuthorResp::from(author)))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    responses(
        (status = 204, description = "Delete author successfully"),
        (status = 404, description = "Author was not found")
    ),
    params(
        ("id", description = "author id"),
    )
)]
pub async fn delete_author(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<StatusCode> {
    state
        .repo
        .author
        .delete(id)
        .await
        .into_response("502-005")?;

    Ok(StatusCode::NO_CONTENT)
}

async fn find_author(
    state: &ApiState,
    id: i32,
    error_code: &str,
) -> ApiResponse<AuthorEntity> {
    let author = state
        .repo
        .author
        .find_by_id(id)
        .await
        .into_response(error_code)?;

    let Some(author) = author else {
        return Err(ApiError::NotFound(format!(
            "author was not found. id: {}",
            id
        )));
    };

    Ok(author)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::test_util::{send, test_router};

    #[tokio::test]
    async fn test_create_and_get_author() {
        // Arrange
        let router = test_router().await;

        // Act
        let (status, created) = send(
            &router,
            Method::POST,
            "/authors",
            Some(json!({ "name": "Ada", "phone_number": "5551234567" })),
        )
        .await;
        let id = created["id"].as_i64().unwrap();
        let (get_status, fetched) =
            send(&router, Method::GET, &format!("/authors/{id}"), None).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(get_status, StatusCode::OK);
        assert_eq!(fetched, created);
        assert_eq!(fetched["phone_number"], "5551234567");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        // Arrange
        let router = test_router().await;
        let author = json!({ "name": "Ada", "phone_number": "5551234567" });
        send(&router, Method::POST, "/authors", Some(author.clone())).await;

        // Act
        let (status, body) =
            send(&router, Method::POST, "/authors", Some(author)).await;

        // Assert
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][0]["kind"], "DuplicateValue");
        assert_eq!(
            body["errors"][0]["message"],
            "No two authors have the same name."
        );

        let (_, list) = send(&router, Method::GET, "/authors", None).await;
        assert_eq!(list["authors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_are_all_reported() {
        let router = test_router().await;

        let (status, body) =
            send(&router, Method::POST, "/authors", Some(json!({}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["name", "phone_number"]);
    }

    #[tokio::test]
    async fn test_patch_author() {
        // Arrange
        let router = test_router().await;
        let (_, created) = send(
            &router,
            Method::POST,
            "/authors",
            Some(json!({ "name": "Ada", "phone_number": "5551234567" })),
        )
        .await;
        let uri = format!("/authors/{}", created["id"]);

        // Act
        let (status, patched) = send(
            &router,
            Method::PATCH,
            &uri,
            Some(json!({ "phone_number": "0123456789" })),
        )
        .await;
        let (bad_status, _) = send(
            &router,
            Method::PATCH,
            &uri,
            Some(json!({ "phone_number": "012-345-6789" })),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched["name"], "Ada");
        assert_eq!(patched["phone_number"], "0123456789");
        assert_eq!(bad_status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_author() {
        let router = test_router().await;

        let (get_status, _) =
            send(&router, Method::GET, "/authors/42", None).await;
        let (patch_status, _) =
            send(&router, Method::PATCH, "/authors/42", Some(json!({}))).await;
        let (delete_status, _) =
            send(&router, Method::DELETE, "/authors/42", None).await;

        assert_eq!(get_status, StatusCode::NOT_FOUND);
        assert_eq!(patch_status, StatusCode::NOT_FOUND);
        assert_eq!(delete_status, StatusCode::NOT_FOUND);
    }
}
