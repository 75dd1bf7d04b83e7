use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetPostsResp {
    pub posts: Vec<PostResp>,
}

#[derive(Serialize, ToSchema)]
pub struct PostResp {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: String,
}

impl From<PostEntity> for PostResp {
    fn from(value: PostEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            summary: value.summary,
            category: value.category.to_string(),
        }
    }
}
