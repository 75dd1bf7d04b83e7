use entity::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostAuthorParam {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Absent fields keep their stored value.
#[derive(Deserialize, ToSchema)]
pub struct PatchAuthorParam {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl From<PostAuthorParam> for AuthorDraft {
    fn from(value: PostAuthorParam) -> Self {
        Self {
            name: value.name,
            phone_number: value.phone_number,
        }
    }
}

impl From<PatchAuthorParam> for AuthorDraft {
    fn from(value: PatchAuthorParam) -> Self {
        Self {
            name: value.name,
            phone_number: value.phone_number,
        }
    }
}
