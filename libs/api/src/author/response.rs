use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetAuthorsResp {
    pub authors: Vec<AuthorResp>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthorResp {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
}

impl From<AuthorEntity> for AuthorResp {
    fn from(value: AuthorEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            phone_number: value.phone_number,
        }
    }
}
