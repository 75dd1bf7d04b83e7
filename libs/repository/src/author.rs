use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{info, warn};

use crate::active_models::{prelude::*, *};
use crate::{
    into_write_error, is_unique_violation, IntoResponse, RepositoryError,
    Response,
};
use entity::author::duplicate_name;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct AuthorRepository {
    db: DatabaseConnection,
}

impl AuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<author::Model> for AuthorEntity {
    fn from(value: author::Model) -> Self {
        AuthorEntity {
            id: value.id,
            name: value.name,
            phone_number: value.phone_number,
        }
    }
}

impl From<AuthorEntity> for author::ActiveModel {
    fn from(value: AuthorEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            name: ActiveValue::Set(value.name),
            phone_number: ActiveValue::Set(value.phone_number),
        }
    }
}

impl AuthorRepository {
    pub async fn find_all(&self) -> Response<Vec<AuthorEntity>> {
        let authors = Author::find()
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await
            .into_response("in find all authors")?;

        Ok(authors.into_iter().map(AuthorEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<AuthorEntity>> {
        let author = Author::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find author by id")?;

        Ok(author.map(AuthorEntity::from))
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Response<Option<AuthorEntity>> {
        let author = Author::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .into_response("in find author by name")?;

        Ok(author.map(AuthorEntity::from))
    }

    /// Validates `author` against the stored authors and writes it.
    ///
    /// Inserts when `id` is unset, otherwise updates. Nothing is written
    /// when a rule fails.
    pub async fn save(&self, author: AuthorEntity) -> Response<AuthorEntity> {
        let existing = self.find_by_name(&author.name).await?;
        if let Err(errors) = author.validate(existing.as_ref()) {
            warn!(task = "save author", id = author.id, error = %errors);
            return Err(errors.into());
        }

        let id = author.id;
        let model = author::ActiveModel::from(author);
        let result = if id == i32::default() {
            model.insert(&self.db).await
        } else {
            model.update(&self.db).await
        };
        // The unique index still rejects a name claimed by a concurrent
        // writer after the lookup above.
        let saved = result.map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Validation(duplicate_name().into())
            } else {
                into_write_error(e, id, "in save author")
            }
        })?;

        info!(task = "save author", id = saved.id);

        Ok(AuthorEntity::from(saved))
    }

    pub async fn delete(&self, id: i32) -> Response<()> {
        let result = Author::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in delete author")?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }

        Ok(())
    }
}
