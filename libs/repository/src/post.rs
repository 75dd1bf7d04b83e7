use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder,
};
use tracing::{info, warn};

use crate::active_models::{prelude::*, *};
use crate::{into_write_error, IntoResponse, RepositoryError, Response};
use entity::prelude::*;

use self::sea_orm_active_enums::Category as CategoryEnum;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
        PostEntity {
            id: value.id,
            title: value.title,
            content: value.content,
            summary: value.summary,
            category: value.category.into(),
        }
    }
}

impl From<PostEntity> for post::ActiveModel {
    fn from(value: PostEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            title: ActiveValue::Set(value.title),
            content: ActiveValue::Set(value.content),
            summary: ActiveValue::Set(value.summary),
            category: ActiveValue::Set(value.category.into()),
        }
    }
}

impl From<CategoryEnum> for Category {
    fn from(value: CategoryEnum) -> Self {
        match value {
            CategoryEnum::Fiction => Category::Fiction,
            CategoryEnum::NonFiction => Category::NonFiction,
        }
    }
}

impl From<Category> for CategoryEnum {
    fn from(value: Category) -> Self {
        match value {
            Category::Fiction => CategoryEnum::Fiction,
            Category::NonFiction => CategoryEnum::NonFiction,
        }
    }
}

impl PostRepository {
    pub async fn find_all(&self) -> Response<Vec<PostEntity>> {
        let posts = Post::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .into_response("in find all posts")?;

        Ok(posts.into_iter().map(PostEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<PostEntity>> {
        let post = Post::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find post by id")?;

        Ok(post.map(PostEntity::from))
    }

    /// Inserts when `id` is unset, otherwise updates. Nothing is written
    /// when a rule fails.
    pub async fn save(&self, post: PostEntity) -> Response<PostEntity> {
        if let Err(errors) = post.validate() {
            warn!(task = "save post", id = post.id, error = %errors);
            return Err(errors.into());
        }

        let id = post.id;
        let model = post::ActiveModel::from(post);
        let result = if id == i32::default() {
            model.insert(&self.db).await
        } else {
            model.update(&self.db).await
        };
        let saved =
            result.map_err(|e| into_write_error(e, id, "in save post"))?;

        info!(task = "save post", id = saved.id);

        Ok(PostEntity::from(saved))
    }

    pub async fn delete(&self, id: i32) -> Response<()> {
        let result = Post::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in delete post")?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_db;

    fn post(title: &str, category: Category) -> PostEntity {
        PostEntity {
            title: title.to_string(),
            content: "x".repeat(250),
            summary: None,
            category,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        // Arrange
        let repo = PostRepository::new(memory_db().await);

        // Act
        let fiction = repo
            .save(post("Top 5 Dragons", Category::Fiction))
            .await
            .unwrap();
        let non_fiction = repo
            .save(post("The Secret of Tides", Category::NonFiction))
            .await
            .unwrap();

        // Assert
        assert_eq!(
            repo.find_all().await.unwrap(),
            [fiction, non_fiction.clone()]
        );
        assert_eq!(
            repo.find_by_id(non_fiction.id).await.unwrap(),
            Some(non_fiction)
        );
    }

    #[tokio::test]
    async fn test_invalid_post_is_not_stored() {
        // Arrange
        let repo = PostRepository::new(memory_db().await);
        let invalid = PostEntity {
            summary: Some("x".repeat(251)),
            ..post("Ordinary headline", Category::Fiction)
        };

        // Act
        let result = repo.save(invalid).await;

        // Assert
        let Err(RepositoryError::Validation(errors)) = result else {
            panic!("expected a validation error, got {result:?}");
        };
        assert!(errors.has("title", ViolationKind::InvalidValue));
        assert!(errors.has("summary", ViolationKind::InvalidValue));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update() {
        let repo = PostRepository::new(memory_db().await);
        let mut saved = repo
            .save(post("Guess Who", Category::Fiction))
            .await
            .unwrap();

        saved.summary = Some("short".to_string());
        saved.category = Category::NonFiction;
        let updated = repo.save(saved.clone()).await.unwrap();

        assert_eq!(updated, saved);
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let repo = PostRepository::new(memory_db().await);

        let result = repo
            .save(PostEntity {
                id: 9,
                ..post("Guess Who", Category::Fiction)
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound { id: 9 })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = PostRepository::new(memory_db().await);
        let saved = repo
            .save(post("Guess Who", Category::Fiction))
            .await
            .unwrap();

        repo.delete(saved.id).await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(saved.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
