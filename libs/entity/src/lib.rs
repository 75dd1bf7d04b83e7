pub mod author;
pub mod post;
pub mod validation;

pub mod prelude {
    pub use crate::author::{Author as AuthorEntity, AuthorDraft};
    pub use crate::post::{Category, Post as PostEntity, PostDraft};
    pub use crate::validation::{FieldError, ValidationErrors, ViolationKind};
}
