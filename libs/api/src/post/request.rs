use entity::prelude::*;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostPostParam {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    /// `Fiction` or `Non-Fiction`
    pub category: Option<String>,
}

/// Absent fields keep their stored value. `"summary": null` clears it.
#[derive(Deserialize, ToSchema)]
pub struct PatchPostParam {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, nullable)]
    pub summary: Option<Option<String>>,
    pub category: Option<String>,
}

// Separates an explicit `null` from an absent field.
fn present<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<PostPostParam> for PostDraft {
    fn from(value: PostPostParam) -> Self {
        Self {
            title: value.title,
            content: value.content,
            summary: value.summary,
            category: value.category,
        }
    }
}

impl PatchPostParam {
    pub fn merged_over(self, post: &PostEntity) -> PostDraft {
        let summary = self.summary.unwrap_or_else(|| post.summary.clone());
        let draft = PostDraft {
            title: self.title,
            content: self.content,
            summary: None,
            category: self.category,
        }
        .merged_over(post);

        PostDraft { summary, ..draft }
    }
}
