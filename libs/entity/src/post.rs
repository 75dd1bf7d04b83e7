use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, ValidationErrors};

pub const CLICKBAIT_KEYWORDS: [&str; 4] =
    ["Won't Believe", "Secret", "Top", "Guess"];
pub const CONTENT_MIN_LENGTH: usize = 250;
pub const SUMMARY_MAX_LENGTH: usize = 250;

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Category,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
pub enum Category {
    #[default]
    Fiction,
    #[strum(serialize = "Non-Fiction")]
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

/// Post fields as they arrive from a caller, before any rule has run.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

pub fn validate_title(title: &str) -> Result<&str, FieldError> {
    if !CLICKBAIT_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        return Err(FieldError::invalid(
            "title",
            "Post title must be clickbait-y.",
        ));
    }
    Ok(title)
}

pub fn validate_content(content: &str) -> Result<&str, FieldError> {
    if content.chars().count() < CONTENT_MIN_LENGTH {
        return Err(FieldError::invalid(
            "content",
            "Post content must be at least 250 characters long.",
        ));
    }
    Ok(content)
}

pub fn validate_summary(
    summary: Option<&str>,
) -> Result<Option<&str>, FieldError> {
    if summary.is_some_and(|s| s.chars().count() > SUMMARY_MAX_LENGTH) {
        return Err(FieldError::invalid(
            "summary",
            "Post summary must be a maximum of 250 characters.",
        ));
    }
    Ok(summary)
}

pub fn validate_category(category: &str) -> Result<Category, FieldError> {
    Category::from_str(category).map_err(|_| {
        FieldError::invalid(
            "category",
            "Post category must be either Fiction or Non-Fiction.",
        )
    })
}

impl Post {
    /// Category is already typed here, so only the text fields are checked.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_title(&self.title));
        errors.check(validate_content(&self.content));
        errors.check(validate_summary(self.summary.as_deref()));
        errors.into_result()
    }
}

impl PostDraft {
    /// Fills the draft's missing fields from a stored post.
    pub fn merged_over(self, post: &Post) -> Self {
        Self {
            title: self.title.or_else(|| Some(post.title.clone())),
            content: self.content.or_else(|| Some(post.content.clone())),
            summary: self.summary.or_else(|| post.summary.clone()),
            category: self.category.or_else(|| Some(post.category.to_string())),
        }
    }

    pub fn into_post(self, id: i32) -> Result<Post, ValidationErrors> {
        let title = self.title.unwrap_or_default();
        let content = self.content.unwrap_or_default();
        let summary = self.summary;
        let category = self.category.unwrap_or_default();

        let mut errors = ValidationErrors::new();
        errors.check(validate_title(&title));
        errors.check(validate_content(&content));
        errors.check(validate_summary(summary.as_deref()));
        let category = errors.check(validate_category(&category));
        errors.into_result()?;

        Ok(Post {
            id,
            title,
            content,
            summary,
            category: category.unwrap_or_default(),
        })
    }
}
