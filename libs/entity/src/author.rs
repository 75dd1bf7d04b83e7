use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, ValidationErrors};

/// Ten decimal digits. `\d` is Unicode-aware, so any script's digits count.
pub const PHONE_NUMBER_PATTERN: &str = r"^\d{10}$";

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
}

/// Author fields as they arrive from a caller, before any rule has run.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
pub struct AuthorDraft {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// `existing` is the stored author that already holds `name`, as found by
/// the store's query-by-name, excluding the author being validated.
pub fn validate_name<'a>(
    name: &'a str,
    existing: Option<&Author>,
) -> Result<&'a str, FieldError> {
    if name.is_empty() {
        return Err(FieldError::invalid("name", "Author must have a name."));
    }
    if existing.is_some() {
        return Err(duplicate_name());
    }
    Ok(name)
}

/// Also raised by the store when its unique index on `name` rejects a write.
pub fn duplicate_name() -> FieldError {
    FieldError::duplicate("name", "No two authors have the same name.")
}

// 5551234567
pub fn validate_phone_number(phone_number: &str) -> Result<&str, FieldError> {
    static PHONE_NUMBER: OnceLock<Regex> = OnceLock::new();
    // PHONE_NUMBER_PATTERN is a literal; test_phone_number_pattern_compiles
    // covers it.
    let re = PHONE_NUMBER.get_or_init(|| {
        Regex::new(PHONE_NUMBER_PATTERN).expect("phone number pattern is valid")
    });

    if !re.is_match(phone_number) {
        return Err(FieldError::invalid(
            "phone_number",
            "Author phone numbers must be exactly ten digits.",
        ));
    }
    Ok(phone_number)
}

impl Author {
    pub fn validate(
        &self,
        existing: Option<&Author>,
    ) -> Result<(), ValidationErrors> {
        let existing = existing.filter(|other| other.id != self.id);

        let mut errors = ValidationErrors::new();
        errors.check(validate_name(&self.name, existing));
        errors.check(validate_phone_number(&self.phone_number));
        errors.into_result()
    }
}

impl AuthorDraft {
    /// Fills the draft's missing fields from a stored author.
    pub fn merged_over(self, author: &Author) -> Self {
        Self {
            name: self.name.or_else(|| Some(author.name.clone())),
            phone_number: self
                .phone_number
                .or_else(|| Some(author.phone_number.clone())),
        }
    }

    /// Absent fields become empty. The result is unchecked: name
    /// uniqueness needs the store, so `Author::validate` runs at save time.
    pub fn into_author(self, id: i32) -> Author {
        Author {
            id,
            name: self.name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ViolationKind;

    fn author(id: i32, name: &str) -> Author {
        Author {
            id,
            name: name.to_string(),
            phone_number: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Ada", None), Ok("Ada"));

        let empty = validate_name("", None).unwrap_err();
        assert_eq!(empty.kind, ViolationKind::InvalidValue);
        assert_eq!(empty.message, "Author must have a name.");
    }

    #[test]
    fn test_validate_name_taken() {
        // Arrange
        let stored = author(1, "Ada");

        // Act
        let result = validate_name("Ada", Some(&stored));

        // Assert
        let error = result.unwrap_err();
        assert_eq!(error.field, "name");
        assert_eq!(error.kind, ViolationKind::DuplicateValue);
    }

    #[test]
    fn test_phone_number_pattern_compiles() {
        assert!(Regex::new(PHONE_NUMBER_PATTERN).is_ok());
    }

    #[test]
    fn test_validate_phone_number_accepts_ten_digits() {
        for phone_number in ["0000000000", "5551234567", "9999999999"] {
            assert_eq!(validate_phone_number(phone_number), Ok(phone_number));
        }
    }

    #[test]
    fn test_validate_phone_number_accepts_unicode_digits() {
        // full-width and Arabic-Indic
        for phone_number in ["５５５１２３４５６７", "٥٥٥١٢٣٤٥٦٧"] {
            assert_eq!(validate_phone_number(phone_number), Ok(phone_number));
        }
    }

    #[test]
    fn test_validate_phone_number_rejects() {
        let rejected = [
            "",
            "555123456",
            "55512345678",
            "555-123-4567",
            "555123456a",
            " 555123456",
            "5551234567\n",
            "５５５１２３４５６",
            "555123456½",
        ];
        for phone_number in rejected {
            let error = validate_phone_number(phone_number).unwrap_err();
            assert_eq!(
                error.kind,
                ViolationKind::InvalidValue,
                "{phone_number:?}"
            );
            assert_eq!(error.field, "phone_number");
        }
    }

    #[test]
    fn test_validate_reports_every_field() {
        // Arrange
        let stored = author(1, "Ada");
        let candidate = Author {
            id: 0,
            name: "Ada".to_string(),
            phone_number: "123".to_string(),
        };

        // Act
        let errors = candidate.validate(Some(&stored)).unwrap_err();

        // Assert
        assert_eq!(errors.errors.len(), 2);
        assert!(errors.has("name", ViolationKind::DuplicateValue));
        assert!(errors.has("phone_number", ViolationKind::InvalidValue));
    }

    #[test]
    fn test_validate_ignores_itself() {
        let stored = author(3, "Ada");
        assert_eq!(stored.clone().validate(Some(&stored)), Ok(()));
    }

    #[test]
    fn test_draft_absent_fields_are_invalid() {
        let author = AuthorDraft::default().into_author(0);
        let errors = author.validate(None).unwrap_err();

        assert!(errors.has("name", ViolationKind::InvalidValue));
        assert!(errors.has("phone_number", ViolationKind::InvalidValue));
    }

    #[test]
    fn test_draft_merged_over_stored() {
        // Arrange
        let stored = author(7, "Ada");
        let draft = AuthorDraft {
            name: None,
            phone_number: Some("0123456789".to_string()),
        };

        // Act
        let updated = draft.merged_over(&stored).into_author(7);

        // Assert
        assert_eq!(updated.validate(Some(&stored)), Ok(()));
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.phone_number, "0123456789");
    }
}
