use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum ViolationKind {
    /// Format, length, enum or presence rule failed.
    InvalidValue,
    /// Value collides with another stored record.
    DuplicateValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldError {
    pub fn invalid(field: &'static str, message: &str) -> Self {
        Self {
            field,
            kind: ViolationKind::InvalidValue,
            message: message.to_string(),
        }
    }

    pub fn duplicate(field: &'static str, message: &str) -> Self {
        Self {
            field,
            kind: ViolationKind::DuplicateValue,
            message: message.to_string(),
        }
    }
}

/// Every rule a record broke, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Records the error of a failed check and hands back the value of a
    /// passing one.
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.errors.iter().any(|e| e.field == field && e.kind == kind)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(value: FieldError) -> Self {
        Self {
            errors: vec![value],
        }
    }
}
