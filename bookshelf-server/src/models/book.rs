//! Book record and its form input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A row of the `books` table.
///
/// `id` is assigned by the store on creation and never changes or gets
/// reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Form body for `/create` and `/update/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
}

impl BookForm {
    /// Both fields are required; an empty value counts as absent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::Missing { field: "title" });
        }
        if self.author.is_empty() {
            return Err(ValidationError::Missing { field: "author" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, author: &str) -> BookForm {
        BookForm {
            title: title.into(),
            author: author.into(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(form("Dune", "Herbert").validate().is_ok());
    }

    #[test]
    fn whitespace_is_a_value() {
        assert!(form(" ", " ").validate().is_ok());
    }

    #[test]
    fn empty_title_is_missing() {
        assert_eq!(
            form("", "Herbert").validate(),
            Err(ValidationError::Missing { field: "title" })
        );
    }

    #[test]
    fn empty_author_is_missing() {
        assert_eq!(
            form("Dune", "").validate(),
            Err(ValidationError::Missing { field: "author" })
        );
    }
}
