//! Search term validation

use super::ValidationError;

/// Maximum length for search terms
const MAX_SEARCH_TERM_LEN: usize = 200;

/// Validated, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Create a search term, trimming surrounding whitespace.
    ///
    /// An empty or whitespace-only term is malformed input: a blank search
    /// would match every question and masks client bugs.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "search term",
            });
        }
        if trimmed.len() > MAX_SEARCH_TERM_LEN {
            return Err(ValidationError::TooLong {
                field: "search term",
                max: MAX_SEARCH_TERM_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_terms() {
        assert_eq!(SearchTerm::new("title").unwrap().as_str(), "title");
        assert_eq!(SearchTerm::new(" Tom Hanks ").unwrap().as_str(), "Tom Hanks");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            SearchTerm::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(SearchTerm::new("  \t ").is_err());
    }

    #[test]
    fn rejects_overlong() {
        let long = "x".repeat(MAX_SEARCH_TERM_LEN + 1);
        assert!(matches!(
            SearchTerm::new(&long).unwrap_err(),
            ValidationError::TooLong { max: 200, .. }
        ));
    }
}
