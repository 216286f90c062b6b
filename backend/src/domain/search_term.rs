//! Free-text search input for the question bank.

use thiserror::Error;

/// Validation failure for [`SearchTerm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("search term must not be empty")]
pub struct EmptySearchTerm;

/// Case-insensitive substring to look for in question text.
///
/// The term is trimmed and matched literally: `%` and `_` carry no wildcard
/// meaning.
///
/// # Examples
/// ```
/// use trivia::domain::SearchTerm;
///
/// let term = SearchTerm::new("  title ").expect("non-blank");
/// assert_eq!(term.as_str(), "title");
/// assert!(term.matches("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"));
/// assert!(SearchTerm::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validate a raw term.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmptySearchTerm> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmptySearchTerm);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// In-memory equivalent of the database's `ILIKE '%term%'`.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `ILIKE` pattern with the term's own wildcards escaped.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("title", "%title%")]
    #[case("100%", "%100\\%%")]
    #[case("snake_case", "%snake\\_case%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn like_pattern_escapes_wildcards(#[case] raw: &str, #[case] expected: &str) {
        let term = SearchTerm::new(raw).expect("non-blank");
        assert_eq!(term.like_pattern(), expected);
    }

    #[rstest]
    fn matching_ignores_case() {
        let term = SearchTerm::new("TAJ").expect("non-blank");
        assert!(term.matches("Where is the Taj Mahal located?"));
        assert!(!term.matches("What is the capital of France?"));
    }

    #[rstest]
    #[case("")]
    #[case(" \t\n")]
    fn blank_terms_are_rejected(#[case] raw: &str) {
        assert_eq!(SearchTerm::new(raw), Err(EmptySearchTerm));
    }
}
