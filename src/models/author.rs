//! Author display strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an author list is going to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorMode {
    /// Full reference entry: up to three names, then "et al."
    Reference,
    /// Parenthetical in-text marker: collapses to one name past two authors
    Intext,
}

/// A display-ready author, either `"Surname, F."` or a bare name.
///
/// Organizations and the `"Anon"` placeholder use the bare form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    /// Build `"Surname, F."` from a surname and a first name.
    ///
    /// Only the first character of the first name is kept, upper-cased.
    /// A blank first name yields the bare surname.
    pub fn person(surname: &str, first_name: &str) -> Self {
        let surname = surname.trim();
        match first_name.trim().chars().next() {
            Some(initial) => {
                let initial: String = initial.to_uppercase().collect();
                Self(format!("{}, {}.", surname, initial))
            }
            None => Self(surname.to_string()),
        }
    }

    /// A bare name with no initial (organization or single surname).
    pub fn name(name: &str) -> Self {
        Self(name.trim().to_string())
    }

    /// The display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Author {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_uses_first_initial() {
        assert_eq!(Author::person("Smith", "john").as_str(), "Smith, J.");
        assert_eq!(Author::person(" Lee ", " Ann").as_str(), "Lee, A.");
    }

    #[test]
    fn test_person_without_first_name() {
        assert_eq!(Author::person("Smith", "").as_str(), "Smith");
        assert_eq!(Author::person("Smith", "   ").as_str(), "Smith");
    }

    #[test]
    fn test_name_is_kept_verbatim() {
        assert_eq!(Author::name("World Health Organization").as_str(), "World Health Organization");
        assert_eq!(Author::from("Anon").to_string(), "Anon");
    }
}
