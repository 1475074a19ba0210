//! Page identifier type and reference-string input.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::common::Result;

/// Identifies a page in a reference string.
///
/// Pages are opaque tokens: `"7"` and `"A"` are equally valid, and two
/// pages are the same page only if their text is identical.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new("42");
/// assert_eq!(page_id.as_str(), "42");
/// assert_eq!(page_id, PageId::from("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub String);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        PageId(id.into())
    }

    /// The token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        PageId::new(id)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a reference string into page tokens.
///
/// Tokens are separated by whitespace and/or commas; empty tokens are
/// dropped, so `"1, 2,,3"` yields three pages.
pub fn parse_reference_string(input: &str) -> Vec<PageId> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(PageId::from)
        .collect()
}

/// Read a reference string from a file.
///
/// The whole file is one reference string; line breaks count as separators.
pub fn load_reference_file(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_reference_string(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new("7");
        assert_eq!(pid.0, "7");
        assert_eq!(pid, PageId::from(String::from("7")));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new("A")), "A");
    }

    #[test]
    fn test_parse_whitespace() {
        let pages = parse_reference_string("1 2\t3\n 4 ");
        let texts: Vec<&str> = pages.iter().map(PageId::as_str).collect();
        assert_eq!(texts, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_parse_commas_and_empty_tokens() {
        let pages = parse_reference_string("7,0, 1,,2");
        let texts: Vec<&str> = pages.iter().map(PageId::as_str).collect();
        assert_eq!(texts, vec!["7", "0", "1", "2"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_reference_string("").is_empty());
        assert!(parse_reference_string("  , ").is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_reference_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, crate::common::Error::Io(_)));
    }
}
