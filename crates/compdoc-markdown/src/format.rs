//! Markdown formatting primitives.

use compdoc_config::MAX_LEVEL;

/// Prefix `text` with `level` hash marks and a space.
///
/// `level` is clamped to [`MAX_LEVEL`]; level 0 yields a bare leading space.
///
/// ```
/// use compdoc_markdown::format::heading;
///
/// assert_eq!(heading("Usage", 2), "## Usage");
/// assert_eq!(heading("Deep", 9), "###### Deep");
/// ```
#[must_use]
pub fn heading(text: &str, level: u8) -> String {
    let hashes = "#".repeat(usize::from(level.min(MAX_LEVEL)));
    format!("{hashes} {text}")
}

#[must_use]
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

#[must_use]
pub fn italic(text: &str) -> String {
    format!("*{text}*")
}

#[must_use]
pub fn inline_code(text: &str) -> String {
    format!("`{text}`")
}

#[must_use]
pub fn list_item(text: &str) -> String {
    format!("- {text}")
}

#[must_use]
pub fn parenthesis(text: &str) -> String {
    format!("({text})")
}

/// Separator token appended to a previous token.
#[must_use]
pub fn comma() -> &'static str {
    ","
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading("Title", 1), "# Title");
        assert_eq!(heading("Title", 3), "### Title");
        assert_eq!(heading("Title", 6), "###### Title");
    }

    #[test]
    fn test_heading_clamps_above_six() {
        assert_eq!(heading("Title", 8), heading("Title", 6));
        assert_eq!(heading("Title", u8::MAX), "###### Title");
    }

    #[test]
    fn test_heading_level_zero() {
        assert_eq!(heading("Title", 0), " Title");
    }

    #[test]
    fn test_inline_wrappers() {
        assert_eq!(bold("x"), "**x**");
        assert_eq!(italic("x"), "*x*");
        assert_eq!(inline_code("x"), "`x`");
        assert_eq!(parenthesis("x"), "(x)");
    }

    #[test]
    fn test_nested_wrappers() {
        assert_eq!(bold(&italic("string")), "***string***");
        assert_eq!(parenthesis(&italic("required")), "(*required*)");
        assert_eq!(list_item(&inline_code("label")), "- `label`");
    }

    #[test]
    fn test_comma() {
        assert_eq!(comma(), ",");
    }
}
