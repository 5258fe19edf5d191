//! Member categories of a component descriptor.

use std::fmt;

/// A named collection of component members rendered under its own heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Component properties.
    Props,
    /// Public methods.
    Methods,
    /// Named slots.
    Slots,
    /// Emitted events.
    Events,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Self; 4] = [Self::Props, Self::Methods, Self::Slots, Self::Events];

    /// Look up a category by its configuration key (e.g. `"props"`).
    ///
    /// Keys are case-sensitive. Returns `None` for unknown keys.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "props" => Some(Self::Props),
            "methods" => Some(Self::Methods),
            "slots" => Some(Self::Slots),
            "events" => Some(Self::Events),
            _ => None,
        }
    }

    /// Configuration key of this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Props => "props",
            Self::Methods => "methods",
            Self::Slots => "slots",
            Self::Events => "events",
        }
    }

    /// Built-in section title, used when no override is configured.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        self.key()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known() {
        assert_eq!(Category::from_key("props"), Some(Category::Props));
        assert_eq!(Category::from_key("methods"), Some(Category::Methods));
        assert_eq!(Category::from_key("slots"), Some(Category::Slots));
        assert_eq!(Category::from_key("events"), Some(Category::Events));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Category::from_key("computed"), None);
        assert_eq!(Category::from_key("Props"), None);
        assert_eq!(Category::from_key(""), None);
    }

    #[test]
    fn test_key_roundtrips_through_from_key() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(Category::Slots.to_string(), "slots");
    }
}
