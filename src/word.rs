use std::fmt;

/// Root word used when no usable word list is available.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Lowercases and trims surrounding whitespace.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The word whose letters constrain a round.
///
/// Always normalized and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Normalizes `raw`, returning `None` if nothing is left.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let word = normalize(raw);
        if word.is_empty() { None } else { Some(Self(word)) }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_ROOT_WORD.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Cabbage \n"), "cabbage");
        assert_eq!(normalize("\tCAB"), "cab");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_root_word_rejects_blank() {
        assert!(RootWord::new("").is_none());
        assert!(RootWord::new(" \t\r\n").is_none());
    }

    #[test]
    fn test_root_word_is_normalized() {
        let root = RootWord::new(" SilkWorm\r").unwrap();
        assert_eq!(root.as_str(), "silkworm");
        assert_eq!(root.to_string(), "silkworm");
    }

    #[test]
    fn test_fallback_root_word() {
        assert_eq!(RootWord::fallback().as_str(), FALLBACK_ROOT_WORD);
    }
}
