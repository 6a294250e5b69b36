//! Spell-check capability used by the realness rule.
//!
//! The engine only needs a yes/no answer for a normalized word in a given
//! language, so anything from a word list to a closure can act as the
//! dictionary.

use crate::error::Error;
use crate::word::normalize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Language tag used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// System word list used by the binary when no dictionary is given.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

pub trait SpellChecker {
    /// Returns true if `word` is a recognized word in `language`.
    ///
    /// `word` is already lowercased and trimmed.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Dictionary backed by an in-memory set of words for a single language.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.to_string(),
            words,
        }
    }

    #[must_use]
    pub fn from_lines(language: &str, data: &str) -> Self {
        Self::new(language, data.lines())
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| Error::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_lines(language, &data);
        log::info!(
            "Loaded {} dictionary words for '{}' from {}",
            dictionary.len(),
            language,
            path.display()
        );
        Ok(dictionary)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_word_list_dictionary_lookup() {
        let dict = WordListDictionary::from_lines("en", "Cab\nbad\n\n  age \n");
        assert_eq!(dict.len(), 3);
        assert!(dict.is_known_word("cab", "en"));
        assert!(dict.is_known_word("age", "en"));
        assert!(!dict.is_known_word("cabbages", "en"));
    }

    #[test]
    fn test_word_list_dictionary_language_mismatch() {
        let dict = WordListDictionary::from_lines("en", "cab\n");
        assert!(dict.is_known_word("cab", "EN"));
        assert!(!dict.is_known_word("cab", "fr"));
    }

    #[test]
    fn test_closure_as_spell_checker() {
        let checker = |word: &str, language: &str| language == "en" && word == "cab";
        assert!(checker.is_known_word("cab", "en"));
        assert!(!checker.is_known_word("bad", "en"));
        assert!(!checker.is_known_word("cab", "de"));
    }

    #[test]
    fn test_new_from_iterator() {
        let dict = WordListDictionary::new("en", ["cab", " ", "BAD"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.is_known_word("bad", "en"));
        assert!(!WordListDictionary::default().is_known_word("bad", ""));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("word_scramble_test_dictionary.txt");
        fs::write(&path, "bad\ncab\n").unwrap();

        let dict = WordListDictionary::from_file("en", &path).unwrap();
        assert_eq!(dict.language(), "en");
        assert!(dict.is_known_word("bad", "en"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_from_missing_file() {
        let result = WordListDictionary::from_file("en", "/nonexistent/word_scramble/words");
        assert!(matches!(result, Err(Error::Dictionary { .. })));
    }
}
