//! The individual acceptance rules, in the order the engine applies them.
//!
//! Every function expects an already normalized word.

use crate::dictionary::SpellChecker;

/// Words shorter than this are never accepted as real.
pub const MIN_WORD_LENGTH: usize = 3;

/// True if `word` has not been accepted yet this round.
pub fn is_original(word: &str, history: &[String]) -> bool {
    !history.iter().any(|used| used == word)
}

/// True if `word` can be spelled from the letters of `root`, each letter of
/// `root` used at most once.
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut pool: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(pos) => {
                pool.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_same_as_root(word: &str, root: &str) -> bool {
    word == root
}

/// True if `word` is long enough and known to the dictionary in `language`.
pub fn is_real<D: SpellChecker + ?Sized>(word: &str, language: &str, dictionary: &D) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH && dictionary.is_known_word(word, language)
}
