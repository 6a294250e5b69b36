// Library interface for word-scramble
// The binary and the integration tests both build on these modules

pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod outcome;
pub mod rules;
pub mod selector;
pub mod tui;
pub mod word;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use dictionary::{SpellChecker, WordListDictionary};
pub use engine::{RoundView, ValidationEngine};
pub use error::Error;
pub use game_state::{GameInterface, GameSummary, UserAction, game_loop};
pub use outcome::{Outcome, RejectReason};
pub use rules::{MIN_WORD_LENGTH, is_original, is_possible, is_real, is_same_as_root};
pub use selector::RootWordSelector;
pub use word::{FALLBACK_ROOT_WORD, RootWord, normalize};
pub use wordlist::{EMBEDDED_WORD_LIST, load_word_list_from_file, load_word_list_from_str};
