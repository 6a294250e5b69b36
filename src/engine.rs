//! Round state and the submission check chain.
//!
//! A [`ValidationEngine`] owns the root word, the accepted-word history and
//! the score for one round. State only changes on acceptance or reset.

use crate::dictionary::{DEFAULT_LANGUAGE, SpellChecker};
use crate::outcome::{Outcome, RejectReason};
use crate::rules::{is_original, is_possible, is_real, is_same_as_root};
use crate::word::{RootWord, normalize};
use crate::{debug_log, info_log};

/// Read-only snapshot of a round for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundView<'a> {
    pub root: &'a str,
    /// Most recently accepted word first.
    pub history: &'a [String],
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct ValidationEngine<D> {
    root: RootWord,
    history: Vec<String>,
    score: u32,
    dictionary: D,
    language: String,
}

impl<D: SpellChecker> ValidationEngine<D> {
    /// Starts a round on `root` using the default language.
    pub fn new(root: RootWord, dictionary: D) -> Self {
        info_log!("ValidationEngine::new() - root word '{}'", root);
        Self {
            root,
            history: Vec::new(),
            score: 0,
            dictionary,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Starts a fresh round: new root, empty history, zero score.
    pub fn reset(&mut self, root: RootWord) {
        info_log!(
            "reset() - new root word '{}' (previous round scored {})",
            root,
            self.score
        );
        self.root = root;
        self.history.clear();
        self.score = 0;
    }

    /// Runs the check chain without touching any state.
    ///
    /// Returns the normalized word if it would be accepted.
    pub fn evaluate(&self, raw: &str) -> Result<String, RejectReason> {
        let word = normalize(raw);
        let root = self.root.as_str();

        if word.is_empty() {
            return Err(RejectReason::Empty);
        }
        if !is_original(&word, &self.history) {
            return Err(RejectReason::AlreadyUsed);
        }
        if !is_possible(&word, root) {
            return Err(RejectReason::LettersNotAvailable);
        }
        if is_same_as_root(&word, root) {
            return Err(RejectReason::SameAsRoot);
        }
        if !is_real(&word, &self.language, &self.dictionary) {
            return Err(RejectReason::NotARealWord);
        }
        Ok(word)
    }

    /// Checks a raw submission and records it if accepted.
    pub fn submit(&mut self, raw: &str) -> Outcome {
        match self.evaluate(raw) {
            Ok(word) => {
                info_log!("submit() - accepted '{}'", word);
                self.history.insert(0, word);
                self.score += 1;
                Outcome::Accepted
            }
            Err(reason) => {
                debug_log!("submit() - rejected {:?}: {}", raw, reason);
                Outcome::Rejected(reason)
            }
        }
    }

    #[must_use]
    pub fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            root: self.root.as_str(),
            history: &self.history,
            score: self.score,
        }
    }
}
