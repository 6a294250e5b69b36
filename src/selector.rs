use crate::debug_log;
use crate::word::RootWord;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng as _};

/// Picks root words from a word list.
///
/// The random source is injectable so rounds can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RootWordSelector<R = StdRng> {
    rng: R,
}

impl RootWordSelector<StdRng> {
    /// Creates a selector seeded from the OS's random data source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RootWordSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RootWordSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly picks one usable word from `words`.
    ///
    /// Blank entries are skipped. If nothing usable is left the fallback
    /// root word is returned instead.
    pub fn select_root<S: AsRef<str>>(&mut self, words: &[S]) -> RootWord {
        let usable: Vec<RootWord> = words
            .iter()
            .filter_map(|w| RootWord::new(w.as_ref()))
            .collect();

        match usable.choose(&mut self.rng) {
            Some(root) => {
                debug_log!("select_root() - picked '{}' from {} words", root, usable.len());
                root.clone()
            }
            None => {
                log::warn!(
                    "Word list has no usable words, falling back to '{}'",
                    RootWord::fallback()
                );
                RootWord::fallback()
            }
        }
    }
}
