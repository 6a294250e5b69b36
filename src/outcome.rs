use thiserror::Error;

/// Why a submission was turned down.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    #[error("submission is empty")]
    Empty,
    #[error("word has already been used this round")]
    AlreadyUsed,
    #[error("word cannot be spelled from the root word's letters")]
    LettersNotAvailable,
    #[error("word is the root word itself")]
    SameAsRoot,
    #[error("word is not a recognized dictionary word")]
    NotARealWord,
}

impl RejectReason {
    /// Alert title shown to the player.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "Nothing entered",
            Self::AlreadyUsed => "Word used already",
            Self::LettersNotAvailable => "Word not possible",
            Self::SameAsRoot => "Word is equal to start word",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Alert body shown to the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "Type a word before submitting.",
            Self::AlreadyUsed => "Be more original!",
            Self::LettersNotAvailable => "You can't spell that word from the root word.",
            Self::SameAsRoot => "You can't do that!",
            Self::NotARealWord => "You can't just make them up, you know!",
        }
    }

    /// Empty input is ignored without feedback by the front ends.
    #[must_use]
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Result of one submission.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(RejectReason),
}

impl Outcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(self) -> Option<RejectReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<(), RejectReason>> for Outcome {
    fn from(result: Result<(), RejectReason>) -> Self {
        match result {
            Ok(()) => Self::Accepted,
            Err(reason) => Self::Rejected(reason),
        }
    }
}
