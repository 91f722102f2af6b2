//! Parallel example sentences for the suggestion UI
//!
//! `PhraseBank::random_phrase` keeps no state and may return the same phrase
//! twice in a row. The shuffle button uses a `PhraseShuffler`, which owns
//! the last pick and never repeats it immediately.

use crate::error::{ConfigError, ConfigResult};
use crate::lexicon::Direction;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One example sentence in both languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub english: String,
    pub dune: String,
}

impl Phrase {
    pub fn new(english: &str, dune: &str) -> Self {
        Self {
            english: english.to_string(),
            dune: dune.to_string(),
        }
    }

    /// The side written in the language `direction` translates from
    pub fn source_text(&self, direction: Direction) -> &str {
        match direction {
            Direction::EnglishToDune => &self.english,
            Direction::DuneToEnglish => &self.dune,
        }
    }
}

/// External shape of a suggestion: primary is English, secondary is Dune
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub primary: String,
    pub secondary: String,
}

impl From<&Phrase> for Suggestion {
    fn from(phrase: &Phrase) -> Self {
        Self {
            primary: phrase.english.clone(),
            secondary: phrase.dune.clone(),
        }
    }
}

/// A non-empty, ordered list of phrases
#[derive(Debug, Clone)]
pub struct PhraseBank {
    phrases: Vec<Phrase>,
}

impl PhraseBank {
    /// # Errors
    ///
    /// `EmptyPhraseBank` if `phrases` is empty.
    pub fn new(phrases: Vec<Phrase>) -> ConfigResult<Self> {
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseBank);
        }
        debug!(phrases = phrases.len(), "built phrase bank");
        Ok(Self { phrases })
    }

    pub fn all_phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false`; construction rejects empty banks
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Uniformly random phrase using the thread-local generator
    pub fn random_phrase(&self) -> &Phrase {
        self.random_phrase_with(&mut rand::rng())
    }

    pub fn random_phrase_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Phrase {
        &self.phrases[rng.random_range(0..self.phrases.len())]
    }

    pub fn shuffler(&self) -> PhraseShuffler<'_> {
        PhraseShuffler {
            bank: self,
            last: None,
        }
    }
}

/// Random phrase source that never yields the same phrase twice in a row
///
/// With a single phrase in the bank it has no choice and repeats it.
#[derive(Debug, Clone)]
pub struct PhraseShuffler<'a> {
    bank: &'a PhraseBank,
    last: Option<usize>,
}

impl<'a> PhraseShuffler<'a> {
    pub fn next_phrase(&mut self) -> &'a Phrase {
        self.next_phrase_with(&mut rand::rng())
    }

    pub fn next_phrase_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a Phrase {
        let len = self.bank.len();
        let index = match self.last {
            // Draw from the other len - 1 slots and skip over the last pick.
            Some(last) if len > 1 => {
                let i = rng.random_range(0..len - 1);
                if i >= last { i + 1 } else { i }
            }
            _ => rng.random_range(0..len),
        };
        self.last = Some(index);
        &self.bank.phrases[index]
    }
}
