//! Bidirectional English ⇄ Dune lexicon
//!
//! The lexicon is built once from an authoritative list of entries and is
//! read-only afterwards. Both directions are derived from the same list, and
//! conflicting keys are rejected in either direction, so every known word
//! translates back to itself.

use crate::error::{ConfigError, ConfigResult};
use crate::tokenizer::{Token, tokenize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Translation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    EnglishToDune,
    DuneToEnglish,
}

impl Direction {
    /// Direction selected by the front ends' `from_dune` flag
    pub fn from_dune(from_dune: bool) -> Self {
        if from_dune {
            Direction::DuneToEnglish
        } else {
            Direction::EnglishToDune
        }
    }

    pub fn is_from_dune(self) -> bool {
        self == Direction::DuneToEnglish
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::EnglishToDune => Direction::DuneToEnglish,
            Direction::DuneToEnglish => Direction::EnglishToDune,
        }
    }

    /// Name of the language being translated from
    pub fn source(self) -> &'static str {
        match self {
            Direction::EnglishToDune => "English",
            Direction::DuneToEnglish => "Dune",
        }
    }

    /// Name of the language being translated into
    pub fn target(self) -> &'static str {
        self.reversed().source()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.source(), self.target())
    }
}

/// One word pair, stored English-first
///
/// Each side is written in its canonical surface form (`Muad'Dib`,
/// `Shai-Hulud`), which is what capitalized lookups reproduce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub english: String,
    pub dune: String,
}

impl LexiconEntry {
    pub fn new(english: &str, dune: &str) -> Self {
        Self {
            english: english.to_string(),
            dune: dune.to_string(),
        }
    }

    fn source(&self, direction: Direction) -> &str {
        match direction {
            Direction::EnglishToDune => &self.english,
            Direction::DuneToEnglish => &self.dune,
        }
    }

    fn target(&self, direction: Direction) -> &str {
        self.source(direction.reversed())
    }
}

/// Normalize a word into a lookup key
///
/// Keys are lowercase and use the ASCII apostrophe, so `Muad’Dib` and
/// `muad'dib` share a key.
pub fn normalize_key(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

/// The immutable two-way word table
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    to_dune: HashMap<String, usize>,
    to_english: HashMap<String, usize>,
}

impl Lexicon {
    /// Build both directions from `entries`
    ///
    /// # Errors
    ///
    /// - `NotAWord` if either side of an entry is not exactly one word token
    /// - `DuplicateKey` if a key maps to two different targets in one direction
    ///
    /// Exact duplicates (same keys, same targets) are dropped silently.
    pub fn build(entries: impl IntoIterator<Item = LexiconEntry>) -> ConfigResult<Self> {
        let mut lexicon = Lexicon {
            entries: Vec::new(),
            to_dune: HashMap::new(),
            to_english: HashMap::new(),
        };

        for entry in entries {
            ensure_single_word(&entry.english)?;
            ensure_single_word(&entry.dune)?;
            lexicon.insert(entry)?;
        }

        debug!(entries = lexicon.entries.len(), "built lexicon");
        Ok(lexicon)
    }

    fn insert(&mut self, entry: LexiconEntry) -> ConfigResult<()> {
        let repeated = self.is_repeat(&entry, Direction::EnglishToDune)?;
        // Targets are compared normalized, so a forward repeat is also a
        // backward repeat; this call only surfaces reverse conflicts.
        self.is_repeat(&entry, Direction::DuneToEnglish)?;

        if repeated {
            debug!(english = %entry.english, dune = %entry.dune, "skipping repeated entry");
            return Ok(());
        }

        let index = self.entries.len();
        self.to_dune.insert(normalize_key(&entry.english), index);
        self.to_english.insert(normalize_key(&entry.dune), index);
        self.entries.push(entry);
        Ok(())
    }

    /// `true` if the entry's source key is already present with the same
    /// target, `false` if the key is new
    fn is_repeat(&self, entry: &LexiconEntry, direction: Direction) -> ConfigResult<bool> {
        let key = normalize_key(entry.source(direction));
        let Some(&i) = self.index(direction).get(&key) else {
            return Ok(false);
        };

        let existing = self.entries[i].target(direction);
        if normalize_key(existing) == normalize_key(entry.target(direction)) {
            Ok(true)
        } else {
            Err(ConfigError::DuplicateKey {
                direction,
                key,
                existing: existing.to_string(),
                conflicting: entry.target(direction).to_string(),
            })
        }
    }

    fn index(&self, direction: Direction) -> &HashMap<String, usize> {
        match direction {
            Direction::EnglishToDune => &self.to_dune,
            Direction::DuneToEnglish => &self.to_english,
        }
    }

    /// Canonical translation of `word`, ignoring case
    ///
    /// `None` means the word is unknown in that direction, which is a normal
    /// outcome.
    pub fn lookup(&self, word: &str, direction: Direction) -> Option<&str> {
        self.index(direction)
            .get(&normalize_key(word))
            .map(|&i| self.entries[i].target(direction))
    }

    pub fn contains(&self, word: &str, direction: Direction) -> bool {
        self.index(direction).contains_key(&normalize_key(word))
    }

    /// Entries in the order they were first accepted
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn ensure_single_word(word: &str) -> ConfigResult<()> {
    match tokenize(word).as_slice() {
        [Token::Word(_)] => Ok(()),
        _ => Err(ConfigError::NotAWord(word.to_string())),
    }
}
