use crate::error::{ConfigError, ConfigResult};
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::phrases::{Phrase, PhraseBank};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const IN_MEMORY: &str = "<string>";

/// Load a lexicon from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "spice": "melange",
///     "Paul": "Muad'Dib"
/// }
/// ```
/// Keys are English words, values their Dune canonical forms.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or a root that is not an object
/// - Any error from [`Lexicon::build`]
pub fn load_lexicon_from_file(path: &Path) -> ConfigResult<Lexicon> {
    let content = read(path)?;
    parse_lexicon(&content, &path.display().to_string())
}

pub fn load_lexicon_from_str(json: &str) -> ConfigResult<Lexicon> {
    parse_lexicon(json, IN_MEMORY)
}

/// Load a phrase bank from a JSON array of `{"english": ..., "dune": ...}`
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON or missing fields
/// - An empty array
pub fn load_phrases_from_file(path: &Path) -> ConfigResult<PhraseBank> {
    let content = read(path)?;
    parse_phrases(&content, &path.display().to_string())
}

pub fn load_phrases_from_str(json: &str) -> ConfigResult<PhraseBank> {
    parse_phrases(json, IN_MEMORY)
}

fn read(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|e| ConfigError::Load {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_lexicon(json: &str, origin: &str) -> ConfigResult<Lexicon> {
    let value: Value = serde_json::from_str(json).map_err(|e| ConfigError::Load {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;

    let obj = value.as_object().ok_or_else(|| ConfigError::Load {
        path: origin.to_string(),
        reason: "root must be an object".to_string(),
    })?;

    let mut entries = Vec::with_capacity(obj.len());
    for (english, dune) in obj {
        // Skip metadata
        if english.starts_with('@') {
            continue;
        }

        match dune.as_str() {
            Some(dune) => entries.push(LexiconEntry::new(english, dune)),
            None => warn!(origin, key = %english, "lexicon value is not a string, skipping"),
        }
    }

    debug!(origin, entries = entries.len(), "loaded lexicon entries");
    Lexicon::build(entries)
}

fn parse_phrases(json: &str, origin: &str) -> ConfigResult<PhraseBank> {
    let phrases: Vec<Phrase> = serde_json::from_str(json).map_err(|e| ConfigError::Load {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;
    PhraseBank::new(phrases)
}
