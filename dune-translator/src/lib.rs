//! Word-for-word translation between English and the desert tongue of Arrakis
//!
//! The crate has four parts:
//!
//! 1. **Lexicon** - immutable two-way word table ([`Lexicon`])
//! 2. **Tokenizer** - lossless split into words and separators ([`tokenize`])
//! 3. **Translator** - per-word lookup with case restoration ([`Translator`])
//! 4. **Phrase bank** - parallel example sentences ([`PhraseBank`])
//!
//! The built-in vocabulary is embedded in the crate. The two crate-level
//! operations, [`translate`] and [`random_phrase`], use a shared instance
//! that is built on first use and never changes afterwards.
//!
//! # Example
//!
//! ```
//! assert_eq!(dune_translator::translate("Paul", false), "Muad'Dib");
//! assert_eq!(dune_translator::translate("Shai-Hulud", true), "Worm");
//!
//! let suggestion = dune_translator::random_phrase();
//! assert!(!suggestion.primary.is_empty());
//! ```

use std::sync::LazyLock;

pub mod casing;
pub mod data;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod phrases;
pub mod session;
pub mod tokenizer;
pub mod translator;


pub use casing::CasePattern;
pub use error::{ConfigError, ConfigResult};
pub use lexicon::{Direction, Lexicon, LexiconEntry};
pub use loader::{
    load_lexicon_from_file, load_lexicon_from_str, load_phrases_from_file, load_phrases_from_str,
};
pub use phrases::{Phrase, PhraseBank, PhraseShuffler, Suggestion};
pub use session::Session;
pub use tokenizer::{Token, tokenize};
pub use translator::{Translate, TranslatedToken, Translator};

/// Build the embedded lexicon
pub fn builtin_lexicon() -> ConfigResult<Lexicon> {
    Lexicon::build(
        data::LEXICON
            .iter()
            .map(|&(english, dune)| LexiconEntry::new(english, dune)),
    )
}

/// Build the embedded phrase bank
pub fn builtin_phrase_bank() -> ConfigResult<PhraseBank> {
    PhraseBank::new(
        data::PHRASES
            .iter()
            .map(|&(english, dune)| Phrase::new(english, dune))
            .collect(),
    )
}

/// Check that the embedded data is valid
pub fn validate_builtin() -> ConfigResult<()> {
    builtin_lexicon()?;
    builtin_phrase_bank()?;
    Ok(())
}

static TRANSLATOR: LazyLock<Translator> = LazyLock::new(|| match builtin_lexicon() {
    Ok(lexicon) => Translator::new(lexicon),
    Err(e) => panic!("embedded lexicon is invalid: {e}"),
});

static PHRASE_BANK: LazyLock<PhraseBank> = LazyLock::new(|| match builtin_phrase_bank() {
    Ok(bank) => bank,
    Err(e) => panic!("embedded phrase bank is invalid: {e}"),
});

/// Shared translator over the embedded lexicon
pub fn builtin_translator() -> &'static Translator {
    &TRANSLATOR
}

/// Shared embedded phrase bank
pub fn builtin_phrases() -> &'static PhraseBank {
    &PHRASE_BANK
}

/// Translate `text`; `from_dune` selects Dune→English instead of English→Dune
pub fn translate(text: &str, from_dune: bool) -> String {
    TRANSLATOR.translate(text, Direction::from_dune(from_dune))
}

/// A uniformly random suggestion from the embedded phrase bank
pub fn random_phrase() -> Suggestion {
    Suggestion::from(PHRASE_BANK.random_phrase())
}
