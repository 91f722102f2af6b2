//! Word-for-word translation engine
//!
//! The `Translate` trait is the seam between callers (the session, the front
//! ends) and the engine, so callers can be tested against any translator.
//! `Translator` is the lexicon-backed implementation.
//!
//! # Example
//!
//! ```
//! use dune_translator::{Direction, Translate, builtin_lexicon, translator::Translator};
//!
//! let translator = Translator::new(builtin_lexicon().unwrap());
//! assert_eq!(
//!     translator.translate("The spice must flow.", Direction::EnglishToDune),
//!     "El melange wajib tadfuq."
//! );
//! ```

use crate::casing::CasePattern;
use crate::lexicon::{Direction, Lexicon};
use crate::tokenizer::{Token, tokenize};
use tracing::trace;

/// Anything that can turn complete text in one language into the other
pub trait Translate: Send + Sync {
    /// Translate `text` in the given direction
    ///
    /// Must be total: any input, including empty or untranslatable text,
    /// produces an output string.
    fn translate(&self, text: &str, direction: Direction) -> String;

    /// Name of this translator, used in logs
    fn name(&self) -> &str;
}

/// Per-token outcome of a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedToken<'a> {
    /// The input token
    pub source: Token<'a>,
    /// What was emitted for it
    pub output: String,
    /// Whether the lexicon knew the word; always `false` for separators
    pub found: bool,
}

/// Lexicon-backed translator
///
/// Unknown words and every separator are copied through verbatim, so the
/// output always has the same token layout as the input. Whitespace-only
/// input is returned unchanged; blank-input handling for display belongs to
/// [`crate::session::Session`].
#[derive(Debug, Clone)]
pub struct Translator {
    lexicon: Lexicon,
}

impl Translator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Translate and report each token separately
    pub fn translate_tokens<'a>(
        &self,
        input: &'a str,
        direction: Direction,
    ) -> Vec<TranslatedToken<'a>> {
        tokenize(input)
            .into_iter()
            .map(|token| match token {
                Token::Word(word) => match self.lexicon.lookup(word, direction) {
                    Some(canonical) => TranslatedToken {
                        source: token,
                        output: CasePattern::detect(word).apply(canonical),
                        found: true,
                    },
                    None => TranslatedToken {
                        source: token,
                        output: word.to_string(),
                        found: false,
                    },
                },
                Token::Separator(text) => TranslatedToken {
                    source: token,
                    output: text.to_string(),
                    found: false,
                },
            })
            .collect()
    }
}

impl Translate for Translator {
    fn translate(&self, text: &str, direction: Direction) -> String {
        let tokens = self.translate_tokens(text, direction);
        trace!(
            %direction,
            tokens = tokens.len(),
            unknown = tokens.iter().filter(|t| t.source.is_word() && !t.found).count(),
            "translated text"
        );

        let mut output = String::with_capacity(text.len());
        for token in &tokens {
            output.push_str(&token.output);
        }
        output
    }

    fn name(&self) -> &str {
        "Lexicon Translator"
    }
}
