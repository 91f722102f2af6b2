//! Lossless tokenization into words and separators
//!
//! A word is a run of letters (and their combining marks), optionally joined by a
//! single apostrophe or hyphen between letters, so `Muad'Dib`, `Shai-Hulud`
//! and `mind-killer` are each one word. Every other character (whitespace,
//! punctuation, digits, symbols) belongs to a separator. Concatenating the
//! text of all tokens reproduces the input exactly.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{L}[\p{L}\p{M}]*(?:['’\-]\p{L}[\p{L}\p{M}]*)*").expect("word pattern is valid")
});

/// A slice of the input, either translatable or passed through verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Eligible for lexicon lookup
    Word(&'a str),
    /// Whitespace, punctuation, digits and anything else between words
    Separator(&'a str),
}

impl<'a> Token<'a> {
    /// The literal text of the token
    pub fn text(&self) -> &'a str {
        match self {
            Token::Word(text) | Token::Separator(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Split `input` into alternating word and separator tokens
///
/// Empty input yields no tokens. Separators are never empty and two
/// separators are never adjacent.
///
/// # Example
///
/// ```
/// use dune_translator::tokenizer::{Token, tokenize};
///
/// let tokens = tokenize("Fear, Muad'Dib!");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Word("Fear"),
///         Token::Separator(", "),
///         Token::Word("Muad'Dib"),
///         Token::Separator("!"),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in WORD.find_iter(input) {
        if m.start() > last {
            tokens.push(Token::Separator(&input[last..m.start()]));
        }
        tokens.push(Token::Word(m.as_str()));
        last = m.end();
    }

    if last < input.len() {
        tokens.push(Token::Separator(&input[last..]));
    }

    tokens
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_tokens_rejoin_to_input(input in any::<String>()) {
            let rejoined: String = tokenize(&input).iter().map(Token::text).collect();
            prop_assert_eq!(rejoined, input);
        }

        #[test]
        fn prop_word_like_input_is_lossless(input in "[a-zA-Z’'\\- .,!?0-9\u{301}ßİﬁ]{0,40}") {
            let tokens = tokenize(&input);
            let rejoined: String = tokens.iter().map(Token::text).collect();
            prop_assert_eq!(rejoined, input.as_str());
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].is_word() != pair[1].is_word());
            }
        }
    }
}
