//! Case pattern detection and restoration
//!
//! Lookups are case-insensitive. The pattern of the source token is detected
//! first and then re-applied to the canonical form stored in the lexicon:
//!
//! - `spice` → lowercase result (`melange`)
//! - `SPICE` → uppercase result (`MELANGE`)
//! - `Paul` → canonical form with the first letter raised (`Muad'Dib`)

/// Capitalization of a source token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// First cased letter is lowercase, or the token has no cased letters
    Lower,
    /// Two or more cased letters, all uppercase
    Upper,
    /// First cased letter uppercase, anything else
    Capitalized,
}

impl CasePattern {
    pub fn detect(word: &str) -> Self {
        let mut cased = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase());

        match cased.next() {
            Some(first) if first.is_uppercase() => {
                let mut rest = cased.peekable();
                if rest.peek().is_some() && rest.all(char::is_uppercase) {
                    CasePattern::Upper
                } else {
                    CasePattern::Capitalized
                }
            }
            _ => CasePattern::Lower,
        }
    }

    /// Re-apply this pattern onto the canonical form of a translation
    pub fn apply(self, canonical: &str) -> String {
        match self {
            CasePattern::Lower => canonical.to_lowercase(),
            CasePattern::Upper => canonical.to_uppercase(),
            CasePattern::Capitalized => {
                let mut chars = canonical.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}
