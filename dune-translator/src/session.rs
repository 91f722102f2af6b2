//! Translation session state
//!
//! Holds what a translator screen shows: the input text, the current
//! direction and the output. Every event goes through one method that
//! updates the state and recomputes the output in a single step.

use crate::lexicon::Direction;
use crate::phrases::Phrase;
use crate::translator::Translate;

#[derive(Debug)]
pub struct Session<'t, T: Translate + ?Sized> {
    translator: &'t T,
    input: String,
    output: String,
    direction: Direction,
}

impl<'t, T: Translate + ?Sized> Session<'t, T> {
    pub fn new(translator: &'t T, direction: Direction) -> Self {
        Self {
            translator,
            input: String::new(),
            output: String::new(),
            direction,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Replace the input text
    pub fn set_input(&mut self, text: &str) -> &str {
        self.input = text.to_string();
        self.recompute()
    }

    /// Append a finished speech transcript, separated by a single space
    ///
    /// Empty transcripts are ignored.
    pub fn append_transcript(&mut self, transcript: &str) -> &str {
        if !transcript.is_empty() {
            self.input.push(' ');
            self.input.push_str(transcript);
        }
        self.recompute()
    }

    /// Flip the direction and carry the previous output over as new input
    pub fn switch_direction(&mut self) -> &str {
        self.direction = self.direction.reversed();
        self.input = std::mem::take(&mut self.output);
        self.recompute()
    }

    /// Use a suggested phrase as input, taking the side written in the
    /// current source language
    pub fn select_phrase(&mut self, phrase: &Phrase) -> &str {
        self.input = phrase.source_text(self.direction).to_string();
        self.recompute()
    }

    // Blank input shows no translation at all, rather than echoing whitespace.
    fn recompute(&mut self) -> &str {
        self.output = if self.input.trim().is_empty() {
            String::new()
        } else {
            self.translator.translate(&self.input, self.direction)
        };
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, LexiconEntry};
    use crate::translator::Translator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn translator() -> Translator {
        Translator::new(
            Lexicon::build(vec![
                LexiconEntry::new("the", "el"),
                LexiconEntry::new("spice", "melange"),
                LexiconEntry::new("must", "wajib"),
                LexiconEntry::new("flow", "tadfuq"),
            ])
            .unwrap(),
        )
    }

    /// Tags output with the direction and counts calls
    struct CountingTranslator {
        calls: AtomicUsize,
    }

    impl Translate for CountingTranslator {
        fn translate(&self, text: &str, direction: Direction) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("{}:{}", direction.target(), text)
        }

        fn name(&self) -> &str {
            "Counting Translator"
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let t = translator();
        let session = Session::new(&t, Direction::EnglishToDune);
        assert_eq!(session.input(), "");
        assert_eq!(session.output(), "");
        assert_eq!(session.direction(), Direction::EnglishToDune);
    }

    #[test]
    fn test_set_input_translates() {
        let t = translator();
        let mut session = Session::new(&t, Direction::EnglishToDune);
        assert_eq!(session.set_input("The spice must flow."), "El melange wajib tadfuq.");
        assert_eq!(session.output(), "El melange wajib tadfuq.");
    }

    #[test]
    fn test_blank_input_clears_output_without_translating() {
        let t = CountingTranslator {
            calls: AtomicUsize::new(0),
        };
        let mut session = Session::new(&t, Direction::EnglishToDune);
        session.set_input("spice");
        assert_eq!(session.output(), "Dune:spice");
        assert_eq!(session.set_input("   \n"), "");
        assert_eq!(session.input(), "   \n");
        assert_eq!(t.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_append_transcript() {
        let t = translator();
        let mut session = Session::new(&t, Direction::EnglishToDune);
        session.set_input("the spice");
        assert_eq!(session.append_transcript("must flow"), "el melange wajib tadfuq");
        assert_eq!(session.input(), "the spice must flow");
    }

    #[test]
    fn test_append_transcript_to_empty_input() {
        let t = translator();
        let mut session = Session::new(&t, Direction::EnglishToDune);
        assert_eq!(session.append_transcript("spice"), " melange");
        assert_eq!(session.input(), " spice");
    }

    #[test]
    fn test_empty_transcript_is_ignored() {
        let t = translator();
        let mut session = Session::new(&t, Direction::EnglishToDune);
        session.set_input("spice");
        session.append_transcript("");
        assert_eq!(session.input(), "spice");
        assert_eq!(session.output(), "melange");
    }

    #[test]
    fn test_switch_direction_swaps_texts() {
        let t = translator();
        let mut session = Session::new(&t, Direction::EnglishToDune);
        session.set_input("The spice must flow.");
        let output = session.switch_direction().to_string();
        assert_eq!(session.direction(), Direction::DuneToEnglish);
        assert_eq!(session.input(), "El melange wajib tadfuq.");
        assert_eq!(output, "The spice must flow.");
    }

    #[test]
    fn test_switch_direction_twice_restores_direction() {
        let counting = CountingTranslator {
            calls: AtomicUsize::new(0),
        };
        let mut session = Session::new(&counting, Direction::EnglishToDune);
        session.switch_direction();
        session.switch_direction();
        assert_eq!(session.direction(), Direction::EnglishToDune);
        // Nothing was entered, so nothing was translated
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_select_phrase_uses_source_side() {
        let t = translator();
        let phrase = Phrase::new("The spice must flow.", "El melange wajib tadfuq.");

        let mut session = Session::new(&t, Direction::EnglishToDune);
        assert_eq!(session.select_phrase(&phrase), "El melange wajib tadfuq.");
        assert_eq!(session.input(), "The spice must flow.");

        let mut session = Session::new(&t, Direction::DuneToEnglish);
        assert_eq!(session.select_phrase(&phrase), "The spice must flow.");
        assert_eq!(session.input(), "El melange wajib tadfuq.");
    }

    #[test]
    fn test_session_over_trait_object() {
        let t = translator();
        let dynamic: &dyn Translate = &t;
        let mut session = Session::new(dynamic, Direction::EnglishToDune);
        assert_eq!(session.set_input("spice"), "melange");
    }
}
