//! Static word lexicon with popularity ranks.
//!
//! Loaded once per process from a newline-delimited, frequency-ordered word
//! source. Earlier words get higher ranks; rank 0 means "not found". Words
//! of two characters or fewer are excluded at load time. An empty or missing
//! source degrades every lookup to "unknown" rather than erroring; the rest
//! of the pipeline tolerates an empty lexicon.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static EMBEDDED_WORDS: &str = include_str!("data/words.txt");

/// Process-wide default lexicon, built from the embedded frequency list.
pub static DEFAULT_LEXICON: Lazy<Arc<Lexicon>> =
    Lazy::new(|| Arc::new(Lexicon::from_newline_source(EMBEDDED_WORDS)));

#[derive(Debug, Default)]
pub struct Lexicon {
    ranks: HashMap<String, u32>,
}

impl Lexicon {
    /// Build from a newline-delimited word source. Blank lines and words of
    /// length <= 2 are skipped; for duplicate words the earlier (higher)
    /// rank wins.
    pub fn from_newline_source(source: &str) -> Self {
        let words: Vec<String> = source
            .lines()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| w.len() > 2)
            .collect();
        let total = words.len() as u32;
        let mut ranks = HashMap::with_capacity(words.len());
        for (position, word) in words.into_iter().enumerate() {
            ranks.entry(word).or_insert(total - position as u32);
        }
        Self { ranks }
    }

    /// Lexicon with no entries; every lookup reports "unknown".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Case-insensitive exact membership.
    pub fn contains(&self, word: &str) -> bool {
        self.rank_of(word) > 0
    }

    /// Popularity rank; monotonically decreasing with source position.
    /// 0 = unknown word.
    pub fn rank_of(&self, word: &str) -> u32 {
        if word.chars().all(|c| c.is_ascii_lowercase()) {
            self.ranks.get(word).copied().unwrap_or(0)
        } else {
            self.ranks.get(&word.to_lowercase()).copied().unwrap_or(0)
        }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_skips_short_words() {
        let lex = Lexicon::from_newline_source("the\nof\nan\ncat\ndog\n");
        assert!(lex.contains("the"));
        assert!(lex.contains("cat"));
        assert!(!lex.contains("of"));
        assert!(!lex.contains("an"));
        assert_eq!(lex.len(), 3);
    }

    #[test]
    fn test_rank_decreases_with_position() {
        let lex = Lexicon::from_newline_source("alpha\nbeta\ngamma\n");
        assert!(lex.rank_of("alpha") > lex.rank_of("beta"));
        assert!(lex.rank_of("beta") > lex.rank_of("gamma"));
        assert!(lex.rank_of("gamma") > 0);
    }

    #[test]
    fn test_unknown_word_rank_zero() {
        let lex = Lexicon::from_newline_source("alpha\n");
        assert_eq!(lex.rank_of("zzzxq"), 0);
        assert!(!lex.contains("zzzxq"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let lex = Lexicon::from_newline_source("Coffee\n");
        assert!(lex.contains("coffee"));
        assert!(lex.contains("COFFEE"));
        assert_eq!(lex.rank_of("Coffee"), lex.rank_of("coffee"));
    }

    #[test]
    fn test_empty_source_degrades_quietly() {
        let lex = Lexicon::from_newline_source("");
        assert!(lex.is_empty());
        assert!(!lex.contains("anything"));
        assert_eq!(lex.rank_of("anything"), 0);
    }

    #[test]
    fn test_duplicate_keeps_earlier_rank() {
        let lex = Lexicon::from_newline_source("cat\ndog\ncat\n");
        // first occurrence of "cat" wins (rank 3 of 3)
        assert_eq!(lex.rank_of("cat"), 3);
        assert_eq!(lex.rank_of("dog"), 2);
    }

    #[test]
    fn test_default_lexicon_has_content() {
        let lex = &*DEFAULT_LEXICON;
        assert!(!lex.is_empty());
        assert!(lex.contains("time"));
        assert!(lex.contains("coffee"));
    }
}
