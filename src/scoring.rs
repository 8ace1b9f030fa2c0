//! Lexical scoring heuristics.
//!
//! Two independent signals are computed per record:
//!
//! - `human_word_score`: per-token estimate that the name reads as real
//!   word(s) rather than random characters. Dictionary hits dominate,
//!   fragment/compound checks catch mashed-together names, and a
//!   pronounceability predicate rescues clean coinages. Abuse or noise
//!   signals veto the whole result.
//! - `composite_score`: the structural ranking score (length, vowel ratio,
//!   traffic/backlink boosts, hyphen/digit penalties).
//!
//! Callers weight the two separately; neither feeds the other.

use crate::lexicon::Lexicon;
use crate::wordlists::{is_common_word, is_negative_word, PREFIXES, SUFFIXES};

/// Longest fragment length tried by the substring check. Fragments of
/// length 3..=6 at any offset qualify; one consistent threshold set shared
/// with the compound-split minimum half length of 3.
const MAX_FRAGMENT_LEN: usize = 6;
const MIN_FRAGMENT_LEN: usize = 3;

const EXACT_WORD_POINTS: i32 = 12;
const FRAGMENT_POINTS: i32 = 9;
const COMPOUND_POINTS: i32 = 6;
const PRONOUNCEABLE_POINTS: i32 = 5;
const MIXED_LETTERS_POINTS: i32 = 2;
const AFFIX_POINTS: i32 = 2;
const CONSONANT_WALL_PENALTY: i32 = 3;
const MULTI_WORD_BONUS: u32 = 4;

/// Result of the human-word heuristic for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSignal {
    pub has_human_words: bool,
    /// Accumulated heuristic strength; always 0 when `has_human_words` is
    /// false.
    pub score: u32,
}

impl WordSignal {
    const NONE: WordSignal = WordSignal {
        has_human_words: false,
        score: 0,
    };
}

/// Score the tokenized SLD for human-word-likeness.
///
/// Tokens are expected lowercase alphabetic (the builder's tokenizer
/// guarantees this). A negative-word token or any noisy token (tripled
/// letters, doubled vowels, vowel/consonant pileups) vetoes the entire
/// record regardless of how well the other tokens score.
pub fn human_word_score(tokens: &[String], lexicon: &Lexicon) -> WordSignal {
    let mut total: u32 = 0;
    let mut has_human = false;
    let mut has_negative = false;
    let mut is_noisy = false;
    let mut qualifying = 0usize;

    for token in tokens {
        let token = token.as_str();
        if is_negative_word(token) {
            // Contributes nothing itself; taints the final result.
            has_negative = true;
            continue;
        }
        if is_noisy_token(token) {
            is_noisy = true;
        }

        let mut points: i32 = 0;
        let mut token_human = false;

        if is_wordish(token, lexicon) {
            points += EXACT_WORD_POINTS;
            token_human = true;
        } else if has_dictionary_fragment(token, lexicon) {
            points += FRAGMENT_POINTS;
            token_human = true;
        } else if is_compound(token, lexicon) {
            points += COMPOUND_POINTS;
            token_human = true;
        }

        let stats = LetterStats::of(token);
        if stats.pronounceable() {
            points += PRONOUNCEABLE_POINTS;
            token_human = true;
        }
        if stats.has_vowel && stats.has_consonant && token.len() >= 5 {
            points += MIXED_LETTERS_POINTS;
        }
        if has_brandable_prefix(token) {
            points += AFFIX_POINTS;
            token_human = true;
        }
        if has_brandable_suffix(token) {
            points += AFFIX_POINTS;
            token_human = true;
        }
        if stats.max_consonant_run >= 4 {
            points -= CONSONANT_WALL_PENALTY;
        }

        // Floor per token: a bad token never drags the total below zero.
        let points = points.max(0) as u32;
        if points > 0 {
            qualifying += 1;
        }
        total += points;
        has_human |= token_human;
    }

    if qualifying >= 2 && has_human {
        total += MULTI_WORD_BONUS;
    }

    if has_negative || is_noisy || !has_human {
        return WordSignal::NONE;
    }
    WordSignal {
        has_human_words: true,
        score: total,
    }
}

/// Known word: lexicon membership or the curated common-word set.
fn is_wordish(token: &str, lexicon: &Lexicon) -> bool {
    lexicon.contains(token) || is_common_word(token)
}

/// Any contained dictionary-ish fragment of length 3..=6 qualifies.
/// Longer fragments are tried first; the first hit wins.
fn has_dictionary_fragment(token: &str, lexicon: &Lexicon) -> bool {
    let len = token.len();
    // Offsets below are byte positions; non-ASCII tokens never match.
    if len < MIN_FRAGMENT_LEN || !token.is_ascii() {
        return false;
    }
    let upper = MAX_FRAGMENT_LEN.min(len);
    for frag_len in (MIN_FRAGMENT_LEN..=upper).rev() {
        for start in 0..=(len - frag_len) {
            if is_wordish(&token[start..start + frag_len], lexicon) {
                return true;
            }
        }
    }
    false
}

/// Two known words mashed together, e.g. "journeyharbor". Split points run
/// from offset 3 through len-2 so the left half is at least 3 characters
/// and the right at least 2.
fn is_compound(token: &str, lexicon: &Lexicon) -> bool {
    let len = token.len();
    if len < 5 || !token.is_ascii() {
        return false;
    }
    for split in MIN_FRAGMENT_LEN..=(len - 2) {
        if is_wordish(&token[..split], lexicon) && is_wordish(&token[split..], lexicon) {
            return true;
        }
    }
    false
}

fn has_brandable_prefix(token: &str) -> bool {
    PREFIXES
        .iter()
        .any(|p| token.starts_with(p) && token.len() >= p.len() + 3)
}

fn has_brandable_suffix(token: &str) -> bool {
    SUFFIXES
        .iter()
        .any(|s| token.ends_with(s) && token.len() >= s.len() + 2)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Letter statistics for one token, computed in a single pass.
struct LetterStats {
    has_vowel: bool,
    has_consonant: bool,
    vowel_ratio: f64,
    max_vowel_run: usize,
    max_consonant_run: usize,
    max_repeat_run: usize,
    has_doubled_vowel: bool,
}

impl LetterStats {
    fn of(token: &str) -> Self {
        let mut vowels = 0usize;
        let mut letters = 0usize;
        let mut vowel_run = 0usize;
        let mut consonant_run = 0usize;
        let mut max_vowel_run = 0usize;
        let mut max_consonant_run = 0usize;
        let mut repeat_run = 0usize;
        let mut max_repeat_run = 0usize;
        let mut has_doubled_vowel = false;
        let mut prev: Option<char> = None;

        for c in token.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            letters += 1;
            if is_vowel(c) {
                vowels += 1;
                vowel_run += 1;
                consonant_run = 0;
                if prev == Some(c) {
                    has_doubled_vowel = true;
                }
            } else {
                consonant_run += 1;
                vowel_run = 0;
            }
            max_vowel_run = max_vowel_run.max(vowel_run);
            max_consonant_run = max_consonant_run.max(consonant_run);

            if prev == Some(c) {
                repeat_run += 1;
            } else {
                repeat_run = 1;
            }
            max_repeat_run = max_repeat_run.max(repeat_run);
            prev = Some(c);
        }

        LetterStats {
            has_vowel: vowels > 0,
            has_consonant: letters > vowels,
            vowel_ratio: if letters > 0 {
                vowels as f64 / letters as f64
            } else {
                0.0
            },
            max_vowel_run,
            max_consonant_run,
            max_repeat_run,
            has_doubled_vowel,
        }
    }

    /// Reads like something a person could say out loud: both vowels and
    /// consonants, a sane vowel ratio, no five-consonant walls.
    fn pronounceable(&self) -> bool {
        self.has_vowel
            && self.has_consonant
            && self.vowel_ratio >= 0.18
            && self.vowel_ratio <= 0.82
            && self.max_consonant_run < 5
    }
}

/// Noise taints: tripled letters, doubled vowels, or three-plus runs of
/// either letter class.
fn is_noisy_token(token: &str) -> bool {
    let stats = LetterStats::of(token);
    stats.max_repeat_run >= 3
        || stats.has_doubled_vowel
        || stats.max_vowel_run >= 3
        || stats.max_consonant_run >= 3
}

// ─────────────────────────────────────────────────────────────────────────────
// Composite score
// ─────────────────────────────────────────────────────────────────────────────

/// Inputs for the composite ranking score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInput {
    pub length: usize,
    pub has_hyphen: bool,
    pub has_number: bool,
    pub vowel_ratio: f64,
    pub traffic: Option<f64>,
    pub backlinks: Option<f64>,
}

/// Structural ranking score: short, vowel-balanced names with real traffic
/// and backlinks rank highest; hyphens and digits are penalized. Rounded to
/// two decimals. Independent of the human-word heuristic.
pub fn composite_score(input: &ScoreInput) -> f64 {
    let base = (120.0 - input.length as f64 * 4.0).max(0.0);
    let vowel_boost = input.vowel_ratio * 14.0;
    let traffic_boost = match input.traffic {
        Some(t) if t > 0.0 => (1.0 + t).log10() * 10.0,
        _ => 0.0,
    };
    let backlinks_boost = match input.backlinks {
        Some(b) if b > 0.0 => (1.0 + b).log10() * 8.0,
        _ => 0.0,
    };
    let hyphen_penalty = if input.has_hyphen { 12.0 } else { 0.0 };
    let digit_penalty = if input.has_number { 8.0 } else { 0.0 };

    let score = base + vowel_boost + traffic_boost + backlinks_boost - hyphen_penalty - digit_penalty;
    (score * 100.0).round() / 100.0
}
