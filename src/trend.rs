//! Offline trend heuristic.
//!
//! Approximates "is this name topical" without any network lookups: tokens
//! are scored by their lexicon popularity rank, unknown-but-clean alphabetic
//! tokens get a flat credit, and short base names a small boost.

use crate::builder::tokenize_sld;
use crate::lexicon::Lexicon;
use std::collections::HashMap;

/// Flat credit for an all-alphabetic token the lexicon doesn't know.
const UNRANKED_WORD_CREDIT: u32 = 50;
/// Names shorter than this many characters get a per-character boost.
const SHORT_NAME_CUTOFF: usize = 20;
/// Default cap on distinct domains scored per batch.
pub const DEFAULT_MAX_LOOKUPS: usize = 400;

/// Trend score for one full domain (the final `.tld` label is ignored).
pub fn trend_score(domain: &str, lexicon: &Lexicon) -> u32 {
    let base = match domain.rsplit_once('.') {
        Some((sld, _)) => sld,
        None => domain,
    };
    let tokens = tokenize_sld(base);
    if tokens.is_empty() {
        return 0;
    }

    let mut score: u32 = 0;
    for token in &tokens {
        let rank = lexicon.rank_of(token);
        if rank > 0 {
            score += rank;
        } else if token.chars().all(|c| c.is_ascii_lowercase()) {
            score += UNRANKED_WORD_CREDIT;
        }
    }
    score + (SHORT_NAME_CUTOFF.saturating_sub(base.chars().count())) as u32
}

/// Score up to `max_lookups` distinct domains. Later duplicates are skipped;
/// input order decides which domains make the cut.
pub fn trend_scores<'a, I>(domains: I, max_lookups: usize, lexicon: &Lexicon) -> HashMap<String, u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scores = HashMap::new();
    for domain in domains {
        if scores.len() >= max_lookups {
            break;
        }
        scores
            .entry(domain.to_string())
            .or_insert_with(|| trend_score(domain, lexicon));
    }
    scores
}
