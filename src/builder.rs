//! Raw row → `DomainRecord` conversion.
//!
//! A row is a case-preserving map of column name to scalar value. The
//! builder scans prioritized key-name lists for the domain and each metric,
//! normalizes the domain, derives structural features, and attaches both
//! lexical scores. Rows without a usable domain are dropped (`None`), never
//! an error.

use crate::interface::{DomainMetrics, DomainRecord, RawRow};
use crate::lexicon::Lexicon;
use crate::scoring::{composite_score, human_word_score, ScoreInput};
use serde_json::Value;

/// Recognized column names, scanned in order; first non-empty string wins.
const DOMAIN_KEYS: &[&str] = &["domain", "Domain", "Domain Name", "name", "Name", "url", "URL"];
const TRAFFIC_KEYS: &[&str] = &["traffic", "Traffic", "search_volume", "SearchVolume"];
const BACKLINK_KEYS: &[&str] = &["backlinks", "Backlinks", "refdomains", "RefDomains", "refs"];
const PRICE_KEYS: &[&str] = &["price", "Price", "bid", "Bid", "min_bid", "MinBid"];

/// Build one record from a raw row. Returns `None` when the row has no
/// recognized domain column, the domain has no dot, or the SLD is empty.
/// Pure and deterministic: the same row always yields an identical record.
pub fn build_record(row: &RawRow, lexicon: &Lexicon) -> Option<DomainRecord> {
    let domain_value = extract_domain(row)?;
    let domain = normalize_domain(&domain_value);

    let (sld, tld) = domain.rsplit_once('.')?;
    if sld.is_empty() {
        return None;
    }
    let sld = sld.to_string();
    let tld = tld.to_string();

    let length = sld.chars().count();
    let has_hyphen = domain.contains('-');
    let has_number = domain.chars().any(|c| c.is_ascii_digit());
    let keywords = tokenize_sld(&sld);
    let ratio = vowel_ratio(&sld);

    let metrics = DomainMetrics {
        traffic: pick_number(row, TRAFFIC_KEYS),
        backlinks: pick_number(row, BACKLINK_KEYS),
        price: pick_number(row, PRICE_KEYS),
    };

    let signal = human_word_score(&keywords, lexicon);
    let score = composite_score(&ScoreInput {
        length,
        has_hyphen,
        has_number,
        vowel_ratio: ratio,
        traffic: metrics.traffic,
        backlinks: metrics.backlinks,
    });

    Some(DomainRecord {
        domain,
        tld,
        sld,
        length,
        has_hyphen,
        has_number,
        keywords,
        has_human_words: signal.has_human_words,
        word_score: signal.score,
        score,
        metrics,
        raw: row.clone(),
    })
}

fn extract_domain(row: &RawRow) -> Option<String> {
    for key in DOMAIN_KEYS {
        if let Some(Value::String(s)) = row.get(*key) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Strip a leading http(s) scheme and anything from the first `/` on, then
/// lowercase.
fn normalize_domain(value: &str) -> String {
    let mut rest = value;
    for scheme in ["http://", "https://"] {
        if let Some(head) = rest.get(..scheme.len()) {
            if head.eq_ignore_ascii_case(scheme) {
                rest = &rest[scheme.len()..];
                break;
            }
        }
    }
    let rest = rest.split('/').next().unwrap_or(rest);
    rest.to_lowercase()
}

/// Extract lowercase alphabetic tokens from an SLD: everything outside
/// `[a-z0-9-]` becomes a separator, then splitting on runs of hyphens,
/// digits, and whitespace. Fragments shorter than 3 characters are dropped.
pub fn tokenize_sld(sld: &str) -> Vec<String> {
    let cleaned: String = sld
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split(|c: char| c == '-' || c.is_ascii_digit() || c.is_whitespace())
        .filter(|part| part.len() >= 3)
        .map(|part| part.to_ascii_lowercase())
        .collect()
}

/// Ratio of vowels over the letters-only view of the SLD (digits, hyphens,
/// and dots stripped). 0 when there are no letters.
fn vowel_ratio(sld: &str) -> f64 {
    let mut letters = 0usize;
    let mut vowels = 0usize;
    for c in sld.chars() {
        if c.is_ascii_alphabetic() {
            letters += 1;
            if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') {
                vowels += 1;
            }
        }
    }
    if letters == 0 {
        0.0
    } else {
        vowels as f64 / letters as f64
    }
}

/// Accept a native number or a string that parses as one after commas and
/// spaces are removed. Unparsable values count as absent, never an error.
fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            let cleaned: String = trimmed.chars().filter(|c| *c != ',' && *c != ' ').collect();
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

fn pick_number(row: &RawRow, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| row.get(*key).and_then(number_from))
}
