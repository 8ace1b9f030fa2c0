//! Curated word tables for the lexical heuristics.
//!
//! Kept as static data rather than scattered literals so each table is
//! independently testable and replaceable.

/// Short common words that read as "real" even when a frequency lexicon
/// misses them. Checked alongside the lexicon for exact/fragment/compound
/// hits.
pub(crate) const COMMON_WORDS: &[&str] = &[
    "app", "art", "auto", "bank", "base", "best", "bet", "big", "bio", "bit",
    "blog", "box", "buy", "cab", "cafe", "car", "care", "cash", "chat", "chef",
    "city", "cloud", "club", "code", "coin", "cook", "cool", "data", "day",
    "deal", "dev", "doc", "dog", "eat", "eco", "fan", "fast", "fit", "fix",
    "food", "free", "fun", "fund", "game", "gear", "gem", "get", "gift", "go",
    "gold", "good", "grow", "gym", "hack", "help", "hire", "home", "host",
    "hot", "hub", "idea", "ink", "jet", "job", "joy", "key", "kid", "kit",
    "lab", "law", "lead", "learn", "life", "link", "list", "live", "loan",
    "love", "mail", "map", "mart", "max", "media", "meet", "menu", "mind",
    "mini", "mix", "moon", "move", "music", "net", "new", "news", "now", "one",
    "open", "pay", "pet", "pic", "pin", "plan", "play", "plus", "pod", "pro",
    "rent", "ride", "run", "sale", "save", "sea", "seek", "sell", "shop",
    "site", "sky", "smart", "snap", "spa", "spot", "star", "stay", "store",
    "studio", "sun", "swap", "talk", "task", "tax", "tea", "team", "tech",
    "tip", "top", "tour", "toy", "trade", "trip", "vet", "vip", "web", "wed",
    "win", "wise", "work", "yoga", "zen", "zip", "zone",
];

/// Brandable prefixes; a token starting with one of these (with at least 3
/// characters remaining) counts as a human-word signal.
pub(crate) const PREFIXES: &[&str] = &[
    "bio", "eco", "hyper", "ultra", "micro", "macro", "nano", "astro", "aero",
    "agri", "crypto", "block", "chain", "quant", "meta", "auto", "pro", "smart",
];

/// Brandable suffixes; a token ending with one of these (with at least 2
/// characters remaining) counts as a human-word signal.
pub(crate) const SUFFIXES: &[&str] = &[
    "able", "age", "bot", "core", "craft", "deck", "desk", "dock", "flow",
    "forge", "gate", "grid", "hub", "ify", "lab", "labs", "land", "lane",
    "life", "line", "link", "list", "loop", "ly", "mart", "mind", "nest",
    "net", "path", "pay", "pod", "point", "port", "press", "shop", "site",
    "space", "spot", "stack", "store", "tech", "time", "town", "vault",
    "verse", "ware", "wave", "way", "wise", "work", "works", "world", "yard",
];

/// Abuse/noise words. An exact token match contributes nothing and vetoes
/// the human-word signal for the whole record.
pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "adderall", "adult", "ambien", "bet", "betting", "casino", "cialis",
    "crack", "escort", "gamble", "gambling", "hentai", "malware", "naked",
    "nude", "pharma", "phishing", "pills", "poker", "porn", "porno", "ransom",
    "scam", "sex", "sexy", "slots", "spam", "spyware", "tramadol", "trojan",
    "viagra", "virus", "warez", "weed", "xanax", "xxx",
];

pub(crate) fn is_common_word(token: &str) -> bool {
    COMMON_WORDS.iter().any(|w| *w == token)
}

pub(crate) fn is_negative_word(token: &str) -> bool {
    NEGATIVE_WORDS.iter().any(|w| *w == token)
}
