//! Dropscan - scoring and filtering core for dropping-domain lists
//!
//! Turns raw tabular rows into normalized, scored [`DomainRecord`]s and
//! evaluates filter/sort/paginate configurations over the full set fast
//! enough to recompute on every keystroke. Lexical heuristics (dictionary
//! lookup, fragment and compound-word matching, pronounceability, noise
//! detection) estimate how much a name reads like real words.

pub mod builder;
pub mod engine;
pub mod facets;
pub mod ingest;
pub mod interface;
pub mod lexicon;
pub mod scoring;
mod store;
pub mod trend;
pub(crate) mod wordlists;

pub use interface::*;
pub use store::ScanStore;
