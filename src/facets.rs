//! Aggregate views over the record set.
//!
//! Recomputed from scratch whenever the record set changes; nothing is
//! maintained incrementally.

use crate::interface::{DomainRecord, TldFacet};
use std::collections::HashMap;

/// Distinct TLDs with record counts, sorted by count descending and then
/// alphabetically. Used to populate the TLD filter options.
pub fn tld_facets(records: &[DomainRecord]) -> Vec<TldFacet> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.tld.as_str()).or_default() += 1;
    }

    let mut facets: Vec<TldFacet> = counts
        .into_iter()
        .map(|(tld, count)| TldFacet {
            tld: tld.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tld.cmp(&b.tld)));
    facets
}
