//! Filter/sort/paginate engine.
//!
//! A pure recompute function over (full record set, configuration): nothing
//! here caches or mutates. Filtering is an unordered conjunction of
//! independent predicates; ordering only affects speed, never the result
//! set. Sorting uses a stable per-key comparator whose natural direction a
//! global flag may invert; pagination windows the sorted matches.

use crate::interface::{
    DomainRecord, FieldPolicy, FilterState, PageView, SortDir, SortKey, WordFilter,
};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Minimum effective page size regardless of configuration.
const MIN_PAGE_SIZE: usize = 50;
/// Page size when the configured cap is zero/unset.
const DEFAULT_PAGE_SIZE: usize = 500;

/// Split a comma-delimited keyword field into trimmed lowercase terms.
pub fn parse_terms(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Evaluate the current configuration against the full record set and
/// return the requested page window.
pub fn evaluate(records: &[DomainRecord], filters: &FilterState, requested_page: usize) -> PageView {
    let include_terms = parse_terms(&filters.include);
    let exclude_terms = parse_terms(&filters.exclude);
    let tld_set: HashSet<&str> = filters
        .selected_tlds
        .iter()
        .map(|tld| tld.strip_prefix('.').unwrap_or(tld))
        .collect();
    let search_term = filters.search.trim().to_lowercase();

    let mut matched: Vec<&DomainRecord> = records
        .iter()
        .filter(|record| {
            passes_filters(record, filters, &tld_set, &search_term, &include_terms, &exclude_terms)
        })
        .collect();

    let cmp = comparator(filters.sort_by);
    match filters.sort_dir {
        SortDir::Asc => matched.sort_by(|a, b| cmp(a, b)),
        SortDir::Desc => matched.sort_by(|a, b| cmp(a, b).reverse()),
    }

    let page_size = effective_page_size(filters.max_results);
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);
    let start = (current_page - 1) * page_size;
    let window = matched
        .iter()
        .skip(start)
        .take(page_size)
        .map(|record| (*record).clone())
        .collect();

    PageView {
        records: window,
        total_matched,
        total_pages,
        current_page,
    }
}

fn effective_page_size(max_results: usize) -> usize {
    let configured = if max_results == 0 { DEFAULT_PAGE_SIZE } else { max_results };
    configured.max(MIN_PAGE_SIZE)
}

fn passes_filters(
    record: &DomainRecord,
    filters: &FilterState,
    tld_set: &HashSet<&str>,
    search_term: &str,
    include_terms: &[String],
    exclude_terms: &[String],
) -> bool {
    // A zero bound disables that side of the length check.
    if filters.length_min > 0 && record.length < filters.length_min {
        return false;
    }
    if filters.length_max > 0 && record.length > filters.length_max {
        return false;
    }
    match filters.hyphens {
        FieldPolicy::Block if record.has_hyphen => return false,
        FieldPolicy::Allow if !record.has_hyphen => return false,
        _ => {}
    }
    match filters.digits {
        FieldPolicy::Block if record.has_number => return false,
        FieldPolicy::Allow if !record.has_number => return false,
        _ => {}
    }
    if let Some(price_max) = filters.price_max {
        // Records without a price always pass the ceiling.
        if record.metrics.price.is_some_and(|price| price > price_max) {
            return false;
        }
    }
    if filters.human_words == WordFilter::Require && !record.has_human_words {
        return false;
    }
    if let Some(traffic_min) = filters.traffic_min {
        if record.metrics.traffic.unwrap_or(0.0) < traffic_min {
            return false;
        }
    }
    if let Some(backlinks_min) = filters.backlinks_min {
        if record.metrics.backlinks.unwrap_or(0.0) < backlinks_min {
            return false;
        }
    }
    if !tld_set.is_empty() && !tld_set.contains(record.tld.as_str()) {
        return false;
    }
    if !search_term.is_empty() && !record.domain.contains(search_term) {
        return false;
    }
    if include_terms
        .iter()
        .any(|term| !record.domain.contains(term.as_str()))
    {
        return false;
    }
    if exclude_terms.iter().any(|term| {
        record.domain.contains(term.as_str()) || record.keywords.iter().any(|k| k == term)
    }) {
        return false;
    }
    true
}

/// Natural (ascending) comparator per sort key. The caller reverses it for
/// descending direction; ties fall through to the documented tie-breaks and
/// finally to stable-sort input order.
fn comparator(key: SortKey) -> fn(&DomainRecord, &DomainRecord) -> Ordering {
    match key {
        // Score ties break by word score, then by length descending, so
        // that equal-scored names prefer the shorter one when the usual
        // descending direction is applied.
        SortKey::Score => |a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.word_score.cmp(&b.word_score))
                .then_with(|| b.length.cmp(&a.length))
        },
        SortKey::Length => |a, b| a.length.cmp(&b.length).then_with(|| a.domain.cmp(&b.domain)),
        SortKey::Alphabetical => |a, b| a.domain.cmp(&b.domain),
        SortKey::Tld => |a, b| a.tld.cmp(&b.tld).then_with(|| a.domain.cmp(&b.domain)),
        // Unknown traffic/backlinks rank below any known value.
        SortKey::Traffic => |a, b| cmp_metric_none_low(a.metrics.traffic, b.metrics.traffic),
        SortKey::Backlinks => |a, b| cmp_metric_none_low(a.metrics.backlinks, b.metrics.backlinks),
        // Unknown price ranks above any known value, so priced records lead
        // when sorting cheapest-first.
        SortKey::Price => |a, b| cmp_metric_none_high(a.metrics.price, b.metrics.price),
    }
}

fn cmp_metric_none_low(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

fn cmp_metric_none_high(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_record;
    use crate::interface::RawRow;
    use crate::lexicon::DEFAULT_LEXICON;
    use serde_json::{json, Value};

    fn record(domain: &str, extra: &[(&str, Value)]) -> DomainRecord {
        let mut row = RawRow::new();
        row.insert("domain".into(), json!(domain));
        for (k, v) in extra {
            row.insert(k.to_string(), v.clone());
        }
        build_record(&row, &DEFAULT_LEXICON).expect("test row must build")
    }

    fn sample() -> Vec<DomainRecord> {
        vec![
            record("cafe.io", &[("traffic", json!(900)), ("price", json!(40))]),
            record("sunfox.com", &[("backlinks", json!(120))]),
            record("zzzxq.com", &[("price", json!(51))]),
            record("smart-cloud.net", &[("traffic", json!(5000))]),
            record("longestdomainnameever.com", &[]),
        ]
    }

    fn domains(view: &PageView) -> Vec<&str> {
        view.records.iter().map(|r| r.domain.as_str()).collect()
    }

    // ── term parsing ─────────────────────────────────────────────

    #[test]
    fn test_parse_terms() {
        assert_eq!(parse_terms("Cafe, SHOP ,, tea"), vec!["cafe", "shop", "tea"]);
        assert!(parse_terms("").is_empty());
        assert!(parse_terms(" , ,").is_empty());
    }

    // ── predicates ───────────────────────────────────────────────

    #[test]
    fn test_no_filters_matches_everything() {
        let records = sample();
        let view = evaluate(&records, &FilterState::default(), 1);
        assert_eq!(view.total_matched, records.len());
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let records = sample();
        let filters = FilterState {
            length_min: 4,
            length_max: 6,
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        // "cafe" (4), "sunfox" (6), "zzzxq" (5)
        assert_eq!(view.total_matched, 3);
        assert!(view.records.iter().all(|r| (4..=6).contains(&r.length)));
    }

    #[test]
    fn test_zero_length_bound_disables_check() {
        let records = sample();
        let filters = FilterState {
            length_min: 0,
            length_max: 0,
            ..Default::default()
        };
        assert_eq!(evaluate(&records, &filters, 1).total_matched, records.len());
    }

    #[test]
    fn test_hyphen_policy() {
        let records = sample();
        let block = FilterState {
            hyphens: FieldPolicy::Block,
            ..Default::default()
        };
        assert!(evaluate(&records, &block, 1)
            .records
            .iter()
            .all(|r| !r.has_hyphen));

        let allow = FilterState {
            hyphens: FieldPolicy::Allow,
            ..Default::default()
        };
        let view = evaluate(&records, &allow, 1);
        assert_eq!(domains(&view), vec!["smart-cloud.net"]);
    }

    #[test]
    fn test_price_ceiling_passes_unknown() {
        let records = sample();
        let filters = FilterState {
            price_max: Some(50.0),
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        // priced at 51 rejected; unpriced records pass
        assert!(!domains(&view).contains(&"zzzxq.com"));
        assert!(domains(&view).contains(&"cafe.io"));
        assert!(domains(&view).contains(&"sunfox.com"));
    }

    #[test]
    fn test_traffic_floor_treats_unknown_as_zero() {
        let records = sample();
        let filters = FilterState {
            traffic_min: Some(1000.0),
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        assert_eq!(domains(&view), vec!["smart-cloud.net"]);
    }

    #[test]
    fn test_human_words_requirement() {
        let records = sample();
        let filters = FilterState {
            human_words: WordFilter::Require,
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        assert!(view.records.iter().all(|r| r.has_human_words));
        assert!(!domains(&view).contains(&"zzzxq.com"));
    }

    #[test]
    fn test_tld_set_strips_leading_dot() {
        let records = sample();
        let filters = FilterState {
            selected_tlds: vec![".io".into(), "net".into()],
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        let mut seen = domains(&view);
        seen.sort();
        assert_eq!(seen, vec!["cafe.io", "smart-cloud.net"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = sample();
        let filters = FilterState {
            search: "  FOX ".into(),
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        assert_eq!(domains(&view), vec!["sunfox.com"]);
    }

    #[test]
    fn test_include_terms_all_required() {
        let records = sample();
        let filters = FilterState {
            include: "sun,fox".into(),
            ..Default::default()
        };
        assert_eq!(evaluate(&records, &filters, 1).total_matched, 1);

        let filters = FilterState {
            include: "sun,cloud".into(),
            ..Default::default()
        };
        assert_eq!(evaluate(&records, &filters, 1).total_matched, 0);
    }

    #[test]
    fn test_exclude_terms_any_rejects() {
        let records = sample();
        let filters = FilterState {
            exclude: "cloud, cafe".into(),
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        assert!(!domains(&view).contains(&"smart-cloud.net"));
        assert!(!domains(&view).contains(&"cafe.io"));
        assert!(domains(&view).contains(&"sunfox.com"));
    }

    #[test]
    fn test_removing_a_filter_never_shrinks_results() {
        let records = sample();
        let tight = FilterState {
            search: "o".into(),
            length_max: 12,
            hyphens: FieldPolicy::Block,
            price_max: Some(50.0),
            ..Default::default()
        };
        let tight_count = evaluate(&records, &tight, 1).total_matched;

        for looser in [
            FilterState { search: String::new(), ..tight.clone() },
            FilterState { length_max: 0, ..tight.clone() },
            FilterState { hyphens: FieldPolicy::Any, ..tight.clone() },
            FilterState { price_max: None, ..tight.clone() },
        ] {
            assert!(evaluate(&records, &looser, 1).total_matched >= tight_count);
        }
    }

    // ── sorting ──────────────────────────────────────────────────

    #[test]
    fn test_sort_score_descending_default() {
        let records = sample();
        let view = evaluate(&records, &FilterState::default(), 1);
        let scores: Vec<f64> = view.records.iter().map(|r| r.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_sort_length_ascending() {
        let records = sample();
        let filters = FilterState {
            sort_by: SortKey::Length,
            sort_dir: SortDir::Asc,
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        let lengths: Vec<usize> = view.records.iter().map(|r| r.length).collect();
        let mut sorted = lengths.clone();
        sorted.sort();
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_sort_alphabetical() {
        let records = sample();
        let filters = FilterState {
            sort_by: SortKey::Alphabetical,
            sort_dir: SortDir::Asc,
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        let names = domains(&view);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_sort_traffic_desc_puts_unknown_last() {
        let records = sample();
        let filters = FilterState {
            sort_by: SortKey::Traffic,
            sort_dir: SortDir::Desc,
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        assert_eq!(view.records[0].domain, "smart-cloud.net");
        assert_eq!(view.records[1].domain, "cafe.io");
        // the three records without traffic trail the known values
        assert!(view.records[2..].iter().all(|r| r.metrics.traffic.is_none()));
    }

    #[test]
    fn test_sort_price_asc_puts_unknown_last() {
        let records = sample();
        let filters = FilterState {
            sort_by: SortKey::Price,
            sort_dir: SortDir::Asc,
            ..Default::default()
        };
        let view = evaluate(&records, &filters, 1);
        assert_eq!(view.records[0].metrics.price, Some(40.0));
        assert_eq!(view.records[1].metrics.price, Some(51.0));
        assert!(view.records[2..].iter().all(|r| r.metrics.price.is_none()));
    }

    #[test]
    fn test_sort_direction_round_trip() {
        let records = sample();
        let desc = FilterState::default();
        let asc = FilterState {
            sort_dir: SortDir::Asc,
            ..Default::default()
        };
        let first = evaluate(&records, &desc, 1);
        let _flipped = evaluate(&records, &asc, 1);
        let again = evaluate(&records, &desc, 1);
        assert_eq!(domains(&first), domains(&again));
    }

    // ── pagination ───────────────────────────────────────────────

    fn many_records(n: usize) -> Vec<DomainRecord> {
        (0..n)
            .map(|i| record(&format!("name{i:04}.com"), &[]))
            .collect()
    }

    #[test]
    fn test_page_size_floor() {
        assert_eq!(effective_page_size(0), 500);
        assert_eq!(effective_page_size(10), 50);
        assert_eq!(effective_page_size(75), 75);
    }

    #[test]
    fn test_pages_partition_the_result_set() {
        let records = many_records(130);
        let filters = FilterState {
            sort_by: SortKey::Alphabetical,
            sort_dir: SortDir::Asc,
            max_results: 50,
            ..Default::default()
        };

        let first = evaluate(&records, &filters, 1);
        assert_eq!(first.total_matched, 130);
        assert_eq!(first.total_pages, 3);

        let mut seen: Vec<String> = Vec::new();
        for page in 1..=first.total_pages {
            let view = evaluate(&records, &filters, page);
            assert_eq!(view.current_page, page);
            seen.extend(view.records.iter().map(|r| r.domain.clone()));
        }
        assert_eq!(seen.len(), 130);
        let mut expected: Vec<String> = records.iter().map(|r| r.domain.clone()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_page_clamped_into_range() {
        let records = many_records(10);
        let filters = FilterState::default();
        assert_eq!(evaluate(&records, &filters, 0).current_page, 1);
        assert_eq!(evaluate(&records, &filters, 99).current_page, 1);

        let paged = FilterState {
            max_results: 50,
            ..Default::default()
        };
        let records = many_records(120);
        let view = evaluate(&records, &paged, 99);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.records.len(), 20);
    }

    #[test]
    fn test_empty_record_set_yields_one_empty_page() {
        let view = evaluate(&[], &FilterState::default(), 5);
        assert_eq!(view.total_matched, 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert!(view.records.is_empty());
    }
}
