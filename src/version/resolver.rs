//! Version resolution over candidate sets
//!
//! Resolves "latest version" and "all versions, sorted" over the version
//! strings attached to a tool's uploaded files. Malformed candidates are not
//! errors at this layer: they are logged and excluded from consideration.
//! Both operations are stateless, deterministic pure functions.

use indexmap::IndexMap;
use tracing::debug;

use crate::version::grammar::Version;

/// Resolve the highest-precedence version among `candidates`.
///
/// Malformed candidates are silently discarded. If none validates, returns
/// `fallback` when it is present and non-blank, else `None`. When two
/// distinct strings parse to equal versions (e.g. `1.0.0` and `1.0.0+x`),
/// either may be returned.
pub fn latest(candidates: &[String], fallback: Option<&str>) -> Option<String> {
    candidates
        .iter()
        .filter_map(parse_candidate)
        .max_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(raw, _)| raw.clone())
        .or_else(|| non_blank(fallback))
}

/// Resolve every distinct valid version among `candidates`, highest
/// precedence first.
///
/// Candidates that parse to the same version collapse to one representative,
/// the first encountered in input order. If the filtered set is empty and
/// `fallback` is present and non-blank, the result is just `[fallback]`.
pub fn all_sorted(candidates: &[String], fallback: Option<&str>) -> Vec<String> {
    let mut distinct: IndexMap<Version, &String> = IndexMap::new();
    for (raw, version) in candidates.iter().filter_map(parse_candidate) {
        distinct.entry(version).or_insert(raw);
    }

    if distinct.is_empty() {
        return non_blank(fallback).into_iter().collect();
    }

    distinct
        .sorted_by(|a, _, b, _| b.cmp(a))
        .map(|(_, raw)| raw.clone())
        .collect()
}

fn parse_candidate(raw: &String) -> Option<(&String, Version)> {
    match Version::parse(raw) {
        Ok(version) => Some((raw, version)),
        Err(_) => {
            debug!("discarding malformed version candidate: {raw:?}");
            None
        }
    }
}

fn non_blank(fallback: Option<&str>) -> Option<String> {
    fallback
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn owned(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["1.2.0", "1.10.0", "1.9.9"], None, Some("1.10.0"))]
    #[case(&["not-a-version", "abc"], Some("2.0.0"), Some("2.0.0"))]
    #[case(&["not-a-version", "1.5.0"], Some("2.0.0"), Some("1.5.0"))]
    #[case(&["1.0.0-alpha", "1.0.0"], None, Some("1.0.0"))]
    #[case(&[], None, None)]
    #[case(&[], Some("  "), None)] // blank fallback is no fallback
    fn latest_cases(
        #[case] candidates: &[&str],
        #[case] fallback: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            latest(&owned(candidates), fallback),
            expected.map(str::to_string)
        );
    }

    #[test]
    fn latest_prefers_higher_core_triplet_over_release_status() {
        // 2.0.0-alpha outranks every 1.x release.
        let candidates = owned(&["1.9.9", "2.0.0-alpha", "1.0.0"]);
        assert_eq!(latest(&candidates, None), Some("2.0.0-alpha".to_string()));
    }

    #[test]
    fn all_sorted_deduplicates_and_orders_descending() {
        let candidates = owned(&["1.0.0", "1.0.0", "2.0.0-alpha", "2.0.0"]);
        assert_eq!(
            all_sorted(&candidates, None),
            owned(&["2.0.0", "2.0.0-alpha", "1.0.0"])
        );
    }

    #[test]
    fn all_sorted_collapses_equal_versions_to_first_seen() {
        // Build metadata does not distinguish versions; the first spelling wins.
        let candidates = owned(&["1.0.0+x", "1.0.0", "1.0.0+y"]);
        assert_eq!(all_sorted(&candidates, None), owned(&["1.0.0+x"]));
    }

    #[rstest]
    #[case(&[], None, &[])]
    #[case(&[], Some("1.0.0"), &["1.0.0"])]
    #[case(&["garbage"], Some("1.0.0"), &["1.0.0"])]
    #[case(&["garbage"], None, &[])]
    fn all_sorted_fallback_cases(
        #[case] candidates: &[&str],
        #[case] fallback: Option<&str>,
        #[case] expected: &[&str],
    ) {
        assert_eq!(all_sorted(&owned(candidates), fallback), owned(expected));
    }

    #[test]
    fn all_sorted_skips_malformed_among_valid() {
        let candidates = owned(&["v1.0.0", "1.0.0", "01.2.3", "0.9.0"]);
        assert_eq!(all_sorted(&candidates, None), owned(&["1.0.0", "0.9.0"]));
    }

    #[test]
    fn fallback_is_not_validated() {
        // The declared current version is returned as-is even if it would
        // not parse; validating it is the upload path's concern.
        assert_eq!(latest(&[], Some("legacy")), Some("legacy".to_string()));
    }
}
