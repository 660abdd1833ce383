//! Fuzzy matching of market hash names against a catalog snapshot.
//!
//! Skinport publishes display names that do not always equal Steam's market
//! hash names byte-for-byte: decorative `★` glyphs, casing, and extra
//! suffixes differ. The matcher finds the cheapest plausible listing for a
//! target identifier in two tiers:
//!
//! - **Exact**: the normalized catalog name equals the normalized target.
//! - **Partial**: the normalized catalog name contains the simplified target
//!   (target with `★` and the trailing parenthetical removed).
//!
//! Candidates are ranked by price first, so a cheaper partial match beats a
//! pricier exact one. Score only breaks price ties.

use rust_decimal::Decimal;
use tracing::debug;

use skinscan_core::CatalogEntry;

/// Reason reported when no catalog entry qualifies.
pub const NO_CANDIDATES: &str = "no candidates";

/// Score assigned to exact matches and to names equal to the simplified
/// target.
pub const EXACT_SCORE: i64 = 100;

const PREFIX_BONUS: i64 = 50;
const CONTAINS_BONUS: i64 = 30;

// =============================================================================
// Normalization
// =============================================================================

/// Trims and lowercases a name for comparison.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Strips the `★` glyph and a trailing parenthetical from a name.
///
/// The parenthetical is cut at the last `(` only when the string contains
/// both `(` and `)`. The result is not lowercased.
#[must_use]
pub fn simplify_name(name: &str) -> String {
    let stripped = name.replace('★', "");
    let stripped = stripped.trim();

    if stripped.contains('(') && stripped.contains(')') {
        if let Some(idx) = stripped.rfind('(') {
            return stripped[..idx].trim().to_string();
        }
    }
    stripped.to_string()
}

/// Scores a partial match of `simplified` inside `name`.
///
/// Both arguments are expected normalized. Lengths are counted in
/// characters.
#[must_use]
pub fn match_score(simplified: &str, name: &str) -> i64 {
    if name == simplified {
        return EXACT_SCORE;
    }

    let mut score = 0;
    if name.starts_with(simplified) {
        score += PREFIX_BONUS;
    }
    if name.contains(simplified) {
        score += CONTAINS_BONUS;
    }

    let name_len = name.chars().count() as i64;
    let simplified_len = simplified.chars().count() as i64;
    score - (name_len - simplified_len).abs() / 2
}

// =============================================================================
// Candidates
// =============================================================================

/// A catalog entry that qualified as a match for the target.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a> {
    pub entry: &'a CatalogEntry,
    pub price: Decimal,
    pub reason: String,
    pub score: i64,
}

/// Collects every qualifying entry in catalog order.
///
/// Unpriced entries are skipped before any name comparison.
#[must_use]
pub fn collect_candidates<'a>(catalog: &'a [CatalogEntry], target: &str) -> Vec<MatchCandidate<'a>> {
    let target_norm = normalize_name(target);
    let target_simple = normalize_name(&simplify_name(target));

    let mut candidates = Vec::new();
    for entry in catalog {
        let Some(price) = entry.min_price else {
            continue;
        };
        let name = normalize_name(&entry.display_name);

        if name == target_norm {
            candidates.push(MatchCandidate {
                entry,
                price,
                reason: format!("exact match: {name}"),
                score: EXACT_SCORE,
            });
            continue;
        }

        if !target_simple.is_empty() && name.contains(&target_simple) {
            let score = match_score(&target_simple, &name);
            candidates.push(MatchCandidate {
                entry,
                price,
                reason: format!("partial match: {name}"),
                score,
            });
        }
    }
    candidates
}

/// Orders candidates by price ascending, then score descending.
///
/// The sort is stable, so catalog order decides remaining ties.
pub fn rank_candidates(candidates: &mut [MatchCandidate<'_>]) {
    candidates.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| b.score.cmp(&a.score)));
}

// =============================================================================
// Best Price
// =============================================================================

/// Outcome of a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceMatch {
    pub price: Option<Decimal>,
    pub reason: Option<String>,
}

impl PriceMatch {
    fn no_candidates() -> Self {
        Self {
            price: None,
            reason: Some(NO_CANDIDATES.to_string()),
        }
    }

    /// Returns true if a price was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.price.is_some()
    }
}

/// Finds the cheapest matching price for `target` in `catalog`.
///
/// When nothing matches the reason is always [`NO_CANDIDATES`]; otherwise the
/// winning candidate's reason is returned only if `want_debug` is set.
#[must_use]
pub fn find_best_price(catalog: &[CatalogEntry], target: &str, want_debug: bool) -> PriceMatch {
    let mut candidates = collect_candidates(catalog, target);
    rank_candidates(&mut candidates);

    let Some(best) = candidates.into_iter().next() else {
        debug!(target = %target, "No catalog candidates");
        return PriceMatch::no_candidates();
    };

    debug!(
        target = %target,
        price = %best.price,
        score = best.score,
        reason = %best.reason,
        "Selected catalog match"
    );

    PriceMatch {
        price: Some(best.price),
        reason: want_debug.then_some(best.reason),
    }
}

/// Matcher bound to a catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CatalogMatcher<'a> {
    catalog: &'a [CatalogEntry],
    debug: bool,
}

impl<'a> CatalogMatcher<'a> {
    #[must_use]
    pub fn new(catalog: &'a [CatalogEntry]) -> Self {
        Self {
            catalog,
            debug: false,
        }
    }

    /// Includes match reasons in results.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn find(&self, target: &str) -> PriceMatch {
        find_best_price(self.catalog, target, self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(name: &str, price: Decimal) -> CatalogEntry {
        CatalogEntry::priced(name, price)
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  AK-47 | Redline  "), "ak-47 | redline");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_simplify_name_strips_star_and_wear() {
        assert_eq!(
            simplify_name("★ Karambit | Doppler (Factory New)"),
            "Karambit | Doppler"
        );
    }

    #[test]
    fn test_simplify_name_cuts_at_last_paren() {
        assert_eq!(simplify_name("M4A4 | Howl (A) (Field-Tested)"), "M4A4 | Howl (A)");
    }

    #[test]
    fn test_simplify_name_requires_both_parens() {
        assert_eq!(simplify_name("Broken (name"), "Broken (name");
        assert_eq!(simplify_name("Broken name)"), "Broken name)");
    }

    #[test]
    fn test_simplify_name_only_glyph() {
        assert_eq!(simplify_name(" ★ "), "");
    }

    // ==================== Score Tests ====================

    #[test]
    fn test_match_score_equal() {
        assert_eq!(match_score("foo", "foo"), 100);
    }

    #[test]
    fn test_match_score_prefix() {
        // 50 + 30 - (7 - 3) / 2
        assert_eq!(match_score("foo", "foo bar"), 78);
    }

    #[test]
    fn test_match_score_inner() {
        // 30 - (7 - 3) / 2
        assert_eq!(match_score("bar", "foo bar"), 28);
    }

    #[test]
    fn test_match_score_counts_chars() {
        // "★ foo" is 5 chars but 7 bytes
        assert_eq!(match_score("foo", "★ foo"), 29);
    }

    // ==================== Candidate Tests ====================

    #[test]
    fn test_collect_skips_unpriced() {
        let catalog = vec![
            CatalogEntry::new("Foo (Field-Tested)", None),
            entry("Foo (Field-Tested)", dec!(3)),
        ];

        let candidates = collect_candidates(&catalog, "Foo (Field-Tested)");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].price, dec!(3));
    }

    #[test]
    fn test_collect_exact_reason_uses_normalized_name() {
        let catalog = vec![entry("  FOO (Field-Tested) ", dec!(1))];

        let candidates = collect_candidates(&catalog, "Foo (Field-Tested)");
        assert_eq!(candidates[0].reason, "exact match: foo (field-tested)");
        assert_eq!(candidates[0].score, EXACT_SCORE);
    }

    #[test]
    fn test_collect_partial_match() {
        let catalog = vec![entry("★ Karambit | Doppler (Factory New)", dec!(900))];

        let candidates = collect_candidates(&catalog, "★ Karambit | Doppler (Minimal Wear)");
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].reason,
            "partial match: ★ karambit | doppler (factory new)"
        );
    }

    #[test]
    fn test_collect_unrelated_excluded() {
        let catalog = vec![entry("AWP | Asiimov (Field-Tested)", dec!(50))];
        assert!(collect_candidates(&catalog, "AK-47 | Redline (Field-Tested)").is_empty());
    }

    #[test]
    fn test_collect_empty_simplified_target_only_exact() {
        let catalog = vec![entry("anything", dec!(1)), entry("★", dec!(2))];

        let candidates = collect_candidates(&catalog, "★");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].price, dec!(2));
    }

    // ==================== Best Price Tests ====================

    #[test]
    fn test_find_best_price_empty_catalog() {
        let result = find_best_price(&[], "Anything", true);
        assert_eq!(result.price, None);
        assert_eq!(result.reason.as_deref(), Some(NO_CANDIDATES));
    }

    #[test]
    fn test_find_best_price_no_candidates_reason_without_debug() {
        let result = find_best_price(&[], "Anything", false);
        assert_eq!(result.reason.as_deref(), Some(NO_CANDIDATES));
        assert!(!result.is_found());
    }

    #[test]
    fn test_cheaper_partial_beats_pricier_exact() {
        let catalog = vec![
            entry("Foo (Field-Tested)", dec!(10.00)),
            entry("Foo (Field-Tested) Special", dec!(5.00)),
        ];

        let result = find_best_price(&catalog, "Foo (Field-Tested)", true);
        assert_eq!(result.price, Some(dec!(5.00)));
        assert_eq!(
            result.reason.as_deref(),
            Some("partial match: foo (field-tested) special")
        );
    }

    #[test]
    fn test_price_tie_broken_by_score() {
        let catalog = vec![
            entry("Foo Bar Baz Extended", dec!(5)),
            entry("Foo", dec!(5)),
        ];

        let result = find_best_price(&catalog, "Foo", true);
        assert_eq!(result.reason.as_deref(), Some("exact match: foo"));
    }

    #[test]
    fn test_full_tie_keeps_catalog_order() {
        let catalog = vec![entry("foo", dec!(5)), entry("FOO", dec!(5))];

        let mut candidates = collect_candidates(&catalog, "Foo");
        rank_candidates(&mut candidates);
        assert!(std::ptr::eq(candidates[0].entry, &catalog[0]));
    }

    #[test]
    fn test_reason_hidden_without_debug() {
        let catalog = vec![entry("Foo", dec!(5))];

        let result = find_best_price(&catalog, "foo", false);
        assert_eq!(result.price, Some(dec!(5)));
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_catalog_matcher_wraps_find() {
        let catalog = vec![entry("AK-47 | Redline (Field-Tested)", dec!(12.34))];
        let matcher = CatalogMatcher::new(&catalog).with_debug(true);

        assert_eq!(matcher.catalog_len(), 1);
        let result = matcher.find("AK-47 | Redline (Field-Tested)");
        assert_eq!(result.price, Some(dec!(12.34)));
        assert!(result.reason.is_some());
    }
}
