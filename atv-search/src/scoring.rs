//! Relevance scoring for search results.

/// Compute a relevance score for a result title against the query.
///
/// Higher is better. Deterministic and pure. The score is the sum of:
///
/// - a match tier, mutually exclusive and checked in priority order on the
///   lower-cased strings: exact match +1000, prefix match +500, query
///   bounded by a leading space inside the title +300, bare substring +200;
/// - +50 per query word that appears verbatim among the title's words
///   (repeated query words each count);
/// - a position bonus of `100 - position`, floored at zero, where
///   `position` is the item's 0-based index within its own shelf.
pub fn relevance_score(title: &str, query: &str, position: usize) -> u32 {
    let title_lower = title.to_lowercase();
    let query_lower = query.to_lowercase();
    let mut score = 0;

    // Exact / prefix / contains priority
    if title_lower == query_lower {
        score += 1000;
    } else if title_lower.starts_with(&query_lower) {
        score += 500;
    } else if format!(" {title_lower}").contains(&format!(" {query_lower}")) {
        score += 300;
    } else if title_lower.contains(&query_lower) {
        score += 200;
    }

    // Word-based scoring
    let title_words: Vec<&str> = title_lower.split_whitespace().collect();
    for query_word in query_lower.split_whitespace() {
        if title_words.contains(&query_word) {
            score += 50;
        }
    }

    // Earlier in the shelf = higher score
    score += 100u32.saturating_sub(position as u32);

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_tiers_are_ordered() {
        // Same position so only the tier and word bonuses differ.
        let exact = relevance_score("Foundation", "Foundation", 0);
        let prefix = relevance_score("Foundation II", "Foundation", 0);
        let bounded = relevance_score("The Foundation Show", "Foundation", 0);
        let substring = relevance_score("xFoundationx", "Foundation", 0);

        assert!(exact > prefix);
        assert!(prefix > bounded);
        assert!(bounded > substring);
    }

    #[test]
    fn test_tier_values() {
        // tier + one word bonus + full position bonus
        assert_eq!(relevance_score("Foundation", "Foundation", 0), 1000 + 50 + 100);
        assert_eq!(relevance_score("Foundation II", "Foundation", 0), 500 + 50 + 100);
        assert_eq!(
            relevance_score("The Foundation Show", "Foundation", 0),
            300 + 50 + 100
        );
        // "xFoundationx" is not a standalone word, so no word bonus
        assert_eq!(relevance_score("xFoundationx", "Foundation", 0), 200 + 100);
    }

    #[test]
    fn test_position_bonus_monotonic_with_floor() {
        let at = |position| relevance_score("Severance", "Severance", position);

        assert_eq!(at(0) - at(1), 1);
        assert!(at(0) > at(50));
        assert!(at(50) > at(99));
        // Floor at zero from position 100 onwards
        assert_eq!(at(100), at(150));
    }

    #[test]
    fn test_word_bonus_is_additive() {
        // Both words match out of order: no tier, two word bonuses.
        let both = relevance_score("lasso ted", "ted lasso", 0);
        // Only one shared word.
        let one = relevance_score("lasso strikes back", "ted lasso", 0);

        assert_eq!(both - one, 50);
        assert_eq!(both, 50 + 50 + 100);
    }

    #[test]
    fn test_duplicate_query_words_each_count() {
        let doubled = relevance_score("ted talks", "ted ted", 0);
        let single = relevance_score("ted talks", "ted", 0);

        // "ted ted" is not a substring of "ted talks", so no tier applies;
        // "ted" alone hits the prefix tier. Compare word bonuses directly.
        assert_eq!(doubled, 50 + 50 + 100);
        assert_eq!(single, 500 + 50 + 100);
    }

    #[test]
    fn test_no_match_scores_position_only() {
        assert_eq!(relevance_score("Silo", "Severance", 3), 97);
    }
}
