//! Maps query text to a spot [`Classification`].

use spot_finder_search_models::Classification;

use crate::keywords::KeywordTable;

/// Keywords, synonyms and jargon for each classification.
///
/// Order matters: the first keyword found in the query wins, so a query
/// mentioning both "track" and "crawler" classifies as
/// [`Classification::Race`].
pub static CLASSIFICATION_KEYWORDS: KeywordTable<'static, Classification> = KeywordTable::new(&[
    ("bash", Classification::Bash),
    ("bashing", Classification::Bash),
    ("basher", Classification::Bash),
    ("race", Classification::Race),
    ("racing", Classification::Race),
    ("track", Classification::Race),
    ("tracks", Classification::Race),
    ("raceway", Classification::Race),
    ("crawl", Classification::Crawl),
    ("crawling", Classification::Crawl),
    ("crawler", Classification::Crawl),
    ("rock", Classification::Crawl),
    ("rocks", Classification::Crawl),
    ("trail", Classification::Crawl),
    ("hobby", Classification::Hobby),
    ("shop", Classification::Hobby),
    ("shops", Classification::Hobby),
    ("store", Classification::Hobby),
    ("stores", Classification::Hobby),
    ("airfield", Classification::Airfield),
    ("airfields", Classification::Airfield),
    ("field", Classification::Airfield),
    ("flying", Classification::Airfield),
    ("fly", Classification::Airfield),
    ("plane", Classification::Airfield),
    ("planes", Classification::Airfield),
    ("aircraft", Classification::Airfield),
    ("boat", Classification::Boat),
    ("boats", Classification::Boat),
    ("boating", Classification::Boat),
    ("pond", Classification::Boat),
    ("ponds", Classification::Boat),
]);

/// Classifies a normalized (lower-cased, trimmed) query.
///
/// Returns `None` when no keyword is present; callers must not substitute
/// a default classification.
#[must_use]
pub fn classify(normalized_query: &str) -> Option<Classification> {
    classify_with(&CLASSIFICATION_KEYWORDS, normalized_query)
}

/// Like [`classify`], but also returns the keyword that matched.
#[must_use]
pub fn classify_match(normalized_query: &str) -> Option<(&'static str, Classification)> {
    CLASSIFICATION_KEYWORDS.first_match_entry(normalized_query)
}

/// Classifies against an arbitrary ordered table.
#[must_use]
pub fn classify_with(
    table: &KeywordTable<'_, Classification>,
    normalized_query: &str,
) -> Option<Classification> {
    table.first_match(normalized_query)
}

/// Returns `true` if `word` is exactly a classification keyword.
#[must_use]
pub fn is_classification_keyword(word: &str) -> bool {
    CLASSIFICATION_KEYWORDS.contains_key(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_single_keywords() {
        assert_eq!(classify("bash spots"), Some(Classification::Bash));
        assert_eq!(classify("indoor raceway"), Some(Classification::Race));
        assert_eq!(classify("crawler course"), Some(Classification::Crawl));
        assert_eq!(classify("local hobby store"), Some(Classification::Hobby));
        assert_eq!(classify("flying club"), Some(Classification::Airfield));
        assert_eq!(classify("boat pond"), Some(Classification::Boat));
    }

    #[test]
    fn matches_inside_longer_words() {
        assert_eq!(classify("rockpile"), Some(Classification::Crawl));
        assert_eq!(classify("trails"), Some(Classification::Crawl));
    }

    #[test]
    fn no_keyword_is_none() {
        assert_eq!(classify("quiet spot near the river"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn earlier_table_entry_wins() {
        let table = KeywordTable::new(&[
            ("crawl", Classification::Crawl),
            ("race", Classification::Race),
        ]);
        assert_eq!(
            classify_with(&table, "race then crawl"),
            Some(Classification::Crawl)
        );

        let table = KeywordTable::new(&[
            ("race", Classification::Race),
            ("crawl", Classification::Crawl),
        ]);
        assert_eq!(
            classify_with(&table, "crawl then race"),
            Some(Classification::Race)
        );
    }

    #[test]
    fn every_classification_has_a_keyword() {
        for c in Classification::all() {
            assert!(
                CLASSIFICATION_KEYWORDS
                    .keywords()
                    .any(|k| classify(k) == Some(*c)),
                "no keyword classifies as {c}"
            );
        }
    }

    #[test]
    fn match_reports_the_keyword() {
        assert_eq!(
            classify_match("rockpile"),
            Some(("rock", Classification::Crawl))
        );
        assert_eq!(classify_match("quiet river"), None);
    }

    #[test]
    fn keyword_lookup_is_exact() {
        assert!(is_classification_keyword("tracks"));
        assert!(!is_classification_keyword("racetracks"));
    }
}
