/// Per-document keyword hit statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordHits {
    /// 1-indexed page numbers containing the keyword, ascending, one entry
    /// per matching page.
    pub matched_pages: Vec<u32>,
    /// Total non-overlapping occurrences across all pages.
    pub occurrence_count: usize,
}

/// Case-insensitive substring search over extracted pages.
///
/// Callers must supply a non-empty keyword; the pipeline rejects empty
/// keywords before any work is scheduled.
pub fn match_keyword(pages: &[String], keyword: &str) -> KeywordHits {
    let needle = keyword.to_lowercase();
    let mut hits = KeywordHits::default();

    for (index, page) in pages.iter().enumerate() {
        let haystack = page.to_lowercase();
        let count = haystack.matches(&needle).count();

        if count > 0 {
            hits.matched_pages.push(index as u32 + 1);
            hits.occurrence_count += count;
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_count() {
        let pages = pages(&["Annual report. report filed."]);
        let hits = match_keyword(&pages, "Report");

        assert_eq!(hits.matched_pages, vec![1]);
        assert_eq!(hits.occurrence_count, 2);
    }

    #[test]
    fn test_pages_ascending_one_entry_each() {
        let pages = pages(&["alpha", "the word here", "nothing", "word word"]);
        let hits = match_keyword(&pages, "word");

        assert_eq!(hits.matched_pages, vec![2, 4]);
        assert_eq!(hits.occurrence_count, 3);
    }

    #[test]
    fn test_no_match() {
        let pages = pages(&["alpha", "beta"]);
        let hits = match_keyword(&pages, "gamma");

        assert!(hits.matched_pages.is_empty());
        assert_eq!(hits.occurrence_count, 0);
    }

    #[test]
    fn test_empty_pages() {
        let hits = match_keyword(&[], "anything");

        assert!(hits.matched_pages.is_empty());
        assert_eq!(hits.occurrence_count, 0);
    }

    #[test]
    fn test_empty_page_text_is_not_a_match() {
        let pages = pages(&["", "keyword"]);
        let hits = match_keyword(&pages, "keyword");

        assert_eq!(hits.matched_pages, vec![2]);
    }

    #[test]
    fn test_non_overlapping_count() {
        let pages = pages(&["aaaa"]);
        let hits = match_keyword(&pages, "aa");

        assert_eq!(hits.occurrence_count, 2);
    }

    #[test]
    fn test_occurrences_at_least_matched_pages() {
        let pages = pages(&["x y x", "y", "x"]);
        let hits = match_keyword(&pages, "x");

        assert!(hits.occurrence_count >= hits.matched_pages.len());
    }
}
