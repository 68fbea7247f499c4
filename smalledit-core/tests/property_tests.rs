use proptest::prelude::*;
use smalledit_core::gutter::{count_lines, line_number_labels, LABEL_WIDTH};
use smalledit_core::{DocumentStats, SearchOutcome, SearchState};

proptest! {
    #[test]
    fn lines_at_least_one(text in ".*") {
        let stats = DocumentStats::compute(&text);
        prop_assert!(stats.lines >= 1);
        prop_assert_eq!(stats.lines, count_lines(&text));
    }

    #[test]
    fn chars_match_length(text in ".*") {
        prop_assert_eq!(DocumentStats::compute(&text).characters, text.chars().count());
    }

    #[test]
    fn words_ignore_whitespace_padding(
        words in prop::collection::vec("[a-z0-9.,!]{1,8}", 0..12),
        pads in prop::collection::vec("[ \t\r\n]{1,4}", 13),
    ) {
        let mut text = pads[0].clone();
        for (i, word) in words.iter().enumerate() {
            text.push_str(word);
            text.push_str(&pads[i + 1]);
        }
        prop_assert_eq!(DocumentStats::compute(&text).words, words.len());
    }

    #[test]
    fn search_visits_every_occurrence_then_wraps(
        fillers in prop::collection::vec("[a-p \n]{0,6}", 2..7),
    ) {
        // "xq" cannot appear in the fillers, so it occurs exactly k times.
        let k = fillers.len() - 1;
        let text = fillers.join("xq");
        let mut search = SearchState::new();
        search.set_term("XQ");

        let mut seen = Vec::new();
        for _ in 0..k {
            match search.find_next(&text) {
                SearchOutcome::Found { offset, .. } => seen.push(offset),
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), k);
        prop_assert_eq!(&sorted, &seen);

        match search.find_next(&text) {
            SearchOutcome::Found { offset, .. } => prop_assert_eq!(offset, seen[0]),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn gutter_is_well_formed(
        total in 0usize..500,
        height in 0usize..80,
        top in 0usize..600,
        wrap in any::<bool>(),
    ) {
        let labels = line_number_labels(total, height, top, wrap);
        prop_assert_eq!(labels.len(), height.max(1));
        prop_assert!(labels.iter().all(|l| l.chars().count() == LABEL_WIDTH));
        prop_assert_eq!(labels, line_number_labels(total, height, top, !wrap));
    }
}

#[test]
fn test_gutter_blank_beyond_document() {
    let labels: Vec<String> = line_number_labels(3, 5, 0, false)
        .into_iter()
        .map(|l| l.trim().to_string())
        .collect();
    assert_eq!(labels, vec!["1", "2", "3", "", ""]);
}

#[test]
fn test_word_count_examples() {
    assert_eq!(DocumentStats::compute("  a   b  ").words, 2);
    assert_eq!(DocumentStats::compute("").lines, 1);
}
