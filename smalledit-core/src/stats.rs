//! Document statistics shown in the status bar

/// Character, line and word counts for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub characters: usize,
    pub lines: usize,
    pub words: usize,
}

impl DocumentStats {
    /// Single pass over `text`. Words are maximal runs of anything other
    /// than space, tab, CR and LF.
    pub fn compute(text: &str) -> Self {
        let mut characters = 0;
        let mut lines = 1;
        let mut words = 0;
        let mut in_word = false;

        for c in text.chars() {
            characters += 1;
            if c == '\n' {
                lines += 1;
            }
            if is_separator(c) {
                in_word = false;
            } else if !in_word {
                in_word = true;
                words += 1;
            }
        }

        Self {
            characters,
            lines,
            words,
        }
    }
}

impl Default for DocumentStats {
    fn default() -> Self {
        Self {
            characters: 0,
            lines: 1,
            words: 0,
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Lazily recomputed statistics, valid until the next text change.
#[derive(Debug, Default)]
pub struct StatsCache {
    cached: Option<DocumentStats>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_valid(&self) -> bool {
        self.cached.is_some()
    }

    pub fn cached(&self) -> Option<DocumentStats> {
        self.cached
    }

    pub fn get(&mut self, text: &str) -> DocumentStats {
        *self
            .cached
            .get_or_insert_with(|| DocumentStats::compute(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        assert_eq!(DocumentStats::compute(""), DocumentStats::default());
    }

    #[test]
    fn counts_unicode_scalars_not_bytes() {
        let stats = DocumentStats::compute("héllo wörld");
        assert_eq!(stats.characters, 11);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn crlf_counts_as_one_line_break() {
        let stats = DocumentStats::compute("one\r\ntwo\r\n");
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn cache_serves_stale_value_until_invalidated() {
        let mut cache = StatsCache::new();
        assert!(!cache.is_valid());
        assert_eq!(cache.get("a b").words, 2);
        assert!(cache.is_valid());

        // Same cache, different text: still the cached answer.
        assert_eq!(cache.get("a b c").words, 2);

        cache.invalidate();
        assert_eq!(cache.get("a b c").words, 3);
    }
}
