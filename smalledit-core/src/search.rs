//! Case-insensitive find / find-next with wraparound
//!
//! Offsets are character offsets into the whole document text, so a match
//! can be turned back into a (line, column) pair with one forward scan.

/// Result of a single find-next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Match at `offset`; `line`/`column` are 0-based, column in characters.
    Found {
        offset: usize,
        line: usize,
        column: usize,
    },
    NotFound(String),
    /// The document is empty.
    EmptyText,
    /// No term has been entered yet.
    NoTerm,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    last_term: String,
    last_offset: Option<usize>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_term(&self) -> &str {
        &self.last_term
    }

    pub fn last_offset(&self) -> Option<usize> {
        self.last_offset
    }

    /// Store a new term and restart from the top. Empty terms are ignored.
    pub fn set_term(&mut self, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }
        self.last_term = term.to_string();
        self.last_offset = None;
        true
    }

    /// Search strictly after the last match, wrapping to the start once.
    /// On a miss the last offset is left untouched.
    pub fn find_next(&mut self, text: &str) -> SearchOutcome {
        if self.last_term.is_empty() {
            return SearchOutcome::NoTerm;
        }
        if text.is_empty() {
            return SearchOutcome::EmptyText;
        }

        let haystack: Vec<char> = text.chars().map(fold).collect();
        let needle: Vec<char> = self.last_term.chars().map(fold).collect();
        let start = self.last_offset.map_or(0, |offset| offset + 1);

        let found = find_from(&haystack, &needle, start).or_else(|| find_from(&haystack, &needle, 0));
        match found {
            Some(offset) => {
                self.last_offset = Some(offset);
                let (line, column) = offset_to_position(text, offset);
                SearchOutcome::Found {
                    offset,
                    line,
                    column,
                }
            }
            None => SearchOutcome::NotFound(self.last_term.clone()),
        }
    }
}

/// One-to-one case fold, so folded offsets line up with the input text.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn find_from(haystack: &[char], needle: &[char], start: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (start..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Convert a character offset into a 0-based (line, character column) pair.
pub fn offset_to_position(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column = 0;
    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// Phases of the Find dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindPhase {
    #[default]
    Idle,
    AwaitingInput,
    Found,
    NotFound,
}

/// Drives the Find dialog phases against a [`SearchState`].
#[derive(Debug, Default)]
pub struct FindDialogState {
    phase: FindPhase,
}

impl FindDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FindPhase {
        self.phase
    }

    pub fn open(&mut self) {
        self.phase = FindPhase::AwaitingInput;
    }

    pub fn cancel(&mut self) {
        self.phase = FindPhase::Idle;
    }

    /// Confirm `term`. An empty term closes the dialog without searching
    /// and returns `None`.
    pub fn confirm(
        &mut self,
        term: &str,
        text: &str,
        search: &mut SearchState,
    ) -> Option<SearchOutcome> {
        if self.phase != FindPhase::AwaitingInput {
            return None;
        }
        if !search.set_term(term) {
            self.phase = FindPhase::Idle;
            return None;
        }
        let outcome = search.find_next(text);
        self.phase = match outcome {
            SearchOutcome::Found { .. } => FindPhase::Found,
            _ => FindPhase::NotFound,
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_keeps_offsets_aligned() {
        let mut search = SearchState::new();
        search.set_term("ÉTÉ");
        assert_eq!(
            search.find_next("un été"),
            SearchOutcome::Found {
                offset: 3,
                line: 0,
                column: 3
            }
        );
    }

    #[test]
    fn needle_longer_than_text() {
        assert_eq!(find_from(&['a'], &['a', 'b'], 0), None);
    }

    #[test]
    fn start_past_end_is_a_miss() {
        assert_eq!(find_from(&['a', 'b'], &['b'], 5), None);
    }
}
