//! Line-number gutter labels

/// Width of a gutter label, in columns.
pub const LABEL_WIDTH: usize = 4;

/// Produce one right-aligned label per visible row.
///
/// Rows past the end of the document get a blank label. With word wrap on,
/// numbering stays sequential by visual row: mapping wrapped rows back to
/// logical lines costs a full layout pass on large files, so the gutter can
/// drift from the text when long lines wrap.
pub fn line_number_labels(
    total_lines: usize,
    visible_height: usize,
    top_row: usize,
    _word_wrap: bool,
) -> Vec<String> {
    let total_lines = total_lines.max(1);
    (0..visible_height.max(1))
        .map(|offset| {
            let line_number = top_row + offset + 1;
            if line_number <= total_lines {
                format!("{:>width$}", line_number, width = LABEL_WIDTH)
            } else {
                " ".repeat(LABEL_WIDTH)
            }
        })
        .collect()
}

/// Count lines without splitting the text.
pub fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}
