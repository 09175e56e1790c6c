//! Text corpus building for word-cloud renderers.

use crate::records::Cell;

/// Join values into one corpus separated by single spaces.
///
/// No filtering or deduplication happens here; stop-word handling belongs
/// to the word-cloud renderer.
pub fn build_corpus<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut corpus = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            corpus.push(' ');
        }
        corpus.push_str(value.as_ref());
    }
    corpus
}

/// Join a column's cells into one corpus, coercing missing cells to `""`.
pub fn build_cell_corpus<'a, I>(cells: I) -> String
where
    I: IntoIterator<Item = &'a Cell>,
{
    build_corpus(cells.into_iter().map(Cell::as_text))
}
