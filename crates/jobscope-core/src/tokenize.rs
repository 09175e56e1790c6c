//! Skill-list tokenization.

use crate::records::Cell;

/// Default separator between skills in a single cell.
pub const DEFAULT_DELIMITER: char = ',';

/// Split one delimited value into lowercase, trimmed, non-empty tokens.
///
/// Repeated tokens are kept; they each contribute to the frequency count.
pub fn tokenize(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Tokenize every cell of a column into one flat token multiset.
///
/// Missing cells contribute no tokens.
#[tracing::instrument(skip_all)]
pub fn tokenize_cells<'a, I>(cells: I, delimiter: char) -> Vec<String>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let tokens: Vec<String> = cells
        .into_iter()
        .flat_map(|cell| tokenize(&cell.as_text(), delimiter))
        .collect();
    tracing::debug!(tokens = tokens.len(), "skills tokenized");
    tokens
}
