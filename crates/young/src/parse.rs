//! Partition text parsing.
//!
//! Accepts row lengths separated by commas and/or whitespace, optionally
//! wrapped in `[...]` or `(...)`: `5,5,2,1`, `[5, 5, 2, 1]`, `(3 2)`.
//! Blank input and empty brackets denote the empty partition.

use crate::YoungError;

/// Largest total cell count accepted from text, since every cell is materialized.
pub(crate) const MAX_CELLS: usize = 1_000_000;

/// Parses partition text into row lengths.
///
/// Only the syntax and the total cell count are checked here; the partition
/// rules are enforced when the diagram is constructed.
///
/// # Errors
///
/// Returns [`YoungError::Parse`] for unbalanced brackets, entries that are
/// not non-negative integers, or partitions with more than [`MAX_CELLS`] cells.
pub(crate) fn parse_partition(source: &str) -> Result<Vec<usize>, YoungError> {
    let body = strip_brackets(source.trim())
        .ok_or_else(|| YoungError::new_parse_error(source, "unbalanced brackets"))?;

    let partition = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<usize>().map_err(|_| {
                YoungError::new_parse_error(
                    source,
                    format!("`{token}` is not a non-negative integer"),
                )
            })
        })
        .collect::<Result<Vec<usize>, _>>()?;

    let within_limit = partition
        .iter()
        .try_fold(0usize, |total, &length| total.checked_add(length))
        .is_some_and(|total| total <= MAX_CELLS);
    if !within_limit {
        return Err(YoungError::new_parse_error(
            source,
            format!("partition has more than {MAX_CELLS} cells"),
        ));
    }

    Ok(partition)
}

fn strip_brackets(text: &str) -> Option<&str> {
    for (open, close) in [('[', ']'), ('(', ')')] {
        if let Some(inner) = text.strip_prefix(open) {
            return inner.strip_suffix(close);
        }
        if text.ends_with(close) {
            return None;
        }
    }
    Some(text)
}
