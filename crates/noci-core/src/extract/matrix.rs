use super::is_rule_line;
use crate::domain::{NociError, ScanResult};
use tracing::debug;

/// Reconstructs an N x N matrix from a block of repeating groups: a header
/// line of 1-based column indices, then element lines carrying a 1-based
/// row index and one value per header column. Values are stored at
/// `matrix[column][row]`: the text reports entries row-of-output first,
/// but the matrix is consumed column-by-column later, so the addressing
/// is transposed here. A run of ten or more `-` closes the block.
pub(crate) fn read_square_matrix<'a, I>(lines: &mut I, dimension: usize) -> ScanResult<Vec<Vec<f64>>>
where
    I: Iterator<Item = &'a str>,
{
    debug!(dimension, "reading weight matrix block");

    let mut matrix = vec![vec![0.0; dimension]; dimension];
    let mut header: Option<Vec<usize>> = None;
    let mut element_seen = false;

    for line in lines {
        if is_rule_line(line, '-') {
            break;
        }

        if let Some(indices) = index_tokens(line) {
            for &index in &indices {
                if index == 0 || index > dimension {
                    return Err(NociError::range(
                        "SCAN.MATRIX_COLUMN_RANGE",
                        format!(
                            "matrix column index {} exceeds the {}-determinant dimension",
                            index, dimension
                        ),
                    ));
                }
            }
            header = Some(indices);
            continue;
        }

        if let Some((row, values)) = element_tokens(line) {
            let Some(indices) = header.as_ref() else {
                return Err(NociError::ordering(
                    "SCAN.MATRIX_HEADER",
                    "matrix element line before any column-index header",
                ));
            };
            if row == 0 || row > dimension {
                return Err(NociError::range(
                    "SCAN.MATRIX_ROW_RANGE",
                    format!(
                        "matrix row index {} exceeds the {}-determinant dimension",
                        row, dimension
                    ),
                ));
            }
            if values.len() > indices.len() {
                return Err(NociError::ordering(
                    "SCAN.MATRIX_ARITY",
                    format!(
                        "matrix row {} carries {} values for {} header columns",
                        row,
                        values.len(),
                        indices.len()
                    ),
                ));
            }

            let row = row - 1;
            for (position, value) in values.into_iter().enumerate() {
                matrix[indices[position] - 1][row] = value;
            }
            element_seen = true;
        }
    }

    if !element_seen {
        return Err(NociError::missing_section(
            "SCAN.MATRIX_ELEMENTS",
            "no element rows were found in the weight matrix",
        ));
    }
    Ok(matrix)
}

/// A header line: non-empty and every token parses as an integer.
fn index_tokens(line: &str) -> Option<Vec<usize>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    tokens
        .iter()
        .map(|token| token.parse::<usize>().ok())
        .collect()
}

/// An element line: a leading integer row index, then at least one value
/// and nothing that fails to parse as f64.
fn element_tokens(line: &str) -> Option<(usize, Vec<f64>)> {
    let mut tokens = line.split_whitespace();
    let row: usize = tokens.next()?.parse().ok()?;
    let values = tokens
        .map(|token| token.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    if values.is_empty() {
        return None;
    }
    Some((row, values))
}
