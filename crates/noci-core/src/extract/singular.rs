use super::float_tokens;
use crate::domain::{NociError, ScanResult};
use tracing::debug;

/// Collects the orbital singular values reported for determinant-pair
/// rows. Blocks are announced by an `Element: <row> <col>` marker followed
/// by a `... Singular Values:` header; diagonal blocks (row == col) are
/// skipped, and the whole pass stops at the first block belonging to a
/// column other than the first determinant. Only the first determinant's
/// cross-terms ever land in the store; the source format reports nothing
/// useful beyond them.
pub fn parse_singular_values(source: &str, store: &mut [Vec<f64>]) -> ScanResult<()> {
    debug!("scanning for singular-value blocks");

    let mut lines = source.lines();
    let mut row = 0_usize;
    let mut col = 0_usize;
    let mut marker_armed = false;
    let mut accepted_any = false;

    while let Some(line) = lines.next() {
        if let Some((marker_row, marker_col)) = parse_element_marker(line) {
            row = marker_row;
            col = marker_col;
            marker_armed = true;
        }
        if col > 0 {
            break;
        }

        if row != col && is_singular_header(line) {
            if !marker_armed {
                return Err(NociError::ordering(
                    "SCAN.SV_ELEMENT_MARKER",
                    "singular-value header without a preceding 'Element:' marker",
                ));
            }
            if row >= store.len() {
                return Err(NociError::range(
                    "SCAN.SV_ROW_RANGE",
                    format!(
                        "singular-value row {} exceeds the {}-determinant store",
                        row + 1,
                        store.len()
                    ),
                ));
            }

            debug!(row = row + 1, "found singular-value block");
            accepted_any = true;
            for body in lines.by_ref() {
                if body.to_ascii_lowercase().contains("determinant of u") {
                    break;
                }
                store[row].extend(float_tokens(body));
            }
            marker_armed = false;
        }
    }

    if accepted_any {
        Ok(())
    } else {
        Err(NociError::missing_section(
            "SCAN.SV_HEADER",
            "no singular-value block was found",
        ))
    }
}

/// `Element: <row> <col>` with 1-based indices and nothing else on the
/// line. Returns the 0-based pair.
fn parse_element_marker(line: &str) -> Option<(usize, usize)> {
    let rest = line.strip_prefix("Element:")?;
    let mut tokens = rest.split_whitespace();
    let row: usize = tokens.next()?.parse().ok()?;
    let col: usize = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}

/// At most one leading word, then `Singular Values:` ending the line.
fn is_singular_header(line: &str) -> bool {
    let lower = line.trim().to_ascii_lowercase();
    let Some(head) = lower.strip_suffix("singular values:") else {
        return false;
    };
    let head = head.trim();
    head.chars()
        .all(|character| character.is_ascii_alphanumeric() || character == '_')
}
