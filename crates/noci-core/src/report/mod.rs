//! Renders the populated state set as the filtered summary report.

use crate::state::{NociState, NociStateSet};
use std::fmt::Write;

const PREFIX: &str = "    ";

/// Decimal places for the weight column, derived from the printing
/// threshold: a threshold of 0.01 yields 2 places.
pub fn weight_precision(weight_threshold: f64) -> usize {
    // f64 carries at most 17 significant decimal digits
    (weight_threshold.abs().log10().abs().ceil() as usize).min(17)
}

/// One block per state whose oscillator strength clears the configured
/// threshold, in declaration order with 1-based display indices.
/// States failing the filter produce no output at all.
pub fn render_report(set: &NociStateSet) -> String {
    let mut out = String::new();
    for (index, state) in set.states().iter().enumerate() {
        if state.oscillator_strength < set.settings().oscillator_threshold {
            continue;
        }
        let _ = writeln!(out, "NOCI State {}:", index + 1);
        render_state(&mut out, set, state);
    }
    out
}

fn render_state(out: &mut String, set: &NociStateSet, state: &NociState) {
    let settings = set.settings();

    let _ = writeln!(out, "{PREFIX}Energy = {:>15.10}", state.energy);
    let _ = writeln!(out, "{PREFIX}Frequency = {:>10.5}", state.frequency);
    let _ = writeln!(
        out,
        "{PREFIX}Oscillator Strength = {:>10.3e}",
        state.oscillator_strength
    );

    let precision = weight_precision(settings.weight_threshold);
    let name_width = longest_name(set.det_names()) + 4;
    let weight_width = precision + 6;

    let _ = write!(
        out,
        "{PREFIX}{PREFIX}{:<10}{:<name_width$}{:>weight_width$}",
        "Major Dets:", "    Determinant File", "Weights"
    );
    if settings.singular_value_count > 0 {
        let _ = write!(out, "{PREFIX}{:>10}", "Singular Values");
    }
    out.push('\n');

    let mut sum = 0.0;
    for (det, &weight) in state.weights.iter().enumerate() {
        if weight <= settings.weight_threshold {
            continue;
        }
        let _ = write!(
            out,
            "{PREFIX}{PREFIX}Det #{:<5}{:<name_width$}{weight:>weight_width$.precision$}",
            det + 1,
            set.det_names()[det]
        );
        sum += weight;
        render_singular_values(
            out,
            set.singular_values(),
            det,
            settings.singular_value_count,
        );
        out.push('\n');
    }

    let sum_precision = precision + 1;
    let _ = writeln!(
        out,
        "{PREFIX}{PREFIX}Sum of Printed Weights = {sum:<weight_width$.sum_precision$}"
    );
    out.push('\n');
}

/// The trailing `min(count, available)` values of the determinant's row,
/// oldest first, each in a fixed 10-wide 5-decimal field.
fn render_singular_values(out: &mut String, store: &[Vec<f64>], det: usize, count: usize) {
    out.push_str(PREFIX);
    let row = &store[det];
    let shown = row.len().min(count);
    for value in &row[row.len() - shown..] {
        let _ = write!(out, "{value:>10.5}");
    }
}

fn longest_name(names: &[String]) -> usize {
    names.iter().map(String::len).max().unwrap_or(0)
}
