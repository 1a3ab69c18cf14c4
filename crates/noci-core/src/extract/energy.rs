use super::float_tokens;
use crate::domain::{NociError, ScanResult};
use crate::state::NociState;
use tracing::debug;

/// Reads the energy table: a `NOCI Energies` marker line, then exactly one
/// line per state carrying energy, frequency, and oscillator strength, in
/// state order.
pub fn parse_energy_table(source: &str, states: &mut [NociState]) -> ScanResult<()> {
    debug!("scanning for NOCI energy table");

    let mut lines = source.lines();
    while let Some(line) = lines.next() {
        if !line.trim().to_ascii_lowercase().starts_with("noci energies") {
            continue;
        }
        debug!(states = states.len(), "found NOCI energy table");

        for (index, state) in states.iter_mut().enumerate() {
            let row = lines.next().ok_or_else(|| {
                NociError::ordering(
                    "SCAN.ENERGY_ROWS",
                    format!("energy table ended before state {}", index + 1),
                )
            })?;
            let values = float_tokens(row);
            if values.len() < 3 {
                return Err(NociError::ordering(
                    "SCAN.ENERGY_ROWS",
                    format!(
                        "energy row for state {} must carry energy, frequency, and oscillator strength",
                        index + 1
                    ),
                ));
            }
            state.energy = values[0];
            state.frequency = values[1];
            state.oscillator_strength = values[2];
        }
        return Ok(());
    }

    Err(NociError::missing_section(
        "SCAN.ENERGY_HEADER",
        "'NOCI Energies' table was never found",
    ))
}
