//! Canonical display formatting for computed results
//!
//! Pure string formatting, independent of the state machine. The display
//! grammar is: integers without a fractional part, everything else with up
//! to eight fractional digits and no trailing zeros.

/// Formats a finite float as a canonical display string
///
/// Integer values render without a fractional part (`5.0` → `"5"`, and
/// negative zero renders `"0"`). Non-integer values render with up to eight
/// fractional digits, with trailing zeros stripped and a dangling decimal
/// point removed (`0.30000000000000004` → `"0.3"`).
///
/// Callers are expected to have rejected non-finite values already; the
/// arithmetic layer routes those into its error state before formatting.
pub fn format_result(value: f64) -> String {
    // -0.0 == 0.0, so this also normalizes negative zero
    if value == 0.0 {
        return "0".to_string();
    }

    if value == value.trunc() {
        return format!("{value:.0}");
    }

    let rendered = format!("{value:.8}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
