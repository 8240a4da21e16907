use crate::prefix::{KILO, SI_PREFIXES, SiPrefix};

/// Shortest plain decimal that parses back to the same `f64`; never uses an exponent.
pub fn format_float(value: f64) -> String {
    value.to_string()
}

/// Picks the largest prefix whose scale does not exceed `|value|`.
///
/// Magnitudes in `[1, 1000)`, zero, anything below `1e-30` and non-finite values
/// take no prefix.
pub fn abbreviation_prefix(value: f64) -> Option<&'static SiPrefix> {
    if !value.is_finite() {
        return None;
    }

    let magnitude = value.abs();
    let largest_first = SI_PREFIXES.iter().rev();
    if magnitude >= KILO.scale {
        largest_first
            .take_while(|p| p.exponent > 0)
            .find(|p| p.scale <= magnitude)
    } else if magnitude > 0.0 && magnitude < 1.0 {
        largest_first
            .skip_while(|p| p.exponent > 0)
            .find(|p| p.scale <= magnitude)
    } else {
        None
    }
}

/// Renders `value` with the most compact SI prefix: `4700.0` -> `"4.7k"`.
pub fn abbreviate(value: f64) -> String {
    match abbreviation_prefix(value) {
        Some(prefix) => format!("{}{}", format_float(value / prefix.scale), prefix.symbol),
        None => format_float(value),
    }
}
