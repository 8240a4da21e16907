use log::trace;

use crate::error::ShorthandError;
use crate::prefix::lookup_prefix;
use crate::scanner::scan_numeral;

/// Returns the first target (in slice order) that `s` starts with.
///
/// First match, not longest match: with `["V", "Vrms"]`, `"Vrms"` matches `"V"`.
/// An empty target matches anything and counts as no match.
fn match_suffix<'t>(s: &str, targets: &[&'t str]) -> Option<&'t str> {
    targets
        .iter()
        .copied()
        .find(|t| s.starts_with(t))
        .filter(|t| !t.is_empty())
}

/// Decodes `number [prefix] [unit]`, e.g. `10`, `10V`, `4.7k`, `100mA`, `2.4GHz`.
///
/// `targets` lists the unit suffixes accepted for the quantity being parsed.
pub fn decode_shorthand(text: &str, targets: &[&str]) -> Result<f64, ShorthandError> {
    let numeral = scan_numeral(text, true)?;
    if numeral.len == text.len() {
        return Ok(numeral.value);
    }

    let rest = &text[numeral.len..];
    if match_suffix(rest, targets).is_some_and(|t| t.len() == rest.len()) {
        return Ok(numeral.value);
    }

    let Some(symbol) = rest.chars().next() else {
        return Ok(numeral.value);
    };
    let prefix = lookup_prefix(symbol)?;

    let unit = &rest[symbol.len_utf8()..];
    if !unit.is_empty() {
        let Some(target) = match_suffix(unit, targets) else {
            return Err(ShorthandError::MissingUnitSuffix {
                remainder: unit.to_string(),
            });
        };
        let trailing = &unit[target.len()..];
        if !trailing.is_empty() {
            return Err(ShorthandError::TrailingCharacters {
                remainder: trailing.to_string(),
            });
        }
    }

    trace!("shorthand '{text}' -> {} x {}", numeral.value, prefix.name);
    Ok(numeral.value * prefix.scale)
}
