use unscanny::Scanner;

use crate::error::MalformedNumeral;

/// Leading numeral of a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeral {
    pub value: f64,
    /// Bytes consumed. Digits and `.` are ASCII, so this is also the char count.
    pub len: usize,
}

impl Numeral {
    pub const EMPTY: Numeral = Numeral { value: 0.0, len: 0 };
}

/// Scans ASCII digits (and `.` when `allow_decimal` is set) from the start of `input`.
///
/// A missing numeral is not an error and yields [`Numeral::EMPTY`]. The number of
/// dots is not checked while scanning; `"1.2.3"` only fails once parsed as a float.
pub fn scan_numeral(input: &str, allow_decimal: bool) -> Result<Numeral, MalformedNumeral> {
    let mut s = Scanner::new(input);
    let digits = s.eat_while(|c: char| c.is_ascii_digit() || (allow_decimal && c == '.'));
    if digits.is_empty() {
        return Ok(Numeral::EMPTY);
    }

    let value = digits.parse::<f64>().map_err(|_| MalformedNumeral {
        lexeme: digits.to_string(),
    })?;

    Ok(Numeral {
        value,
        len: s.cursor(),
    })
}
