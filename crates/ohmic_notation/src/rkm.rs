// IEC 60062 letter-and-digit code ("RKM code"): the letter sits where the decimal
// point would and also carries the multiplier, e.g. 4K7 = 4.7 kΩ, 4p7 = 4.7 pF.

use log::trace;

use crate::error::{MalformedNumeral, RkmError};
use crate::prefix::{GIGA, KILO, MEGA, MICRO, MILLI, NANO, PICO, SiPrefix, TERA};
use crate::scanner::scan_numeral;

pub const RESISTOR: char = 'R';
pub const FARAD: char = 'F';

const MIN_CODE_LEN: usize = 2;
const MAX_CODE_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RkmDomain {
    /// Native separator: scales by `10^0`. Never listed in `separators`.
    pub letter: char,
    pub name: &'static str,
    pub separators: &'static [(char, SiPrefix)],
}

pub const RESISTOR_DOMAIN: RkmDomain = RkmDomain {
    letter: RESISTOR,
    name: "resistance",
    separators: &[
        ('L', MILLI),
        ('K', KILO),
        ('M', MEGA),
        ('G', GIGA),
        ('T', TERA),
    ],
};

pub const CAPACITOR_DOMAIN: RkmDomain = RkmDomain {
    letter: FARAD,
    name: "capacitance",
    separators: &[
        ('p', PICO),
        ('n', NANO),
        ('μ', MICRO),
        ('L', MILLI),
        ('K', KILO),
        ('M', MEGA),
        ('G', GIGA),
        ('T', TERA),
    ],
};

pub static RKM_DOMAINS: [RkmDomain; 2] = [RESISTOR_DOMAIN, CAPACITOR_DOMAIN];

impl RkmDomain {
    pub fn from_letter(letter: char) -> Option<&'static RkmDomain> {
        RKM_DOMAINS.iter().find(|d| d.letter == letter)
    }

    /// Scale factor for a separator letter, `None` if the letter is not valid here.
    pub fn scale_of(&self, separator: char) -> Option<f64> {
        if separator == self.letter {
            return Some(1.0);
        }
        self.separators
            .iter()
            .find(|(letter, _)| *letter == separator)
            .map(|(_, prefix)| prefix.scale)
    }
}

/// Decodes an RKM code such as `4K7`, `R47` or `10n` for the domain named by `domain`.
///
/// Only the first occurrence of the separator becomes the decimal point. A code
/// like `4K7K` is not rejected up front; it fails when `4.7K` is parsed.
pub fn decode_rkm(code: &str, domain: char) -> Result<f64, RkmError> {
    let len = code.chars().count();
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&len) {
        return Err(RkmError::InvalidLength {
            code: code.to_string(),
            len,
        });
    }

    let table = RkmDomain::from_letter(domain).ok_or(RkmError::UnknownDomain { domain })?;

    let numeral = scan_numeral(code, false)?;
    let separator = code[numeral.len..]
        .chars()
        .next()
        .ok_or_else(|| RkmError::MissingSeparator {
            code: code.to_string(),
        })?;

    let scale = table
        .scale_of(separator)
        .ok_or(RkmError::UnknownPrefixForDomain {
            prefix: separator,
            domain,
        })?;

    let literal = code.replacen(separator, ".", 1);
    let value = literal
        .parse::<f64>()
        .map_err(|_| MalformedNumeral { lexeme: literal.clone() })?;

    trace!("rkm '{code}' ({}) -> {value} x {scale}", table.name);
    Ok(value * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_utils::assert_bits_eq;
    use rstest::rstest;

    #[rstest]
    // native separator
    #[case("R47", RESISTOR, 0.47)]
    #[case("4R7", RESISTOR, 4.7)]
    #[case("47R", RESISTOR, 47.0)]
    #[case("470R", RESISTOR, 470.0)]
    #[case("47R5", RESISTOR, 47.5)]
    #[case("1R", RESISTOR, 1.0)]
    // kilo
    #[case("K47", RESISTOR, 470.0)]
    #[case("4K7", RESISTOR, 4700.0)]
    #[case("47K", RESISTOR, 47000.0)]
    #[case("47K3", RESISTOR, 47300.0)]
    #[case("470K", RESISTOR, 470000.0)]
    #[case("1K", RESISTOR, 1000.0)]
    // mega
    #[case("M47", RESISTOR, 470000.0)]
    #[case("4M7", RESISTOR, 4700000.0)]
    #[case("47M", RESISTOR, 47000000.0)]
    #[case("47M3", RESISTOR, 47300000.0)]
    // giga, tera
    #[case("4G7", RESISTOR, 4700000000.0)]
    #[case("47G", RESISTOR, 47000000000.0)]
    #[case("1T0", RESISTOR, 1000000000000.0)]
    #[case("10T", RESISTOR, 10000000000000.0)]
    // milli
    #[case("L47", RESISTOR, 0.00047)]
    #[case("4L7", RESISTOR, 0.0047)]
    #[case("47L", RESISTOR, 0.047)]
    // capacitance
    #[case("4p7", FARAD, 4.7e-12)]
    #[case("47p", FARAD, 47e-12)]
    #[case("10p", FARAD, 10e-12)]
    #[case("10n", FARAD, 10e-9)]
    #[case("1n0", FARAD, 1e-9)]
    #[case("4μ7", FARAD, 4.7e-6)]
    #[case("47μ", FARAD, 47e-6)]
    #[case("22F", FARAD, 22.0)]
    #[case("2K2", FARAD, 2200.0)]
    fn test_decode_rkm(#[case] code: &str, #[case] domain: char, #[case] expected: f64) {
        assert_bits_eq(decode_rkm(code, domain).unwrap(), expected);
    }

    #[rstest]
    #[case("R", RESISTOR, ErrorKind::InvalidLength)]
    #[case("", RESISTOR, ErrorKind::InvalidLength)]
    #[case("123K56", RESISTOR, ErrorKind::InvalidLength)]
    #[case("4K7", 'V', ErrorKind::UnknownDomain)]
    #[case("4K7", 'L', ErrorKind::UnknownDomain)]
    #[case("470", RESISTOR, ErrorKind::MissingSeparator)]
    #[case("4p7", RESISTOR, ErrorKind::UnknownPrefixForDomain)]
    #[case("4k7", RESISTOR, ErrorKind::UnknownPrefixForDomain)]
    #[case("4X7", RESISTOR, ErrorKind::UnknownPrefixForDomain)]
    #[case("4R7", FARAD, ErrorKind::UnknownPrefixForDomain)]
    #[case("4.7K", RESISTOR, ErrorKind::UnknownPrefixForDomain)]
    #[case("4K7K", RESISTOR, ErrorKind::MalformedNumeral)]
    #[case("1K2K3", RESISTOR, ErrorKind::MalformedNumeral)]
    #[case("10kR", RESISTOR, ErrorKind::UnknownPrefixForDomain)]
    #[case("1MR", RESISTOR, ErrorKind::MalformedNumeral)]
    fn test_decode_rkm_errors(#[case] code: &str, #[case] domain: char, #[case] kind: ErrorKind) {
        assert_eq!(decode_rkm(code, domain).unwrap_err().kind(), kind);
    }

    #[test]
    fn test_length_counts_chars() {
        // 'μ' is two bytes but one character: 5 chars passes the length check
        assert_eq!(
            decode_rkm("4μ7pF", FARAD).unwrap_err().kind(),
            ErrorKind::MalformedNumeral
        );
        assert_eq!(
            decode_rkm("1234μ7", FARAD).unwrap_err().kind(),
            ErrorKind::InvalidLength
        );
    }

    #[test]
    fn test_double_separator_fails_at_parse() {
        let err = decode_rkm("4K7K", RESISTOR).unwrap_err();
        insta::assert_snapshot!(err, @"malformed numeral '4.7K'");
    }

    #[test]
    fn test_error_messages() {
        insta::assert_snapshot!(
            decode_rkm("123K56", RESISTOR).unwrap_err(),
            @"RKM code '123K56' has 6 characters (expected 2 to 5)"
        );
        insta::assert_snapshot!(
            decode_rkm("4K7", 'V').unwrap_err(),
            @"no RKM domain for letter 'V'"
        );
        insta::assert_snapshot!(
            decode_rkm("470", RESISTOR).unwrap_err(),
            @"RKM code '470' has no separator letter"
        );
        insta::assert_snapshot!(
            decode_rkm("4p7", RESISTOR).unwrap_err(),
            @"letter 'p' is not a valid RKM separator for domain 'R'"
        );
    }

    #[test]
    fn test_domain_tables() {
        assert_eq!(RkmDomain::from_letter('R'), Some(&RESISTOR_DOMAIN));
        assert_eq!(RkmDomain::from_letter('F'), Some(&CAPACITOR_DOMAIN));
        assert_eq!(RkmDomain::from_letter('C'), None);
        assert_eq!(RESISTOR_DOMAIN.scale_of('R'), Some(1.0));
        assert_eq!(RESISTOR_DOMAIN.scale_of('p'), None);
        assert_eq!(CAPACITOR_DOMAIN.scale_of('F'), Some(1.0));
        assert_eq!(CAPACITOR_DOMAIN.scale_of('p'), Some(1e-12));
        assert_eq!(CAPACITOR_DOMAIN.scale_of('R'), None);
    }
}
