// https://www.bipm.org/en/measurement-units/si-prefixes

use std::fmt;

use serde::Serialize;

use crate::error::ShorthandError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiPrefix {
    pub symbol: char,
    pub name: &'static str,
    /// Power of ten, always a multiple of 3 in `-30..=30`.
    pub exponent: i32,
    /// `10^exponent` as an exact decimal literal rather than a computed power.
    pub scale: f64,
}

impl SiPrefix {
    const fn new(symbol: char, name: &'static str, exponent: i32, scale: f64) -> Self {
        Self {
            symbol,
            name,
            exponent,
            scale,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<&'static SiPrefix> {
        SI_PREFIXES.iter().find(|p| p.symbol == symbol)
    }

    pub fn from_exponent(exponent: i32) -> Option<&'static SiPrefix> {
        SI_PREFIXES.iter().find(|p| p.exponent == exponent)
    }
}

impl fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

pub const QUECTO: SiPrefix = SiPrefix::new('q', "quecto", -30, 1e-30);
pub const RONTO: SiPrefix = SiPrefix::new('r', "ronto", -27, 1e-27);
pub const YOCTO: SiPrefix = SiPrefix::new('y', "yocto", -24, 1e-24);
pub const ZEPTO: SiPrefix = SiPrefix::new('z', "zepto", -21, 1e-21);
pub const ATTO: SiPrefix = SiPrefix::new('a', "atto", -18, 1e-18);
pub const FEMTO: SiPrefix = SiPrefix::new('f', "femto", -15, 1e-15);
pub const PICO: SiPrefix = SiPrefix::new('p', "pico", -12, 1e-12);
pub const NANO: SiPrefix = SiPrefix::new('n', "nano", -9, 1e-9);
pub const MICRO: SiPrefix = SiPrefix::new('μ', "micro", -6, 1e-6);
pub const MILLI: SiPrefix = SiPrefix::new('m', "milli", -3, 1e-3);
pub const KILO: SiPrefix = SiPrefix::new('k', "kilo", 3, 1e3);
pub const MEGA: SiPrefix = SiPrefix::new('M', "mega", 6, 1e6);
pub const GIGA: SiPrefix = SiPrefix::new('G', "giga", 9, 1e9);
pub const TERA: SiPrefix = SiPrefix::new('T', "tera", 12, 1e12);
pub const PETA: SiPrefix = SiPrefix::new('P', "peta", 15, 1e15);
pub const EXA: SiPrefix = SiPrefix::new('E', "exa", 18, 1e18);
pub const ZETTA: SiPrefix = SiPrefix::new('Z', "zetta", 21, 1e21);
pub const YOTTA: SiPrefix = SiPrefix::new('Y', "yotta", 24, 1e24);
pub const RONNA: SiPrefix = SiPrefix::new('R', "ronna", 27, 1e27);
pub const QUETTA: SiPrefix = SiPrefix::new('Q', "quetta", 30, 1e30);

/// Every supported prefix, smallest first. There is no entry for `10^0`.
pub static SI_PREFIXES: [SiPrefix; 20] = [
    QUECTO, RONTO, YOCTO, ZEPTO, ATTO, FEMTO, PICO, NANO, MICRO, MILLI, KILO, MEGA, GIGA, TERA,
    PETA, EXA, ZETTA, YOTTA, RONNA, QUETTA,
];

/// Looks up a prefix symbol. Case matters: `m` is milli, `M` is mega.
pub fn lookup_prefix(symbol: char) -> Result<&'static SiPrefix, ShorthandError> {
    SiPrefix::from_symbol(symbol).ok_or(ShorthandError::UnknownPrefix { prefix: symbol })
}
