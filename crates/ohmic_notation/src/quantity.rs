use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NotationError, UnknownQuantity};
use crate::format::abbreviate;
use crate::resolve::resolve;
use crate::rkm::{FARAD, RESISTOR};
use crate::shorthand::decode_shorthand;

// Unit suffixes accepted after a shorthand number. Order is significant: the
// first suffix the remainder starts with is the one that is used.
pub const VOLTAGE: &[&str] = &["v", "V"];
pub const CURRENT: &[&str] = &["i", "I", "a", "A"];
pub const POWER: &[&str] = &["p", "P", "w", "W"];
pub const RESISTANCE: &[&str] = &["r", "R"];
pub const CAPACITANCE: &[&str] = &["f", "F"];
pub const FREQUENCY: &[&str] = &["Hz"];

/// Physical quantity a value is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Voltage,
    Current,
    Power,
    Resistance,
    Capacitance,
    Frequency,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Voltage,
        Quantity::Current,
        Quantity::Power,
        Quantity::Resistance,
        Quantity::Capacitance,
        Quantity::Frequency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Voltage => "voltage",
            Quantity::Current => "current",
            Quantity::Power => "power",
            Quantity::Resistance => "resistance",
            Quantity::Capacitance => "capacitance",
            Quantity::Frequency => "frequency",
        }
    }

    pub fn suffixes(&self) -> &'static [&'static str] {
        match self {
            Quantity::Voltage => VOLTAGE,
            Quantity::Current => CURRENT,
            Quantity::Power => POWER,
            Quantity::Resistance => RESISTANCE,
            Quantity::Capacitance => CAPACITANCE,
            Quantity::Frequency => FREQUENCY,
        }
    }

    /// RKM domain letter, for quantities that have component codes.
    pub fn rkm_domain(&self) -> Option<char> {
        match self {
            Quantity::Resistance => Some(RESISTOR),
            Quantity::Capacitance => Some(FARAD),
            _ => None,
        }
    }

    /// Symbol printed after an abbreviated value.
    pub fn unit_symbol(&self) -> &'static str {
        match self {
            Quantity::Voltage => "V",
            Quantity::Current => "A",
            Quantity::Power => "W",
            Quantity::Resistance => "Ω",
            Quantity::Capacitance => "F",
            Quantity::Frequency => "Hz",
        }
    }

    /// Parses `text` as this quantity. Only resistance and capacitance accept RKM codes.
    pub fn parse(&self, text: &str) -> Result<f64, NotationError> {
        match self.rkm_domain() {
            Some(domain) => resolve(text, domain, self.suffixes()),
            None => Ok(decode_shorthand(text, self.suffixes())?),
        }
    }

    pub fn format(&self, value: f64) -> String {
        format!("{}{}", abbreviate(value), self.unit_symbol())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = UnknownQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownQuantity { name: s.to_string() })
    }
}
