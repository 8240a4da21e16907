//! Textual quantity notation for electronics: `10k`, `4K7`, `100μF`, `2.4GHz`.
//!
//! Two grammars are understood. SI shorthand is `number [prefix] [unit]`; RKM
//! codes (IEC 60062) put a letter where the decimal point goes, `4K7` = 4.7 kΩ.
//! [`resolve`] tries RKM first and falls back to shorthand, [`abbreviate`] goes
//! the other way.
//!
//! ```
//! use ohmic_notation::{Quantity, abbreviate, resolve};
//!
//! assert_eq!(resolve("4K7", 'R', &["r", "R"]), Ok(4700.0));
//! assert_eq!(Quantity::Voltage.parse("10kV"), Ok(10000.0));
//! assert_eq!(abbreviate(1_100_000.0), "1.1M");
//! ```

pub mod error;
mod format;
pub mod prefix;
pub mod quantity;
mod resolve;
pub mod rkm;
mod scanner;
mod shorthand;

pub use error::{ErrorKind, NotationError, RkmError, ShorthandError};
pub use format::{abbreviate, abbreviation_prefix, format_float};
pub use prefix::{SI_PREFIXES, SiPrefix};
pub use quantity::Quantity;
pub use resolve::resolve;
pub use rkm::{RkmDomain, decode_rkm};
pub use scanner::{Numeral, scan_numeral};
pub use shorthand::decode_shorthand;

#[cfg(test)]
mod test_utils;
