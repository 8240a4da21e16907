use log::debug;

use crate::error::NotationError;
use crate::rkm::decode_rkm;
use crate::shorthand::decode_shorthand;

/// Parses a user-supplied value, trying RKM notation first and shorthand second.
///
/// An RKM failure only means "not an RKM code" and is discarded; if shorthand
/// also fails, its error is the one returned.
pub fn resolve(text: &str, domain: char, targets: &[&str]) -> Result<f64, NotationError> {
    match decode_rkm(text, domain) {
        Ok(value) => Ok(value),
        Err(rkm_error) => {
            debug!("'{text}' is not an RKM code ({rkm_error}), trying shorthand");
            Ok(decode_shorthand(text, targets)?)
        }
    }
}
