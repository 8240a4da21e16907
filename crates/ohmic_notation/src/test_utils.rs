/// Exact comparison of doubles, down to the bit pattern.
#[track_caller]
pub(crate) fn assert_bits_eq(actual: f64, expected: f64) {
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "expected {expected:e}, got {actual:e}"
    );
}
