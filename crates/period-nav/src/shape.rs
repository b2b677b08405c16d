//! Fixed-width textual shapes shared by the date and clock parsers.

/// Whether `value` matches `shape` byte for byte, where `#` in the shape
/// stands for one ASCII digit and every other byte must match literally.
pub(crate) fn has_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'#' => v.is_ascii_digit(),
            _ => v == s,
        })
}

/// Whether `value` is exactly `len` ASCII digits.
pub(crate) fn is_digit_run(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
