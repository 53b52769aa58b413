//! Big-endian digit buffers for radix conversion.
//!
//! Both conversion directions work the same way: a zeroed scratch buffer
//! accumulates the output number most-significant-first while source
//! digits are folded in one at a time. The buffer capacity comes from a
//! logarithm-ratio estimate, so the fold reports the never-expected case
//! where the estimate falls short instead of wrapping silently.

/// Scratch capacity for converting `len` source digits, given the
/// expected output-digits-per-source-digit ratio.
///
/// One guard digit on top of the estimate. The formula is a heuristic
/// upper bound, not a proven one; [`fold_digit`] still checks.
#[inline]
pub(crate) fn scratch_size(len: usize, ratio: f64) -> usize {
    (len as f64 * ratio).ceil() as usize + 1
}

/// Folds one source digit into the accumulator held by `scratch`.
///
/// Multiplies the accumulated number by `weight`, adds `digit`, and
/// renormalizes modulo `base`, touching the `significant` trailing slots
/// plus however far the carry still propagates. Returns the new
/// significant length, or `None` if a carry survives past the front of
/// the buffer.
pub(crate) fn fold_digit(
    scratch: &mut [u8],
    significant: usize,
    digit: u8,
    weight: u32,
    base: u32,
) -> Option<usize> {
    // weight and base never exceed 256, so carry stays below
    // 256 * 255 + 256 and the u32 arithmetic cannot wrap.
    let mut carry = u32::from(digit);
    let mut touched = 0;
    for slot in scratch.iter_mut().rev() {
        if carry == 0 && touched >= significant {
            break;
        }
        carry += weight * u32::from(*slot);
        *slot = (carry % base) as u8;
        carry /= base;
        touched += 1;
    }
    (carry == 0).then_some(touched)
}
