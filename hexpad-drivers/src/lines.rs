//! Pin array assembly
//!
//! The drivers take their lines as fixed arrays. Claiming the pins is
//! fallible, so the array is built one pin at a time and the first refused
//! pin aborts the whole group.

use heapless::Vec;

/// Claim one line per entry of `pins`, in order
///
/// Returns the first error `take` reports. On success every entry produced
/// exactly one line, so the array is always full.
pub fn take_lines<P, T, E, const N: usize>(
    pins: &[P; N],
    mut take: impl FnMut(&P) -> Result<T, E>,
) -> Result<[T; N], E> {
    let mut taken: Vec<T, N> = Vec::new();
    for pin in pins {
        if taken.push(take(pin)?).is_err() {
            unreachable!("more lines than pins");
        }
    }
    match taken.into_array() {
        Ok(lines) => Ok(lines),
        Err(_) => unreachable!("fewer lines than pins"),
    }
}
