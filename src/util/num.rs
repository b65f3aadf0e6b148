/// Converts a collection length to a language integer.
///
/// Lengths that do not fit in an `i32` saturate at `i32::MAX`.
///
/// ## Example
/// ```
/// use monkey::util::num::len_to_i32;
///
/// assert_eq!(len_to_i32(3), 3);
/// assert_eq!(len_to_i32(usize::MAX), i32::MAX);
/// ```
#[must_use]
pub fn len_to_i32(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Converts a language integer to an index into a collection of `len`
/// elements.
///
/// ## Returns
/// - `Some(index)`: If `0 <= value < len`.
/// - `None`: If the value is negative or past the end.
///
/// ## Example
/// ```
/// use monkey::util::num::index_in;
///
/// assert_eq!(index_in(1, 3), Some(1));
/// assert_eq!(index_in(3, 3), None);
/// assert_eq!(index_in(-1, 3), None);
/// ```
#[must_use]
pub fn index_in(value: i32, len: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&index| index < len)
}
