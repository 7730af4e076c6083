//! Generic helpers over ordered sequences.
//!
//! Every function works for any element type, never mutates its input, and
//! returns a freshly allocated result. None of them can fail: an empty input
//! produces an empty (or absent) result.

use std::collections::HashMap;
use std::fmt::Display;

/// First element, or `None` for an empty sequence.
///
/// ```rust
/// use tagstate::collections::head;
///
/// assert_eq!(head(&[1, 2, 3]), Some(&1));
/// assert_eq!(head::<i32>(&[]), None);
/// ```
pub fn head<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Everything after the first element, in original order.
///
/// Empty and single-element inputs both give an empty vector.
///
/// ```rust
/// use tagstate::collections::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), vec![2, 3]);
/// assert!(tail::<i32>(&[1]).is_empty());
/// ```
pub fn tail<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.get(1..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Pair up elements by position.
///
/// The result is as long as the shorter input; trailing elements of the
/// longer one are dropped.
///
/// ```rust
/// use tagstate::collections::zip;
///
/// assert_eq!(zip(&[1, 2, 3], &["a", "b"]), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Partition elements by the string form of a key.
///
/// `key_fn` may return anything that implements `Display`; the value is
/// turned into a `String` before grouping. Keys that are different values
/// but print the same (for example `1` and `"1"`) land in the same group.
///
/// Within a group, elements keep their relative order from `seq`. Only keys
/// that were produced at least once appear. Iteration order of the map is
/// unspecified.
///
/// ```rust
/// use tagstate::collections::group_by;
///
/// let groups = group_by(&["apple", "avocado", "banana"], |s| s.chars().next().unwrap_or(' '));
/// assert_eq!(groups["a"], vec!["apple", "avocado"]);
/// assert_eq!(groups["b"], vec!["banana"]);
/// ```
pub fn group_by<T, K, F>(seq: &[T], key_fn: F) -> HashMap<String, Vec<T>>
where
    T: Clone,
    K: Display,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<String, Vec<T>> = HashMap::new();
    for item in seq {
        groups
            .entry(key_fn(item).to_string())
            .or_default()
            .push(item.clone());
    }
    groups
}
