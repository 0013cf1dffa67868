//! Textual rendering of generic containers.
//!
//! Diagnostics and interop rely on one fixed surface syntax: ordered
//! sequences and sets render as `[e1, e2, ...]`, key-value maps render as
//! `{k1: v1, k2: v2, ...}` with entries in the container's natural
//! iteration order.

use std::fmt::{Display, Write};

/// Renders a sequence (or set) as `[e1, e2, ...]`.
pub fn render_seq<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

/// Renders a key-value map as `{k1: v1, k2: v2, ...}`.
///
/// Entries appear in the iteration order of the container: sorted for
/// ordered maps, arbitrary but one-entry-per-key for hash maps.
pub fn render_map<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut out = String::from("{");
    for (i, (k, v)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{k}: {v}");
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_seq() {
        assert_eq!(render_seq([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(render_seq(Vec::<i64>::new()), "[]");
    }

    #[test]
    fn test_render_map_sorted() {
        let mut map = BTreeMap::new();
        map.insert(2, "b");
        map.insert(1, "a");
        assert_eq!(render_map(map.iter()), "{1: a, 2: b}");
    }
}
