//! Structural comparison and hashing for ordered containers.
//!
//! Symbolic values carry their own notion of structural identity, which is
//! not always the same as `PartialEq`/`Ord` on the wrapper types holding
//! them. The [`Canonical`] trait captures that capability set, and the
//! generic algorithms here lift it from entries to whole containers so that
//! two semantically equal containers built through different code paths
//! compare and hash identically.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

/// Structural identity: equality, a total order and a hash that agree with
/// each other.
///
/// # Laws
///
/// - `canon_cmp(x, y) == Equal` if and only if `canon_eq(x, y)`
/// - `canon_eq(x, y)` implies `canon_hash(x) == canon_hash(y)`
/// - `canon_cmp` is antisymmetric and transitive
pub trait Canonical {
    /// Three-way structural comparison.
    fn canon_cmp(&self, other: &Self) -> Ordering;

    /// Structural hash.
    fn canon_hash(&self) -> u64;

    /// Structural equality. Defaults to `canon_cmp == Equal`.
    fn canon_eq(&self, other: &Self) -> bool {
        self.canon_cmp(other) == Ordering::Equal
    }
}

macro_rules! impl_canonical_for_int {
    ($($t:ty),*) => {
        $(
            impl Canonical for $t {
                fn canon_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[allow(clippy::cast_sign_loss)]
                fn canon_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_canonical_for_int!(u32, u64, i32, i64, usize);

/// Mixes a hash value into a seed (boost-style combiner).
#[must_use]
pub fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hashes an arbitrary `Hash` value down to a `u64` seed.
#[must_use]
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    use std::hash::Hasher;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Returns true if the two ordered maps are structurally equal.
///
/// Short-circuits on differing entry counts, then checks every entry of one
/// side against a keyed lookup in the other, so the result is independent of
/// iteration order.
pub fn map_eq<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> bool
where
    K: Ord,
    V: Canonical,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(k, v)| b.get(k).is_some_and(|w| v.canon_eq(w)))
}

/// Returns true if the two hash maps are structurally equal.
///
/// The same keyed-lookup algorithm as [`map_eq`], for unordered containers.
pub fn unordered_map_eq<K, V, S>(
    a: &hashbrown::HashMap<K, V, S>,
    b: &hashbrown::HashMap<K, V, S>,
) -> bool
where
    K: Eq + Hash,
    V: Canonical,
    S: BuildHasher,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(k, v)| b.get(k).is_some_and(|w| v.canon_eq(w)))
}

/// Three-way comparison of two ordered maps.
///
/// A map with fewer entries sorts lower. Maps of equal size compare
/// lexicographically over corresponding (key, value) pairs in sorted-key
/// order, each pair key-first then value-second; the first non-equal
/// pairwise comparison determines the result.
pub fn map_compare<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> Ordering
where
    K: Ord + Canonical,
    V: Canonical,
{
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        let cmp = ka.canon_cmp(kb);
        if cmp != Ordering::Equal {
            return cmp;
        }
        let cmp = va.canon_cmp(vb);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    Ordering::Equal
}

/// Structural hash of an ordered map, starting from a per-type class seed.
///
/// Per-entry seeds are **summed** rather than folded in iteration order, so
/// the hash is invariant to how the container happens to iterate: two
/// semantically equal maps built through different code paths hash
/// identically.
pub fn map_hash_combine<'a, K, V, I>(class_seed: u64, entries: I) -> u64
where
    K: Canonical + 'a,
    V: Canonical + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut seed = class_seed;
    for (k, v) in entries {
        let mut entry = class_seed;
        entry = hash_combine(entry, k.canon_hash());
        entry = hash_combine(entry, v.canon_hash());
        seed = seed.wrapping_add(entry);
    }
    seed
}

/// Returns true if the two sequences are structurally equal, element-wise.
pub fn seq_eq<T: Canonical>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.canon_eq(y))
}

/// Three-way comparison of two sequences: shorter sorts lower, then
/// lexicographic over elements.
pub fn seq_compare<T: Canonical>(a: &[T], b: &[T]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().zip(b) {
        let cmp = x.canon_cmp(y);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    Ordering::Equal
}
