//! `SimpleSet` aliases using faster, non-DoS-resistant hashers.
//!
//! - `fxhash`: `FxSimpleSet` hashes with `rustc_hash::FxBuildHasher`
//! - `ahash`: `AHashSimpleSet` hashes with `ahash::RandomState`
//!
//! Both behave exactly like `SimpleSet`; only the hash function changes.
//! `SimpleSet::new` is tied to the default hasher, so build them with
//! `collect`, `default` (uninitialized) or `with_hasher`.

#[cfg(any(feature = "fxhash", feature = "ahash"))]
use super::SimpleSet;

/// A [`SimpleSet`] hashed with `FxHash`.
///
/// # Examples
///
/// ```rust
/// use simpleset::set::FxSimpleSet;
///
/// let set: FxSimpleSet<u64> = (0..10).collect();
/// assert!(set.contains(&3));
/// ```
#[cfg(feature = "fxhash")]
pub type FxSimpleSet<T> = SimpleSet<T, rustc_hash::FxBuildHasher>;

/// A [`SimpleSet`] hashed with `aHash`.
#[cfg(feature = "ahash")]
pub type AHashSimpleSet<T> = SimpleSet<T, ahash::RandomState>;
