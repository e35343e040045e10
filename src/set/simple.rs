//! Hash-map-backed set.
//!
//! This module provides [`SimpleSet`], the default [`Set`] implementation.
//!
//! # Overview
//!
//! `SimpleSet` wraps an optional `HashMap<T, (), S>`; the unit value is the
//! presence marker. The backing store is optional so that a set can exist
//! before anything has been written to it:
//!
//! - O(1) expected `contains`, `insert`, `delete`
//! - O(1) `len` and `is_empty`
//! - O(n) `filter`, `clone_set`, `values`
//!
//! All operations mutate in place. The set is not synchronized; wrap it in a
//! lock to share it between threads.
//!
//! # Examples
//!
//! ```rust
//! use simpleset::set::{Set, SimpleSet};
//!
//! let mut set = SimpleSet::new();
//! set.add([1, 2, 3, 2, 1]);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&2));
//!
//! let odd = set.filter(|value| value % 2 == 1);
//! assert_eq!(odd.len(), 2);
//! assert_eq!(set.len(), 3); // Receiver unchanged
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{self, RandomState};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::ControlFlow;

use super::Set;

// =============================================================================
// SimpleSet Definition
// =============================================================================

/// A set of unique values backed by a [`HashMap`] from value to `()`.
///
/// A `SimpleSet` is in one of three states: *uninitialized* (no backing store),
/// *empty*, or *populated*. An uninitialized set reads exactly like an empty
/// one; the first [`add`](Set::add), [`insert`](SimpleSet::insert) or
/// [`extend`](Extend::extend) allocates its store.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `contains`     | O(1) expected     |
/// | `add`          | O(k) expected     |
/// | `remove`       | O(k) expected     |
/// | `len`          | O(1)              |
/// | `contains_all` | O(m) expected     |
/// | `equal`        | O(m) expected     |
/// | `filter`       | O(n)              |
///
/// # Examples
///
/// ```rust
/// use simpleset::set::{Set, SimpleSet};
/// use simpleset::simple_set;
///
/// let set: SimpleSet<&str> = simple_set!["a", "b"];
/// assert!(set.equal(&simple_set!["b", "a"]));
///
/// let uninitialized: SimpleSet<&str> = SimpleSet::default();
/// assert_eq!(uninitialized.values(), None);
/// assert!(uninitialized.equal(&SimpleSet::new()));
/// ```
#[derive(Clone)]
pub struct SimpleSet<T, S = RandomState> {
    store: Option<HashMap<T, (), S>>,
}

static_assertions::assert_impl_all!(SimpleSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SimpleSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(SimpleSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> SimpleSet<T, RandomState> {
    /// Creates a new, initialized, empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleset::set::{Set, SimpleSet};
    ///
    /// let set: SimpleSet<i32> = SimpleSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.values(), Some(vec![]));
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty set with room for at least `capacity` values.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> SimpleSet<T, S> {
    /// Creates a set without a backing store.
    ///
    /// Nothing is allocated until the first write.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleset::set::{Set, SimpleSet};
    ///
    /// let mut set: SimpleSet<i32> = SimpleSet::uninitialized();
    /// assert!(!set.is_initialized());
    /// assert_eq!(set.len(), 0);
    ///
    /// set.add([7]);
    /// assert!(set.is_initialized());
    /// ```
    #[inline]
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self { store: None }
    }

    /// Creates an empty set which will use `hasher` to hash values.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            store: Some(HashMap::with_hasher(hasher)),
        }
    }

    /// Creates an empty set with room for `capacity` values, hashed with
    /// `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            store: Some(HashMap::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Returns `true` once the set owns a backing store.
    #[inline]
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the number of values in the set. 0 when uninitialized.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.as_ref().map_or(0, HashMap::len)
    }

    /// Returns `true` if the set holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many values the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.as_ref().map_or(0, HashMap::capacity)
    }

    /// Returns the hasher of the backing store, if there is one.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> Option<&S> {
        self.store.as_ref().map(HashMap::hasher)
    }

    /// Returns an iterator over the values in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleset::simple_set;
    /// use simpleset::set::SimpleSet;
    ///
    /// let set: SimpleSet<i32> = simple_set![1, 2, 3];
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.store.as_ref().map(HashMap::keys),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> SimpleSet<T, S> {
    /// Returns `true` if the set contains `value`.
    ///
    /// The value may be any borrowed form of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleset::set::SimpleSet;
    ///
    /// let set: SimpleSet<String> = ["hello".to_string()].into();
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store
            .as_ref()
            .is_some_and(|store| store.contains_key(value))
    }

    /// Removes a single value. Returns `true` if it was present.
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store
            .as_mut()
            .is_some_and(|store| store.remove(value).is_some())
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> SimpleSet<T, S> {
    /// Inserts a single value. Returns `true` if it was not already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleset::set::SimpleSet;
    ///
    /// let mut set = SimpleSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.store_mut().insert(value, ()).is_none()
    }

    fn store_mut(&mut self) -> &mut HashMap<T, (), S> {
        self.store
            .get_or_insert_with(|| HashMap::with_hasher(S::default()))
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher + Default> Set<T> for SimpleSet<T, S> {
    fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.store_mut()
            .extend(values.into_iter().map(|value| (value, ())));
    }

    fn remove<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        for value in values {
            let value: &T = value.borrow();
            store.remove(value);
        }
    }

    fn contains(&self, value: &T) -> bool {
        Self::contains(self, value)
    }

    fn clear(&mut self) {
        if let Some(store) = self.store.as_mut() {
            store.clear();
        }
    }

    fn filter<P>(&self, mut keep: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let Some(store) = &self.store else {
            return Self::uninitialized();
        };
        let mut filtered = HashMap::with_hasher(S::default());
        filtered.extend(
            store
                .keys()
                .filter(|&value| keep(value))
                .map(|value| (value.clone(), ())),
        );
        Self {
            store: Some(filtered),
        }
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn visit<B, F>(&self, visitor: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        self.iter().try_for_each(visitor)
    }

    fn is_initialized(&self) -> bool {
        Self::is_initialized(self)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the values of a [`SimpleSet`].
pub struct Iter<'a, T> {
    inner: Option<hash_map::Keys<'a, T, ()>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, ExactSizeIterator::len)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the values of a [`SimpleSet`].
pub struct IntoIter<T> {
    inner: Option<hash_map::IntoKeys<T, ()>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, ExactSizeIterator::len)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S> Default for SimpleSet<T, S> {
    /// Returns an uninitialized set.
    #[inline]
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for SimpleSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for SimpleSet<T, RandomState> {
    fn from(values: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(values);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> Extend<T> for SimpleSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for SimpleSet<T, S>
where
    T: 'a + Hash + Eq + Copy,
    S: BuildHasher + Default,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for SimpleSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.store.map(HashMap::into_keys),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a SimpleSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for SimpleSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && other.iter().all(|value| self.contains(value))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for SimpleSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for SimpleSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for SimpleSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Construction Macro
// =============================================================================

/// Creates a [`SimpleSet`] containing the given values.
///
/// Duplicates collapse. With no arguments the macro builds an initialized,
/// empty set.
///
/// # Examples
///
/// ```rust
/// use simpleset::simple_set;
/// use simpleset::set::{Set, SimpleSet};
///
/// let set: SimpleSet<&str> = simple_set!["one", "two", "three", "two", "one"];
/// assert_eq!(set.len(), 3);
///
/// let empty: SimpleSet<i32> = simple_set![];
/// assert!(empty.is_initialized());
/// ```
#[macro_export]
macro_rules! simple_set {
    () => {
        $crate::set::SimpleSet::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::set::SimpleSet::from([$($value),+])
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, H> serde::Serialize for SimpleSet<T, H> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Upper bound on the capacity reserved from a deserializer's size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_VALUES: usize = 4096;

#[cfg(feature = "serde")]
struct SimpleSetVisitor<T, S> {
    marker: std::marker::PhantomData<SimpleSet<T, S>>,
}

#[cfg(feature = "serde")]
impl<T, S> SimpleSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SimpleSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = SimpleSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of unique values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_VALUES);
        let mut set = SimpleSet::with_capacity_and_hasher(capacity, S::default());
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for SimpleSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SimpleSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
