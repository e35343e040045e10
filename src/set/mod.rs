//! Sets of unique values.
//!
//! This module provides the [`Set`] capability trait and its default,
//! hash-map-backed implementation [`SimpleSet`]:
//!
//! - [`Set`]: The container contract (membership, bulk mutation, filtering,
//!   iteration with early stop)
//! - [`SimpleSet`]: A set backed by `HashMap<T, ()>`
//! - `Set` is also implemented for [`std::collections::HashSet`] and
//!   [`std::collections::BTreeSet`], so call sites written against the trait
//!   accept any of them
//!
//! # Examples
//!
//! ```rust
//! use simpleset::set::{Set, SimpleSet};
//! use simpleset::simple_set;
//!
//! let mut set: SimpleSet<&str> = simple_set!["one", "two", "three", "two", "one"];
//! assert_eq!(set.len(), 3);
//!
//! set.add(["four"]);
//! set.remove(["one"]);
//!
//! let mut values = set.values().unwrap_or_default();
//! values.sort_unstable();
//! assert_eq!(values, vec!["four", "three", "two"]);
//! ```
//!
//! ## Mixing backings
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use simpleset::set::{Set, SimpleSet};
//! use simpleset::simple_set;
//!
//! let mut set: SimpleSet<i32> = simple_set![1, 2];
//! let other: BTreeSet<i32> = [2, 3].into_iter().collect();
//!
//! set.add_set(&other);
//! assert!(set.contains_all(&other));
//! assert!(set.equal(&simple_set![1, 2, 3]));
//! ```
//!
//! # Uninitialized sets
//!
//! A [`SimpleSet`] can exist without a backing store
//! ([`SimpleSet::uninitialized`], [`Default`]). Such a set reads as empty
//! everywhere, allocates its store on the first [`Set::add`], and is only
//! distinguishable from an empty set through [`Set::values`] (which returns
//! `None`), [`Set::is_initialized`], and [`Set::filter`] / [`Set::clone_set`]
//! (which return an uninitialized set again).

use std::borrow::Borrow;
use std::iter;
use std::ops::ControlFlow;

mod hasher;
mod simple;
mod standard;

#[cfg(feature = "ahash")]
pub use hasher::AHashSimpleSet;
#[cfg(feature = "fxhash")]
pub use hasher::FxSimpleSet;
pub use simple::IntoIter;
pub use simple::Iter;
pub use simple::SimpleSet;

// =============================================================================
// Set Trait
// =============================================================================

/// An unordered collection of unique values.
///
/// Implementors provide storage-level primitives ([`add`](Set::add),
/// [`remove`](Set::remove), [`contains`](Set::contains), [`clear`](Set::clear),
/// [`filter`](Set::filter), [`len`](Set::len)) and the iteration primitive
/// [`visit`](Set::visit). Every bulk and cross-set operation is provided in
/// terms of `visit`, so its iteration order and early-stop behavior determine
/// theirs.
///
/// No operation fails. Iteration order is unspecified; callers needing a
/// deterministic order must sort the result of [`values`](Set::values).
///
/// # Laws
///
/// For all sets `a` and `b`:
///
/// - `a.add([v]); a.add([v])` leaves `a` as it was after the first call
/// - `a.equal(&b) == b.equal(&a)`
/// - `a.clone_set().equal(&a)`
/// - `a.contains_all(&empty)` and `!a.contains_any(&empty)`
///
/// # Examples
///
/// ```rust
/// use simpleset::set::{Set, SimpleSet};
/// use simpleset::simple_set;
///
/// fn evens<S: Set<i32>>(set: &S) -> S {
///     set.filter(|value| value % 2 == 0)
/// }
///
/// let set: SimpleSet<i32> = simple_set![1, 2, 3];
/// assert!(evens(&set).equal(&simple_set![2]));
/// ```
pub trait Set<T> {
    /// Inserts every given value. Values already present are left untouched.
    fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>;

    /// Removes every given value that is present. Absent values are ignored.
    fn remove<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Returns `true` if `value` is in the set.
    fn contains(&self, value: &T) -> bool;

    /// Removes all values. The set stays usable afterwards.
    fn clear(&mut self);

    /// Returns a new set holding exactly the values for which `keep`
    /// returns `true`. The receiver is not modified.
    fn filter<P>(&self, keep: P) -> Self
    where
        Self: Sized,
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Returns the number of distinct values.
    fn len(&self) -> usize;

    /// Applies `visitor` to each value in unspecified order.
    ///
    /// Iteration stops at the first [`ControlFlow::Break`], whose payload is
    /// returned. If every value was visited the result is
    /// [`ControlFlow::Continue`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use simpleset::set::{Set, SimpleSet};
    /// use simpleset::simple_set;
    ///
    /// let set: SimpleSet<i32> = simple_set![1, 2, 3, 4];
    ///
    /// let found = set.visit(|value| {
    ///     if *value > 2 {
    ///         ControlFlow::Break(*value)
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    /// assert!(matches!(found, ControlFlow::Break(3 | 4)));
    /// ```
    fn visit<B, F>(&self, visitor: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>;

    /// Returns `true` if the set has no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `false` if the set has no backing store yet.
    ///
    /// Backings that always own their storage keep the default `true`.
    fn is_initialized(&self) -> bool {
        true
    }

    /// Calls `function` on every value, without early stop.
    fn for_each_value<F>(&self, mut function: F)
    where
        F: FnMut(&T),
    {
        let _ = self.visit(|value| {
            function(value);
            ControlFlow::<()>::Continue(())
        });
    }

    /// Inserts every value of `other`.
    fn add_set<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized,
        T: Clone,
    {
        other.for_each_value(|value| self.add(iter::once(value.clone())));
    }

    /// Removes every value of `other`.
    fn remove_set<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized,
    {
        other.for_each_value(|value| self.remove(iter::once(value)));
    }

    /// Returns `true` if at least one value of `other` is in the set.
    ///
    /// Stops at the first match. Always `false` when `other` is empty.
    fn contains_any<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        other
            .visit(|value| {
                if self.contains(value) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .is_break()
    }

    /// Returns `true` if every value of `other` is in the set.
    ///
    /// Stops at the first missing value. Always `true` when `other` is empty.
    fn contains_all<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        other
            .visit(|value| {
                if self.contains(value) {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            })
            .is_continue()
    }

    /// Returns the values in unspecified order.
    ///
    /// An empty set yields `Some(vec![])`; `None` is returned only when the
    /// set has no backing store (see [`is_initialized`](Set::is_initialized)).
    fn values(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        if !self.is_initialized() {
            return None;
        }
        let mut values = Vec::with_capacity(self.len());
        self.for_each_value(|value| values.push(value.clone()));
        Some(values)
    }

    /// Returns `true` if both sets hold exactly the same values.
    ///
    /// Defined as equal lengths plus [`contains_all`](Set::contains_all), so
    /// an uninitialized set equals an empty one.
    fn equal<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        self.len() == other.len() && self.contains_all(other)
    }

    /// Returns an independently owned copy of the set.
    ///
    /// Equivalent to `filter(|_| true)`, so an uninitialized set clones to an
    /// uninitialized set.
    fn clone_set(&self) -> Self
    where
        Self: Sized,
        T: Clone,
    {
        self.filter(|_| true)
    }
}
