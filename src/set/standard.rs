//! [`Set`] implementations for standard library sets.
//!
//! `HashSet` and `BTreeSet` always own their storage, so they are always
//! initialized. `BTreeSet` visits its values in ascending order, which the
//! [`Set`] contract permits but does not require.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::ControlFlow;

use super::Set;

impl<T: Hash + Eq, S: BuildHasher + Default> Set<T> for HashSet<T, S> {
    fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(values);
    }

    fn remove<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for value in values {
            let value: &T = value.borrow();
            Self::remove(self, value);
        }
    }

    fn contains(&self, value: &T) -> bool {
        Self::contains(self, value)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn filter<P>(&self, mut keep: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|&value| keep(value)).cloned().collect()
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
}

impl<T: Ord> Set<T> for BTreeSet<T> {
    fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(values);
    }

    fn remove<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for value in values {
            let value: &T = value.borrow();
            Self::remove(self, value);
        }
    }

    fn contains(&self, value: &T) -> bool {
        Self::contains(self, value)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn filter<P>(&self, mut keep: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|&value| keep(value)).cloned().collect()
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
}
