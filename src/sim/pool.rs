//! Fixed-capacity entity pools
//!
//! Slots are allocated once when the session starts and recycled forever after.
//! Acquisition is a linear scan for the first free slot, which keeps the
//! "first free in pool order" guarantee.

use std::slice;

/// An entity that can live in a [`Pool`]
pub trait Poolable {
    /// Whether the slot is inactive and may be handed out again
    fn is_free(&self) -> bool;
}

/// A fixed set of reusable entity slots
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Poolable> Pool<T> {
    /// Wrap pre-built slots; capacity never changes afterwards
    fn new(slots: Vec<T>) -> Self {
        Self { slots }
    }

    /// Build a pool of `capacity` slots from a factory
    pub fn with_capacity(capacity: usize, make: impl FnMut(usize) -> T) -> Self {
        Self::new((0..capacity).map(make).collect())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first free slot, if any
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Poolable::is_free)
    }

    /// First free slot in pool order, or `None` when every slot is active
    ///
    /// The slot stays free until the caller activates it.
    pub fn acquire(&mut self) -> Option<&mut T> {
        let index = self.first_free()?;
        self.slots.get_mut(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// All slots, free or not
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Active slots only
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| !slot.is_free())
    }

    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| !slot.is_free())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Pool<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}
