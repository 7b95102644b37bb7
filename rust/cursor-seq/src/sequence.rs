use std::fmt;

use cursor_seq_common::{Result, error::Error, verify_current};

use crate::growth;

/// An ordered, resizable sequence of values with an internal cursor.
///
/// Items are stored contiguously at positions `0..size()`. The cursor either
/// designates the "current item" or sits at `size()`, which means there is
/// no current item. The cursor is the reference point for traversal
/// ([`start`](Self::start), [`advance`](Self::advance)), for positional
/// insertion ([`insert`](Self::insert) before it, [`attach`](Self::attach)
/// after it) and for removal ([`remove_current`](Self::remove_current)).
///
/// The logical capacity is tracked separately from the item count and is
/// never less than one. An insertion into a full sequence grows the capacity
/// according to [`growth::grown_capacity`].
///
/// # Examples
///
/// ```
/// use cursor_seq::Sequence;
///
/// let mut seq = Sequence::new(1);
/// seq.attach(1);
/// seq.attach(2);
/// seq.attach(3);
/// assert_eq!(seq.size(), 3);
///
/// seq.start();
/// assert_eq!(seq.current(), 1);
/// seq.advance();
/// seq.insert(10);
/// assert_eq!(seq.current(), 10);
///
/// let mut items = Vec::new();
/// seq.start();
/// while seq.has_current() {
///     items.push(seq.current());
///     seq.advance();
/// }
/// assert_eq!(items, [1, 10, 2, 3]);
/// ```
pub struct Sequence<T> {
    /// Valid items; `elements.len()` is the item count.
    elements: Vec<T>,
    /// Logical capacity, `>= max(1, elements.len())`.
    capacity: usize,
    /// Index of the current item, or `elements.len()` when there is none.
    cursor: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with room for `initial_capacity` items.
    ///
    /// A capacity of zero is raised to [`growth::MIN_CAPACITY`].
    pub fn new(initial_capacity: usize) -> Sequence<T> {
        let capacity = growth::clamp_capacity(initial_capacity, 0);
        Sequence {
            elements: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Fallible form of [`new`](Self::new) that reports allocation failure.
    pub fn try_new(initial_capacity: usize) -> Result<Sequence<T>> {
        let capacity = growth::clamp_capacity(initial_capacity, 0);
        Ok(Sequence {
            elements: allocate_store(capacity)?,
            capacity,
            cursor: 0,
        })
    }

    /// Returns the number of items in the sequence.
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the cursor designates a current item.
    #[inline]
    pub fn has_current(&self) -> bool {
        self.cursor != self.size()
    }

    /// Moves the cursor to the first item.
    ///
    /// On an empty sequence this leaves no current item.
    #[inline]
    pub fn start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the next item. When the last item was current,
    /// there is no current item afterwards.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn advance(&mut self) {
        assert!(self.has_current(), "advance requires a current item");
        self.cursor += 1;
    }

    /// Like [`advance`](Self::advance), but reports a missing current item
    /// as [`ErrorKind::NoCurrentItem`](crate::ErrorKind::NoCurrentItem).
    pub fn try_advance(&mut self) -> Result<()> {
        verify_current!("advance", self.has_current());
        self.cursor += 1;
        Ok(())
    }

    /// Returns a copy of the current item.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn current(&self) -> T
    where
        T: Clone,
    {
        self.current_ref().clone()
    }

    /// Returns a reference to the current item.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn current_ref(&self) -> &T {
        assert!(self.has_current(), "current requires a current item");
        &self.elements[self.cursor]
    }

    pub fn try_current(&self) -> Result<&T> {
        verify_current!("current", self.has_current());
        Ok(&self.elements[self.cursor])
    }

    /// Reallocates the backing store to hold `new_capacity` items.
    ///
    /// The target is raised to at least one and at least [`size`](Self::size);
    /// items are never truncated. Items and cursor are unchanged.
    pub fn resize(&mut self, new_capacity: usize) {
        let capacity = growth::clamp_capacity(new_capacity, self.size());
        self.adopt_store(Vec::with_capacity(capacity), capacity);
    }

    /// Fallible form of [`resize`](Self::resize). On error the sequence is
    /// left exactly as it was.
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<()> {
        let capacity = growth::clamp_capacity(new_capacity, self.size());
        let store = allocate_store(capacity)?;
        self.adopt_store(store, capacity);
        Ok(())
    }

    /// Inserts `value` immediately before the current item, or at the front
    /// when there is no current item. The new item becomes current.
    pub fn insert(&mut self, value: T) {
        self.reserve_slot();
        self.place(self.insert_position(), value);
    }

    /// Fallible form of [`insert`](Self::insert). On error the sequence is
    /// unchanged and `value` is dropped.
    pub fn try_insert(&mut self, value: T) -> Result<()> {
        self.try_reserve_slot()?;
        self.place(self.insert_position(), value);
        Ok(())
    }

    /// Inserts `value` immediately after the current item, or at the end
    /// when there is no current item. The new item becomes current.
    pub fn attach(&mut self, value: T) {
        self.reserve_slot();
        self.place(self.attach_position(), value);
    }

    /// Fallible form of [`attach`](Self::attach). On error the sequence is
    /// unchanged and `value` is dropped.
    pub fn try_attach(&mut self, value: T) -> Result<()> {
        self.try_reserve_slot()?;
        self.place(self.attach_position(), value);
        Ok(())
    }

    /// Removes and returns the current item. The item that followed it
    /// becomes current; if the removed item was the last one, there is no
    /// current item afterwards.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    pub fn remove_current(&mut self) -> T {
        assert!(self.has_current(), "remove_current requires a current item");
        self.elements.remove(self.cursor)
    }

    pub fn try_remove_current(&mut self) -> Result<T> {
        verify_current!("remove_current", self.has_current());
        Ok(self.elements.remove(self.cursor))
    }

    /// Fallible form of [`Clone::clone`] that reports allocation failure.
    pub fn try_clone(&self) -> Result<Sequence<T>>
    where
        T: Clone,
    {
        let mut elements = allocate_store(self.capacity)?;
        elements.extend_from_slice(&self.elements);
        Ok(Sequence {
            elements,
            capacity: self.capacity,
            cursor: self.cursor,
        })
    }

    fn insert_position(&self) -> usize {
        if self.has_current() { self.cursor } else { 0 }
    }

    fn attach_position(&self) -> usize {
        if self.has_current() {
            self.cursor + 1
        } else {
            self.size()
        }
    }

    /// Shifts the items at and after `index` one slot right, stores `value`
    /// at `index` and makes it current. Requires a free slot.
    fn place(&mut self, index: usize, value: T) {
        debug_assert!(self.size() < self.capacity);
        self.elements.insert(index, value);
        self.cursor = index;
    }

    fn reserve_slot(&mut self) {
        if self.size() == self.capacity {
            self.resize(growth::grown_capacity(self.capacity));
        }
    }

    fn try_reserve_slot(&mut self) -> Result<()> {
        if self.size() == self.capacity {
            self.try_resize(growth::grown_capacity(self.capacity))?;
        }
        Ok(())
    }

    /// Moves all items into `store` and makes it the backing store.
    ///
    /// `store` must be empty with room for at least `capacity` items, so the
    /// move itself never reallocates.
    fn adopt_store(&mut self, mut store: Vec<T>, capacity: usize) {
        debug_assert!(store.is_empty() && capacity >= self.size());
        log::trace!(
            "sequence store reallocated: {} -> {} slots, {} items",
            self.capacity,
            capacity,
            self.size()
        );
        store.extend(self.elements.drain(..));
        self.elements = store;
        self.capacity = capacity;
    }
}

fn allocate_store<T>(capacity: usize) -> Result<Vec<T>> {
    let mut store = Vec::new();
    store.try_reserve_exact(capacity).map_err(|e| {
        log::debug!("sequence store allocation of {capacity} slots failed: {e}");
        Error::allocation_failed(capacity, e)
    })?;
    Ok(store)
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new(growth::MIN_CAPACITY)
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Sequence {
            elements,
            capacity: self.capacity,
            cursor: self.cursor,
        }
    }

    /// Replaces the contents with a deep copy of `source`.
    ///
    /// The new store is fully populated before the old one is released, so
    /// a panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut elements = Vec::with_capacity(source.capacity);
        elements.extend_from_slice(&source.elements);
        self.elements = elements;
        self.capacity = source.capacity;
        self.cursor = source.cursor;
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    /// Compares items and cursor position; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor && self.elements == other.elements
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("items", &self.elements)
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
impl<T> Sequence<T> {
    pub(crate) fn assert_invariants(&self) {
        assert!(self.size() <= self.capacity, "size exceeds capacity");
        assert!(self.capacity >= growth::MIN_CAPACITY, "zero capacity");
        assert!(self.cursor <= self.size(), "cursor out of range");
    }

    pub(crate) fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.elements
    }
}
