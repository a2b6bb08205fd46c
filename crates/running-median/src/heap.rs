use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;

/// Comparison direction of a [`Heap`].
pub trait HeapOrder {
    /// True when `a` belongs strictly closer to the root than `b`.
    fn is_better<T: Ord>(a: &T, b: &T) -> bool;
}

/// Largest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

/// Smallest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

impl HeapOrder for MaxOrder {
    fn is_better<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

impl HeapOrder for MinOrder {
    fn is_better<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

pub type MaxHeap<T> = Heap<T, MaxOrder>;
pub type MinHeap<T> = Heap<T, MinOrder>;

/**
Binary heap stored level by level in a `Vec`: the root sits at index 0 and the
children of `i` at `2i + 1` and `2i + 2`. `O` decides whether the root is the
largest or the smallest element.
*/
#[derive(Clone)]
pub struct Heap<T, O> {
    items: Vec<T>,
    order: PhantomData<O>,
}

impl<T, O> Default for Heap<T, O> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            order: PhantomData,
        }
    }
}

impl<T: Ord, O: HeapOrder> Heap<T, O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Like [`Heap::with_capacity`], but reports an oversized request instead of panicking.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut items = Vec::new();
        items.try_reserve(capacity)?;
        Ok(Self {
            items,
            order: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Root element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /**
    Appends `value` at the end and walks it up while it beats its parent.
    */
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        let mut child = self.items.len() - 1;
        while child > 0 {
            let parent = (child - 1) / 2;
            if !O::is_better(&self.items[child], &self.items[parent]) {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
        tracing::trace!(len = self.items.len(), "Pushed onto heap");
    }

    /**
    Removes the root. The last element takes its place and is sifted down
    towards the better child until neither child beats it.
    */
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop();

        let mut pos = 0;
        while let Some(child) = self.better_child(pos) {
            if !O::is_better(&self.items[child], &self.items[pos]) {
                break;
            }
            self.items.swap(pos, child);
            pos = child;
        }
        tracing::trace!(len = self.items.len(), "Popped from heap");
        root
    }

    // Equal children resolve to the right one.
    fn better_child(&self, pos: usize) -> Option<usize> {
        let left = 2 * pos + 1;
        let right = left + 1;
        if left >= self.items.len() {
            return None;
        }
        if right >= self.items.len() || O::is_better(&self.items[left], &self.items[right]) {
            return Some(left);
        }
        Some(right)
    }
}

impl<T: Ord, O: HeapOrder> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord, O: HeapOrder> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Debug, O> Debug for Heap<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Level-order dump of the backing array.
impl<T: Display, O> Display for Heap<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
