//! Fixed-Capacity Ring Buffer Implementation

use serde::ser::{Serialize, Serializer};

/// Default buffer capacity (5 frames, the per-session smoothing window)
pub const DEFAULT_CAPACITY: usize = 5;

/// Fixed-capacity FIFO buffer; enqueueing into a full buffer evicts the oldest element
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Pre-allocated slots
    storage: Box<[Option<T>]>,
    /// Index of the oldest element (read position)
    head: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with given capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Ring buffer capacity must be > 0");
        let storage: Vec<Option<T>> = (0..capacity).map(|_| None).collect();
        Self {
            storage: storage.into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Create a buffer with default capacity (5 samples)
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Physical slot for the logical index (0 = oldest)
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.storage.len()
    }

    /// Append a value at the tail, evicting the oldest value if the buffer is full.
    ///
    /// Returns the evicted value, if any.
    pub fn enqueue(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() { self.dequeue() } else { None };
        let tail = self.slot(self.len);
        self.storage[tail] = Some(value);
        self.len += 1;
        evicted
    }

    /// Remove and return the oldest value, or `None` if the buffer is empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.storage[self.head].take();
        self.head = (self.head + 1) % self.storage.len();
        self.len -= 1;
        value
    }

    /// Get the number of values currently in the buffer
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Oldest value in the buffer
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Most recently enqueued value
    pub fn last(&self) -> Option<&T> {
        match self.len {
            0 => None,
            n => self.get(n - 1),
        }
    }

    /// Value at `index` counted from the oldest element, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.storage[self.slot(index)].as_ref()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.storage[self.slot(i)].as_ref())
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.storage.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Fold the contents left to right with no seed.
    ///
    /// The buffer must hold at least one value for the fold to produce a
    /// result; an empty buffer yields `None`.
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        self.iter().cloned().reduce(f)
    }

    /// Copy the contents into a vector (oldest first)
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
