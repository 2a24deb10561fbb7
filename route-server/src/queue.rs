//! Comparator-driven binary min-heap.
//!
//! Unlike `std::collections::BinaryHeap`, the ordering is supplied as a
//! closure at construction time, so callers can order plain tuples without
//! wrapper types. The item that compares `Less` than all others is at the
//! root.

use std::cmp::Ordering;
use std::fmt;

/// Error returned when reading from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("priority queue is empty")]
pub struct EmptyQueue;

/// An array-backed binary min-heap ordered by a comparator.
///
/// # Examples
///
/// ```
/// use route_server::queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a.cmp(b));
/// queue.enqueue(7);
/// queue.enqueue(2);
/// queue.enqueue(5);
///
/// assert_eq!(queue.peek(), Ok(&2));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Ok(5));
/// assert_eq!(queue.dequeue(), Ok(7));
/// assert!(queue.dequeue().is_err());
/// ```
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    data: Vec<T>,
    compare: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `compare`.
    pub fn new(compare: F) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Returns true if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Insert an item.
    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the minimum item.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        if self.data.is_empty() {
            return Err(EmptyQueue);
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Return the minimum item without removing it.
    pub fn peek(&self) -> Result<&T, EmptyQueue> {
        self.data.first().ok_or(EmptyQueue)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.compare)(&self.data[i], &self.data[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
