use crate::heap::Heap;
use crate::sortable::Sortable;

/// A priority queue backed by a [`Heap`].
///
/// Exposes only adding, removing, and emptiness checks, so callers that
/// schedule work through it cannot peek or merge.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Sortable> {
    heap: Heap<T>,
}

impl<T: Sortable> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue { heap: Heap::new() }
    }

    pub fn add(&mut self, element: T) {
        self.heap.add(element);
    }

    /// Remove the element with the highest priority, or `None` if the queue
    /// is empty.
    pub fn remove(&mut self) -> Option<T> {
        self.heap.remove()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Sortable> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sortable> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue {
            heap: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn removes_by_priority() {
        let mut queue: PriorityQueue<u8> = [7, 2, 9, 4].into_iter().collect();
        queue.add(1);
        assert_eq!(queue.remove(), Some(1));
        assert_eq!(queue.remove(), Some(2));
        assert_eq!(queue.remove(), Some(4));
        assert_eq!(queue.remove(), Some(7));
        assert_eq!(queue.remove(), Some(9));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue() {
        let mut queue: PriorityQueue<i32> = PriorityQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.remove(), None);
    }
}
