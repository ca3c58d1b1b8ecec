use crate::sortable::Sortable;

/// An array-backed binary heap.
///
/// The element that comes before every other element (per
/// [`Sortable::comes_before`]) is always at the front. For every non-root
/// index `i` with parent `p = (i - 1) / 2`, `elements[p]` comes before or
/// ties `elements[i]`.
#[derive(Debug, Clone)]
pub struct Heap<T: Sortable> {
    elements: Vec<T>,
}

impl<T: Sortable> Heap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Heap {
            elements: Vec::new(),
        }
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element that would be returned by [`Heap::remove`], or `None` if
    /// the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Insert an element, sifting it up towards the root until its parent
    /// no longer comes after it.
    pub fn add(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up();
    }

    /// Remove and return the front element, or `None` if the heap is empty.
    ///
    /// The last element takes the root slot and is sifted down.
    pub fn remove(&mut self) -> Option<T> {
        let last = self.elements.pop()?;
        if self.elements.is_empty() {
            return Some(last);
        }

        let front = std::mem::replace(&mut self.elements[0], last);
        self.sift_down();
        Some(front)
    }

    /// Drain the heap, returning its elements in removal order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(element) = self.remove() {
            sorted.push(element);
        }
        sorted
    }

    fn sift_up(&mut self) {
        let Some(mut i) = self.elements.len().checked_sub(1) else {
            return;
        };

        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.elements[i].comes_before(&self.elements[parent]) {
                return;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self) {
        let len = self.elements.len();
        let mut i = 0;

        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            if left >= len {
                return;
            }

            let mut first = left;
            if right < len && self.elements[right].comes_before(&self.elements[left]) {
                first = right;
            }

            // Only swap when the child comes before the displaced element.
            if !self.elements[first].comes_before(&self.elements[i]) {
                return;
            }
            self.elements.swap(i, first);
            i = first;
        }
    }
}

impl<T: Sortable + Clone> Heap<T> {
    /// Build a heap by adding a copy of each element in order. The input is
    /// left untouched.
    pub fn heapify(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }

    /// A new heap holding copies of the elements of both `self` and `other`.
    ///
    /// Neither input is modified. The internal layout of the result depends
    /// on insertion order and should not be relied upon; only its contents
    /// are defined.
    pub fn union(&self, other: &Heap<T>) -> Self {
        let mut merged = Heap {
            elements: Vec::with_capacity(self.len() + other.len()),
        };
        merged.extend(other.elements.iter().cloned());
        merged.extend(self.elements.iter().cloned());
        merged
    }
}

impl<T: Sortable> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sortable> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Sortable> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Heap::new();
        heap.extend(iter);
        heap
    }
}
