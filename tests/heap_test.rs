use huffman_heap::heap::Heap;
use huffman_heap::sortable::Sortable;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A value ordered only by its key, so equal keys carrying different tags
/// exercise ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Keyed {
    key: u8,
    tag: u16,
}

impl Sortable for Keyed {
    fn comes_before(&self, other: &Self) -> bool {
        self.key < other.key
    }
}

impl Arbitrary for Keyed {
    fn arbitrary(g: &mut Gen) -> Self {
        Keyed {
            key: u8::arbitrary(g) % 16,
            tag: u16::arbitrary(g),
        }
    }
}

/// Ordered by the non-strict relation, so equal keys come before each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Inclusive(i8);

impl Sortable for Inclusive {
    fn comes_before(&self, other: &Self) -> bool {
        self.0 <= other.0
    }
}

impl Arbitrary for Inclusive {
    fn arbitrary(g: &mut Gen) -> Self {
        Inclusive(i8::arbitrary(g) % 8)
    }
}

/// A single step applied to a heap: `Some` adds, `None` removes.
type Op = Option<i16>;

fn sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

/// Draining a heap yields its elements in non-decreasing order.
#[quickcheck]
fn drains_in_order(values: Vec<i32>) -> bool {
    Heap::heapify(&values).into_sorted_vec() == sorted(&values)
}

/// With ties, draining still yields non-decreasing keys and the same
/// multiset of values.
#[quickcheck]
fn drains_ties_in_key_order(values: Vec<Keyed>) -> bool {
    let drained = Heap::heapify(&values).into_sorted_vec();
    let keys_ordered = drained.windows(2).all(|pair| pair[0].key <= pair[1].key);
    keys_ordered && sorted(&drained) == sorted(&values)
}

/// After every operation, peek returns the minimum of the elements present
/// and the length matches the number of elements present.
#[quickcheck]
fn peek_is_always_the_minimum(ops: Vec<Op>) -> bool {
    let mut heap = Heap::new();
    let mut present: Vec<i16> = Vec::new();

    for op in ops {
        match op {
            Some(value) => {
                heap.add(value);
                present.push(value);
            }
            None => {
                let removed = heap.remove();
                let expected = present.iter().copied().min();
                if removed != expected {
                    return false;
                }
                if let Some(value) = removed {
                    let index = present.iter().position(|&v| v == value).unwrap();
                    present.swap_remove(index);
                }
            }
        }

        if heap.peek().copied() != present.iter().copied().min() || heap.len() != present.len() {
            return false;
        }
    }
    true
}

/// `len` is the number of adds minus the number of successful removes.
#[quickcheck]
fn len_counts_adds_minus_removes(adds: Vec<u8>, removes: u8) -> bool {
    let mut heap: Heap<u8> = adds.iter().copied().collect();
    let removes = (removes as usize).min(adds.len());
    for _ in 0..removes {
        heap.remove();
    }
    heap.len() == adds.len() - removes && heap.is_empty() == (adds.len() == removes)
}

#[quickcheck]
fn heapify_does_not_modify_input(values: Vec<Keyed>) -> bool {
    let before = values.clone();
    let heap = Heap::heapify(&values);
    heap.len() == values.len() && values == before
}

/// A union holds every element of both inputs, leaves them untouched, and
/// drains the same whichever side it is taken from.
#[quickcheck]
fn union_is_order_independent(a: Vec<i32>, b: Vec<i32>) -> bool {
    let heap_a = Heap::heapify(&a);
    let heap_b = Heap::heapify(&b);

    let ab = heap_a.union(&heap_b);
    let ba = heap_b.union(&heap_a);

    let mut all = a.clone();
    all.extend(&b);

    ab.len() == a.len() + b.len()
        && heap_a.len() == a.len()
        && heap_b.len() == b.len()
        && ab.into_sorted_vec() == sorted(&all)
        && ba.into_sorted_vec() == sorted(&all)
}

/// Random adds and removes over a non-strict ordering still remove the
/// minimum every time.
#[quickcheck]
fn non_strict_ordering_removes_the_minimum(ops: Vec<Option<Inclusive>>) -> bool {
    let mut heap = Heap::new();
    let mut present: Vec<Inclusive> = Vec::new();

    for op in ops {
        match op {
            Some(value) => {
                heap.add(value);
                present.push(value);
            }
            None => {
                let removed = heap.remove();
                if removed != present.iter().copied().min() {
                    return false;
                }
                if let Some(value) = removed {
                    let index = present.iter().position(|&v| v == value).unwrap();
                    present.swap_remove(index);
                }
            }
        }

        if heap.peek().copied() != present.iter().copied().min() || heap.len() != present.len() {
            return false;
        }
    }
    true
}
