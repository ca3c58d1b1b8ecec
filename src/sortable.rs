/// A value that can be ordered against other values of the same type.
///
/// This is the only capability a [`Heap`](crate::heap::Heap) needs from its
/// elements. The relation may be strict (`<`) or non-strict (`<=`), but it
/// must be transitive and must not change while the value is in a heap.
pub trait Sortable {
    /// Whether `self` should be removed from a heap before `other`.
    fn comes_before(&self, other: &Self) -> bool;
}

macro_rules! sortable_by_less_than {
    ($($t:ty),*) => {
        $(
            impl Sortable for $t {
                fn comes_before(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

sortable_by_less_than!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
