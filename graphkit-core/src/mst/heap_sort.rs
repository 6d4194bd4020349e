//! In-place heap sort.

use std::cmp::Ordering;

/// Sorts `items` into non-decreasing order under `compare`.
///
/// Builds a max-heap over the whole slice, then repeatedly swaps the maximum
/// to the tail and restores the heap over the shrinking prefix. The sort is
/// not stable: equal elements may be reordered.
pub(crate) fn heap_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    for root in (0..len / 2).rev() {
        sift_down(items, root, len, &mut compare);
    }
    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, &mut compare);
    }
}

/// Moves `items[root]` down until the heap property holds over `..end`.
fn sift_down<T, F>(items: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let child = if right < end && compare(&items[left], &items[right]).is_lt() {
            right
        } else {
            left
        };
        if compare(&items[root], &items[child]).is_ge() {
            return;
        }
        items.swap(root, child);
        root = child;
    }
}
