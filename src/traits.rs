//! Common traits for heap data structures
//!
//! [`Heap`] is the push/peek/pop surface shared with Rust's standard heap API
//! patterns, and [`HeapError`] is the error type returned by fallible heap
//! operations.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The operation needs at least one element
    #[error("heap is empty")]
    Empty,
    /// A child holds a smaller key than its parent
    #[error("heap order violated: a child key is smaller than its parent's")]
    OrderViolation,
    /// The tree is not the complete binary tree for the stored count
    #[error("tree shape does not match a complete tree of {expected} nodes (found {found})")]
    ShapeViolation {
        /// Node count recorded by the heap
        expected: usize,
        /// Nodes (or level-order position) actually observed
        found: usize,
    },
    /// A child's parent back-reference points somewhere other than its parent
    #[error("parent back-reference does not match the owning node")]
    BrokenParentLink,
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use linked_min_heap::{Heap, LinkedMinHeap};
///
/// fn drain<H: Heap<&'static str, i32>>(mut heap: H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some((priority, _)) = heap.pop() {
///         out.push(priority);
///     }
///     out
/// }
///
/// let mut heap: LinkedMinHeap<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(drain(heap), vec![1, 2, 3]);
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// Returns `None` on an empty heap.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::ShapeViolation {
                expected: 4,
                found: 3
            }
            .to_string(),
            "tree shape does not match a complete tree of 4 nodes (found 3)"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<HeapError>();
    }
}
