//! Pointer-linked binary min-heap
//!
//! This crate provides [`LinkedMinHeap`], a key-value min-heap stored as a
//! binary tree of heap-allocated nodes rather than as a contiguous array.
//!
//! # Features
//!
//! - **Insert**: O(log n) - attach at the next level-order slot, then trickle up
//! - **Remove-min**: O(log n) - move the last leaf into the root, then trickle down
//! - **Find-min**: O(1)
//! - **Sort**: O(n log n) - drains a clone, leaving the heap untouched
//! - **Introspection**: height, preorder dump, and a sideways 2D rendering
//!
//! Slots are located by decoding the node count in binary: the bits below the
//! leading one spell out the left/right path from the root (see [`position`]).
//!
//! # Example
//!
//! ```rust
//! use linked_min_heap::LinkedMinHeap;
//!
//! let mut heap = LinkedMinHeap::new();
//! heap.insert(5, "five");
//! heap.insert(1, "one");
//! heap.insert(3, "three");
//!
//! assert_eq!(heap.find_min(), Some((&1, &"one")));
//! assert_eq!(heap.sort(), vec![1, 3, 5]);
//! assert_eq!(heap.remove_min(), Ok((1, "one")));
//! assert_eq!(heap.len(), 2);
//! ```

pub mod linked;
pub mod position;
pub mod render;
pub mod traits;

pub use linked::LinkedMinHeap;
pub use render::RenderConfig;
pub use traits::{Heap, HeapError};
