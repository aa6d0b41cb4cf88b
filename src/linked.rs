//! Pointer-linked binary min-heap
//!
//! [`LinkedMinHeap`] keeps the classic binary-heap shape (a complete binary
//! tree in heap order) but stores it as individually allocated nodes instead
//! of a contiguous array:
//!
//! - each node exclusively owns its left and right children
//! - each node holds a non-owning back-reference to its parent, used only by
//!   trickle-up
//! - the heap owns the root and counts the nodes
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `remove_min` | O(log n)   |
//! | `find_min`   | O(1)       |
//! | `sort`       | O(n log n) |
//! | `clone`      | O(n log n) |
//!
//! # Algorithm Overview
//!
//! **Locating slots**: with no index arithmetic available, the node at
//! level-order position `n` is found by walking the bits of `n` from the root
//! (see [`position`](crate::position)). Insert walks to the parent of position
//! `len + 1`; removal walks to the parent of position `len`.
//!
//! **Insert**: attach a new leaf at the next free slot, then trickle up: while
//! the parent's key is strictly greater, swap payloads with the parent.
//!
//! **Remove-min**: detach the last leaf in level order, move its payload into
//! the root, then trickle down: while the smaller child (or the only child) has
//! a strictly smaller key, swap payloads with it.
//!
//! Sifting swaps `(key, value)` payloads between nodes that stay in place, so
//! no parent or child link changes outside of attach and detach.

use crate::position::{self, Direction, PathBits};
use crate::render::RenderConfig;
use crate::traits::{Heap, HeapError};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;
use tracing::{debug, trace};

type Link<K, V> = Option<NonNull<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    parent: Link<K, V>, // Non-owning back-reference (None at the root)
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn allocate(key: K, value: V) -> NonNull<Node<K, V>> {
        NonNull::from(Box::leak(Box::new(Node {
            key,
            value,
            parent: None,
            left: None,
            right: None,
        })))
    }
}

/// Shared, read-only view of a node, valid for as long as the heap borrow.
pub(crate) struct NodeRef<'a, K, V> {
    node: NonNull<Node<K, V>>,
    _marker: PhantomData<&'a Node<K, V>>,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    fn new(node: NonNull<Node<K, V>>) -> Self {
        NodeRef {
            node,
            _marker: PhantomData,
        }
    }

    fn get(&self) -> &'a Node<K, V> {
        // Nodes live until detached, which needs `&mut` on the heap.
        unsafe { &*self.node.as_ptr() }
    }

    pub(crate) fn key(&self) -> &'a K {
        &self.get().key
    }

    pub(crate) fn value(&self) -> &'a V {
        &self.get().value
    }

    pub(crate) fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.get().left.map(NodeRef::new)
    }

    pub(crate) fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.get().right.map(NodeRef::new)
    }
}

/// Pointer-linked binary min-heap of key-value pairs
///
/// Keys order the heap; values ride along. Equal keys are allowed and leave
/// in no particular order relative to each other.
///
/// # Example
///
/// ```rust
/// use linked_min_heap::LinkedMinHeap;
///
/// let mut heap = LinkedMinHeap::new();
/// for key in [5, 3, 8, 1, 9, 2] {
///     heap.insert(key, key * 10);
/// }
///
/// assert_eq!(heap.find_min(), Some((&1, &10)));
/// assert_eq!(heap.height(), 3);
/// assert_eq!(heap.sort(), vec![1, 2, 3, 5, 8, 9]);
/// assert_eq!(heap.len(), 6); // sort works on a copy
/// ```
pub struct LinkedMinHeap<K, V> {
    root: Link<K, V>,
    len: usize,
    render: RenderConfig,
    _owns: PhantomData<Box<Node<K, V>>>,
}

impl<K, V> LinkedMinHeap<K, V> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_render_config(RenderConfig::default())
    }

    /// Creates an empty heap that renders diagnostics with `config`
    pub fn with_render_config(config: RenderConfig) -> Self {
        Self {
            root: None,
            len: 0,
            render: config,
            _owns: PhantomData,
        }
    }

    /// Diagnostic rendering settings
    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Replaces the diagnostic rendering settings
    pub fn set_render_config(&mut self, config: RenderConfig) {
        self.render = config;
    }

    /// Number of key-value pairs in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no pairs
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: ⌈log₂(len + 1)⌉, so 0 when empty
    pub fn height(&self) -> usize {
        position::height_for(self.len)
    }

    /// Returns the pair with the minimum key, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(1)
    pub fn find_min(&self) -> Option<(&K, &V)> {
        self.root_ref().map(|root| (root.key(), root.value()))
    }

    /// Iterates over the pairs in preorder: node, left subtree, right subtree
    ///
    /// Parents always come before their children, so re-inserting the pairs in
    /// this order never trickles anything up past an earlier pair.
    pub fn preorder(&self) -> Preorder<'_, K, V> {
        Preorder {
            stack: self.root_ref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Removes every pair, releasing each node exactly once
    ///
    /// Nodes are detached from the end of the level order, so no recursion
    /// proportional to the tree depth is involved.
    pub fn clear(&mut self) {
        while self.detach_last().is_some() {}
    }

    pub(crate) fn root_ref(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(NodeRef::new)
    }

    /// Follows `path` from the root; every step must land on an existing node.
    fn walk(&self, path: PathBits) -> Link<K, V> {
        let mut current = self.root?;
        for direction in path {
            let node = current.as_ptr();
            current = unsafe {
                match direction {
                    Direction::Left => (*node).left?,
                    Direction::Right => (*node).right?,
                }
            };
        }
        Some(current)
    }

    /// Unlinks the physically last node in level order and hands it back.
    fn detach_last(&mut self) -> Option<Box<Node<K, V>>> {
        let root = self.root?;
        let last = match position::path_to(self.len).split_last() {
            None => {
                self.root = None;
                root
            }
            Some((to_parent, slot)) => {
                let parent = self.walk(to_parent)?.as_ptr();
                unsafe {
                    match slot {
                        Direction::Left => (*parent).left.take()?,
                        Direction::Right => (*parent).right.take()?,
                    }
                }
            }
        };

        trace!(position = self.len, "detached last node");
        self.len -= 1;

        let mut node = unsafe { Box::from_raw(last.as_ptr()) };
        debug_assert!(node.left.is_none() && node.right.is_none());
        node.parent = None;
        Some(node)
    }

    /// Exchanges the payloads of two distinct nodes.
    unsafe fn swap_payload(a: NonNull<Node<K, V>>, b: NonNull<Node<K, V>>) {
        let (a, b) = (a.as_ptr(), b.as_ptr());
        mem::swap(&mut (*a).key, &mut (*b).key);
        mem::swap(&mut (*a).value, &mut (*b).value);
    }
}

impl<K: Ord, V> LinkedMinHeap<K, V> {
    /// Inserts a key-value pair
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) {
        let node = Node::allocate(key, value);
        self.len += 1;

        let Some((to_parent, slot)) = position::path_to(self.len).split_last() else {
            self.root = Some(node);
            return;
        };

        // The parent of position len is always position len / 2, which exists.
        let parent = self
            .walk(to_parent)
            .expect("parent of the next level-order slot exists in a complete tree");

        unsafe {
            let p = parent.as_ptr();
            let child_slot = match slot {
                Direction::Left => &mut (*p).left,
                Direction::Right => &mut (*p).right,
            };
            debug_assert!(child_slot.is_none());
            *child_slot = Some(node);
            (*node.as_ptr()).parent = Some(parent);

            let steps = Self::trickle_up(node);
            trace!(position = self.len, steps, "inserted");
        }
    }

    /// Removes and returns the pair with the minimum key
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] on an empty heap, which is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove_min(&mut self) -> Result<(K, V), HeapError> {
        let Some(root) = self.root else {
            debug!("remove_min called on an empty heap");
            return Err(HeapError::Empty);
        };

        let last = self.detach_last().ok_or(HeapError::Empty)?;
        let Node { key, value, .. } = *last;

        if self.root.is_none() {
            // The root was the only node.
            return Ok((key, value));
        }

        unsafe {
            let r = root.as_ptr();
            let min_key = mem::replace(&mut (*r).key, key);
            let min_value = mem::replace(&mut (*r).value, value);

            let steps = Self::trickle_down(root);
            trace!(len = self.len, steps, "removed minimum");

            Ok((min_key, min_value))
        }
    }

    /// Consumes the heap, returning every pair in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut pairs = Vec::with_capacity(self.len);
        while let Ok(pair) = self.remove_min() {
            pairs.push(pair);
        }
        pairs
    }

    /// Verifies heap order, completeness, the node count and parent links
    ///
    /// # Errors
    ///
    /// - [`HeapError::OrderViolation`] if a child key is smaller than its parent's
    /// - [`HeapError::ShapeViolation`] if the nodes do not form the complete tree
    ///   for [`len`](Self::len)
    /// - [`HeapError::BrokenParentLink`] if a back-reference is wrong
    pub fn check_invariants(&self) -> Result<(), HeapError> {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            if unsafe { (*root.as_ptr()).parent.is_some() } {
                return Err(HeapError::BrokenParentLink);
            }
            stack.push((root, 1usize));
        }

        let mut seen = 0usize;
        while let Some((node, pos)) = stack.pop() {
            seen += 1;
            if pos > self.len {
                return Err(HeapError::ShapeViolation {
                    expected: self.len,
                    found: pos,
                });
            }

            let n = node.as_ptr();
            let children = unsafe { [((*n).left, 2 * pos), ((*n).right, 2 * pos + 1)] };
            for (child, child_pos) in children {
                let Some(child) = child else { continue };
                unsafe {
                    if (*child.as_ptr()).parent != Some(node) {
                        return Err(HeapError::BrokenParentLink);
                    }
                    if (*child.as_ptr()).key < (*n).key {
                        return Err(HeapError::OrderViolation);
                    }
                }
                stack.push((child, child_pos));
            }
        }

        // Distinct positions, all within 1..=len, and exactly len of them.
        if seen != self.len {
            return Err(HeapError::ShapeViolation {
                expected: self.len,
                found: seen,
            });
        }
        Ok(())
    }

    /// Moves the payload at `node` up while its parent's key is strictly greater.
    unsafe fn trickle_up(mut node: NonNull<Node<K, V>>) -> usize {
        let mut steps = 0;
        while let Some(parent) = (*node.as_ptr()).parent {
            if (*parent.as_ptr()).key <= (*node.as_ptr()).key {
                break;
            }
            Self::swap_payload(node, parent);
            node = parent;
            steps += 1;
        }
        steps
    }

    /// Moves the payload at `node` down while a child holds a strictly smaller key.
    ///
    /// A lone left child is compared like any other, at every depth.
    unsafe fn trickle_down(mut node: NonNull<Node<K, V>>) -> usize {
        let mut steps = 0;
        loop {
            let n = node.as_ptr();
            let smaller = match ((*n).left, (*n).right) {
                (Some(left), Some(right)) => {
                    if (*left.as_ptr()).key < (*right.as_ptr()).key {
                        left
                    } else {
                        right
                    }
                }
                (Some(left), None) => left,
                (None, _) => break,
            };

            if (*n).key <= (*smaller.as_ptr()).key {
                break;
            }
            Self::swap_payload(node, smaller);
            node = smaller;
            steps += 1;
        }
        steps
    }
}

impl<K: Ord + Clone, V: Clone> LinkedMinHeap<K, V> {
    /// Returns every key in ascending order, leaving the heap unchanged
    ///
    /// Works on a full copy of the heap, which is drained minimum by minimum.
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn sort(&self) -> Vec<K> {
        let mut copy = self.clone();
        let mut keys = Vec::with_capacity(self.len);
        while let Ok((key, _)) = copy.remove_min() {
            keys.push(key);
        }
        keys
    }
}

impl<K, V> Drop for LinkedMinHeap<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for LinkedMinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy built by re-inserting the source's pairs in preorder
///
/// The copy holds the same pairs and is a valid heap with the complete shape
/// for its length; its physical layout follows from the re-insertion order.
impl<K: Ord + Clone, V: Clone> Clone for LinkedMinHeap<K, V> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_render_config(self.render.clone());
        copy.extend(self.preorder().map(|(k, v)| (k.clone(), v.clone())));
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.render.clone_from(&source.render);
        self.extend(source.preorder().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl<K: Ord, V> Extend<(K, V)> for LinkedMinHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LinkedMinHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LinkedMinHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.preorder()).finish()
    }
}

impl<K: Ord, V> Heap<V, K> for LinkedMinHeap<K, V> {
    fn new() -> Self {
        LinkedMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        LinkedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, priority: K, item: V) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&K, &V)> {
        self.find_min()
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.remove_min().ok()
    }
}

/// Preorder iterator over a heap's pairs, created by [`LinkedMinHeap::preorder`]
pub struct Preorder<'a, K, V> {
    stack: Vec<NodeRef<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Preorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes under left so the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Preorder<'_, K, V> {}
