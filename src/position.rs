//! Level-order position addressing for pointer-linked complete binary trees.
//!
//! # Numbering
//!
//! Nodes of a complete binary tree are numbered breadth-first, left to right,
//! starting from 1 at the root. Node `i` then has children `2i` and `2i + 1`,
//! which means the binary representation of a position doubles as a route:
//!
//! ```text
//! position 6 = 0b110
//!              ││└─ 0: left child of 3
//!              │└── 1: right child of 1
//!              └─── leading 1: the root
//! ```
//!
//! An array-backed heap turns this into index arithmetic. A linked heap has no
//! indices, so it walks the bits instead: most significant first, skipping the
//! leading one, `0` going left and `1` going right.
//!
//! # Height
//!
//! A complete tree with `n` nodes has height ⌈log₂(n + 1)⌉, which is exactly
//! the bit length of `n`. [`height_for`] computes it with integer operations
//! only.

use std::iter::FusedIterator;

/// Which child slot of a parent a position occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Even positions: `2i`
    Left,
    /// Odd positions: `2i + 1`
    Right,
}

impl Direction {
    #[inline]
    fn from_bit(bit: usize) -> Self {
        if bit == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// Height of the complete binary tree holding `count` nodes.
///
/// Returns 0 for an empty tree and 1 for a lone root.
///
/// # Example
///
/// ```rust
/// use linked_min_heap::position::height_for;
///
/// assert_eq!(height_for(0), 0);
/// assert_eq!(height_for(1), 1);
/// assert_eq!(height_for(7), 3);
/// assert_eq!(height_for(8), 4);
/// ```
#[inline]
pub fn height_for(count: usize) -> usize {
    (usize::BITS - count.leading_zeros()) as usize
}

/// Directions leading from the root to level-order `position`.
///
/// The iterator yields `height_for(position) - 1` steps. Every step but the
/// last descends through an existing node; the last one names the slot of
/// `position` under its parent. The root (`position == 1`) has an empty path.
///
/// # Panics
///
/// Panics if `position` is 0, which is not a level-order position.
///
/// # Example
///
/// ```rust
/// use linked_min_heap::position::{path_to, Direction};
///
/// let path: Vec<_> = path_to(6).collect();
/// assert_eq!(path, vec![Direction::Right, Direction::Left]);
/// ```
pub fn path_to(position: usize) -> PathBits {
    assert!(position > 0, "level-order positions start at 1");
    PathBits {
        position,
        remaining: (height_for(position) - 1) as u32,
    }
}

/// Iterator over the bits of a level-order position, most significant first,
/// with the leading one omitted.
#[derive(Debug, Clone)]
pub struct PathBits {
    position: usize,
    remaining: u32,
}

impl PathBits {
    /// Splits off the final step, leaving the walk to the parent.
    ///
    /// Returns `None` for the root, which has no parent slot.
    pub fn split_last(mut self) -> Option<(PathBits, Direction)> {
        if self.remaining == 0 {
            return None;
        }
        let last = Direction::from_bit(self.position & 1);
        self.position >>= 1;
        self.remaining -= 1;
        Some((self, last))
    }
}

impl Iterator for PathBits {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Direction::from_bit((self.position >> self.remaining) & 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PathBits {}

impl FusedIterator for PathBits {}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Left, Right};

    #[test]
    fn test_height_for_small_counts() {
        let expected = [0, 1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 5];
        for (count, &height) in expected.iter().enumerate() {
            assert_eq!(height_for(count), height, "count {}", count);
        }
    }

    #[test]
    fn test_height_for_matches_log_formula() {
        for count in 0..4096usize {
            let float = ((count + 1) as f64).log2().ceil() as usize;
            assert_eq!(height_for(count), float, "count {}", count);
        }
    }

    #[test]
    fn test_height_for_extremes() {
        assert_eq!(height_for(usize::MAX), usize::BITS as usize);
        assert_eq!(height_for(1 << 20), 21);
    }

    #[test]
    fn test_root_path_is_empty() {
        assert_eq!(path_to(1).count(), 0);
        assert!(path_to(1).split_last().is_none());
    }

    #[test]
    fn test_paths_for_first_levels() {
        assert_eq!(path_to(2).collect::<Vec<_>>(), vec![Left]);
        assert_eq!(path_to(3).collect::<Vec<_>>(), vec![Right]);
        assert_eq!(path_to(4).collect::<Vec<_>>(), vec![Left, Left]);
        assert_eq!(path_to(5).collect::<Vec<_>>(), vec![Left, Right]);
        assert_eq!(path_to(7).collect::<Vec<_>>(), vec![Right, Right]);
        assert_eq!(path_to(12).collect::<Vec<_>>(), vec![Right, Left, Left]);
    }

    #[test]
    fn test_split_last() {
        let (parent, slot) = path_to(11).split_last().unwrap();
        // 11 = 0b1011: parent is 5 = 0b101, reached by Left, Right
        assert_eq!(slot, Right);
        assert_eq!(parent.collect::<Vec<_>>(), vec![Left, Right]);

        let (parent, slot) = path_to(2).split_last().unwrap();
        assert_eq!(slot, Left);
        assert_eq!(parent.count(), 0);
    }

    #[test]
    fn test_path_reconstructs_position() {
        for position in 1..2048usize {
            let rebuilt = path_to(position).fold(1usize, |acc, dir| match dir {
                Left => acc * 2,
                Right => acc * 2 + 1,
            });
            assert_eq!(rebuilt, position);
        }
    }

    #[test]
    fn test_exact_size() {
        let path = path_to(1000);
        assert_eq!(path.len(), height_for(1000) - 1);
    }

    #[test]
    #[should_panic(expected = "level-order positions start at 1")]
    fn test_zero_position_panics() {
        path_to(0);
    }
}
