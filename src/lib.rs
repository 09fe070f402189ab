//! # Block Deque
//!
//! A double-ended queue that stores its elements in a chain of fixed-capacity
//! blocks instead of one node per element.
//!
//! Compared to a plain doubly-linked list, `BlockDeque` pays one pair of
//! neighbour links per block of `C` elements, cutting the per-element pointer
//! overhead by a factor of `C` for large collections while keeping cheap
//! insertion and removal at both ends.
//!
//! ## Key Features
//!
//! * **Amortized O(1) ends:** pushing or popping at either end touches one
//!   slot; a block is allocated or reclaimed only once every `C` operations
//!   on a given side.
//! * **Low link overhead:** elements sit contiguously inside their block;
//!   only blocks carry `prev`/`next` references.
//! * **Mid-traversal removal:** [`BlockDeque::cursor_front_mut`] and
//!   [`BlockDeque::cursor_back_mut`] walk the deque in either direction and
//!   can remove the element they just yielded, keeping the remaining order
//!   intact.
//! * **Value-based removal:** [`BlockDeque::remove_first_occurrence`] and
//!   [`BlockDeque::remove_last_occurrence`] delete the outermost match and
//!   compact toward the opposite boundary.
//! * **Statically safe iteration:** iterators borrow the deque, so the
//!   borrow checker rejects structural modification mid-traversal instead of
//!   leaving it undefined at runtime.
//!
//! ## Block capacity (`C`)
//!
//! The per-block slot count is chosen at construction (default 8) and fixed
//! for the lifetime of the deque:
//!
//! * Larger blocks amortize link overhead further but waste more unused
//!   slots at the ends.
//! * `C` must be at least 1. A capacity of 1 degenerates into an ordinary
//!   doubly-linked list of single-element nodes, which works but defeats the
//!   point.
//!
//! The structure is single-threaded: it contains no synchronization, and
//! sharing across threads must be arranged externally.
//!
//! ## Examples
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut deque: BlockDeque<i32> = BlockDeque::new();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.front(), Some(&1));
//! assert_eq!(deque.back(), Some(&3));
//! assert_eq!(deque.pop_back(), Some(3));
//! ```
//!
//! Removing an element while iterating:
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut deque: BlockDeque<i32> = (1..=9).collect();
//!
//! let mut cursor = deque.cursor_front_mut();
//! while let Some(&value) = cursor.next() {
//!     if value == 5 {
//!         cursor.remove().unwrap();
//!     }
//! }
//!
//! let remaining: Vec<i32> = deque.iter().copied().collect();
//! assert_eq!(remaining, vec![1, 2, 3, 4, 6, 7, 8, 9]);
//! ```

// --- Module Declarations ---

mod chain;
pub mod deque;

// --- Re-exports ---

pub use deque::{BlockDeque, CursorMut, CursorStateError, IntoIter, Iter};
