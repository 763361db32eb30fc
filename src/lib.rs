#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! `GrowVec`: a growable vector that manages its own raw backing buffer.
//!
//! `GrowVec` does not build on `Vec`. It allocates a block of slots directly,
//! tracks how many of them hold live elements, and moves the live prefix into
//! a new block whenever the buffer grows or shrinks.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Resize Policy
//!
//! - A new vector starts with exactly one slot; capacity is never zero.
//! - `append()` on a full buffer doubles the capacity first.
//! - After `remove_last()`, if at most a quarter of the slots are in use,
//!   the capacity is halved.
//!
//! Growth and shrink thresholds differ, so alternating appends and removes
//! around a boundary do not reallocate on every call.
//!
//! ## Time Complexity
//! - `append()`, `remove_last()`: amortized O(1), O(n) on a resize
//! - `get()`, `len()`: O(1)
//! - Iterator operations: O(n)
//!
//! # Indexing
//!
//! Indices are signed. Negative indices count back from the end, so `-1` is
//! the last element and `-len` the first:
//!
//! ```
//! # use growvec::{GrowVec, GrowVecError};
//! let mut vec = GrowVec::new();
//! vec.append(10);
//! vec.append(20);
//! vec.append(30);
//!
//! assert_eq!(vec.get(0), Ok(&10));
//! assert_eq!(vec.get(-1), Ok(&30));
//! assert_eq!(vec.get(-3), Ok(&10));
//! assert_eq!(vec.get(3), Err(GrowVecError::IndexOutOfRange { index: 3 }));
//! assert_eq!(vec.get(-4), Err(GrowVecError::IndexOutOfRange { index: -4 }));
//! assert_eq!(vec.to_text(), "[10, 20, 30]");
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use growvec::{GrowVec, GrowVecError};
//! let mut vec = GrowVec::new();
//! vec.push("first");
//! vec.push("second");
//!
//! assert_eq!(vec.last(), Some(&"second"));
//! assert_eq!(vec.remove_last(), Ok("second"));
//! assert_eq!(vec.pop(), Some("first"));
//!
//! assert_eq!(vec.remove_last(), Err(GrowVecError::EmptyContainer));
//! assert_eq!(vec.pop(), None);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use growvec::GrowVec;
//! let vec: GrowVec<u32> = (1..=4).collect();
//!
//! let forward: Vec<_> = vec.iter().copied().collect();
//! let backward: Vec<_> = vec.iter_rev().copied().collect();
//! assert_eq!(forward, [1, 2, 3, 4]);
//! assert_eq!(backward, [4, 3, 2, 1]);
//! ```

extern crate alloc;

mod core;
mod error;
mod index;
mod iter;
mod raw;

pub use crate::core::GrowVec;
pub use crate::error::GrowVecError;
pub use crate::iter::{GrowVecIter, GrowVecRevIter};
