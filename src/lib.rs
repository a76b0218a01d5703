//! Fixed-capacity bitset: dense boolean membership over the integers
//! `[0, capacity)`, packed into 64-bit words.
//!
//! The capacity is fixed at construction. Mutation is in place; the
//! set-algebra operations (union, intersection, difference, symmetric
//! difference, complement) each allocate a fresh set and never touch
//! their operands. Elements outside `[0, capacity)` are deliberately a
//! silent no-op, not an error.
//!
//! ```
//! use bitset::BitSet;
//!
//! let mut a = BitSet::new(8)?;
//! a.insert_many([1, 3, 5]);
//! let mut b = BitSet::new(8)?;
//! b.insert_many([3, 5, 7]);
//!
//! let both = a.intersection(&b)?;
//! assert_eq!(both.iter().collect::<Vec<_>>(), vec![3, 5]);
//! assert!(both.is_subset(&a));
//! # Ok::<(), bitset::AllocError>(())
//! ```

mod bit_set;
mod error;

pub use bit_set::{BitSet, Iter};
pub use error::AllocError;
