#![doc = include_str!("../README.md")]
//!
//! # Components
//!
//! ```rust
//! use range_search::{search, DenseRange};
//!
//! // A dense range is a value type, iterable by value or by reference
//! let range = DenseRange::new(1i32, 5);
//! assert_eq!(range.start(), 1);
//! assert_eq!(range.end(), 5);
//! assert_eq!(range.len(), 4);
//!
//! let values: Vec<i32> = range.iter().collect();
//! assert_eq!(values, vec![1, 2, 3, 4]);
//!
//! // Searches work over any sorted slice
//! assert_eq!(search::binary(&3, &values), Some(2));
//! assert_eq!(search::binary(&7, &values), None);
//! ```
//!
//! # Sortedness Contract
//!
//! Both binary searches require their input slice to be sorted ascending.
//! This is a caller contract, not enforced at runtime; an unsorted slice
//! produces an arbitrary (but non-panicking) result. [`search::linear`] has
//! no ordering precondition.

mod alpha_range;
mod dense_range;
mod error;
mod gapped_range;
pub mod search;

pub use alpha_range::{AlphaIter, AlphaRange};
pub use dense_range::{DenseIter, DenseRange};
pub use error::RangeError;
pub use gapped_range::{GappedRange, DEFAULT_FLOOR, DEFAULT_GAP_BOUND};

#[cfg(test)]
#[path = "tests/dense_range_tests.rs"]
mod dense_range_tests;

#[cfg(test)]
#[path = "tests/gapped_range_tests.rs"]
mod gapped_range_tests;

#[cfg(test)]
#[path = "tests/alpha_range_tests.rs"]
mod alpha_range_tests;

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod search_tests;
