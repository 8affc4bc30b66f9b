//! # more-bisect
//!
//! Binary search over an inclusive range of positions `[lo, hi]` and a key
//! function, rather than over a concrete container. Every search is a pure
//! computation of an index; nothing is stored or mutated.
//!
//! ## Quick Start
//!
//! ```rust
//! use more_bisect::{Builder, Probe};
//!
//! // Search a slice by its elements
//! let a = [1, 3, 3, 3, 3, 4, 5, 6, 7, 8, 9, 10];
//! let probe = Probe::over(&a);
//! assert_eq!(probe.first_pos_eq(&3).unwrap(), Some(1));
//! assert_eq!(probe.last_pos_lt(&3).unwrap(), Some(0));
//! assert_eq!(probe.bisect_left(&3).unwrap(), 1);
//!
//! // Search a function of positions, no sequence needed
//! let cubes = Builder::new().lo(0).hi(1000).positional(|i| i * i * i).unwrap();
//! assert_eq!(cubes.last_pos_le(&30).unwrap(), Some(3));
//! ```
//!
//! ## Searches
//!
//! | Method | Finds |
//! |---|---|
//! | [`Probe::any_pos_eq`] | any position with `key == x` |
//! | [`Probe::first_pos_eq`] | smallest position with `key == x` |
//! | [`Probe::last_pos_eq`] | largest position with `key == x` |
//! | [`Probe::last_pos_lt`] | largest position with `key < x` |
//! | [`Probe::last_pos_le`] | largest position with `key <= x` |
//! | [`Probe::first_pos_gt`] | smallest position with `key > x` |
//! | [`Probe::bisect_left`] | insertion point before equal keys |
//! | [`Probe::bisect_right`] | insertion point after equal keys |
//! | [`Probe::last_closest_to`] | closest key, ties to the later position |
//! | [`Probe::first_closest_to`] | closest key, ties to the earlier position |
//!
//! Keys must be non-decreasing over the range. Bounds are inclusive and a
//! range with `lo > hi` is empty: point lookups return `None` and insertion
//! points return `lo`.
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]
//! - `serde`: Enables serialization/deserialization of [`Span`] with serde
//! - `tracing`: Emits `tracing` events while normalizing arguments

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod error;
pub mod probe;
pub mod util;

pub use error::Error;
pub use probe::{Builder, Distance, KeyFn, Probe};
pub use util::Span;
