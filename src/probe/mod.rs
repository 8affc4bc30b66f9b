//! Binary searches over inclusive position ranges.
//!
//! A [`Probe`] pairs a normalized range with a key function and runs every
//! search against them. Probes are built in one of two ways:
//!
//! ## Over a sequence
//!
//! [`Probe::over`] searches a whole slice by its elements. [`Builder::over`]
//! and [`Builder::over_by`] add optional bounds and a key extractor. Keys are
//! read through [`key::Indexed`], which reports [`crate::Error::OutOfBounds`]
//! for positions the slice does not have.
//!
//! ## Over positions
//!
//! [`Builder::positional`] and [`Builder::fallible`] search a function of the
//! position itself. Both bounds are then required.
//!
//! ## Traits
//!
//! - [`KeyFn`]: position to key, implemented by the adapters in [`key`]
//! - [`Distance`]: absolute difference used by the closest-value lookups

pub(crate) mod builder;
pub mod key;
pub(crate) mod search;

pub use builder::Builder;
pub use key::{Distance, Fallible, Identity, Indexed, KeyFn, Positional};
pub use search::Probe;
