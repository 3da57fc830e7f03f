//! Cake selection for azimuthal averaging.
//!
//! A full circle is split into `num_cakes` equal angular slices ("cakes"),
//! numbered from 1 starting at a configurable angle. This crate answers one
//! question: which cakes should be averaged to approximate a given direction
//! (`top`, `right`, `bottom`, `left`) or axis (`vertical`, `horizontal`)?
//!
//! - [`AveragingType`]: the fixed table of directions and their reference angles
//! - [`resolve`]: look up a direction by name and compute its cakes
//! - [`cakes_to_average`]: compute the cakes for an already parsed direction
//!
//! Each reference angle contributes three cakes: the one containing the angle,
//! followed by its next and previous neighbour. Neighbours are not wrapped, so
//! callers indexing into an actual array of cakes must filter or wrap them.
//!
//! # Examples
//!
//! ```
//! use cakes_core::{AveragingType, cakes_to_average};
//!
//! let cakes = cakes_core::resolve("horizontal", 360, 0)?;
//! assert_eq!(cakes, [91, 92, 90, 271, 272, 270]);
//!
//! // Shifting the start by a full turn changes nothing.
//! assert_eq!(cakes_to_average(AveragingType::Horizontal, 360, 360), cakes);
//! # Ok::<(), cakes_core::UnknownAveragingType>(())
//! ```

pub mod averaging_type;
pub mod resolve;

pub use self::{
    averaging_type::{AveragingType, UnknownAveragingType},
    resolve::{CAKES_PER_ANGLE, cake_position, cakes_to_average, resolve},
};
