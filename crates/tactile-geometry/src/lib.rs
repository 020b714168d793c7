//! Pure math for Tactile
//!
//! This crate contains the geometry primitives shared by the gesture
//! runtime and foundation crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Offset, Point};
}
