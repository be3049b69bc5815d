//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use krect::prelude::*;
//! ```

pub use crate::error::{EncloseError, EncloseResult};
pub use crate::geom::{Enclosure, Point, Rect};
pub use crate::point_set::PointSet;
