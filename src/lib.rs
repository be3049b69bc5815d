//! # krect - Smallest K-Enclosing Rectangle
//!
//! A Rust library computing the minimum-area axis-aligned rectangle that
//! contains at least k of n points in the plane, a classic
//! computational-geometry primitive for outlier-robust bounding and density
//! estimation.
//!
//! ## Features
//!
//! - **Exact sweep**: true minimum area over every axis-aligned k-covering
//!   rectangle, via a strip sweep over x-sorted point pairs
//! - **Approximate heuristic**: near-linear decoupled-axes search for large
//!   sets, trading the joint-coverage guarantee for speed
//! - **Coverage audit**: inclusive point-in-rectangle counting to check what
//!   a result actually covers
//! - **Deterministic ties**: first-found-wins enumeration order, so equal
//!   inputs always produce equal outputs
//!
//! ## Quick Start
//!
//! ```rust
//! use krect::prelude::*;
//!
//! // Collect the input points
//! let mut set = PointSet::new();
//! set.add(0.0, 0.0);
//! set.add(1.0, 0.0);
//! set.add(0.0, 1.0);
//! set.add(1.0, 1.0);
//! set.add(5.0, 5.0);
//!
//! // The cheapest rectangle covering 4 of the 5 points is the unit square;
//! // taking the far point instead would cost a 25x larger box.
//! let found = set.enclose_exact(4).unwrap();
//! assert_eq!(found.rect, Rect::new(0.0, 0.0, 1.0, 1.0));
//! assert_eq!(found.area, 1.0);
//!
//! // The fast heuristic lands on the same box here; audit its coverage,
//! // which in general may fall short of the target.
//! let guess = set.enclose_approx(4).unwrap();
//! assert_eq!(set.count_in_rect(&guess.rect), 4);
//! ```
//!
//! ## How It Works
//!
//! The exact solver sorts the points by x and enumerates every ordered pair
//! as the candidate left and right edges of the answer. Inside each such
//! vertical strip it maintains the member y-coordinates in a sorted vector as
//! the right edge advances, and slides a k-wide window over that vector to
//! find the cheapest vertical extent. The optimal rectangle can always be
//! shrunk until its edges touch input points, so this finite candidate space
//! contains the true optimum.
//!
//! The approximate solver gives up the joint guarantee: it takes the
//! minimal-range window of k1 = floor(n * sqrt(k / n)) values independently
//! on the sorted x and sorted y projections and returns the product
//! rectangle. Each axis interval is individually optimal for k1 values, but
//! the rectangle may cover more or fewer than k points, which is what
//! [`PointSet::count_in_rect`] is for.

pub mod error;
pub mod geom;
pub mod point_set;
pub mod prelude;

mod approx;
mod exact;
mod verify;

mod integration_test;

pub use error::{EncloseError, EncloseResult};
pub use geom::{Enclosure, Point, Rect};
pub use point_set::PointSet;
