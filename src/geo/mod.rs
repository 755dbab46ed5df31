//! Geometry capabilities for area-based zone filtering.
//!
//! The filter only needs three operations: reproject into an equal-area
//! frame, union (dissolve) geometries sharing a key, and measure planar
//! area. They live behind the `GeometryOps` trait so the group-then-filter
//! logic is testable with fake geometries.

mod ops;
mod projection;

pub use ops::{AlbersOps, GeometryOps};
pub use projection::AlbersEqualArea;
