//! Core processing building blocks: background keying, grid slicing,
//! bounding-box alignment, resizing and strip assembly. These are the
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
