//! I/O layer: decoding source spritesheets (`reader`) and `writers` for the
//! PNG strip and its optional JSON sidecar.
pub mod reader;
pub use reader::load_image;

pub mod writers;
