pub mod bounds;
pub mod keying;
pub mod resize;
pub mod slicing;
pub mod strip;
