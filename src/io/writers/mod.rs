pub mod manifest;
pub mod png;

pub use manifest::{StripManifest, write_strip_manifest};
pub use png::write_png;
