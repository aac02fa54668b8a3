//! Image decoding for the rotation sweep.
//!
//! Decoding happens once per run, before any per-angle work. A failure
//! here is fatal for the whole sweep.
//!
//! # Examples
//!
//! ```ignore
//! use rotsweep_core::decode::decode_file;
//!
//! let image = decode_file("photo.jpg")?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_bytes, decode_file};
pub use types::{DecodeError, Orientation, RasterImage};
