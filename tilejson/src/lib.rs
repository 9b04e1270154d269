//! A validating codec for [TileJSON 3.0.0](https://github.com/mapbox/tilejson-spec/tree/master/3.0.0)
//! metadata documents.
//!
//! Decoding rejects a document only when its required fields (`tilejson`, `tiles`) are
//! missing, malformed or incompatible. Every optional field with the wrong shape or an
//! inconsistent value is dropped, so one bad field never rejects a whole tileset.
//! Keys outside the specification are kept as [`ExtensionFields`] and written back on
//! encoding.
//!
//! ```rust
//! use tilejson::{EffectiveTileJsonFields, TileJsonFields};
//!
//! let tilejson = tilejson::decode(br#"{
//!   "tilejson": "3.0.0",
//!   "tiles": ["https://tiles.example.org/{z}/{x}/{y}.pbf"],
//!   "maxzoom": 14,
//!   "bounds": [-200, 0, 0, 0],
//!   "generator": "planetiler"
//! }"#)?;
//!
//! assert_eq!(tilejson.max_zoom(), Some(14));
//! assert_eq!(tilejson.bounds(), None);
//! assert_eq!(tilejson.effective_min_zoom(), 0);
//! assert!(tilejson.extension("generator").is_some());
//!
//! let bytes = tilejson::encode(&tilejson);
//! assert_eq!(tilejson::decode(&bytes)?, tilejson);
//! # Ok::<(), tilejson::DecodeError>(())
//! ```

mod bounds;
pub use bounds::*;

mod center;
pub use center::*;

mod defaults;
pub use defaults::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod extended;
pub use extended::*;

mod extension;
pub use extension::*;

mod fields;
pub use fields::*;

pub mod json;

mod scheme;
pub use scheme::*;

pub mod validate;

mod vector_layer;
pub use vector_layer::*;

mod version;
pub use version::*;

use std::hash::Hasher;

/// Decodes a TileJSON document, keeping its extension keys.
pub fn decode(bytes: &[u8]) -> Result<ExtendedTileJson, DecodeError> {
	ExtendedTileJson::try_from(bytes)
}

/// Encodes a document as compact JSON.
pub fn encode(tilejson: &ExtendedTileJson) -> Vec<u8> {
	tilejson.as_bytes()
}

/// Encodes a document as indented JSON.
pub fn encode_pretty(tilejson: &ExtendedTileJson) -> Vec<u8> {
	tilejson.as_pretty_string().into_bytes()
}

/// Hashes a float by its bit pattern, with `-0.0` and `0.0` hashing alike.
pub(crate) fn hash_f64<H: Hasher>(x: f64, state: &mut H) {
	let x = if x == 0.0 { 0.0 } else { x };
	state.write_u64(x.to_bits());
}
