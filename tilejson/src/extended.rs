//! [`ExtendedTileJson`] pairs a validated [`TileJson`] with the document's extension keys.
//!
//! # Example
//! ```rust
//! use tilejson::{ExtendedTileJson, TileJsonFields};
//!
//! let text = r#"{"tilejson":"3.0.0","tiles":["https://a/{z}/{x}/{y}.pbf"],"name":"demo","generator":"tippecanoe"}"#;
//! let tilejson = ExtendedTileJson::try_from(text)?;
//!
//! assert_eq!(tilejson.name(), Some("demo"));
//! assert_eq!(tilejson.extension("generator").and_then(|v| v.as_str()), Some("tippecanoe"));
//! assert_eq!(ExtendedTileJson::try_from(tilejson.as_string().as_str())?, tilejson);
//! # Ok::<(), tilejson::DecodeError>(())
//! ```

use crate::{
	Bounds, Center, DecodeError, ExtensionFields, ExtensionValue, TileJson, TileJsonFields, TileScheme, VectorLayer,
	Version,
	json::{JsonObject, parse_json_object, type_name},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use std::fmt::Debug;

/// A TileJSON document with its extension keys.
///
/// Equality and hashing cover both the specification fields and the extensions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExtendedTileJson {
	tilejson: TileJson,
	extensions: ExtensionFields,
}

impl ExtendedTileJson {
	/// Combines a document with extension fields.
	///
	/// Extension keys that collide with a specification key are dropped, as decoding
	/// never captures them.
	pub fn new(tilejson: TileJson, extensions: ExtensionFields) -> ExtendedTileJson {
		let extensions = extensions
			.into_iter()
			.filter(|(key, _)| {
				let known = TileJson::is_known_key(key);
				if known {
					log::debug!("dropping extension key '{key}' that collides with a known field");
				}
				!known
			})
			.collect();
		ExtendedTileJson { tilejson, extensions }
	}

	/// Decodes the specification fields, then captures every other key.
	pub fn from_object(object: &JsonObject) -> Result<ExtendedTileJson, DecodeError> {
		let tilejson = TileJson::from_object(object)?;
		let extensions = ExtensionFields::capture(object, &TileJson::KNOWN_KEYS);
		if !extensions.is_empty() {
			log::debug!("captured {} extension field(s)", extensions.len());
		}
		Ok(ExtendedTileJson { tilejson, extensions })
	}

	pub fn from_json(value: &Value) -> Result<ExtendedTileJson, DecodeError> {
		match value {
			Value::Object(object) => ExtendedTileJson::from_object(object),
			other => Err(DecodeError::NotAnObject {
				found: type_name(other),
			}),
		}
	}

	pub fn tilejson(&self) -> &TileJson {
		&self.tilejson
	}

	pub fn extensions(&self) -> &ExtensionFields {
		&self.extensions
	}

	/// Inserts an extension value and returns the one it replaced.
	///
	/// Specification keys are refused and return `None`. Values are normalized
	/// the way [`ExtensionFields::insert`] does.
	pub fn insert_extension(
		&mut self,
		key: impl Into<String>,
		value: impl Into<ExtensionValue>,
	) -> Option<ExtensionValue> {
		let key = key.into();
		if TileJson::is_known_key(&key) {
			log::debug!("refusing extension key '{key}' that collides with a known field");
			return None;
		}
		self.extensions.insert(key, value)
	}

	pub fn remove_extension(&mut self, key: &str) -> Option<ExtensionValue> {
		self.extensions.remove(key)
	}

	pub fn extension(&self, key: &str) -> Option<&ExtensionValue> {
		self.extensions.get(key)
	}

	pub fn into_parts(self) -> (TileJson, ExtensionFields) {
		(self.tilejson, self.extensions)
	}

	/// Encodes into one flat JSON object.
	///
	/// Extensions are written first and the specification fields on top, so a
	/// colliding extension key never shadows a known field.
	pub fn as_object(&self) -> JsonObject {
		let mut object = self.extensions.as_json_object();
		for (key, value) in self.tilejson.as_object() {
			object.insert(key, value);
		}
		object
	}

	pub fn as_json_value(&self) -> Value {
		Value::Object(self.as_object())
	}

	/// Returns compact JSON text.
	pub fn as_string(&self) -> String {
		self.as_json_value().to_string()
	}

	/// Returns indented JSON text.
	pub fn as_pretty_string(&self) -> String {
		format!("{:#}", self.as_json_value())
	}

	/// Returns compact JSON text as UTF-8 bytes.
	pub fn as_bytes(&self) -> Vec<u8> {
		self.as_string().into_bytes()
	}
}

impl From<TileJson> for ExtendedTileJson {
	fn from(tilejson: TileJson) -> Self {
		ExtendedTileJson::new(tilejson, ExtensionFields::new())
	}
}

impl TryFrom<&[u8]> for ExtendedTileJson {
	type Error = DecodeError;

	fn try_from(bytes: &[u8]) -> Result<ExtendedTileJson, DecodeError> {
		ExtendedTileJson::from_object(&parse_json_object(bytes)?)
	}
}

impl TryFrom<&str> for ExtendedTileJson {
	type Error = DecodeError;

	fn try_from(text: &str) -> Result<ExtendedTileJson, DecodeError> {
		ExtendedTileJson::try_from(text.as_bytes())
	}
}

impl TryFrom<&Value> for ExtendedTileJson {
	type Error = DecodeError;

	fn try_from(value: &Value) -> Result<ExtendedTileJson, DecodeError> {
		ExtendedTileJson::from_json(value)
	}
}

impl From<ExtendedTileJson> for String {
	fn from(tilejson: ExtendedTileJson) -> Self {
		tilejson.as_string()
	}
}

impl From<&ExtendedTileJson> for Value {
	fn from(tilejson: &ExtendedTileJson) -> Self {
		tilejson.as_json_value()
	}
}

impl Serialize for ExtendedTileJson {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_json_value().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for ExtendedTileJson {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		ExtendedTileJson::from_json(&value).map_err(de::Error::custom)
	}
}

impl Debug for ExtendedTileJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ExtendedTileJson({})", self.as_string())
	}
}

impl TileJsonFields for ExtendedTileJson {
	fn spec_version(&self) -> &Version {
		self.tilejson.spec_version()
	}

	fn tiles(&self) -> &[String] {
		self.tilejson.tiles()
	}

	fn vector_layers(&self) -> Option<&[VectorLayer]> {
		self.tilejson.vector_layers()
	}

	fn attribution(&self) -> Option<&str> {
		self.tilejson.attribution()
	}

	fn bounds(&self) -> Option<Bounds> {
		self.tilejson.bounds()
	}

	fn center(&self) -> Option<Center> {
		self.tilejson.center()
	}

	fn data_files(&self) -> Option<&[String]> {
		self.tilejson.data_files()
	}

	fn description(&self) -> Option<&str> {
		self.tilejson.description()
	}

	fn fill_zoom(&self) -> Option<i64> {
		self.tilejson.fill_zoom()
	}

	fn grids(&self) -> Option<&[String]> {
		self.tilejson.grids()
	}

	fn legend(&self) -> Option<&str> {
		self.tilejson.legend()
	}

	fn max_zoom(&self) -> Option<u8> {
		self.tilejson.max_zoom()
	}

	fn min_zoom(&self) -> Option<u8> {
		self.tilejson.min_zoom()
	}

	fn name(&self) -> Option<&str> {
		self.tilejson.name()
	}

	fn scheme(&self) -> Option<TileScheme> {
		self.tilejson.scheme()
	}

	fn template(&self) -> Option<&str> {
		self.tilejson.template()
	}

	fn version(&self) -> Option<&Version> {
		self.tilejson.version()
	}
}
