//! This module defines [`TileJson`], the validated TileJSON 3.0.0 record.
//!
//! Decoding follows a fixed order:
//! 1. read the required `tilejson` and `tiles` keys; a missing or mistyped key rejects the document,
//! 2. reject a `tilejson` version whose major component is not 3, then an empty `tiles` list,
//! 3. read every optional key on its own; a key with the wrong shape becomes absent,
//! 4. reconcile the zoom pair, limit vector layer zooms to it, and drop a `center` that lies
//!    outside the zoom range or the bounds.
//!
//! # Example
//! ```rust
//! use tilejson::{TileJson, TileJsonFields};
//!
//! let tilejson = TileJson::try_from(r#"{
//!   "tilejson": "3.0.0",
//!   "tiles": ["https://tiles.example.org/{z}/{x}/{y}.pbf"],
//!   "minzoom": 29,
//!   "maxzoom": 1,
//!   "name": 42
//! }"#)?;
//!
//! // An inverted zoom pair drops both values, a mistyped name is ignored.
//! assert_eq!(tilejson.min_zoom(), None);
//! assert_eq!(tilejson.max_zoom(), None);
//! assert_eq!(tilejson.name(), None);
//! # Ok::<(), tilejson::DecodeError>(())
//! ```

use crate::{
	Bounds, Center, DecodeError, TileJsonFields, TileScheme, VectorLayer, Version,
	json::{JsonObject, as_integer, as_str, as_string_list, parse_json_object, set_optional},
	validate::{is_compatible_version, parse_compatible_spec_version, reconcile_zoom_pair},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use std::fmt::Debug;

/// A TileJSON 3.0.0 document without extension fields.
///
/// Instances are only created by decoding or by [`TileJsonBuilder::build`], so the
/// invariants below always hold:
/// - `tiles` is not empty and `spec_version` has major version 3,
/// - `min_zoom` and `max_zoom` lie in `0..=30` and `min_zoom <= max_zoom`,
/// - vector layer zooms lie within the document's zoom range,
/// - `center` lies within the zoom range and the bounds.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TileJson {
	spec_version: Version,
	tiles: Vec<String>,
	vector_layers: Option<Vec<VectorLayer>>,
	attribution: Option<String>,
	bounds: Option<Bounds>,
	center: Option<Center>,
	data_files: Option<Vec<String>>,
	description: Option<String>,
	fill_zoom: Option<i64>,
	grids: Option<Vec<String>>,
	legend: Option<String>,
	max_zoom: Option<u8>,
	min_zoom: Option<u8>,
	name: Option<String>,
	scheme: Option<TileScheme>,
	template: Option<String>,
	version: Option<Version>,
}

impl TileJson {
	/// The wire keys defined by the specification. All other keys are extensions.
	pub const KNOWN_KEYS: [&'static str; 17] = [
		"tilejson",
		"tiles",
		"vector_layers",
		"attribution",
		"bounds",
		"center",
		"data",
		"description",
		"fillzoom",
		"grids",
		"legend",
		"maxzoom",
		"minzoom",
		"name",
		"scheme",
		"template",
		"version",
	];

	/// Creates a minimal TileJSON 3.0.0 document.
	pub fn new<I, S>(tiles: I) -> Result<TileJson, DecodeError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		TileJson::builder(tiles).build()
	}

	pub fn builder<I, S>(tiles: I) -> TileJsonBuilder
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		TileJsonBuilder::new(tiles.into_iter().map(Into::into).collect())
	}

	pub fn is_known_key(key: &str) -> bool {
		TileJson::KNOWN_KEYS.contains(&key)
	}

	// -------------------------------------------------------------------------
	// Decoding
	// -------------------------------------------------------------------------

	/// Decodes and validates a document from a JSON object.
	///
	/// # Errors
	/// Only the required fields can fail decoding: see [`DecodeError`].
	pub fn from_object(object: &JsonObject) -> Result<TileJson, DecodeError> {
		let spec_version = required(object, "tilejson", as_str)?;
		let tiles = required(object, "tiles", as_string_list)?;

		let Some(spec_version) = parse_compatible_spec_version(spec_version) else {
			return Err(DecodeError::IncompatibleVersion {
				version: spec_version.to_owned(),
			});
		};
		if tiles.is_empty() {
			return Err(DecodeError::EmptyTiles);
		}

		let string = |key: &str| optional(object, key, |v| as_str(v).map(ToOwned::to_owned));

		let builder = TileJsonBuilder {
			spec_version,
			tiles,
			vector_layers: optional(object, "vector_layers", VectorLayer::list_from_json),
			attribution: string("attribution"),
			bounds: optional(object, "bounds", Bounds::from_json),
			center: optional(object, "center", Center::from_json),
			data_files: optional(object, "data", as_string_list),
			description: string("description"),
			fill_zoom: optional(object, "fillzoom", as_integer),
			grids: optional(object, "grids", as_string_list),
			legend: string("legend"),
			max_zoom: optional(object, "maxzoom", as_integer),
			min_zoom: optional(object, "minzoom", as_integer),
			name: string("name"),
			scheme: optional(object, "scheme", |v| TileScheme::try_from(as_str(v)?)),
			template: string("template"),
			version: optional(object, "version", |v| Version::parse(as_str(v)?)),
		};

		Ok(builder.finalize())
	}

	/// Decodes and validates a document from a JSON value.
	pub fn from_json(value: &Value) -> Result<TileJson, DecodeError> {
		match value {
			Value::Object(object) => TileJson::from_object(object),
			other => Err(DecodeError::NotAnObject {
				found: crate::json::type_name(other),
			}),
		}
	}

	// -------------------------------------------------------------------------
	// Encoding
	// -------------------------------------------------------------------------

	/// Converts this document into a [`JsonObject`] using the wire names.
	///
	/// Required fields are always written, optional fields only when present.
	pub fn as_object(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.insert("tilejson".to_owned(), Value::from(self.spec_version.to_string()));
		object.insert("tiles".to_owned(), Value::from(self.tiles.clone()));

		set_optional(
			&mut object,
			"vector_layers",
			self
				.vector_layers
				.as_ref()
				.map(|layers| Value::Array(layers.iter().map(VectorLayer::as_json_value).collect())),
		);
		set_optional(&mut object, "attribution", self.attribution.as_deref().map(Value::from));
		set_optional(&mut object, "bounds", self.bounds.map(|b| b.as_json_value()));
		set_optional(&mut object, "center", self.center.map(|c| c.as_json_value()));
		set_optional(&mut object, "data", self.data_files.clone().map(Value::from));
		set_optional(&mut object, "description", self.description.as_deref().map(Value::from));
		set_optional(&mut object, "fillzoom", self.fill_zoom.map(Value::from));
		set_optional(&mut object, "grids", self.grids.clone().map(Value::from));
		set_optional(&mut object, "legend", self.legend.as_deref().map(Value::from));
		set_optional(&mut object, "maxzoom", self.max_zoom.map(Value::from));
		set_optional(&mut object, "minzoom", self.min_zoom.map(Value::from));
		set_optional(&mut object, "name", self.name.as_deref().map(Value::from));
		set_optional(&mut object, "scheme", self.scheme.map(|s| Value::from(s.as_str())));
		set_optional(&mut object, "template", self.template.as_deref().map(Value::from));
		set_optional(&mut object, "version", self.version.as_ref().map(|v| Value::from(v.to_string())));
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

	pub fn as_bytes(&self) -> Vec<u8> {
		self.as_string().into_bytes()
	}
}

/// Reads a required key. Absence and a wrong shape are both fatal.
fn required<'a, T>(
	object: &'a JsonObject,
	key: &'static str,
	read: impl FnOnce(&'a Value) -> anyhow::Result<T>,
) -> Result<T, DecodeError> {
	let value = object.get(key).ok_or(DecodeError::MissingField { key })?;
	read(value).map_err(|e| DecodeError::InvalidField {
		key,
		reason: format!("{e:#}"),
	})
}

/// Reads an optional key. A value with the wrong shape is logged and treated as absent.
fn optional<'a, T>(object: &'a JsonObject, key: &str, read: impl FnOnce(&'a Value) -> anyhow::Result<T>) -> Option<T> {
	let value = object.get(key)?;
	match read(value) {
		Ok(v) => Some(v),
		Err(e) => {
			log::debug!("ignoring invalid TileJSON field '{key}': {e:#}");
			None
		}
	}
}

impl TileJsonFields for TileJson {
	fn spec_version(&self) -> &Version {
		&self.spec_version
	}

	fn tiles(&self) -> &[String] {
		&self.tiles
	}

	fn vector_layers(&self) -> Option<&[VectorLayer]> {
		self.vector_layers.as_deref()
	}

	fn attribution(&self) -> Option<&str> {
		self.attribution.as_deref()
	}

	fn bounds(&self) -> Option<Bounds> {
		self.bounds
	}

	fn center(&self) -> Option<Center> {
		self.center
	}

	fn data_files(&self) -> Option<&[String]> {
		self.data_files.as_deref()
	}

	fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	fn fill_zoom(&self) -> Option<i64> {
		self.fill_zoom
	}

	fn grids(&self) -> Option<&[String]> {
		self.grids.as_deref()
	}

	fn legend(&self) -> Option<&str> {
		self.legend.as_deref()
	}

	fn max_zoom(&self) -> Option<u8> {
		self.max_zoom
	}

	fn min_zoom(&self) -> Option<u8> {
		self.min_zoom
	}

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn scheme(&self) -> Option<TileScheme> {
		self.scheme
	}

	fn template(&self) -> Option<&str> {
		self.template.as_deref()
	}

	fn version(&self) -> Option<&Version> {
		self.version.as_ref()
	}
}

// ----------------------------------------------------------------------------
// Builder
// ----------------------------------------------------------------------------

/// Builds a [`TileJson`] in code.
///
/// [`build`](TileJsonBuilder::build) applies the same checks as decoding: the
/// required fields are validated, and inconsistent zoom levels, layer zooms or
/// centers are dropped.
///
/// ```rust
/// use tilejson::{Bounds, Center, TileJson, TileJsonFields};
///
/// let tilejson = TileJson::builder(["https://tiles.example.org/{z}/{x}/{y}.png"])
///   .name("Example")
///   .bounds(Bounds::new(-100.0, -50.0, 100.0, 50.0).unwrap())
///   .center(Center::new(-120.0, 0.0, 7).unwrap())
///   .build()?;
///
/// assert_eq!(tilejson.name(), Some("Example"));
/// assert_eq!(tilejson.center(), None); // outside of the bounds
/// # Ok::<(), tilejson::DecodeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TileJsonBuilder {
	spec_version: Version,
	tiles: Vec<String>,
	vector_layers: Option<Vec<VectorLayer>>,
	attribution: Option<String>,
	bounds: Option<Bounds>,
	center: Option<Center>,
	data_files: Option<Vec<String>>,
	description: Option<String>,
	fill_zoom: Option<i64>,
	grids: Option<Vec<String>>,
	legend: Option<String>,
	max_zoom: Option<i64>,
	min_zoom: Option<i64>,
	name: Option<String>,
	scheme: Option<TileScheme>,
	template: Option<String>,
	version: Option<Version>,
}

impl TileJsonBuilder {
	fn new(tiles: Vec<String>) -> TileJsonBuilder {
		TileJsonBuilder {
			spec_version: Version::new(3, 0, 0),
			tiles,
			vector_layers: None,
			attribution: None,
			bounds: None,
			center: None,
			data_files: None,
			description: None,
			fill_zoom: None,
			grids: None,
			legend: None,
			max_zoom: None,
			min_zoom: None,
			name: None,
			scheme: None,
			template: None,
			version: None,
		}
	}

	pub fn spec_version(mut self, version: Version) -> Self {
		self.spec_version = version;
		self
	}

	pub fn vector_layers(mut self, layers: Vec<VectorLayer>) -> Self {
		self.vector_layers = Some(layers);
		self
	}

	pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
		self.attribution = Some(attribution.into());
		self
	}

	pub fn bounds(mut self, bounds: Bounds) -> Self {
		self.bounds = Some(bounds);
		self
	}

	pub fn center(mut self, center: Center) -> Self {
		self.center = Some(center);
		self
	}

	pub fn data_files(mut self, data_files: Vec<String>) -> Self {
		self.data_files = Some(data_files);
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn fill_zoom(mut self, fill_zoom: i64) -> Self {
		self.fill_zoom = Some(fill_zoom);
		self
	}

	pub fn grids(mut self, grids: Vec<String>) -> Self {
		self.grids = Some(grids);
		self
	}

	pub fn legend(mut self, legend: impl Into<String>) -> Self {
		self.legend = Some(legend.into());
		self
	}

	pub fn max_zoom(mut self, zoom: u8) -> Self {
		self.max_zoom = Some(i64::from(zoom));
		self
	}

	pub fn min_zoom(mut self, zoom: u8) -> Self {
		self.min_zoom = Some(i64::from(zoom));
		self
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn scheme(mut self, scheme: TileScheme) -> Self {
		self.scheme = Some(scheme);
		self
	}

	pub fn template(mut self, template: impl Into<String>) -> Self {
		self.template = Some(template.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	/// Validates the required fields and reconciles the optional ones.
	///
	/// # Errors
	/// [`DecodeError::IncompatibleVersion`] if the `tilejson` version's major is not 3,
	/// [`DecodeError::EmptyTiles`] if no tile endpoint was given.
	pub fn build(self) -> Result<TileJson, DecodeError> {
		if !is_compatible_version(&self.spec_version) {
			return Err(DecodeError::IncompatibleVersion {
				version: self.spec_version.to_string(),
			});
		}
		if self.tiles.is_empty() {
			return Err(DecodeError::EmptyTiles);
		}
		Ok(self.finalize())
	}

	/// Cross-validates zoom levels, vector layers and center. Never fails.
	fn finalize(self) -> TileJson {
		let (min_zoom, max_zoom) = reconcile_zoom_pair(self.min_zoom, self.max_zoom);
		if (self.min_zoom, self.max_zoom) != (min_zoom.map(i64::from), max_zoom.map(i64::from)) {
			log::debug!(
				"reconciled zoom levels ({:?}, {:?}) to ({min_zoom:?}, {max_zoom:?})",
				self.min_zoom,
				self.max_zoom
			);
		}

		let vector_layers = self.vector_layers.map(|layers| {
			layers
				.into_iter()
				.map(|layer| layer.reconciled().limited_to(min_zoom, max_zoom))
				.collect()
		});

		let bounds = self.bounds;
		let center = self.center.filter(|center| {
			let valid = center.is_within(min_zoom, max_zoom, bounds.as_ref());
			if !valid {
				log::debug!("dropping center {center:?}: outside of zoom range or bounds");
			}
			valid
		});

		TileJson {
			spec_version: self.spec_version,
			tiles: self.tiles,
			vector_layers,
			attribution: self.attribution,
			bounds,
			center,
			data_files: self.data_files,
			description: self.description,
			fill_zoom: self.fill_zoom,
			grids: self.grids,
			legend: self.legend,
			max_zoom,
			min_zoom,
			name: self.name,
			scheme: self.scheme,
			template: self.template,
			version: self.version,
		}
	}
}

// ----------------------------------------------------------------------------
// Implementations for conversions
// ----------------------------------------------------------------------------

impl TryFrom<&[u8]> for TileJson {
	type Error = DecodeError;

	fn try_from(bytes: &[u8]) -> Result<TileJson, DecodeError> {
		TileJson::from_object(&parse_json_object(bytes)?)
	}
}

impl TryFrom<&str> for TileJson {
	type Error = DecodeError;

	fn try_from(text: &str) -> Result<TileJson, DecodeError> {
		TileJson::try_from(text.as_bytes())
	}
}

impl TryFrom<&Value> for TileJson {
	type Error = DecodeError;

	fn try_from(value: &Value) -> Result<TileJson, DecodeError> {
		TileJson::from_json(value)
	}
}

impl From<&TileJson> for Value {
	fn from(tilejson: &TileJson) -> Self {
		tilejson.as_json_value()
	}
}

impl Serialize for TileJson {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_json_value().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for TileJson {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		TileJson::from_json(&value).map_err(de::Error::custom)
	}
}

impl Debug for TileJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TileJson({})", self.as_string())
	}
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
