use crate::{
	json::{JsonObject, as_array, as_integer, as_object, as_str, set_optional},
	validate::reconcile_zoom_pair,
};
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::collections::BTreeMap;
use tilejson_derive::context;

/// Describes one layer of vector tile data.
///
/// Corresponds to one entry of the `vector_layers` array in the TileJSON specification:
/// <https://github.com/mapbox/tilejson-spec/tree/master/3.0.0#33-vector_layers>
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VectorLayer {
	/// The layer id.
	pub id: String,
	/// Attribute names mapped to their descriptions. May be empty.
	pub fields: BTreeMap<String, String>,
	pub description: Option<String>,
	/// Lowest zoom level whose tiles contain this layer. Wire name `minzoom`.
	pub min_zoom: Option<u8>,
	/// Highest zoom level whose tiles contain this layer. Wire name `maxzoom`.
	pub max_zoom: Option<u8>,
}

impl VectorLayer {
	pub fn new(id: impl Into<String>, fields: BTreeMap<String, String>) -> VectorLayer {
		VectorLayer {
			id: id.into(),
			fields,
			description: None,
			min_zoom: None,
			max_zoom: None,
		}
	}

	/// Decodes a layer from a JSON object.
	///
	/// `id` and `fields` are required. `description`, `minzoom` and `maxzoom` become
	/// absent when they have the wrong type, and the zoom pair is reconciled the same
	/// way as the document's own zoom levels.
	pub fn from_json(value: &Value) -> Result<VectorLayer> {
		let object = as_object(value)?;

		let id = object.get("id").ok_or_else(|| anyhow!("missing `id`"))?;
		let id = as_str(id).context("invalid `id`")?.to_owned();

		let fields = object.get("fields").ok_or_else(|| anyhow!("missing `fields`"))?;
		let fields = as_object(fields)
			.and_then(|fields| {
				fields
					.iter()
					.map(|(name, description)| -> Result<(String, String)> {
						Ok((name.clone(), as_str(description)?.to_owned()))
					})
					.collect::<Result<BTreeMap<_, _>>>()
			})
			.context("invalid `fields`")?;

		let description = object.get("description").and_then(|v| match as_str(v) {
			Ok(s) => Some(s.to_owned()),
			Err(e) => {
				log::debug!("ignoring invalid `description` of vector layer '{id}': {e}");
				None
			}
		});
		let zoom = |key: &str| {
			object.get(key).and_then(|v| match as_integer(v) {
				Ok(z) => Some(z),
				Err(e) => {
					log::debug!("ignoring invalid `{key}` of vector layer '{id}': {e}");
					None
				}
			})
		};
		let (min_zoom, max_zoom) = reconcile_zoom_pair(zoom("minzoom"), zoom("maxzoom"));

		Ok(VectorLayer {
			id,
			fields,
			description,
			min_zoom,
			max_zoom,
		})
	}

	/// Decodes a `vector_layers` array. Fails if any single layer fails.
	#[context("Failed to decode vector_layers")]
	pub fn list_from_json(value: &Value) -> Result<Vec<VectorLayer>> {
		as_array(value)?
			.iter()
			.enumerate()
			.map(|(index, entry)| VectorLayer::from_json(entry).with_context(|| format!("layer {index}")))
			.collect()
	}

	/// Applies the all-or-nothing zoom pair rule to this layer's own zoom levels.
	pub fn reconciled(mut self) -> VectorLayer {
		(self.min_zoom, self.max_zoom) =
			reconcile_zoom_pair(self.min_zoom.map(i64::from), self.max_zoom.map(i64::from));
		self
	}

	/// Drops a layer `min_zoom` below the document's `min_zoom` and a layer
	/// `max_zoom` above the document's `max_zoom`, each independently.
	pub fn limited_to(mut self, min_zoom: Option<u8>, max_zoom: Option<u8>) -> VectorLayer {
		if let (Some(doc_min), Some(layer_min)) = (min_zoom, self.min_zoom)
			&& layer_min < doc_min
		{
			log::debug!(
				"dropping minzoom {layer_min} of vector layer '{}': below document minzoom {doc_min}",
				self.id
			);
			self.min_zoom = None;
		}
		if let (Some(doc_max), Some(layer_max)) = (max_zoom, self.max_zoom)
			&& layer_max > doc_max
		{
			log::debug!(
				"dropping maxzoom {layer_max} of vector layer '{}': above document maxzoom {doc_max}",
				self.id
			);
			self.max_zoom = None;
		}
		self
	}

	/// Converts this layer into a JSON object with the wire names
	/// `id`, `fields`, `description`, `minzoom` and `maxzoom`.
	pub fn as_json_object(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.insert("id".to_owned(), Value::from(self.id.as_str()));
		object.insert(
			"fields".to_owned(),
			Value::Object(
				self
					.fields
					.iter()
					.map(|(name, description)| (name.clone(), Value::from(description.as_str())))
					.collect(),
			),
		);
		set_optional(&mut object, "description", self.description.as_deref().map(Value::from));
		set_optional(&mut object, "minzoom", self.min_zoom.map(Value::from));
		set_optional(&mut object, "maxzoom", self.max_zoom.map(Value::from));
		object
	}

	pub fn as_json_value(&self) -> Value {
		Value::Object(self.as_json_object())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
		pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
	}

	#[test]
	fn decodes_all_fields() -> Result<()> {
		let layer = VectorLayer::from_json(&json!({
			"id": "showers",
			"fields": {"water_temperature": "the maximum water temperature"},
			"description": "Public showers",
			"minzoom": 12,
			"maxzoom": 18
		}))?;
		assert_eq!(layer.id, "showers");
		assert_eq!(
			layer.fields,
			fields(&[("water_temperature", "the maximum water temperature")])
		);
		assert_eq!(layer.description.as_deref(), Some("Public showers"));
		assert_eq!((layer.min_zoom, layer.max_zoom), (Some(12), Some(18)));
		Ok(())
	}

	#[test]
	fn empty_fields_are_allowed() -> Result<()> {
		let layer = VectorLayer::from_json(&json!({"id": "water", "fields": {}}))?;
		assert!(layer.fields.is_empty());
		Ok(())
	}

	#[rstest]
	#[case(json!({"fields": {}}), "missing `id`")]
	#[case(json!({"id": "a"}), "missing `fields`")]
	#[case(json!({"id": 1, "fields": {}}), "invalid `id`")]
	#[case(json!({"id": "a", "fields": []}), "invalid `fields`")]
	#[case(json!({"id": "a", "fields": {"k": 1}}), "invalid `fields`")]
	#[case(json!("layer"), "expected an object, found a string")]
	fn required_fields_are_enforced(#[case] value: Value, #[case] message: &str) {
		assert_eq!(VectorLayer::from_json(&value).unwrap_err().to_string(), message);
	}

	#[test]
	fn invalid_optional_values_are_ignored() -> Result<()> {
		let layer = VectorLayer::from_json(&json!({
			"id": "id",
			"fields": {"key": "value"},
			"description": -1,
			"maxzoom": "invalid",
			"minzoom": "invalid"
		}))?;
		assert_eq!(layer.description, None);
		assert_eq!(layer.min_zoom, None);
		assert_eq!(layer.max_zoom, None);
		Ok(())
	}

	#[rstest]
	#[case(json!(29), json!(1), None, None)]
	#[case(json!(-1), json!(5), None, Some(5))]
	#[case(json!(3), json!(31), Some(3), None)]
	#[case(json!(3.0), json!(5.0), Some(3), Some(5))]
	fn own_zoom_pair_is_reconciled(
		#[case] min: Value,
		#[case] max: Value,
		#[case] expected_min: Option<u8>,
		#[case] expected_max: Option<u8>,
	) -> Result<()> {
		let layer = VectorLayer::from_json(&json!({"id": "a", "fields": {}, "minzoom": min, "maxzoom": max}))?;
		assert_eq!((layer.min_zoom, layer.max_zoom), (expected_min, expected_max));
		Ok(())
	}

	#[test]
	fn limited_to_document_zoom_range() {
		let mut layer = VectorLayer::new("a", BTreeMap::new());
		layer.min_zoom = Some(2);
		layer.max_zoom = Some(20);

		let limited = layer.clone().limited_to(Some(4), Some(12));
		assert_eq!((limited.min_zoom, limited.max_zoom), (None, None));

		let limited = layer.clone().limited_to(Some(2), None);
		assert_eq!((limited.min_zoom, limited.max_zoom), (Some(2), Some(20)));

		let limited = layer.limited_to(None, Some(25));
		assert_eq!((limited.min_zoom, limited.max_zoom), (Some(2), Some(20)));
	}

	#[test]
	fn list_fails_when_one_layer_fails() {
		let err = VectorLayer::list_from_json(&json!([
			{"id": "a", "fields": {}},
			{"fields": {}}
		]))
		.unwrap_err();
		assert_eq!(format!("{err:#}"), "Failed to decode vector_layers: layer 1: missing `id`");
	}

	#[test]
	fn encodes_with_wire_names() -> Result<()> {
		let mut layer = VectorLayer::new("bicycle_parking", fields(&[("type", "the type of bike parking")]));
		layer.max_zoom = Some(29);
		assert_eq!(
			layer.as_json_value(),
			json!({
				"id": "bicycle_parking",
				"fields": {"type": "the type of bike parking"},
				"maxzoom": 29
			})
		);
		assert_eq!(VectorLayer::from_json(&layer.as_json_value())?, layer);
		Ok(())
	}
}
