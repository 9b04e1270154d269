//! Integration tests for the byte-level `decode` / `encode` boundary.

use anyhow::Result;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tilejson::*;

fn decode_value(value: &Value) -> Result<ExtendedTileJson, DecodeError> {
	decode(value.to_string().as_bytes())
}

#[rstest]
#[case(json!({"tiles": ["a"]}), "tilejson")]
#[case(json!({"tilejson": "3.0.0"}), "tiles")]
#[case(json!({"tilejson": "3.0.0", "name": "no tiles", "custom": 1}), "tiles")]
fn missing_required_key_is_named(#[case] document: Value, #[case] key: &str) {
	let err = decode_value(&document).unwrap_err();
	assert!(matches!(err, DecodeError::MissingField { .. }));
	assert_eq!(err.key(), Some(key));
	assert!(err.to_string().contains(key), "{err}");
}

#[test]
fn empty_tiles_differs_from_missing_tiles() {
	let empty = decode_value(&json!({"tilejson": "3.0.0", "tiles": []})).unwrap_err();
	let missing = decode_value(&json!({"tilejson": "3.0.0"})).unwrap_err();
	assert!(matches!(empty, DecodeError::EmptyTiles));
	assert!(matches!(missing, DecodeError::MissingField { key: "tiles" }));
	assert_ne!(empty.to_string(), missing.to_string());
}

#[rstest]
#[case(b"".as_slice())]
#[case(b"not json".as_slice())]
#[case(br#"{"tilejson": "3.0.0", "tiles": ["a"],}"#.as_slice())]
fn malformed_json_is_fatal(#[case] bytes: &[u8]) {
	assert!(matches!(decode(bytes), Err(DecodeError::Json(_))));
}

#[rstest]
#[case("2.2.0", false)]
#[case("3.0.0", true)]
#[case("3.9.12-beta.1", true)]
#[case("v3", true)]
#[case("3.0.0a", false)]
#[case("3.0.0.", false)]
#[case("4", false)]
fn spec_version_compatibility(#[case] version: &str, #[case] accepted: bool) {
	let result = decode_value(&json!({"tilejson": version, "tiles": ["a"]}));
	assert_eq!(result.is_ok(), accepted, "{version}: {result:?}");
	if !accepted {
		assert!(matches!(result, Err(DecodeError::IncompatibleVersion { .. })));
	}
}

#[test]
fn wrong_typed_optional_fields_do_not_fail() -> Result<()> {
	let tilejson = decode_value(&json!({
		"tilejson": "3.0.0",
		"tiles": ["a"],
		"vector_layers": {"id": "not an array"},
		"attribution": [],
		"bounds": {},
		"center": true,
		"data": 1,
		"description": {},
		"fillzoom": [],
		"grids": "b",
		"legend": false,
		"maxzoom": "18",
		"minzoom": null,
		"name": [],
		"scheme": 0,
		"template": {},
		"version": [1, 0, 0]
	}))?;
	assert_eq!(tilejson.as_json_value(), json!({"tilejson": "3.0.0", "tiles": ["a"]}));
	Ok(())
}

#[test]
fn extension_capture_and_encoding() -> Result<()> {
	let tilejson = decode_value(&json!({
		"tilejson": "3.0.0",
		"tiles": ["http://a.tileserver.org/{z}/{x}/{y}"],
		"something_custom": "x",
		"another_custom": 42
	}))?;

	let expected: ExtensionFields = [
		("something_custom", ExtensionValue::from("x")),
		("another_custom", ExtensionValue::from(42)),
	]
	.into_iter()
	.collect();
	assert_eq!(tilejson.extensions(), &expected);

	let encoded: Value = serde_json::from_slice(&encode(&tilejson))?;
	assert_eq!(encoded["something_custom"], json!("x"));
	assert_eq!(encoded["another_custom"], json!(42));
	assert_eq!(encoded["tilejson"], json!("3.0.0"));
	Ok(())
}

#[test]
fn building_with_extensions() -> Result<()> {
	let tilejson = TileJson::builder(["http://a.tileserver.org/{z}/{x}/{y}"])
		.name("built")
		.center(Center::new(10.0, 20.0, 3)?)
		.build()?;
	let mut extended = ExtendedTileJson::from(tilejson);
	extended.insert_extension("another_custom", 42);
	extended.insert_extension("name", "ignored");

	assert_eq!(
		extended.as_json_value(),
		json!({
			"tilejson": "3.0.0",
			"tiles": ["http://a.tileserver.org/{z}/{x}/{y}"],
			"name": "built",
			"center": [10, 20, 3],
			"another_custom": 42
		})
	);
	Ok(())
}

#[rstest]
#[case(json!({"tilejson": "3.0.0", "tiles": ["a"]}))]
#[case(json!({"tilejson": "v03.1", "tiles": ["a", "b"], "version": "2.0.0-rc.1+sha.5114f85"}))]
#[case(json!({"tilejson": "3.0.0", "tiles": ["a"], "minzoom": 29, "maxzoom": 1, "center": [0, 0, 5]}))]
#[case(json!({"tilejson": "3.0.0", "tiles": ["a"], "bounds": [-100, -50, 100, 50], "center": [-120, 0, 7]}))]
#[case(json!({"tilejson": "3.0.0", "tiles": ["a"], "bounds": [-100.5, -50.25, 100, 50], "center": [-20.75, 20, 7.5]}))]
#[case(json!({
	"tilejson": "3.0.0",
	"tiles": ["a"],
	"minzoom": 4,
	"maxzoom": 12,
	"vector_layers": [{"id": "l", "fields": {"f": "d"}, "description": "x", "minzoom": 2, "maxzoom": 10}]
}))]
#[case(json!({"tilejson": "3.0.0", "tiles": ["a"], "x": {"y": [1, null, 2.5, {"z": null}]}, "n": null, "f": 1.0}))]
fn decoding_is_idempotent(#[case] document: Value) -> Result<()> {
	let first = decode_value(&document)?;
	let second = decode(&encode(&first))?;
	assert_eq!(second, first);
	assert_eq!(encode(&second), encode(&first));
	Ok(())
}
