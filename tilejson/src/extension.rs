//! Dynamically typed values for the keys a TileJSON document carries beyond the
//! specification.
//!
//! Capture rules:
//! - every value is tried as string, integer, floating point number, boolean, object and
//!   array, in that order,
//! - inside an array a `null` is kept in place as [`ExtensionValue::Null`],
//! - an object key whose value is `null` is omitted, at the top level and in nested objects.
//!
//! Values inserted through [`ExtensionFields::insert`] are normalized to the same form,
//! so that encoding and decoding again gives back equal fields.

use crate::json::{JsonObject, as_integer};
use serde_json::Value;
use std::{
	collections::{BTreeMap, btree_map},
	hash::{Hash, Hasher},
	mem,
};

/// One extension value.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionValue {
	String(String),
	Integer(i64),
	Double(f64),
	Bool(bool),
	Object(ExtensionFields),
	Array(Vec<ExtensionValue>),
	Null,
}

impl ExtensionValue {
	/// Converts a JSON value. Never fails: `null` becomes [`ExtensionValue::Null`].
	pub fn from_json(value: &Value) -> ExtensionValue {
		match value {
			Value::String(s) => ExtensionValue::String(s.clone()),
			Value::Number(number) => match as_integer(value) {
				Ok(i) => ExtensionValue::Integer(i),
				Err(_) => number.as_f64().map_or(ExtensionValue::Null, ExtensionValue::Double),
			},
			Value::Bool(b) => ExtensionValue::Bool(*b),
			Value::Object(object) => ExtensionValue::Object(ExtensionFields::capture(object, &[])),
			Value::Array(array) => ExtensionValue::Array(array.iter().map(ExtensionValue::from_json).collect()),
			Value::Null => ExtensionValue::Null,
		}
	}

	/// Converts back into a JSON value. A non-finite double is written as `null`.
	pub fn as_json_value(&self) -> Value {
		match self {
			ExtensionValue::String(s) => Value::from(s.as_str()),
			ExtensionValue::Integer(i) => Value::from(*i),
			ExtensionValue::Double(f) => Value::from(*f),
			ExtensionValue::Bool(b) => Value::from(*b),
			ExtensionValue::Object(fields) => Value::Object(fields.as_json_object()),
			ExtensionValue::Array(array) => Value::Array(array.iter().map(ExtensionValue::as_json_value).collect()),
			ExtensionValue::Null => Value::Null,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			ExtensionValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			ExtensionValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Returns doubles as they are and integers converted to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			ExtensionValue::Double(f) => Some(*f),
			ExtensionValue::Integer(i) => Some(*i as f64),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ExtensionValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&ExtensionFields> {
		match self {
			ExtensionValue::Object(fields) => Some(fields),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[ExtensionValue]> {
		match self {
			ExtensionValue::Array(array) => Some(array),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, ExtensionValue::Null)
	}

	/// Returns the value as decoding would produce it: integral doubles become
	/// integers, non-finite doubles become `null` and nested `null` object entries
	/// are dropped.
	pub fn normalized(self) -> ExtensionValue {
		match self {
			ExtensionValue::Double(f) => ExtensionValue::from_json(&Value::from(f)),
			ExtensionValue::Object(fields) => ExtensionValue::Object(fields.normalized()),
			ExtensionValue::Array(array) => ExtensionValue::Array(array.into_iter().map(ExtensionValue::normalized).collect()),
			other => other,
		}
	}
}

// Values held by `ExtensionFields` never contain NaN.
impl Eq for ExtensionValue {}

impl Hash for ExtensionValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		mem::discriminant(self).hash(state);
		match self {
			ExtensionValue::String(s) => s.hash(state),
			ExtensionValue::Integer(i) => i.hash(state),
			ExtensionValue::Double(f) => crate::hash_f64(*f, state),
			ExtensionValue::Bool(b) => b.hash(state),
			ExtensionValue::Object(fields) => fields.hash(state),
			ExtensionValue::Array(array) => array.hash(state),
			ExtensionValue::Null => {}
		}
	}
}

impl From<&str> for ExtensionValue {
	fn from(value: &str) -> Self {
		ExtensionValue::String(value.to_owned())
	}
}

impl From<String> for ExtensionValue {
	fn from(value: String) -> Self {
		ExtensionValue::String(value)
	}
}

impl From<i64> for ExtensionValue {
	fn from(value: i64) -> Self {
		ExtensionValue::Integer(value)
	}
}

impl From<i32> for ExtensionValue {
	fn from(value: i32) -> Self {
		ExtensionValue::Integer(i64::from(value))
	}
}

impl From<u32> for ExtensionValue {
	fn from(value: u32) -> Self {
		ExtensionValue::Integer(i64::from(value))
	}
}

impl From<f64> for ExtensionValue {
	fn from(value: f64) -> Self {
		ExtensionValue::Double(value)
	}
}

impl From<bool> for ExtensionValue {
	fn from(value: bool) -> Self {
		ExtensionValue::Bool(value)
	}
}

impl From<ExtensionFields> for ExtensionValue {
	fn from(value: ExtensionFields) -> Self {
		ExtensionValue::Object(value)
	}
}

impl<T: Into<ExtensionValue>> From<Vec<T>> for ExtensionValue {
	fn from(value: Vec<T>) -> Self {
		ExtensionValue::Array(value.into_iter().map(Into::into).collect())
	}
}

impl From<&ExtensionValue> for Value {
	fn from(value: &ExtensionValue) -> Self {
		value.as_json_value()
	}
}

/// The extension keys of a document, sorted by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtensionFields(BTreeMap<String, ExtensionValue>);

impl ExtensionFields {
	pub fn new() -> ExtensionFields {
		ExtensionFields::default()
	}

	/// Collects every key of `object` that is not in `known_keys`.
	///
	/// Keys whose value is `null` are omitted.
	pub fn capture(object: &JsonObject, known_keys: &[&str]) -> ExtensionFields {
		let mut fields = ExtensionFields::new();
		for (key, value) in object {
			if known_keys.contains(&key.as_str()) {
				continue;
			}
			if value.is_null() {
				log::trace!("omitting extension key '{key}' with null value");
				continue;
			}
			log::trace!("capturing extension key '{key}'");
			fields.0.insert(key.clone(), ExtensionValue::from_json(value));
		}
		fields
	}

	pub fn get(&self, key: &str) -> Option<&ExtensionValue> {
		self.0.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Inserts a normalized value and returns the one it replaced.
	///
	/// A value that normalizes to `null` removes the key instead.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ExtensionValue>) -> Option<ExtensionValue> {
		let key = key.into();
		match value.into().normalized() {
			ExtensionValue::Null => self.0.remove(&key),
			value => self.0.insert(key, value),
		}
	}

	pub fn remove(&mut self, key: &str) -> Option<ExtensionValue> {
		self.0.remove(key)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, ExtensionValue> {
		self.0.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Writes every entry into `object`, replacing existing keys.
	pub fn write_into(&self, object: &mut JsonObject) {
		for (key, value) in &self.0 {
			object.insert(key.clone(), value.as_json_value());
		}
	}

	pub fn as_json_object(&self) -> JsonObject {
		let mut object = JsonObject::new();
		self.write_into(&mut object);
		object
	}

	fn normalized(self) -> ExtensionFields {
		self.into_iter().collect()
	}
}

impl<K: Into<String>, V: Into<ExtensionValue>> FromIterator<(K, V)> for ExtensionFields {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut fields = ExtensionFields::new();
		for (key, value) in iter {
			fields.insert(key, value);
		}
		fields
	}
}

impl IntoIterator for ExtensionFields {
	type Item = (String, ExtensionValue);
	type IntoIter = btree_map::IntoIter<String, ExtensionValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a ExtensionFields {
	type Item = (&'a String, &'a ExtensionValue);
	type IntoIter = btree_map::Iter<'a, String, ExtensionValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
