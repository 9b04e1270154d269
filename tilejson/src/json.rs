//! Typed readers and writers over the `serde_json` tree.
//!
//! Readers return `anyhow::Result` so that callers can either propagate the
//! reason or log it and treat the field as absent.

use crate::DecodeError;
use anyhow::{Result, bail};
use serde_json::{Map, Value};

/// A JSON object, as produced by `serde_json`.
pub type JsonObject = Map<String, Value>;

/// Parses `bytes` and requires the top-level value to be an object.
pub fn parse_json_object(bytes: &[u8]) -> Result<JsonObject, DecodeError> {
	match serde_json::from_slice::<Value>(bytes)? {
		Value::Object(object) => Ok(object),
		other => Err(DecodeError::NotAnObject {
			found: type_name(&other),
		}),
	}
}

/// Describes the JSON type of `value` for error messages, e.g. `"a string"`.
pub fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

pub fn as_str(value: &Value) -> Result<&str> {
	match value {
		Value::String(s) => Ok(s),
		other => bail!("expected a string, found {}", type_name(other)),
	}
}

/// Reads an integer. Integral floating point numbers such as `12.0` are accepted.
pub fn as_integer(value: &Value) -> Result<i64> {
	let Value::Number(number) = value else {
		bail!("expected an integer, found {}", type_name(value));
	};
	if let Some(i) = number.as_i64() {
		return Ok(i);
	}
	match number.as_f64() {
		Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
		_ => bail!("expected an integer, found {number}"),
	}
}

pub fn as_f64(value: &Value) -> Result<f64> {
	match value {
		Value::Number(number) => match number.as_f64() {
			Some(f) => Ok(f),
			None => bail!("number {number} is not representable as f64"),
		},
		other => bail!("expected a number, found {}", type_name(other)),
	}
}

pub fn as_array(value: &Value) -> Result<&Vec<Value>> {
	match value {
		Value::Array(array) => Ok(array),
		other => bail!("expected an array, found {}", type_name(other)),
	}
}

pub fn as_object(value: &Value) -> Result<&JsonObject> {
	match value {
		Value::Object(object) => Ok(object),
		other => bail!("expected an object, found {}", type_name(other)),
	}
}

/// Reads an array whose elements must all be strings.
pub fn as_string_list(value: &Value) -> Result<Vec<String>> {
	as_array(value)?
		.iter()
		.enumerate()
		.map(|(index, entry)| match entry {
			Value::String(s) => Ok(s.clone()),
			other => bail!("element {index} is {}, not a string", type_name(other)),
		})
		.collect()
}

/// Reads an array whose elements must all be numbers.
pub fn as_number_list(value: &Value) -> Result<Vec<f64>> {
	as_array(value)?
		.iter()
		.enumerate()
		.map(|(index, entry)| match entry {
			Value::Number(_) => as_f64(entry),
			other => bail!("element {index} is {}, not a number", type_name(other)),
		})
		.collect()
}

/// Writes `x` as a JSON integer when it has no fractional part, otherwise as a float.
pub fn number_value(x: f64) -> Value {
	const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
	if x.fract() == 0.0 && x.abs() <= MAX_EXACT {
		Value::from(x as i64)
	} else {
		Value::from(x)
	}
}

/// Inserts `value` under `key` only when it is present.
pub fn set_optional(object: &mut JsonObject, key: &str, value: Option<Value>) {
	if let Some(value) = value {
		object.insert(key.to_owned(), value);
	}
}
