use thiserror::Error;

/// A fatal error that rejects a whole TileJSON document.
///
/// Optional fields never produce one of these; they are dropped instead.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// The input is not valid JSON.
	#[error("malformed JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// The input is valid JSON, but the top-level value is not an object.
	#[error("TileJSON must be a JSON object, found {found}")]
	NotAnObject { found: &'static str },

	/// A required key is absent.
	#[error("required field '{key}' is missing")]
	MissingField { key: &'static str },

	/// A required key is present but has the wrong shape.
	#[error("required field '{key}' is malformed: {reason}")]
	InvalidField { key: &'static str, reason: String },

	/// `tiles` is present but contains no endpoint.
	#[error("field 'tiles' must contain at least one tile endpoint")]
	EmptyTiles,

	/// `tilejson` is not a semantic version with major version 3.
	#[error("field 'tilejson' has incompatible version '{version}', only TileJSON 3.x.x is supported")]
	IncompatibleVersion { version: String },
}

impl DecodeError {
	/// The wire key this error is about, if it concerns a single field.
	pub fn key(&self) -> Option<&'static str> {
		match self {
			DecodeError::MissingField { key } | DecodeError::InvalidField { key, .. } => Some(key),
			DecodeError::EmptyTiles => Some("tiles"),
			DecodeError::IncompatibleVersion { .. } => Some("tilejson"),
			DecodeError::Json(_) | DecodeError::NotAnObject { .. } => None,
		}
	}
}
