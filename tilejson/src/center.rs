use crate::{
	Bounds,
	json::{as_number_list, number_value},
	validate::{is_valid_latitude, is_valid_longitude, is_valid_zoom},
};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::{
	fmt::Debug,
	hash::{Hash, Hasher},
};
use tilejson_derive::context;

/// The default view of a tileset, `[longitude, latitude, zoom]`.
///
/// - longitude in `[-180, 180]`
/// - latitude in `[-90, 90]`
/// - zoom in `0..=30`
#[derive(Clone, Copy, PartialEq)]
pub struct Center {
	longitude: f64,
	latitude: f64,
	zoom: u8,
}

impl Center {
	pub fn new(longitude: f64, latitude: f64, zoom: u8) -> Result<Center> {
		let center = Center {
			longitude,
			latitude,
			zoom,
		};
		center.check()?;
		Ok(center)
	}

	/// Decodes a center from a JSON array of exactly three numbers.
	#[context("Failed to decode center from {value}")]
	pub fn from_json(value: &Value) -> Result<Center> {
		Center::try_from(as_number_list(value)?.as_slice())
	}

	pub fn longitude(&self) -> f64 {
		self.longitude
	}

	pub fn latitude(&self) -> f64 {
		self.latitude
	}

	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	/// Encodes as `[longitude, latitude, zoom]`.
	pub fn as_json_value(&self) -> Value {
		Value::Array(vec![
			number_value(self.longitude),
			number_value(self.latitude),
			Value::from(self.zoom),
		])
	}

	pub fn check(&self) -> Result<()> {
		ensure!(
			is_valid_longitude(self.longitude),
			"center longitude ({}) must be within [-180, 180]",
			self.longitude
		);
		ensure!(
			is_valid_latitude(self.latitude),
			"center latitude ({}) must be within [-90, 90]",
			self.latitude
		);
		ensure!(
			is_valid_zoom(i64::from(self.zoom)),
			"center zoom ({}) must be within [0, 30]",
			self.zoom
		);
		Ok(())
	}

	/// Whether this center is consistent with its enclosing document.
	///
	/// The zoom must lie within `min_zoom..=max_zoom` when both are given, and the
	/// position must lie within `bounds` when given.
	pub fn is_within(&self, min_zoom: Option<u8>, max_zoom: Option<u8>, bounds: Option<&Bounds>) -> bool {
		if let (Some(min), Some(max)) = (min_zoom, max_zoom)
			&& !(min..=max).contains(&self.zoom)
		{
			return false;
		}
		bounds.is_none_or(|b| b.contains(self.longitude, self.latitude))
	}
}

impl TryFrom<&[f64]> for Center {
	type Error = anyhow::Error;

	/// Converts `[longitude, latitude, zoom]`. The zoom is truncated toward zero.
	#[context("Failed to convert {input:?} to Center")]
	fn try_from(input: &[f64]) -> Result<Center> {
		ensure!(
			input.len() == 3,
			"center must have 3 elements [longitude, latitude, zoom], found {}",
			input.len()
		);
		let zoom = input[2].trunc();
		ensure!(
			(0.0..=30.0).contains(&zoom),
			"center zoom ({}) must be within [0, 30]",
			input[2]
		);
		Center::new(input[0], input[1], zoom as u8)
	}
}

impl Debug for Center {
	/// Formats as `"longitude, latitude (zoom)"`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}, {} ({})", self.longitude, self.latitude, self.zoom)
	}
}

impl Eq for Center {}

impl Hash for Center {
	fn hash<H: Hasher>(&self, state: &mut H) {
		crate::hash_f64(self.longitude, state);
		crate::hash_f64(self.latitude, state);
		self.zoom.hash(state);
	}
}
