use crate::{
	json::{as_number_list, number_value},
	validate::{is_valid_latitude, is_valid_longitude},
};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::{
	fmt::Debug,
	hash::{Hash, Hasher},
};
use tilejson_derive::context;

/// The maximum extent of available tiles, `[west, south, east, north]` in degrees.
///
/// Longitudes lie in `[-180, 180]`, latitudes in `[-90, 90]`. Bounds never wrap the
/// antimeridian: a `west` greater than `east` is kept as given and simply contains
/// no longitude.
///
/// # Examples
/// ```
/// use tilejson::Bounds;
///
/// let bounds = Bounds::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert_eq!(bounds.as_array(), [-10.0, -5.0, 10.0, 5.0]);
/// assert!(bounds.contains(0.0, 0.0));
/// assert!(Bounds::new(-181.0, 0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Bounds {
	west: f64,
	south: f64,
	east: f64,
	north: f64,
}

impl Bounds {
	/// Creates bounds and checks every component against its range.
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Bounds> {
		Bounds::new_unchecked(west, south, east, north).checked()
	}

	pub(crate) const fn new_unchecked(west: f64, south: f64, east: f64, north: f64) -> Bounds {
		Bounds {
			west,
			south,
			east,
			north,
		}
	}

	/// Decodes bounds from a JSON array of exactly four numbers.
	#[context("Failed to decode bounds from {value}")]
	pub fn from_json(value: &Value) -> Result<Bounds> {
		Bounds::try_from(as_number_list(value)?.as_slice())
	}

	pub fn west(&self) -> f64 {
		self.west
	}

	pub fn south(&self) -> f64 {
		self.south
	}

	pub fn east(&self) -> f64 {
		self.east
	}

	pub fn north(&self) -> f64 {
		self.north
	}

	/// Returns `[west, south, east, north]`.
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Encodes as a 4-element JSON array, always in `[west, south, east, north]` order.
	pub fn as_json_value(&self) -> Value {
		Value::Array(self.as_array().into_iter().map(number_value).collect())
	}

	/// `true` if the point lies inside or on the edge of these bounds.
	pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
		(self.west..=self.east).contains(&longitude) && (self.south..=self.north).contains(&latitude)
	}

	/// Checks that all four components are within their coordinate ranges.
	pub fn check(&self) -> Result<()> {
		ensure!(
			is_valid_longitude(self.west),
			"bounds west ({}) must be within [-180, 180]",
			self.west
		);
		ensure!(
			is_valid_latitude(self.south),
			"bounds south ({}) must be within [-90, 90]",
			self.south
		);
		ensure!(
			is_valid_longitude(self.east),
			"bounds east ({}) must be within [-180, 180]",
			self.east
		);
		ensure!(
			is_valid_latitude(self.north),
			"bounds north ({}) must be within [-90, 90]",
			self.north
		);
		Ok(())
	}

	fn checked(self) -> Result<Bounds> {
		self.check()?;
		Ok(self)
	}
}

impl TryFrom<&[f64]> for Bounds {
	type Error = anyhow::Error;

	#[context("Failed to convert {input:?} to Bounds")]
	fn try_from(input: &[f64]) -> Result<Bounds> {
		ensure!(
			input.len() == 4,
			"bounds must have 4 elements [west, south, east, north], found {}",
			input.len()
		);
		Bounds::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<[f64; 4]> for Bounds {
	type Error = anyhow::Error;

	fn try_from(input: [f64; 4]) -> Result<Bounds> {
		Bounds::new(input[0], input[1], input[2], input[3])
	}
}

impl Debug for Bounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.west, self.south, self.east, self.north)
	}
}

impl Eq for Bounds {}

impl Hash for Bounds {
	fn hash<H: Hasher>(&self, state: &mut H) {
		for x in self.as_array() {
			crate::hash_f64(x, state);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn decodes_four_numbers() -> Result<()> {
		let bounds = Bounds::from_json(&json!([-100, -50.5, 100, 50]))?;
		assert_eq!(bounds.west(), -100.0);
		assert_eq!(bounds.south(), -50.5);
		assert_eq!(bounds.east(), 100.0);
		assert_eq!(bounds.north(), 50.0);
		Ok(())
	}

	#[rstest]
	#[case(json!([1.1, 1.2, 1.3]))]
	#[case(json!([1.1, 1.2, 1.3, 1.4, 1.5]))]
	#[case(json!([]))]
	#[case(json!("invalid"))]
	#[case(json!([0, 0, "0", 0]))]
	#[case(json!([-181, 0, 0, 0]))]
	#[case(json!([0, -91, 0, 0]))]
	#[case(json!([0, 0, 181, 0]))]
	#[case(json!([0, 0, 0, 91]))]
	fn rejects_malformed_or_out_of_range(#[case] value: Value) {
		assert!(Bounds::from_json(&value).is_err(), "{value} should be rejected");
	}

	#[test]
	fn error_messages_carry_context() {
		let err = Bounds::from_json(&json!([0, 0, 0, 91])).unwrap_err();
		let chain = format!("{err:#}");
		assert!(chain.starts_with("Failed to decode bounds from [0,0,0,91]"), "{chain}");
		assert!(chain.contains("bounds north (91) must be within [-90, 90]"), "{chain}");
	}

	#[test]
	fn encodes_in_fixed_order() -> Result<()> {
		let bounds = Bounds::new(-180.0, -85.5, 180.0, 85.25)?;
		assert_eq!(bounds.as_json_value(), json!([-180, -85.5, 180, 85.25]));
		assert_eq!(Bounds::from_json(&bounds.as_json_value())?, bounds);
		Ok(())
	}

	#[test]
	fn west_greater_than_east_is_not_wrapped() -> Result<()> {
		let bounds = Bounds::new(170.0, -10.0, -170.0, 10.0)?;
		assert!(!bounds.contains(175.0, 0.0));
		assert!(!bounds.contains(0.0, 0.0));
		Ok(())
	}

	#[test]
	fn contains_is_inclusive() -> Result<()> {
		let bounds = Bounds::new(-100.0, -50.0, 100.0, 50.0)?;
		assert!(bounds.contains(-100.0, 50.0));
		assert!(bounds.contains(-20.0, 20.0));
		assert!(!bounds.contains(-120.0, 0.0));
		assert!(!bounds.contains(0.0, 50.1));
		Ok(())
	}

	#[test]
	fn debug_lists_components() -> Result<()> {
		assert_eq!(format!("{:?}", Bounds::new(-1.5, -2.0, 3.0, 4.0)?), "[-1.5, -2, 3, 4]");
		Ok(())
	}
}
