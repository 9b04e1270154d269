//! Range and format checks shared by the document and its sub-values.

use crate::Version;
use std::ops::RangeInclusive;

pub const ZOOM_RANGE: RangeInclusive<i64> = 0..=30;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// The only major version of the TileJSON specification this crate implements.
pub const SUPPORTED_SPEC_MAJOR: u64 = 3;

pub fn is_valid_zoom(zoom: i64) -> bool {
	ZOOM_RANGE.contains(&zoom)
}

pub fn is_valid_longitude(x: f64) -> bool {
	LONGITUDE_RANGE.contains(&x)
}

pub fn is_valid_latitude(y: f64) -> bool {
	LATITUDE_RANGE.contains(&y)
}

/// `true` iff `version` parses as a semantic version with major version 3.
///
/// Unparseable strings are incompatible, not absent.
pub fn is_compatible_spec_version(version: &str) -> bool {
	parse_compatible_spec_version(version).is_some()
}

/// Parses a `tilejson` version, returning `None` unless it is compatible.
pub fn parse_compatible_spec_version(version: &str) -> Option<Version> {
	Version::parse(version).ok().filter(is_compatible_version)
}

pub fn is_compatible_version(version: &Version) -> bool {
	version.major == SUPPORTED_SPEC_MAJOR
}

/// Validates a `(minzoom, maxzoom)` pair.
///
/// Each value outside `0..=30` is dropped on its own. If both survive but
/// `min > max`, both are dropped.
pub fn reconcile_zoom_pair(min_zoom: Option<i64>, max_zoom: Option<i64>) -> (Option<u8>, Option<u8>) {
	let min_zoom = min_zoom.filter(|z| is_valid_zoom(*z)).map(|z| z as u8);
	let max_zoom = max_zoom.filter(|z| is_valid_zoom(*z)).map(|z| z as u8);

	match (min_zoom, max_zoom) {
		(Some(min), Some(max)) if min > max => (None, None),
		pair => pair,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(-1, false)]
	#[case(0, true)]
	#[case(30, true)]
	#[case(31, false)]
	fn zoom_range(#[case] zoom: i64, #[case] valid: bool) {
		assert_eq!(is_valid_zoom(zoom), valid);
	}

	#[test]
	fn coordinate_ranges_are_inclusive() {
		assert!(is_valid_longitude(-180.0));
		assert!(is_valid_longitude(180.0));
		assert!(!is_valid_longitude(180.000_001));
		assert!(is_valid_latitude(-90.0));
		assert!(!is_valid_latitude(-90.5));
		assert!(!is_valid_latitude(f64::NAN));
	}

	#[rstest]
	#[case(None, None, None, None)]
	#[case(Some(4), Some(12), Some(4), Some(12))]
	#[case(Some(7), Some(7), Some(7), Some(7))]
	#[case(Some(29), Some(1), None, None)]
	#[case(Some(-1), Some(12), None, Some(12))]
	#[case(Some(4), Some(31), Some(4), None)]
	#[case(Some(40), Some(2), None, Some(2))]
	#[case(Some(5), None, Some(5), None)]
	#[case(None, Some(99), None, None)]
	fn zoom_pair_reconciliation(
		#[case] min: Option<i64>,
		#[case] max: Option<i64>,
		#[case] expected_min: Option<u8>,
		#[case] expected_max: Option<u8>,
	) {
		assert_eq!(reconcile_zoom_pair(min, max), (expected_min, expected_max));
	}

	#[rstest]
	#[case("3.0.0", true)]
	#[case("3.1.7-beta+exp.sha.5114f85", true)]
	#[case("03", true)]
	#[case("2.2.0", false)]
	#[case("4.0.0", false)]
	#[case("0", false)]
	#[case("version3", false)]
	#[case("", false)]
	fn spec_version_compatibility(#[case] version: &str, #[case] compatible: bool) {
		assert_eq!(is_compatible_spec_version(version), compatible);
		assert_eq!(parse_compatible_spec_version(version).is_some(), compatible);
	}

	#[test]
	fn compatible_versions_are_returned_parsed() {
		assert_eq!(parse_compatible_spec_version("v3.1"), Some(Version::new(3, 1, 0)));
		assert_eq!(parse_compatible_spec_version("2.2.0"), None);
	}
}
