//! Tolerant semantic versions, as used by the `tilejson` and `version` keys.

use anyhow::{Context, Result, bail};
use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use std::{
	fmt::{self, Display},
	ops::Deref,
	str::FromStr,
	sync::LazyLock,
};

static RE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
	)
	.unwrap()
});

/// A semantic version `major.minor.patch[-pre.release][+build.metadata]`.
///
/// Parsing is tolerant: a leading `v`, leading zeros and missing minor or patch
/// components (`"3"`, `"03.0"`) are accepted and normalized before the text is
/// handed to [`semver`]. Display always prints the canonical three-component form.
///
/// Dereferences to [`semver::Version`], so `major`, `pre` and `build` and the
/// semver precedence order are available directly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
	pub const fn new(major: u64, minor: u64, patch: u64) -> Version {
		Version(semver::Version::new(major, minor, patch))
	}

	/// Parses a version string.
	///
	/// # Errors
	/// Fails if `text` does not follow the tolerant semver grammar, or a numeric
	/// component overflows `u64`.
	pub fn parse(text: &str) -> Result<Version> {
		let Some(captures) = RE_VERSION.captures(text) else {
			bail!("'{text}' is not a semantic version");
		};

		let number = |index: usize, name: &str| -> Result<u64> {
			match captures.get(index) {
				Some(m) => m
					.as_str()
					.parse::<u64>()
					.with_context(|| format!("{name} component of '{text}' is out of range")),
				None => Ok(0),
			}
		};

		let mut version = semver::Version::new(number(1, "major")?, number(2, "minor")?, number(3, "patch")?);
		if let Some(m) = captures.get(4) {
			version.pre = Prerelease::new(&strip_numeric_zeros(m.as_str()))
				.with_context(|| format!("pre-release of '{text}' is invalid"))?;
		}
		if let Some(m) = captures.get(5) {
			version.build =
				BuildMetadata::new(m.as_str()).with_context(|| format!("build metadata of '{text}' is invalid"))?;
		}
		Ok(Version(version))
	}

	pub fn is_pre_release(&self) -> bool {
		!self.0.pre.is_empty()
	}

	pub fn as_semver(&self) -> &semver::Version {
		&self.0
	}
}

/// Drops leading zeros from purely numeric pre-release identifiers (`01` becomes `1`).
fn strip_numeric_zeros(pre_release: &str) -> String {
	pre_release
		.split('.')
		.map(|identifier| {
			if identifier.bytes().all(|b| b.is_ascii_digit()) {
				let trimmed = identifier.trim_start_matches('0');
				if trimmed.is_empty() { "0" } else { trimmed }
			} else {
				identifier
			}
		})
		.collect::<Vec<_>>()
		.join(".")
}

impl Deref for Version {
	type Target = semver::Version;

	fn deref(&self) -> &semver::Version {
		&self.0
	}
}

impl From<semver::Version> for Version {
	fn from(version: semver::Version) -> Self {
		Version(version)
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl FromStr for Version {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Version::parse(s)
	}
}

impl TryFrom<&str> for Version {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self> {
		Version::parse(value)
	}
}
