use anyhow::bail;
use std::{fmt::Display, str::FromStr};

/// The tile coordinate scheme: `"xyz"` or `"tms"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileScheme {
	#[default]
	Xyz,
	Tms,
}

impl TileScheme {
	/// Returns the wire name.
	pub fn as_str(&self) -> &'static str {
		match self {
			TileScheme::Xyz => "xyz",
			TileScheme::Tms => "tms",
		}
	}
}

impl Display for TileScheme {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&str> for TileScheme {
	type Error = anyhow::Error;

	/// Wire names are case-sensitive.
	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Ok(match value {
			"xyz" => TileScheme::Xyz,
			"tms" => TileScheme::Tms,
			_ => bail!("invalid tile scheme '{value}', expected \"xyz\" or \"tms\""),
		})
	}
}

impl FromStr for TileScheme {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TileScheme::try_from(s)
	}
}
