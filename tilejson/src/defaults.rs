use crate::{Bounds, TileScheme, Version};

/// Values the TileJSON 3.0.0 specification assumes when a field is absent.
pub struct TileJsonDefaults;

impl TileJsonDefaults {
	/// The full Web Mercator extent.
	pub const BOUNDS: Bounds = Bounds::new_unchecked(-180.0, -85.05112877980659, 180.0, 85.0511287798066);
	pub const MAX_ZOOM: u8 = 30;
	pub const MIN_ZOOM: u8 = 0;
	pub const SCHEME: TileScheme = TileScheme::Xyz;
	pub const VERSION: Version = Version::new(1, 0, 0);
	pub const DATA: &'static [String] = &[];
	pub const GRIDS: &'static [String] = &[];
}
