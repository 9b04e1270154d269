use crate::{Bounds, Center, TileJsonDefaults, TileScheme, VectorLayer, Version};

/// Read access to every field of the TileJSON 3.0.0 specification.
///
/// Implemented by both [`TileJson`](crate::TileJson) and
/// [`ExtendedTileJson`](crate::ExtendedTileJson), so code reading a tileset's
/// metadata does not need to know which of the two it holds.
pub trait TileJsonFields {
	/// REQUIRED. The TileJSON version implemented by the document (`tilejson`).
	fn spec_version(&self) -> &Version;

	/// REQUIRED. Tile endpoints; never empty.
	fn tiles(&self) -> &[String];

	/// The vector tile layers (`vector_layers`).
	fn vector_layers(&self) -> Option<&[VectorLayer]>;

	fn attribution(&self) -> Option<&str>;

	/// The extent of available tiles, `[west, south, east, north]`.
	fn bounds(&self) -> Option<Bounds>;

	/// The default view, `[longitude, latitude, zoom]`.
	fn center(&self) -> Option<Center>;

	/// GeoJSON data files (`data`).
	fn data_files(&self) -> Option<&[String]>;

	fn description(&self) -> Option<&str>;

	/// Zoom level from which to generate overzoomed tiles (`fillzoom`).
	fn fill_zoom(&self) -> Option<i64>;

	/// Interactivity endpoints.
	fn grids(&self) -> Option<&[String]>;

	fn legend(&self) -> Option<&str>;

	/// Maximum zoom level (`maxzoom`), `min_zoom <= max_zoom <= 30`.
	fn max_zoom(&self) -> Option<u8>;

	/// Minimum zoom level (`minzoom`), `0 <= min_zoom <= max_zoom`.
	fn min_zoom(&self) -> Option<u8>;

	fn name(&self) -> Option<&str>;

	fn scheme(&self) -> Option<TileScheme>;

	/// A mustache template for interactivity formatting. Not interpreted.
	fn template(&self) -> Option<&str>;

	/// The version of the tileset itself.
	fn version(&self) -> Option<&Version>;
}

/// Field values with the specification's defaults applied to absent fields.
///
/// Computed on every call and never stored.
pub trait EffectiveTileJsonFields: TileJsonFields {
	fn effective_bounds(&self) -> Bounds {
		self.bounds().unwrap_or(TileJsonDefaults::BOUNDS)
	}

	fn effective_max_zoom(&self) -> u8 {
		self.max_zoom().unwrap_or(TileJsonDefaults::MAX_ZOOM)
	}

	fn effective_min_zoom(&self) -> u8 {
		self.min_zoom().unwrap_or(TileJsonDefaults::MIN_ZOOM)
	}

	fn effective_scheme(&self) -> TileScheme {
		self.scheme().unwrap_or(TileJsonDefaults::SCHEME)
	}

	fn effective_version(&self) -> Version {
		self.version().cloned().unwrap_or(TileJsonDefaults::VERSION)
	}

	fn effective_data_files(&self) -> &[String] {
		self.data_files().unwrap_or(TileJsonDefaults::DATA)
	}

	fn effective_grids(&self) -> &[String] {
		self.grids().unwrap_or(TileJsonDefaults::GRIDS)
	}
}

impl<T: TileJsonFields + ?Sized> EffectiveTileJsonFields for T {}
