//! Global constants for the mapnote application

/// Minimum number of vertices for a committed line
pub const MIN_LINE_VERTICES: usize = 2;

/// Initial map center latitude (Sydney, Lane Cove)
pub const DEFAULT_LATITUDE: f64 = -33.822650425718024;

/// Initial map center longitude
pub const DEFAULT_LONGITUDE: f64 = 151.17170925183657;

/// Initial map zoom level
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Name of the default basemap style
pub const DEFAULT_BASEMAP: &str = "shadow";

/// Style URL of the default basemap
pub const DEFAULT_BASEMAP_URL: &str = "https://tiles.versatiles.org/assets/styles/shadow/style.json";

/// Image name the symbol layer uses for point markers
pub const MARKER_IMAGE_NAME: &str = "pin-marker";

/// Id prefix for placed points
pub const POINT_ID_PREFIX: &str = "point";

/// Id prefix for committed lines
pub const LINE_ID_PREFIX: &str = "line";
