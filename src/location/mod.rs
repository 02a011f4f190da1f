//! Location subsystem: geocoding candidates, their text rendering, and the
//! interactive resolver that picks exactly one.

pub mod format;
pub mod resolver;
pub mod types;

pub use format::{announcement_name, arc_position, best_local_name, format_coords, listing_line, ArcPosition};
pub use resolver::{CityResolver, Resolution};
pub use types::{GeocodingCandidate, LocalizedNames, ResolvedLocation};
