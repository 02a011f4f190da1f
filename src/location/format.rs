//! Text formatting for geocoding candidates: degree/arcminute coordinates
//! and the choice of which localized name to show.

use super::types::GeocodingCandidate;
use std::fmt;

/// A coordinate split into whole degrees and rounded arcminutes.
///
/// Arcminutes are rounded independently of the degree part, so a value such
/// as 0.9999° renders as `0°60'` rather than rolling over to `1°0'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcPosition {
    pub degrees: u32,
    pub arcminutes: u32,
    pub positive: bool,
}

/// Convert signed decimal degrees to magnitude, arcminutes and hemisphere.
pub fn arc_position(degrees: f64) -> ArcPosition {
    let magnitude = degrees.abs().trunc();
    ArcPosition {
        degrees: magnitude as u32,
        arcminutes: arcminute_part(degrees),
        positive: degrees >= 0.0,
    }
}

/// Fractional part of `degrees` in arcminutes, rounded half away from zero.
pub fn arcminute_part(degrees: f64) -> u32 {
    let abs = degrees.abs();
    // f64::round rounds ties away from zero
    ((abs - abs.trunc()) * 60.0).round() as u32
}

/// Latitude or longitude, for picking the hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Display wrapper rendering `65°1'N` style text.
pub struct Coordinate {
    pub position: ArcPosition,
    pub axis: Axis,
}

impl Coordinate {
    pub fn latitude(value: f64) -> Self {
        Self { position: arc_position(value), axis: Axis::Latitude }
    }

    pub fn longitude(value: f64) -> Self {
        Self { position: arc_position(value), axis: Axis::Longitude }
    }

    fn hemisphere(&self) -> char {
        match (self.axis, self.position.positive) {
            (Axis::Latitude, true) => 'N',
            (Axis::Latitude, false) => 'S',
            (Axis::Longitude, true) => 'E',
            (Axis::Longitude, false) => 'W',
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{00B0}{}'{}",
            self.position.degrees,
            self.position.arcminutes,
            self.hemisphere()
        )
    }
}

/// Format a latitude/longitude pair as `65°1'N, 25°28'E`.
pub fn format_coords(lat: f64, lon: f64) -> String {
    format!("{}, {}", Coordinate::latitude(lat), Coordinate::longitude(lon))
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Alternate name for a listing line: Finnish, then English, skipping any
/// that is blank or identical to the primary name.
pub fn best_local_name(candidate: &GeocodingCandidate) -> Option<&str> {
    let names = &candidate.localized_names;
    let differs = |n: &&str| *n != candidate.primary_name;
    non_blank(names.finnish())
        .filter(differs)
        .or_else(|| non_blank(names.english()).filter(differs))
}

/// Name used when announcing a forecast. Prefers a localized name even
/// when it equals the primary name.
pub fn announcement_name(candidate: &GeocodingCandidate) -> &str {
    let names = &candidate.localized_names;
    non_blank(names.finnish())
        .or_else(|| non_blank(names.english()))
        .unwrap_or(&candidate.primary_name)
}

/// One line of the candidate listing, e.g. `4. York, US (NE), 40°52'N, 97°36'W`.
///
/// `index` is zero-based; the rendered number is `index + 1`.
pub fn listing_line(candidate: &GeocodingCandidate, index: usize) -> String {
    let mut line = format!("{}. {}", index + 1, candidate.primary_name);
    if let Some(local) = best_local_name(candidate) {
        line.push_str(&format!(" ({})", local));
    }
    line.push_str(&format!(", {}", candidate.country_code));
    if let Some(region) = non_blank(candidate.region_code.as_deref()) {
        line.push_str(&format!(" ({})", region));
    }
    line.push_str(&format!(", {}", format_coords(candidate.latitude, candidate.longitude)));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oulu() -> GeocodingCandidate {
        GeocodingCandidate::new("Oulu", 65.0124, 25.4682, "FI")
            .with_english("Oulu")
            .with_finnish("Oulu")
    }

    fn york() -> GeocodingCandidate {
        GeocodingCandidate::new("York", 40.8681, -97.592, "US")
            .with_english("York")
            .with_region("NE")
    }

    #[test]
    fn test_arc_position_reference_values() {
        assert_eq!(arc_position(65.0124), ArcPosition { degrees: 65, arcminutes: 1, positive: true });
        assert_eq!(arc_position(25.4682), ArcPosition { degrees: 25, arcminutes: 28, positive: true });
        assert_eq!(arc_position(-97.592), ArcPosition { degrees: 97, arcminutes: 36, positive: false });
        assert_eq!(arc_position(40.8681), ArcPosition { degrees: 40, arcminutes: 52, positive: true });
    }

    #[test]
    fn test_arcminute_half_rounds_away_from_zero() {
        assert_eq!(arcminute_part(61.5), 30);
        assert_eq!(arcminute_part(-37.81), 49);
        assert_eq!(arcminute_part(12.125), 8);
        assert_eq!(arcminute_part(-12.125), 8);
    }

    #[test]
    fn test_arcminutes_do_not_carry() {
        let p = arc_position(0.9999999);
        assert_eq!(p.degrees, 0);
        assert_eq!(p.arcminutes, 60);
        assert_eq!(Coordinate::latitude(0.9999999).to_string(), "0\u{00B0}60'N");
    }

    #[test]
    fn test_arc_position_bounds() {
        for i in -1800..=1800 {
            let d = i as f64 * 0.0997;
            let p = arc_position(d);
            assert!(p.arcminutes <= 60);
            assert_eq!(p.degrees as f64, d.abs().floor());
        }
    }

    #[test]
    fn test_zero_is_positive_hemisphere() {
        assert_eq!(format_coords(0.0, 0.0), "0\u{00B0}0'N, 0\u{00B0}0'E");
        assert_eq!(format_coords(-33.8688, 151.2093), "33\u{00B0}52'S, 151\u{00B0}13'E");
    }

    #[test]
    fn test_listing_line_oulu() {
        assert_eq!(listing_line(&oulu(), 0), "1. Oulu, FI, 65\u{00B0}1'N, 25\u{00B0}28'E");
    }

    #[test]
    fn test_listing_line_york() {
        assert_eq!(listing_line(&york(), 3), "4. York, US (NE), 40\u{00B0}52'N, 97\u{00B0}36'W");
    }

    #[test]
    fn test_listing_line_shows_finnish_alternate() {
        let c = GeocodingCandidate::new("Stockholm", 59.3293, 18.0686, "SE")
            .with_finnish("Tukholma")
            .with_english("Stockholm");
        assert_eq!(listing_line(&c, 1), "2. Stockholm (Tukholma), SE, 59\u{00B0}20'N, 18\u{00B0}4'E");
    }

    #[test]
    fn test_best_local_name_falls_back_to_english() {
        let c = GeocodingCandidate::new("Göteborg", 57.7, 11.97, "SE")
            .with_finnish("Göteborg")
            .with_english("Gothenburg");
        assert_eq!(best_local_name(&c), Some("Gothenburg"));
    }

    #[test]
    fn test_best_local_name_ignores_blank() {
        let c = GeocodingCandidate::new("Paris", 48.85, 2.35, "FR").with_finnish("  ");
        assert_eq!(best_local_name(&c), None);
    }

    #[test]
    fn test_blank_region_is_omitted() {
        let c = GeocodingCandidate::new("Oulu", 65.0124, 25.4682, "FI").with_region(" ");
        assert_eq!(listing_line(&c, 0), "1. Oulu, FI, 65\u{00B0}1'N, 25\u{00B0}28'E");
    }

    #[test]
    fn test_announcement_name_prefers_localized() {
        assert_eq!(announcement_name(&oulu()), "Oulu");
        assert_eq!(announcement_name(&york()), "York");
        let c = GeocodingCandidate::new("Stockholm", 59.3, 18.0, "SE").with_finnish("Tukholma");
        assert_eq!(announcement_name(&c), "Tukholma");
        let bare = GeocodingCandidate::new("Kempele", 64.9, 25.5, "FI").with_english("");
        assert_eq!(announcement_name(&bare), "Kempele");
    }
}
