/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates, in meters (Haversine).
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Parse a free-text distance like `"500 m"`, `"1.2 km"` or `"750"` into
/// meters. A bare number is taken as meters. Returns `None` for anything
/// unparseable or negative.
pub fn parse_distance_text(text: &str) -> Option<i32> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let split_at = normalized
        .find(|c: char| c.is_alphabetic())
        .unwrap_or(normalized.len());
    let (number_part, unit_part) = normalized.split_at(split_at);

    let value: f64 = number_part.trim().replace(',', "").parse().ok()?;
    let meters = match unit_part.trim() {
        "" | "m" | "meter" | "meters" | "mtr" | "mtrs" => value,
        "km" | "kms" | "kilometer" | "kilometers" => value * 1000.0,
        _ => return None,
    };

    if meters.is_finite() && meters >= 0.0 {
        Some(meters.round() as i32)
    } else {
        None
    }
}

/// Derive a facility distance in meters. Priority: an explicit numeric
/// value, then a parseable distance string, then the Haversine distance
/// when both the facility and the property carry coordinates.
pub fn resolve_distance(
    distance_m: Option<i32>,
    distance_text: Option<&str>,
    facility_coords: Option<(f64, f64)>,
    property_coords: Option<(f64, f64)>,
) -> Option<i32> {
    if let Some(d) = distance_m.filter(|d| *d >= 0) {
        return Some(d);
    }
    if let Some(d) = distance_text.and_then(parse_distance_text) {
        return Some(d);
    }
    match (facility_coords, property_coords) {
        (Some((flat, flon)), Some((plat, plon))) => {
            Some(haversine_distance_m(plat, plon, flat, flon).round() as i32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_one_degree_of_longitude_at_equator() {
        // One degree of arc on the mean-radius sphere is ~111.195 km.
        let d = haversine_distance_m(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_195.0).abs() < 200.0, "got {}", d);
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        let d = haversine_distance_m(28.6139, 77.2090, 28.6139, 77.2090);
        assert!(d.abs() < 1e-6);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = haversine_distance_m(28.6139, 77.2090, 28.4595, 77.0266);
        let b = haversine_distance_m(28.4595, 77.0266, 28.6139, 77.2090);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn parse_distance_text_handles_units() {
        assert_eq!(parse_distance_text("500 m"), Some(500));
        assert_eq!(parse_distance_text("500m"), Some(500));
        assert_eq!(parse_distance_text("1.2 km"), Some(1200));
        assert_eq!(parse_distance_text("1.2km"), Some(1200));
        assert_eq!(parse_distance_text("2 kms"), Some(2000));
        assert_eq!(parse_distance_text("750"), Some(750));
    }

    #[test]
    fn parse_distance_text_rejects_garbage() {
        assert_eq!(parse_distance_text(""), None);
        assert_eq!(parse_distance_text("nearby"), None);
        assert_eq!(parse_distance_text("5 miles"), None);
        assert_eq!(parse_distance_text("-100 m"), None);
    }

    #[test]
    fn resolve_distance_prefers_explicit_value() {
        assert_eq!(
            resolve_distance(Some(300), Some("1 km"), None, None),
            Some(300)
        );
    }

    #[test]
    fn resolve_distance_falls_back_to_text_then_coordinates() {
        assert_eq!(resolve_distance(None, Some("1 km"), None, None), Some(1000));

        let derived = resolve_distance(
            None,
            None,
            Some((0.0, 1.0)),
            Some((0.0, 0.0)),
        );
        let d = derived.expect("coordinates should yield a distance");
        assert!((d - 111_195).abs() < 200, "got {}", d);
    }

    #[test]
    fn resolve_distance_none_when_nothing_usable() {
        assert_eq!(resolve_distance(None, None, None, None), None);
        assert_eq!(resolve_distance(Some(-5), Some("far"), None, None), None);
        // Facility coordinates alone are not enough.
        assert_eq!(
            resolve_distance(None, None, Some((28.6, 77.2)), None),
            None
        );
    }
}
