// Overpass QL query construction.

use crate::location::Coordinates;

/// Search radius used when none is configured, in metres.
pub const DEFAULT_RADIUS_METERS: u32 = 2000;

/// Build the query for cafe nodes within `radius` metres of `center`.
pub fn cafes_around(center: Coordinates, radius: u32) -> String {
    format!(
        "[out:json];\nnode[\"amenity\"=\"cafe\"](around:{},{},{});\nout;",
        radius, center.latitude, center.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cafes_around() {
        let center = Coordinates::new(47.6062, -122.3321).unwrap();
        let query = cafes_around(center, DEFAULT_RADIUS_METERS);
        assert!(query.starts_with("[out:json];"));
        assert!(query.contains(r#"node["amenity"="cafe"](around:2000,47.6062,-122.3321);"#));
        assert!(query.ends_with("out;"));
    }
}
