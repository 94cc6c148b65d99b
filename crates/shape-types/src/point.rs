use serde::{Deserialize, Serialize};

/// A geographic point: longitude (x) then latitude (y), in degrees.
///
/// This is a plain value type with no identity beyond its coordinates.
/// Note that the field order here is independent of the wire order — the
/// encoded stream always stores latitude before longitude for each point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Construction and projection of a 2-D point from its coordinates.
///
/// The decode driver is generic over the caller's point type; anything that
/// can be built from a `(lon, lat)` pair and read back can be decoded into
/// directly, without converting through [`LonLat`].
///
/// Implemented for [`LonLat`] and for `(f64, f64)` tuples, where the tuple
/// order is `(lon, lat)` to match the constructed-point convention.
pub trait ShapePoint {
    fn from_lon_lat(lon: f64, lat: f64) -> Self;

    fn lon(&self) -> f64;

    fn lat(&self) -> f64;
}

impl ShapePoint for LonLat {
    fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

impl ShapePoint for (f64, f64) {
    fn from_lon_lat(lon: f64, lat: f64) -> Self {
        (lon, lat)
    }

    fn lon(&self) -> f64 {
        self.0
    }

    fn lat(&self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lonlat_accessors() {
        let p = LonLat::new(-122.123_456, 37.654_321);
        assert_eq!(p.lon(), -122.123_456);
        assert_eq!(p.lat(), 37.654_321);
    }

    #[test]
    fn tuple_is_lon_first() {
        let p = <(f64, f64)>::from_lon_lat(-120.2, 38.5);
        assert_eq!(p, (-120.2, 38.5));
        assert_eq!(p.lon(), -120.2);
        assert_eq!(p.lat(), 38.5);
    }

    #[test]
    fn serde_json_roundtrip() {
        // Encoded polylines commonly travel inside JSON payloads next to
        // their decoded form; the point type must serialize cleanly.
        let p = LonLat::new(2.3522, 48.8566);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"lon":2.3522,"lat":48.8566}"#);

        let back: LonLat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
