//! Geographic point input.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A latitude/longitude location in unprojected degrees (EPSG:4326).
///
/// Callers supply latitude first, but the geometry built from it is
/// `(x = longitude, y = latitude)`. See [`GeoPoint::to_geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a point from textual latitude and longitude.
    pub fn parse(lat: &str, lon: &str) -> Result<Self, InputError> {
        Ok(Self {
            lat: parse_coordinate("latitude", lat)?,
            lon: parse_coordinate("longitude", lon)?,
        })
    }

    /// Geometry in x/y order: longitude first.
    pub fn to_geometry(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// Parse one coordinate value. No range check is applied; only values
/// that are not finite numbers are rejected.
pub fn parse_coordinate(axis: &'static str, value: &str) -> Result<f64, InputError> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        axis,
        value: value.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(InputError::NotFinite {
            axis,
            value: value.to_string(),
        });
    }

    Ok(parsed)
}
