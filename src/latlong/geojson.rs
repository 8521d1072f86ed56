// Copyright (c) 2024 Via Technology Ltd. All Rights Reserved.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `geojson` module converts between `LatLng`s and the
//! [geo-types](https://crates.io/crates/geo-types) used for
//! [GeoJSON](https://geojson.org/) geometries,
//! see: [RFC7946](https://datatracker.ietf.org/doc/html/rfc7946).
//!
//! Note: `GeoJSON` coordinate order is **lng, lat**, i.e. x is the longitude.
//! Coordinates are normalised on conversion to `LatLng`, so
//! [Antimeridian Cutting](https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.9)
//! is not required.

use crate::error::Error;
use crate::latlong::{LatLng, LatLngs};

impl TryFrom<&geo_types::Coord> for LatLng {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Coord` to a `LatLng`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        Self::new(item.y, item.x)
    }
}

impl From<&LatLng> for geo_types::Coord {
    fn from(a: &LatLng) -> Self {
        Self { x: a.lng(), y: a.lat() }
    }
}

impl TryFrom<&geo_types::Point> for LatLng {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Point` to a `LatLng`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&LatLng> for geo_types::Point {
    fn from(a: &LatLng) -> Self {
        Self::new(a.lng(), a.lat())
    }
}

impl TryFrom<&geo_types::LineString> for LatLngs {
    type Error = Error;

    /// Attempt to convert a `GeoJSON LineString` to `LatLngs`.
    fn try_from(values: &geo_types::LineString) -> Result<Self, Self::Error> {
        values
            .0
            .iter()
            .map(LatLng::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<&LatLngs> for geo_types::LineString {
    fn from(values: &LatLngs) -> Self {
        Self::new(values.0.iter().map(geo_types::Coord::from).collect())
    }
}

impl TryFrom<&geo_types::Polygon> for LatLngs {
    type Error = Error;

    /// Attempt to convert the exterior ring of a `GeoJSON Polygon` to `LatLngs`,
    /// e.g. to calculate its area.
    fn try_from(value: &geo_types::Polygon) -> Result<Self, Self::Error> {
        Self::try_from(value.exterior())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{line_string, polygon};

    #[test]
    fn test_geo_types_coord_invalid() {
        let bad_latitude = geo_types::Coord::from((0.0, f64::NAN));
        let latlng = LatLng::try_from(&bad_latitude);
        assert!(matches!(latlng, Err(Error::InvalidNumber { .. })));

        let bad_longitude = geo_types::Coord::from((f64::INFINITY, 0.0));
        let latlng = LatLng::try_from(&bad_longitude);
        assert!(latlng.is_err());
    }

    #[test]
    fn test_geo_types_coord() {
        let latlng = LatLng::new(80.0, 160.0).unwrap();

        let coord = geo_types::Coord::from((160.0, 80.0));
        let result = LatLng::try_from(&coord);
        assert_eq!(latlng, result.unwrap());

        let geo_result = geo_types::Coord::from(&latlng);
        assert_eq!(coord, geo_result);

        // out of range values are normalised
        let coord = geo_types::Coord::from((190.0, 91.0));
        let result = LatLng::try_from(&coord).unwrap();
        assert_eq!(90.0, result.lat());
        assert_eq!(-170.0, result.lng());
    }

    #[test]
    fn test_geo_types_point() {
        let latlng = LatLng::new(-33.5, 151.25).unwrap();

        let point = geo_types::Point::new(151.25, -33.5);
        let result = LatLng::try_from(&point);
        assert_eq!(latlng, result.unwrap());

        let geo_result = geo_types::Point::from(&latlng);
        assert_eq!(point, geo_result);
    }

    #[test]
    fn test_geo_types_linestring() {
        let line_string = line_string![
            (x: 35.0, y: 10.0),
            (x: 45.0, y: 45.0),
            (x: 15.0, y: 40.0),
            (x: 10.0, y: 20.0),
            (x: 35.0, y: 10.0)
        ];
        let result = LatLngs::try_from(&line_string).unwrap();
        assert!(result.is_closed_loop());
        assert_eq!(5, result.0.len());
        assert_eq!(LatLng::new(45.0, 45.0).unwrap(), result.0[1]);

        let geo_result = geo_types::LineString::from(&result);
        assert_eq!(line_string, geo_result);
    }

    #[test]
    fn test_geo_types_polygon() {
        let geo_polygon = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0)
        ];
        let result = LatLngs::try_from(&geo_polygon).unwrap();
        // geo-types closes the exterior ring
        assert!(result.is_closed_loop());
        assert_eq!(5, result.0.len());
    }
}
