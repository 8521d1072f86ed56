// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.

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

//! The latlong module contains the `LatLng` type for representing positions
//! on the surface of a sphere by latitude and longitude in degrees.
//!
//! A `LatLng` constructed with `LatLng::new` is normalised: the latitude is
//! clamped to the range -90.0 <= lat <= 90.0 and the longitude is wrapped into
//! the range -180.0 < lng <= 180.0.
//!
//! `LatLngs` compare approximately: latitudes and longitudes are equal if
//! they are within `EQUALS_MARGIN_ERROR` of each other.
//!
//! The module also contains functions for serializing and deserializing
//! `LatLng` using [serde](https://crates.io/crates/serde) and for converting
//! to and from [geo-types](https://crates.io/crates/geo-types).

pub mod geojson;

use crate::error::Error;
use crate::trig::{clamp_latitude, wrap_longitude, Degrees};
use crate::{is_within_tolerance, Validate, EQUALS_MARGIN_ERROR};
use contracts::{debug_ensures, debug_requires};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The default number of decimal places of a url value.
pub const DEFAULT_URL_PRECISION: usize = 6;

/// The greatest precision that can be rounded without overflow.
const MAX_ROUNDING_PRECISION: usize = 15;

/// Round a value to a number of decimal places.
#[must_use]
fn round_to(value: f64, precision: usize) -> f64 {
    if precision > MAX_ROUNDING_PRECISION {
        value
    } else {
        #[allow(clippy::cast_precision_loss)]
        let factor = libm::pow(10.0, precision as f64);
        libm::round(value * factor) / factor
    }
}

/// Parse a coordinate value from a text field.
fn parse_value(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidArgumentType {
            value: text.to_string(),
        })
}

/// A position as a latitude and longitude pair in degrees.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng")]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

/// The serialized form of a `LatLng`, normalised on deserialization.
#[derive(Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = Error;

    fn try_from(value: RawLatLng) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}

impl Validate for LatLng {
    /// Test whether a `LatLng` is normalised.
    /// I.e. whether the latitude lies in the range: -90.0 <= lat <= 90.0
    /// and the longitude in the range: -180.0 < lng <= 180.0
    fn is_valid(&self) -> bool {
        Degrees::is_latitude(self.lat) && Degrees::is_longitude(self.lng)
    }
}

impl LatLng {
    /// Construct a normalised `LatLng`.
    /// * `lat` - the latitude in degrees, clamped to -90.0 <= lat <= 90.0
    /// * `lng` - the longitude in degrees, wrapped into -180.0 < lng <= 180.0
    ///
    /// # Errors
    /// `Error::InvalidNumber` if either value is NaN, or the longitude is infinite.
    ///
    /// # Examples
    /// ```
    /// use spherical_geometry::latlong::LatLng;
    ///
    /// let a = LatLng::new(100.0, 200.0).unwrap();
    /// assert_eq!(90.0, a.lat());
    /// assert_eq!(-160.0, a.lng());
    ///
    /// assert!(LatLng::new(f64::NAN, 0.0).is_err());
    /// ```
    #[debug_ensures(ret.as_ref().map_or(true, |a| a.is_valid()))]
    pub fn new(lat: f64, lng: f64) -> Result<Self, Error> {
        if lat.is_nan() || !lng.is_finite() {
            return Err(Error::InvalidNumber { lat, lng });
        }

        Ok(Self::normalised(lat, lng))
    }

    /// Construct a `LatLng` without normalising the values.
    /// For values already known to be valid, e.g. the corners of a bounds.
    ///
    /// # Errors
    /// `Error::InvalidNumber` if either value is not a finite number.
    pub fn new_unwrapped(lat: f64, lng: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !lng.is_finite() {
            Err(Error::InvalidNumber { lat, lng })
        } else {
            Ok(Self { lat, lng })
        }
    }

    /// Construct a normalised `LatLng` from values known to be numbers.
    #[debug_requires(!lat.is_nan() && lng.is_finite())]
    #[must_use]
    pub(crate) fn normalised(lat: f64, lng: f64) -> Self {
        Self {
            lat: clamp_latitude(lat),
            lng: wrap_longitude(lng),
        }
    }

    /// Construct a `LatLng` from values known to be numbers, unchanged.
    #[debug_requires(!lat.is_nan() && !lng.is_nan())]
    #[must_use]
    pub(crate) fn unwrapped(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// The longitude in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// The url value of the `LatLng`: "lat,lng" with the values rounded
    /// to `precision` decimal places.
    /// # Examples
    /// ```
    /// use spherical_geometry::latlong::LatLng;
    ///
    /// let a = LatLng::new(51.477_928_123, -0.001_545_678).unwrap();
    /// assert_eq!("51.477928,-0.001546", a.to_url_value(6));
    /// assert_eq!("51.48,-0", a.to_url_value(2));
    /// ```
    #[must_use]
    pub fn to_url_value(&self, precision: usize) -> String {
        format!(
            "{},{}",
            round_to(self.lat, precision),
            round_to(self.lng, precision)
        )
    }

    /// The url value of the `LatLng` to `DEFAULT_URL_PRECISION` decimal places.
    #[must_use]
    pub fn to_url_value_default(&self) -> String {
        self.to_url_value(DEFAULT_URL_PRECISION)
    }
}

impl PartialEq for LatLng {
    /// `LatLngs` are equal if both their latitudes and longitudes are within
    /// `EQUALS_MARGIN_ERROR` of each other.
    fn eq(&self, other: &Self) -> bool {
        is_within_tolerance(self.lat, other.lat, EQUALS_MARGIN_ERROR)
            && is_within_tolerance(self.lng, other.lng, EQUALS_MARGIN_ERROR)
    }
}

impl fmt::Display for LatLng {
    /// Format a `LatLng` as: "(lat, lng)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl FromStr for LatLng {
    type Err = Error;

    /// Parse a `LatLng` from a url value: "lat,lng".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(parse_value)
            .collect::<Result<Vec<f64>, Error>>()?;
        match values[..] {
            [lat, lng] => Self::new(lat, lng),
            _ => Err(Error::InvalidArgumentType {
                value: s.to_string(),
            }),
        }
    }
}

/// A collection of positions as latitude and longitude pairs.
/// Corresponds to a `GeoJSON` `LineString`.
#[derive(Clone, Debug, PartialEq)]
pub struct LatLngs(pub Vec<LatLng>);

impl LatLngs {
    /// Determine whether the `LatLngs` form a closed loop, i.e. is a
    /// [Polygon](https://docs.rs/geo-types/0.7.12/geo_types/geometry/struct.Polygon.html)
    /// `LineString`.
    ///
    /// returns true if a closed loop, false otherwise.
    #[must_use]
    pub fn is_closed_loop(&self) -> bool {
        (2 < self.0.len()) && (self.0.first() == self.0.last())
    }
}

/////////////////////////////////////////////////////////////////////////////
// Pairs of vectors: latitude vector and longitude vector

impl TryFrom<(&[f64], &[f64])> for LatLngs {
    type Error = Error;

    /// Attempt to convert a pair of f64 slices of values in Latitude, Longitude order.
    /// * `lats` latitudes
    /// * `lngs` longitudes
    ///
    /// return a vector of normalised `LatLngs`.
    fn try_from(values: (&[f64], &[f64])) -> Result<Self, Self::Error> {
        let (lats, lngs) = values;
        if lats.len() != lngs.len() {
            return Err(Error::InvalidArgumentType {
                value: format!("{} latitudes and {} longitudes", lats.len(), lngs.len()),
            });
        }

        lats.iter()
            .zip(lngs.iter())
            .map(|(&lat, &lng)| LatLng::new(lat, lng))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<LatLngs> for (Vec<f64>, Vec<f64>) {
    /// Convert `LatLngs` to a pair of latitude and longitude vectors.
    fn from(values: LatLngs) -> Self {
        values.0.iter().map(|a| (a.lat(), a.lng())).unzip()
    }
}
