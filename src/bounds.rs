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

//! The bounds module contains the `LatLngBounds` type: a rectangle on the
//! surface of a sphere bounded by two latitudes and two longitudes.
//!
//! The latitudes form a simple interval: `LatBounds`.
//! The longitudes form an interval on a circle: `LngBounds`, which may cross
//! the antimeridian, in which case the south west longitude is greater than
//! the north east longitude.
//!
//! # Examples
//! ```
//! use spherical_geometry::bounds::LatLngBounds;
//! use spherical_geometry::latlong::LatLng;
//!
//! let sw = LatLng::new(-20.0, 170.0).unwrap();
//! let ne = LatLng::new(-10.0, -170.0).unwrap();
//! let mut bounds = LatLngBounds::new(&sw, &ne);
//! assert!(bounds.contains(&LatLng::new(-15.0, 180.0).unwrap()));
//! assert!(!bounds.contains(&LatLng::new(-15.0, 0.0).unwrap()));
//!
//! bounds.extend(&LatLng::new(-25.0, -165.0).unwrap());
//! assert_eq!("-25,170,-10,-165", bounds.to_url_value(6));
//! ```

pub mod lat_bounds;
pub mod lng_bounds;

use crate::error::Error;
use crate::latlong::{LatLng, DEFAULT_URL_PRECISION};
use crate::trig::{clamp_latitude, wrap_longitude, Degrees};
use crate::Validate;
use contracts::debug_ensures;
use lat_bounds::LatBounds;
use lng_bounds::LngBounds;
use std::fmt;
use std::str::FromStr;

/// A rectangular region on the sphere.
#[derive(Clone, Copy, Debug)]
pub struct LatLngBounds {
    lat: LatBounds,
    lng: LngBounds,
}

impl Default for LatLngBounds {
    /// The empty region.
    fn default() -> Self {
        Self {
            lat: LatBounds::new(1.0, -1.0),
            lng: LngBounds::new(180.0, -180.0),
        }
    }
}

impl Validate for LatLngBounds {
    /// Test whether the latitudes lie in the range: -90.0 <= lat <= 90.0
    /// and the longitudes in the range: -180.0 <= lng <= 180.0
    fn is_valid(&self) -> bool {
        self.is_empty()
            || (Degrees::is_latitude(self.lat.sw())
                && Degrees::is_latitude(self.lat.ne())
                && (-180.0..=180.0).contains(&self.lng.sw())
                && (-180.0..=180.0).contains(&self.lng.ne()))
    }
}

impl LatLngBounds {
    /// Construct a `LatLngBounds` from its south west and north east corners.
    ///
    /// The latitudes are clamped. If the north east longitude is a full
    /// circle or more East of the south west longitude, the bounds contain
    /// every longitude, otherwise both longitudes are wrapped.
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn new(sw: &LatLng, ne: &LatLng) -> Self {
        let lat = LatBounds::new(clamp_latitude(sw.lat()), clamp_latitude(ne.lat()));
        let lng = if ne.lng() - sw.lng() >= 360.0 {
            LngBounds::new(-180.0, 180.0)
        } else {
            LngBounds::new(wrap_longitude(sw.lng()), wrap_longitude(ne.lng()))
        };

        Self { lat, lng }
    }

    /// Construct a `LatLngBounds` containing a single point.
    #[must_use]
    pub fn from_point(point: &LatLng) -> Self {
        Self::new(point, point)
    }

    /// Construct the `LatLngBounds` of a sequence of points, by extending
    /// the empty region by each point in turn.
    #[must_use]
    pub fn from_points(points: &[LatLng]) -> Self {
        let mut bounds = Self::default();
        for point in points {
            bounds.extend(point);
        }
        bounds
    }

    /// The latitude interval.
    #[must_use]
    pub const fn lat_bounds(&self) -> &LatBounds {
        &self.lat
    }

    /// The longitude interval.
    #[must_use]
    pub const fn lng_bounds(&self) -> &LngBounds {
        &self.lng
    }

    /// Whether the bounds contain no positions,
    /// i.e. either the latitude or longitude interval is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty() || self.lng.is_empty()
    }

    /// The centre of the bounds, allowing for bounds that cross the antimeridian.
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::normalised(self.lat.midpoint(), self.lng.midpoint())
    }

    /// The south west corner, as stored.
    #[must_use]
    pub fn south_west(&self) -> LatLng {
        LatLng::unwrapped(self.lat.sw(), self.lng.sw())
    }

    /// The north east corner, as stored.
    #[must_use]
    pub fn north_east(&self) -> LatLng {
        LatLng::unwrapped(self.lat.ne(), self.lng.ne())
    }

    /// The latitude and longitude spans of the bounds in degrees.
    /// Note: the result is a pair of spans, not a position.
    /// # Examples
    /// ```
    /// use spherical_geometry::bounds::LatLngBounds;
    /// use spherical_geometry::latlong::LatLng;
    ///
    /// let sw = LatLng::new(10.0, 170.0).unwrap();
    /// let ne = LatLng::new(20.0, -170.0).unwrap();
    /// let span = LatLngBounds::new(&sw, &ne).to_span();
    /// assert_eq!(10.0, span.lat());
    /// assert_eq!(20.0, span.lng());
    /// ```
    #[must_use]
    pub fn to_span(&self) -> LatLng {
        let lat = if self.lat.is_empty() {
            0.0
        } else {
            self.lat.ne() - self.lat.sw()
        };
        let lng = if self.lng.is_empty() {
            0.0
        } else if self.lng.is_wrapping() {
            360.0 - (self.lng.sw() - self.lng.ne())
        } else {
            self.lng.ne() - self.lng.sw()
        };

        LatLng::unwrapped(lat, lng)
    }

    /// Whether the position lies within the bounds, edges included.
    #[must_use]
    pub fn contains(&self, point: &LatLng) -> bool {
        self.lat.contains(point.lat()) && self.lng.contains(point.lng())
    }

    /// Whether the bounds overlap both in latitude and in longitude.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.lat.intersects(&other.lat) && self.lng.intersects(&other.lng)
    }

    /// Extend the bounds to contain `point`.
    ///
    /// returns the extended bounds, so that calls may be chained.
    pub fn extend(&mut self, point: &LatLng) -> &mut Self {
        self.lat.extend(point.lat());
        self.lng.extend(point.lng());
        self
    }

    /// Extend the bounds by the south west and north east corners of `other`.
    ///
    /// Note: this is not the exact union of two regions: where the longitudes
    /// overlap at both ends the result can be smaller than the true union.
    /// An empty `other` leaves the bounds unchanged: its corners, (1, 180)
    /// and (-1, -180), are placeholders, not positions.
    ///
    /// returns the extended bounds, so that calls may be chained.
    pub fn union(&mut self, other: &Self) -> &mut Self {
        if other.is_empty() {
            log::trace!("union with empty bounds ignored");
            return self;
        }

        self.extend(&other.south_west());
        self.extend(&other.north_east())
    }

    /// Compare with a bounds that may be absent.
    ///
    /// returns false if `other` is None, otherwise whether they are equal.
    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// The url value of the bounds: the south west and north east url values
    /// separated by a comma.
    #[must_use]
    pub fn to_url_value(&self, precision: usize) -> String {
        format!(
            "{},{}",
            self.south_west().to_url_value(precision),
            self.north_east().to_url_value(precision)
        )
    }

    /// The url value of the bounds to `DEFAULT_URL_PRECISION` decimal places.
    #[must_use]
    pub fn to_url_value_default(&self) -> String {
        self.to_url_value(DEFAULT_URL_PRECISION)
    }
}

impl PartialEq for LatLngBounds {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl fmt::Display for LatLngBounds {
    /// Format a `LatLngBounds` as: "((sw lat, sw lng), (ne lat, ne lng))".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.south_west(), self.north_east())
    }
}

impl FromStr for LatLngBounds {
    type Err = Error;

    /// Parse a `LatLngBounds` from a url value: "sw lat,sw lng,ne lat,ne lng".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        match fields[..] {
            [sw_lat, sw_lng, ne_lat, ne_lng] => {
                let sw: LatLng = [sw_lat, sw_lng].join(",").parse()?;
                let ne: LatLng = [ne_lat, ne_lng].join(",").parse()?;
                Ok(Self::new(&sw, &ne))
            }
            _ => Err(Error::InvalidArgumentType {
                value: s.to_string(),
            }),
        }
    }
}
