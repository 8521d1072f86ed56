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

//! The sphere module contains the `Point` type: a position on the unit
//! sphere as a Cartesian vector, and functions to convert `LatLng`s to and
//! from Points and to find the orientation of three Points.

extern crate nalgebra as na;
use crate::latlong::LatLng;
use crate::trig::{Angle, Degrees, Radians};
use crate::Validate;
use contracts::{debug_ensures, debug_requires};

/// A Point is a nalgebra Vector3.
pub type Point = na::Vector3<f64>;

/// Create a Point from latitude and longitude
/// @pre |lat| <= 90.0 degrees.
/// * `lat` - the latitude.
/// * `lng` - the longitude.
///
/// returns a Point on the unit sphere.
#[debug_requires(lat.is_valid_latitude())]
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn to_sphere(lat: Angle, lng: Angle) -> Point {
    Point::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
}

impl From<&LatLng> for Point {
    /// Convert a `LatLng` to a Point on the unit sphere
    fn from(value: &LatLng) -> Self {
        to_sphere(
            Angle::from(Degrees(value.lat())),
            Angle::from(Degrees(value.lng())),
        )
    }
}

/// Calculate the latitude of a Point.
/// Note: the Point does not need to be a unit vector.
#[must_use]
pub fn latitude(a: &Point) -> Degrees {
    Degrees::from(Radians(libm::atan2(a.z, libm::hypot(a.x, a.y))))
}

/// Calculate the longitude of a Point.
/// Note: the Point does not need to be a unit vector.
#[must_use]
pub fn longitude(a: &Point) -> Degrees {
    Degrees::from(Radians(libm::atan2(a.y, a.x)))
}

/// Determine whether a Point is a unit vector.
///
/// returns true if Point is a unit vector, false otherwise.
#[must_use]
pub fn is_unit(a: &Point) -> bool {
    const MIN_POINT_SQ_LENGTH: f64 = 1.0 - 12.0 * f64::EPSILON;
    const MAX_POINT_SQ_LENGTH: f64 = 1.0 + 12.0 * f64::EPSILON;

    (MIN_POINT_SQ_LENGTH..=MAX_POINT_SQ_LENGTH).contains(&(a.norm()))
}

impl Validate for Point {
    /// Test whether a Point is valid.
    /// I.e. whether the Point is a unit vector.
    fn is_valid(&self) -> bool {
        is_unit(self)
    }
}

/// Calculate the scalar triple product of three Points: a . (b x c)
///
/// It is positive if a, b, c turn anti-clockwise seen from outside the
/// sphere, negative if clockwise and zero if they lie on a great circle.
#[must_use]
pub fn triple_product(a: &Point, b: &Point, c: &Point) -> f64 {
    a.dot(&b.cross(c))
}

/// The orientation of three Points.
///
/// returns 1.0 if the triple product is positive, -1.0 otherwise.
#[must_use]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> f64 {
    if triple_product(a, b, c) > 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> Point {
        Point::from(&LatLng::new(lat, lng).unwrap())
    }

    #[test]
    fn test_point_from_latlng() {
        let g_eq = point(0.0, 0.0);
        assert!(is_unit(&g_eq));
        assert_eq!(Point::new(1.0, 0.0, 0.0), g_eq);

        let north_pole = point(90.0, 0.0);
        assert!(north_pole.is_valid());
        assert_eq!(1.0, north_pole.z);

        let idl_eq = point(0.0, 180.0);
        assert!(is_unit(&idl_eq));
        assert_eq!(-1.0, idl_eq.x);
        assert_eq!(0.0, idl_eq.y);

        let a = point(-33.5, 151.25);
        assert!(a.is_valid());
        assert!(!(2.0 * a).is_valid());
    }

    #[test]
    fn test_point_latitude_longitude() {
        let a = point(-33.5, 151.25);
        assert!(libm::fabs(-33.5 - latitude(&a).0) < 1.0e-12);
        assert!(libm::fabs(151.25 - longitude(&a).0) < 1.0e-12);

        // scaling does not change the position
        let b = 3.0 * a;
        assert!(libm::fabs(-33.5 - latitude(&b).0) < 1.0e-12);
        assert!(libm::fabs(151.25 - longitude(&b).0) < 1.0e-12);

        let south_pole = point(-90.0, 0.0);
        assert_eq!(-90.0, latitude(&south_pole).0);
    }

    #[test]
    fn test_triple_product() {
        let x = point(0.0, 0.0);
        let y = point(0.0, 90.0);
        let z = point(90.0, 0.0);

        assert_eq!(1.0, triple_product(&x, &y, &z));
        assert_eq!(1.0, triple_product(&y, &z, &x));
        assert_eq!(-1.0, triple_product(&z, &y, &x));

        // points on the equator
        let e = point(0.0, 45.0);
        assert!(libm::fabs(triple_product(&x, &e, &y)) < f64::EPSILON);
    }

    #[test]
    fn test_orientation() {
        let x = point(0.0, 0.0);
        let y = point(0.0, 90.0);
        let z = point(90.0, 0.0);

        assert_eq!(1.0, orientation(&x, &y, &z));
        assert_eq!(-1.0, orientation(&z, &y, &x));

        // degenerate triangles are not positive
        assert_eq!(-1.0, orientation(&x, &x, &y));
    }
}
