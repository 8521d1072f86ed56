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

//! The geodesy module contains functions for calculating great circle
//! distances, headings, positions, path lengths and polygon areas on a
//! spherical Earth of radius `EARTH_RADIUS`.
//!
//! Distances are in metres, angles in degrees. Headings are measured
//! clockwise from North in the range: -180.0 < heading <= 180.0
//!
//! # Examples
//! ```
//! use spherical_geometry::geodesy::{compute_heading, compute_offset, EARTH_RADIUS};
//! use spherical_geometry::latlong::LatLng;
//!
//! let a = LatLng::new(0.0, 0.0).unwrap();
//! let b = LatLng::new(0.0, 90.0).unwrap();
//! assert_eq!(90.0, compute_heading(&a, &b));
//!
//! let quarter = 0.5 * std::f64::consts::PI * EARTH_RADIUS;
//! let c = compute_offset(&a, quarter, 90.0).unwrap();
//! assert_eq!(b, c);
//! ```

use crate::bounds::LatLngBounds;
use crate::clamp;
use crate::error::Error;
use crate::latlong::LatLng;
use crate::sphere::{self, Point};
use crate::trig::{wrap_longitude, Angle, Degrees, Radians};
use contracts::debug_ensures;

/// The radius of the sphere in metres: the WGS84 equatorial radius.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// The sine of the angular distance below which points are too close
/// to interpolate between.
pub const INTERPOLATION_MIN_SIN: f64 = 1.0e-6;

/// Calculate the great circle distance between two positions on the unit
/// sphere, using the haversine formula.
/// * `a`, `b` - the positions.
///
/// returns the distance in Radians: 0.0 <= distance <= PI
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
#[must_use]
pub fn distance_in_radians(a: &LatLng, b: &LatLng) -> Radians {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let sin_half_dlat = libm::sin(0.5 * (lat_b - lat_a));
    let sin_half_dlng = libm::sin(0.5 * (b.lng() - a.lng()).to_radians());

    let h = sin_half_dlat * sin_half_dlat
        + libm::cos(lat_a) * libm::cos(lat_b) * sin_half_dlng * sin_half_dlng;
    Radians(2.0 * libm::asin(libm::sqrt(clamp(h, 0.0, 1.0))))
}

/// Calculate the great circle distance between two positions in metres.
/// # Examples
/// ```
/// use spherical_geometry::geodesy::compute_distance_between;
/// use spherical_geometry::latlong::LatLng;
///
/// let a = LatLng::new(0.0, 0.0).unwrap();
/// let b = LatLng::new(0.0, 1.0).unwrap();
/// let distance = compute_distance_between(&a, &b);
/// assert!((distance - 111_319.490_793).abs() < 1.0e-3);
/// ```
#[must_use]
pub fn compute_distance_between(a: &LatLng, b: &LatLng) -> f64 {
    distance_in_radians(a, b).0 * EARTH_RADIUS
}

/// Calculate the initial heading of the great circle from `from` to `to`.
///
/// returns the heading in degrees clockwise from North,
/// 0.0 if the positions are the same.
#[debug_ensures(Degrees::is_longitude(ret))]
#[must_use]
pub fn compute_heading(from: &LatLng, to: &LatLng) -> f64 {
    let lat_from = Angle::from(Degrees(from.lat()));
    let lat_to = Angle::from(Degrees(to.lat()));
    let dlng = Angle::from(Degrees(to.lng()) - Degrees(from.lng()));

    let y = dlng.sin() * lat_to.cos();
    let x = lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * dlng.cos();
    wrap_longitude(Degrees::from(Angle::from_y_x(y, x)).0)
}

/// Calculate the position a distance along the great circle from a
/// position on an initial heading.
/// * `from` - the start position.
/// * `distance` - the distance in metres.
/// * `heading` - the initial heading in degrees clockwise from North.
///
/// # Errors
/// `Error::InvalidNumber` if the distance or heading is not a finite number.
pub fn compute_offset(from: &LatLng, distance: f64, heading: f64) -> Result<LatLng, Error> {
    if !distance.is_finite() || !heading.is_finite() {
        return Err(Error::InvalidNumber {
            lat: f64::NAN,
            lng: f64::NAN,
        });
    }

    let d = distance / EARTH_RADIUS;
    let (sin_d, cos_d) = (libm::sin(d), libm::cos(d));
    let h = heading.to_radians();
    let (sin_h, cos_h) = (libm::sin(h), libm::cos(h));
    let lat = Angle::from(Degrees(from.lat()));

    let sin_lat = cos_d * lat.sin() + sin_d * lat.cos() * cos_h;
    let lat_to = libm::asin(clamp(sin_lat, -1.0, 1.0));
    let dlng = libm::atan2(sin_h * sin_d * lat.cos(), cos_d - lat.sin() * sin_lat);

    LatLng::new(lat_to.to_degrees(), from.lng() + dlng.to_degrees())
}

/// Calculate the position a fraction of the way along the great circle
/// between two positions, by spherical linear interpolation.
/// * `from`, `to` - the start and end positions.
/// * `fraction` - 0.0 is `from`, 1.0 is `to`.
///
/// returns `from` if the positions are the same or opposite.
///
/// # Errors
/// `Error::InvalidNumber` if the fraction is not a finite number.
///
/// # Examples
/// ```
/// use spherical_geometry::geodesy::interpolate;
/// use spherical_geometry::latlong::LatLng;
///
/// let a = LatLng::new(0.0, 0.0).unwrap();
/// let b = LatLng::new(0.0, 90.0).unwrap();
/// let c = interpolate(&a, &b, 0.5).unwrap();
/// assert_eq!(LatLng::new(0.0, 45.0).unwrap(), c);
/// ```
pub fn interpolate(from: &LatLng, to: &LatLng, fraction: f64) -> Result<LatLng, Error> {
    let d = distance_in_radians(from, to).0;
    let sin_d = libm::sin(d);
    if sin_d < INTERPOLATION_MIN_SIN {
        log::trace!("interpolate: {from} and {to} are too close to interpolate");
        return Ok(*from);
    }

    let a = libm::sin((1.0 - fraction) * d) / sin_d;
    let b = libm::sin(fraction * d) / sin_d;
    let p = a * Point::from(from) + b * Point::from(to);

    LatLng::new(sphere::latitude(&p).0, sphere::longitude(&p).0)
}

/// Calculate the length of a path in metres.
///
/// returns the sum of the distances between consecutive positions,
/// 0.0 if there are fewer than two positions.
#[must_use]
pub fn compute_length(path: &[LatLng]) -> f64 {
    path.iter()
        .zip(path.iter().skip(1))
        .map(|(a, b)| compute_distance_between(a, b))
        .sum()
}

/// Calculate the area of a spherical triangle relative to the unit sphere,
/// using L'Huilier's theorem.
/// * `a`, `b`, `c` - the vertices.
/// * `signed` - whether the result is signed by the orientation of the triangle.
///
/// returns the spherical excess in steradians, negative if `signed` and
/// the triangle is clockwise.
#[must_use]
pub fn spherical_excess(a: &LatLng, b: &LatLng, c: &LatLng, signed: bool) -> f64 {
    let ab = distance_in_radians(a, b).0;
    let bc = distance_in_radians(b, c).0;
    let ca = distance_in_radians(c, a).0;
    let s = 0.5 * (ab + bc + ca);

    let product = libm::tan(0.5 * s)
        * libm::tan(0.5 * (s - ab))
        * libm::tan(0.5 * (s - bc))
        * libm::tan(0.5 * (s - ca));
    let excess = 4.0 * libm::atan(libm::sqrt(libm::fabs(product)));

    if signed {
        excess * sphere::orientation(&Point::from(a), &Point::from(b), &Point::from(c))
    } else {
        excess
    }
}

/// Calculate the area of a polygon in square metres.
/// The polygon is divided into triangles fanning out from the first vertex.
/// * `vertices` - the vertices of the polygon, it may be a closed loop.
/// * `signed` - whether the result is signed: positive if anti-clockwise.
///
/// returns the area, 0.0 if there are fewer than three vertices.
#[must_use]
pub fn compute_polygon_area(vertices: &[LatLng], signed: bool) -> f64 {
    match vertices {
        [first, rest @ ..] if rest.len() >= 2 => {
            let excess: f64 = rest
                .iter()
                .zip(rest.iter().skip(1))
                .map(|(b, c)| spherical_excess(first, b, c, signed))
                .sum();
            excess * EARTH_RADIUS * EARTH_RADIUS
        }
        _ => 0.0,
    }
}

/// Calculate the area of a polygon in square metres.
///
/// The area is the magnitude of the signed area, so triangles of the fan
/// with opposite orientations cancel. For a fan with mixed orientations
/// this is less than the sum of the unsigned triangle areas given by
/// `compute_polygon_area(vertices, false)`.
#[debug_ensures(ret >= 0.0)]
#[must_use]
pub fn compute_area(vertices: &[LatLng]) -> f64 {
    libm::fabs(compute_signed_area(vertices))
}

/// Calculate the signed area of a polygon in square metres:
/// positive if the vertices are anti-clockwise, negative if clockwise.
#[must_use]
pub fn compute_signed_area(vertices: &[LatLng]) -> f64 {
    compute_polygon_area(vertices, true)
}

/// Calculate the bounds of a square around a position.
/// * `centre` - the position.
/// * `radius` - the distance from the centre to the sides in metres.
///
/// Note: the longitude span grows without limit towards the poles.
/// Where it reaches 180 degrees or more, the bounds do not represent a
/// square; they are returned as calculated.
///
/// # Errors
/// `Error::InvalidNumber` if the radius is not a number.
pub fn compute_bounds(centre: &LatLng, radius: f64) -> Result<LatLngBounds, Error> {
    let angle = radius / EARTH_RADIUS;
    let dlat = angle.to_degrees();
    let dlng = (angle / libm::cos(centre.lat().to_radians())).to_degrees();
    if libm::fabs(dlng) >= 180.0 {
        log::debug!("compute_bounds: longitude half span {dlng} around {centre}");
    }

    let sw = LatLng::new(centre.lat() - dlat, centre.lng() - dlng)?;
    let ne = LatLng::new(centre.lat() + dlat, centre.lng() + dlng)?;
    Ok(LatLngBounds::new(&sw, &ne))
}
