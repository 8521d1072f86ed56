// Copyright (c) 2018-2024 Via Technology Ltd.

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

//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! This library performs geodesic calculations on a sphere approximating
//! the Earth, with positions given as latitude and longitude in degrees.
//!
//! * `latlong` contains the `LatLng` coordinate type, which normalises
//!   latitudes (clamped) and longitudes (wrapped into the range -180 < lng <= 180).
//! * `bounds` contains `LatLngBounds`: a rectangular region on the sphere
//!   which may cross the antimeridian.
//! * `geodesy` contains the great circle functions: distance, heading,
//!   offset, interpolation, path length and polygon area.
//! * `trig` and `sphere` contain the angle and vector types the other
//!   modules are built on.
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.
//!
//! # Examples
//! ```
//! use spherical_geometry::geodesy::compute_distance_between;
//! use spherical_geometry::latlong::LatLng;
//!
//! let a = LatLng::new(0.0, 0.0).unwrap();
//! let b = LatLng::new(0.0, 1.0).unwrap();
//! let distance = compute_distance_between(&a, &b);
//! assert!((distance - 111_319.49).abs() < 1.0);
//! ```

pub mod bounds;
pub mod error;
pub mod geodesy;
pub mod latlong;
pub mod sphere;
pub mod trig;

pub use error::Error;

use contracts::{debug_ensures, debug_requires};

/// The tolerance used when comparing coordinates and bounds for equality.
pub const EQUALS_MARGIN_ERROR: f64 = 1.0e-9;

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_requires(min <= max)]
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a value is within tolerance of zero.
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value is within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    libm::fabs(reference - value) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        // value < min
        assert_eq!(clamp(-1.0 - f64::EPSILON, -1.0, 1.0), -1.0);
        // value > max
        assert_eq!(clamp(1.0 + f64::EPSILON, -1.0, 1.0), 1.0);
        // in range
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
        assert_eq!(clamp(-90.0, -90.0, 90.0), -90.0);
    }

    #[test]
    fn test_is_small() {
        assert!(is_small(0.0, EQUALS_MARGIN_ERROR));
        assert!(is_small(EQUALS_MARGIN_ERROR, EQUALS_MARGIN_ERROR));
        assert!(!is_small(2.0 * EQUALS_MARGIN_ERROR, EQUALS_MARGIN_ERROR));
    }

    #[test]
    fn test_is_within_tolerance() {
        // below minimum tolerance
        assert_eq!(
            false,
            is_within_tolerance(1.0 - 2.0 * f64::EPSILON, 1.0, f64::EPSILON)
        );

        // within minimum tolerance
        assert!(is_within_tolerance(1.0 - f64::EPSILON, 1.0, f64::EPSILON));

        // within maximum tolerance
        assert!(is_within_tolerance(1.0 + f64::EPSILON, 1.0, f64::EPSILON));

        // above maximum tolerance
        assert_eq!(
            false,
            is_within_tolerance(1.0 + 2.0 * f64::EPSILON, 1.0, f64::EPSILON)
        );
    }
}
