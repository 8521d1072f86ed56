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

//! The trig module contains types and functions for normalising latitudes
//! and longitudes and for performing trigonometric calculations on them.

#![allow(clippy::float_cmp)]

use super::{clamp, Validate};
use contracts::{debug_ensures, debug_invariant, debug_requires};
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Clamp a latitude into the range: -90.0 <= value <= 90.0
/// # Examples
/// ```
/// use spherical_geometry::trig::clamp_latitude;
///
/// assert_eq!(90.0, clamp_latitude(100.0));
/// assert_eq!(-90.0, clamp_latitude(-90.5));
/// assert_eq!(45.0, clamp_latitude(45.0));
/// ```
#[debug_requires(!lat.is_nan())]
#[must_use]
pub fn clamp_latitude(lat: f64) -> f64 {
    clamp(lat, -90.0, 90.0)
}

/// Wrap a longitude into the range: -180.0 < value <= 180.0
///
/// 180.0 and -180.0 are the same meridian, it is always returned as 180.0.
/// # Examples
/// ```
/// use spherical_geometry::trig::wrap_longitude;
///
/// assert_eq!(180.0, wrap_longitude(180.0));
/// assert_eq!(180.0, wrap_longitude(-180.0));
/// assert_eq!(-160.0, wrap_longitude(200.0));
/// assert_eq!(0.0, wrap_longitude(720.0));
/// ```
#[debug_ensures(ret.is_nan() || Degrees::is_longitude(ret))]
#[must_use]
pub fn wrap_longitude(lng: f64) -> f64 {
    if lng == 180.0 {
        return lng;
    }

    let wrapped = ((lng + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a normalised longitude.
    /// I.e. whether it lies in the range: -180.0 < value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        -180.0 < value && value <= 180.0
    }

    /// Wrap a Degrees value into the range: -180.0 < value <= 180.0
    /// # Examples
    /// ```
    /// use spherical_geometry::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(-360.0).wrap().0);
    /// assert_eq!(180.0, Degrees(-180.0).wrap().0);
    /// assert_eq!(180.0, Degrees(180.0).wrap().0);
    /// assert_eq!(-170.0, Degrees(550.0).wrap().0);
    /// ```
    #[must_use]
    pub fn wrap(self) -> Self {
        Self(wrap_longitude(self.0))
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is a normalised longitude.
    /// I.e. whether it lies in the range: -180.0 < value <= 180.0
    fn is_valid(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use spherical_geometry::trig::{Degrees, Radians};
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Sub for Degrees {
    type Output = Self;

    /// Subtract two angles in Degrees, wraps around +/- 180 degrees.
    /// # Examples
    /// ```
    /// use spherical_geometry::trig::Degrees;
    ///
    /// let angle_m120 = Degrees(-120.0);
    /// let angle_120 = Degrees(120.0);
    /// let result = angle_m120 - angle_120;
    /// assert_eq!(angle_120, result);
    /// ```
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).wrap()
    }
}

/// The `UnitNegRange` newtype an f64.
/// A valid `UnitNegRange` value lies between -1.0 and +1.0 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct UnitNegRange(pub f64);

impl Validate for UnitNegRange {
    /// Test whether a `UnitNegRange` is valid.
    /// I.e. whether it lies in the range: -1.0 <= value <= 1.0
    fn is_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.0)
    }
}

impl UnitNegRange {
    /// Clamp value into the valid range: -1.0 to +1.0 inclusive.
    /// # Examples
    /// ```
    /// use spherical_geometry::trig::UnitNegRange;
    ///
    /// assert_eq!(-1.0, UnitNegRange::clamp(-1.0 - std::f64::EPSILON).0);
    /// assert_eq!(-0.5, UnitNegRange::clamp(-0.5).0);
    /// assert_eq!(1.0, UnitNegRange::clamp(1.0 + std::f64::EPSILON).0);
    /// ```
    #[must_use]
    pub fn clamp(value: f64) -> Self {
        Self(clamp(value, -1.0, 1.0))
    }
}

/// Swap the sine into the cosine of an Angle and vice versa.
/// Uses the identity sin<sup>2</sup> + cos<sup>2</sup> = 1
#[must_use]
pub fn swap_sin_cos(a: UnitNegRange) -> UnitNegRange {
    UnitNegRange::clamp(libm::sqrt((1.0 - a.0) * (1.0 + a.0)))
}

/// An angle represented by it's sine and cosine as `UnitNegRanges`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    /// The sine of the angle.
    s: UnitNegRange,
    /// The cosine of the angle.
    c: UnitNegRange,
}

impl Default for Angle {
    /// Zero degrees or radians.
    fn default() -> Self {
        Self {
            s: UnitNegRange(0.0),
            c: UnitNegRange(1.0),
        }
    }
}

impl Validate for Angle {
    /// Test whether an Angle is valid, i.e. whether s^2 + c^2 is approx = 1.0.
    fn is_valid(&self) -> bool {
        const MIN_SQ_LENGTH: f64 = 1.0 - 32.0 * f64::EPSILON;
        const MAX_SQ_LENGTH: f64 = 1.0 + 32.0 * f64::EPSILON;
        let sq_length = self.s.0 * self.s.0 + self.c.0 * self.c.0;
        (MIN_SQ_LENGTH..=MAX_SQ_LENGTH).contains(&sq_length)
    }
}

#[debug_invariant(self.is_valid())]
impl Angle {
    /// Construct an Angle from y and x values.
    /// Normalises the values, a zero length vector is the zero Angle.
    #[must_use]
    pub fn from_y_x(sine: f64, cosine: f64) -> Self {
        let length = libm::hypot(sine, cosine);

        if length > f64::EPSILON {
            Self {
                s: UnitNegRange::clamp(sine / length),
                c: UnitNegRange::clamp(cosine / length),
            }
        } else {
            Self::default()
        }
    }

    /// The sine of the Angle.
    #[must_use]
    pub fn sin(self) -> f64 {
        self.s.0
    }

    /// The cosine of the Angle.
    #[must_use]
    pub fn cos(self) -> f64 {
        self.c.0
    }

    /// The Angle in Radians.
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(libm::atan2(self.s.0, self.c.0))
    }

    /// Test whether an Angle value is a valid latitude,
    /// i.e. whether: 0.0 <= Angle.cos
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        0.0 <= self.c.0
    }
}

impl From<Degrees> for Angle {
    /// Construct an Angle from an angle in Degrees.
    /// The sine is calculated in the first octant to minimise round-off errors,
    /// so that 30, 45, 60 and 90 degrees (and their multiples) are exact,
    /// see GeographicLib::Math::sincosd.
    /// # Examples
    /// ```
    /// use spherical_geometry::trig::{Angle, Degrees};
    ///
    /// let angle_90 = Angle::from(Degrees(90.0));
    /// assert_eq!(1.0, angle_90.sin());
    /// assert_eq!(0.0, angle_90.cos());
    /// ```
    fn from(a: Degrees) -> Self {
        let rq = libm::remquo(a.0, 90.0);

        let mut sine = UnitNegRange(0.0);
        let mut cosine = UnitNegRange(1.0);
        let abs_angle = libm::fabs(rq.0);
        if abs_angle > 0.0 {
            if abs_angle < 45.0 {
                sine = UnitNegRange(if abs_angle == 30.0 {
                    0.5
                } else {
                    libm::sin(abs_angle.to_radians())
                });
                cosine = swap_sin_cos(sine);
            } else if abs_angle > 45.0 {
                cosine = UnitNegRange(if abs_angle == 60.0 {
                    0.5
                } else {
                    libm::cos(abs_angle.to_radians())
                });
                sine = swap_sin_cos(cosine);
            } else {
                sine = UnitNegRange(std::f64::consts::FRAC_1_SQRT_2);
                cosine = sine;
            }

            if rq.0 < 0.0 {
                sine = UnitNegRange(0.0 - sine.0);
            }
        }

        #[allow(clippy::cast_sign_loss)]
        let q = rq.1 as u32;
        match q & 3 {
            0 => Self { s: sine, c: cosine },
            1 => Self {
                s: cosine,
                c: UnitNegRange(0.0 - sine.0),
            },
            2 => Self {
                s: UnitNegRange(0.0 - sine.0),
                c: UnitNegRange(0.0 - cosine.0),
            },
            _ => Self {
                s: UnitNegRange(0.0 - cosine.0),
                c: sine,
            },
        }
    }
}

impl From<Angle> for Degrees {
    /// Convert an Angle to Degrees in the range: -180.0 <= value <= 180.0
    fn from(a: Angle) -> Self {
        Self::from(a.to_radians())
    }
}
