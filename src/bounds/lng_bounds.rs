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

//! The `lng_bounds` module contains the `LngBounds` type: a closed interval
//! of longitudes on the circle -180.0 < lng <= 180.0
//!
//! Where the west (sw) longitude is greater than the east (ne) longitude,
//! the interval crosses the antimeridian: [sw, 180.0] and [-180.0, ne].
//!
//! The empty interval is represented by: sw - ne == 360.0, e.g. [180.0, -180.0].

#![allow(clippy::float_cmp)]

use crate::trig::wrap_longitude;
use crate::{is_small, EQUALS_MARGIN_ERROR};
use contracts::debug_requires;

/// The distance East around the circle from `from` to `to`, in degrees.
fn distance_east(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if delta >= 0.0 {
        delta
    } else {
        delta + 360.0
    }
}

/// -180.0 and 180.0 are the same longitude, 180.0 is used.
fn canonical(lng: f64) -> f64 {
    if lng == -180.0 {
        180.0
    } else {
        lng
    }
}

/// A closed interval of longitudes from west (sw) to east (ne).
#[derive(Clone, Copy, Debug)]
pub struct LngBounds {
    sw: f64,
    ne: f64,
}

impl LngBounds {
    /// Construct a `LngBounds` from west to east.
    /// A -180.0 end is changed to 180.0, unless it is the other end of a
    /// full circle: [-180.0, 180.0] or the empty interval: [180.0, -180.0].
    /// # Examples
    /// ```
    /// use spherical_geometry::bounds::lng_bounds::LngBounds;
    ///
    /// let a = LngBounds::new(-180.0, 10.0);
    /// assert_eq!(180.0, a.sw());
    /// assert!(a.is_wrapping());
    ///
    /// let full = LngBounds::new(-180.0, 180.0);
    /// assert_eq!(-180.0, full.sw());
    ///
    /// let empty = LngBounds::new(180.0, -180.0);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn new(sw: f64, ne: f64) -> Self {
        let sw = if sw == -180.0 && ne != 180.0 { 180.0 } else { sw };
        let ne = if ne == -180.0 && sw != 180.0 { 180.0 } else { ne };
        Self { sw, ne }
    }

    /// The western longitude.
    #[must_use]
    pub const fn sw(&self) -> f64 {
        self.sw
    }

    /// The eastern longitude.
    #[must_use]
    pub const fn ne(&self) -> f64 {
        self.ne
    }

    /// Whether the interval crosses the antimeridian.
    #[must_use]
    pub fn is_wrapping(&self) -> bool {
        self.sw > self.ne
    }

    /// Whether the interval is empty: sw - ne == 360.0
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sw - self.ne == 360.0
    }

    /// The longitude halfway between the ends, going East from sw.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        let midpoint = 0.5 * (self.sw + self.ne);
        if self.is_wrapping() {
            wrap_longitude(midpoint + 180.0)
        } else {
            midpoint
        }
    }

    /// Whether `lng` lies in the interval, ends included.
    /// -180.0 is treated as 180.0
    /// # Examples
    /// ```
    /// use spherical_geometry::bounds::lng_bounds::LngBounds;
    ///
    /// let a = LngBounds::new(170.0, -170.0);
    /// assert!(a.contains(-180.0));
    /// assert!(a.contains(175.0));
    /// assert!(!a.contains(0.0));
    /// ```
    #[must_use]
    pub fn contains(&self, lng: f64) -> bool {
        let lng = canonical(lng);
        if self.is_wrapping() {
            (lng >= self.sw || lng <= self.ne) && !self.is_empty()
        } else {
            self.sw <= lng && lng <= self.ne
        }
    }

    /// Whether the intervals overlap anywhere around the circle.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            false
        } else if self.is_wrapping() {
            other.is_wrapping() || other.sw <= self.ne || other.ne >= self.sw
        } else if other.is_wrapping() {
            other.sw <= self.ne || other.ne >= self.sw
        } else {
            other.sw <= self.ne && other.ne >= self.sw
        }
    }

    /// Grow the interval to contain `lng` by moving whichever end is nearer
    /// to it around the circle.
    /// An empty interval becomes the single longitude: [lng, lng].
    /// # Examples
    /// ```
    /// use spherical_geometry::bounds::lng_bounds::LngBounds;
    ///
    /// let mut a = LngBounds::new(-10.0, 10.0);
    /// a.extend(20.0);
    /// assert_eq!(20.0, a.ne());
    ///
    /// a.extend(-170.0);
    /// assert_eq!(-170.0, a.sw());
    /// ```
    #[debug_requires(!lng.is_nan())]
    pub fn extend(&mut self, lng: f64) {
        if self.contains(lng) {
            return;
        }

        let lng = canonical(lng);
        if self.is_empty() {
            self.sw = lng;
            self.ne = lng;
        } else if distance_east(lng, self.sw) < distance_east(self.ne, lng) {
            self.sw = lng;
        } else {
            self.ne = lng;
        }
    }
}

impl PartialEq for LngBounds {
    /// Empty intervals are equal, otherwise the sum of the differences of the
    /// ends around the circle must be within `EQUALS_MARGIN_ERROR`.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            is_small(
                libm::fabs(other.sw - self.sw) % 360.0 + libm::fabs(other.ne - self.ne) % 360.0,
                EQUALS_MARGIN_ERROR,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_bounds_new() {
        let a = LngBounds::new(-180.0, 10.0);
        assert_eq!(180.0, a.sw());
        assert_eq!(10.0, a.ne());

        let b = LngBounds::new(10.0, -180.0);
        assert_eq!(10.0, b.sw());
        assert_eq!(180.0, b.ne());
        assert!(!b.is_wrapping());

        let full = LngBounds::new(-180.0, 180.0);
        assert_eq!(-180.0, full.sw());
        assert_eq!(180.0, full.ne());
        assert!(!full.is_empty());
        assert!(!full.is_wrapping());

        let empty = LngBounds::new(180.0, -180.0);
        assert_eq!(180.0, empty.sw());
        assert_eq!(-180.0, empty.ne());
        assert!(empty.is_empty());
        assert!(empty.is_wrapping());
    }

    #[test]
    fn test_lng_bounds_midpoint() {
        assert_eq!(15.0, LngBounds::new(10.0, 20.0).midpoint());
        assert_eq!(180.0, LngBounds::new(170.0, -170.0).midpoint());
        assert_eq!(-175.0, LngBounds::new(170.0, -160.0).midpoint());
        assert_eq!(0.0, LngBounds::new(-180.0, 180.0).midpoint());
    }

    #[test]
    fn test_lng_bounds_contains_not_wrapping() {
        let a = LngBounds::new(-10.0, 10.0);
        assert!(!a.is_wrapping());
        assert!(a.contains(-10.0));
        assert!(a.contains(0.0));
        assert!(a.contains(10.0));
        assert!(!a.contains(10.5));
        assert!(!a.contains(180.0));
        assert!(!a.contains(-180.0));
    }

    #[test]
    fn test_lng_bounds_contains_wrapping() {
        let a = LngBounds::new(170.0, -170.0);
        assert!(a.is_wrapping());
        assert!(a.contains(180.0));
        assert!(a.contains(-180.0));
        assert!(a.contains(175.0));
        assert!(a.contains(-175.0));
        assert!(a.contains(170.0));
        assert!(a.contains(-170.0));
        assert!(!a.contains(0.0));
        assert!(!a.contains(169.0));
        assert!(!a.contains(-169.0));
    }

    #[test]
    fn test_lng_bounds_contains_empty() {
        let empty = LngBounds::new(180.0, -180.0);
        assert!(!empty.contains(180.0));
        assert!(!empty.contains(-180.0));
        assert!(!empty.contains(0.0));
    }

    #[test]
    fn test_lng_bounds_extend_not_wrapping() {
        let mut a = LngBounds::new(-10.0, 10.0);
        a.extend(20.0);
        assert_eq!(-10.0, a.sw());
        assert_eq!(20.0, a.ne());

        let mut b = LngBounds::new(-10.0, 10.0);
        b.extend(-170.0);
        assert_eq!(-170.0, b.sw());
        assert_eq!(10.0, b.ne());

        // equidistant: the east end moves
        let mut c = LngBounds::new(-10.0, 10.0);
        c.extend(180.0);
        assert_eq!(-10.0, c.sw());
        assert_eq!(180.0, c.ne());

        // contained: unchanged
        c.extend(0.0);
        assert_eq!(LngBounds::new(-10.0, 180.0), c);
    }

    #[test]
    fn test_lng_bounds_extend_across_antimeridian() {
        let mut a = LngBounds::new(160.0, 170.0);
        a.extend(-175.0);
        assert_eq!(160.0, a.sw());
        assert_eq!(-175.0, a.ne());
        assert!(a.is_wrapping());
        assert!(a.contains(180.0));

        let mut b = LngBounds::new(170.0, -170.0);
        b.extend(-160.0);
        assert_eq!(170.0, b.sw());
        assert_eq!(-160.0, b.ne());

        b.extend(150.0);
        assert_eq!(150.0, b.sw());
        assert_eq!(-160.0, b.ne());

        // already contained: unchanged
        b.extend(-180.0);
        assert_eq!(LngBounds::new(150.0, -160.0), b);
    }

    #[test]
    fn test_lng_bounds_extend_empty() {
        let mut a = LngBounds::new(180.0, -180.0);
        a.extend(45.0);
        assert_eq!(45.0, a.sw());
        assert_eq!(45.0, a.ne());
        assert!(!a.is_empty());

        let mut b = LngBounds::new(180.0, -180.0);
        b.extend(-180.0);
        assert_eq!(180.0, b.sw());
        assert_eq!(180.0, b.ne());
        assert!(b.contains(-180.0));
    }

    #[test]
    fn test_lng_bounds_intersects() {
        let a = LngBounds::new(-10.0, 10.0);
        assert!(a.intersects(&LngBounds::new(5.0, 20.0)));
        assert!(a.intersects(&LngBounds::new(-20.0, -10.0)));
        assert!(!a.intersects(&LngBounds::new(11.0, 20.0)));

        let wrapping = LngBounds::new(170.0, -170.0);
        assert!(wrapping.intersects(&LngBounds::new(160.0, 175.0)));
        assert!(wrapping.intersects(&LngBounds::new(-175.0, -100.0)));
        assert!(wrapping.intersects(&LngBounds::new(165.0, -175.0)));
        assert!(!wrapping.intersects(&a));

        // only the other wraps
        assert!(LngBounds::new(160.0, 175.0).intersects(&wrapping));
        assert!(!a.intersects(&wrapping));

        let empty = LngBounds::new(180.0, -180.0);
        assert!(!empty.intersects(&a));
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&empty));
    }

    #[test]
    fn test_lng_bounds_eq() {
        let a = LngBounds::new(170.0, -170.0);
        assert_eq!(a, LngBounds::new(170.0 + 0.4e-9, -170.0 - 0.4e-9));
        assert_ne!(a, LngBounds::new(170.0, -169.0));
        // the same longitudes, a full turn apart
        assert_eq!(a, LngBounds::new(170.0 - 360.0, -170.0 + 360.0));

        let empty = LngBounds::new(180.0, -180.0);
        assert_eq!(empty, LngBounds::new(180.0, -180.0));
        assert_ne!(empty, a);
        assert_ne!(a, empty);
    }
}
