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

//! The `lat_bounds` module contains the `LatBounds` type: a closed interval
//! of latitudes.

use crate::{is_small, EQUALS_MARGIN_ERROR};
use contracts::debug_requires;

/// The closed interval of latitudes: [sw, ne].
/// It is empty if sw > ne.
#[derive(Clone, Copy, Debug)]
pub struct LatBounds {
    sw: f64,
    ne: f64,
}

impl LatBounds {
    /// Construct a `LatBounds` from its southern and northern latitudes.
    /// The values are not clamped.
    #[must_use]
    pub const fn new(sw: f64, ne: f64) -> Self {
        Self { sw, ne }
    }

    /// The southern latitude.
    #[must_use]
    pub const fn sw(&self) -> f64 {
        self.sw
    }

    /// The northern latitude.
    #[must_use]
    pub const fn ne(&self) -> f64 {
        self.ne
    }

    /// The latitude halfway between the ends.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.sw + self.ne)
    }

    /// Whether the interval is empty: sw > ne.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sw > self.ne
    }

    /// Whether `lat` lies in the interval, ends included.
    /// # Examples
    /// ```
    /// use spherical_geometry::bounds::lat_bounds::LatBounds;
    ///
    /// let a = LatBounds::new(-10.0, 20.0);
    /// assert!(a.contains(20.0));
    /// assert!(!a.contains(-10.5));
    /// ```
    #[must_use]
    pub fn contains(&self, lat: f64) -> bool {
        self.sw <= lat && lat <= self.ne
    }

    /// Whether the intervals overlap.
    /// The interval that starts first must reach the start of the other,
    /// which must not be empty.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.sw <= other.sw {
            other.sw <= self.ne && other.sw <= other.ne
        } else {
            self.sw <= other.ne && self.sw <= self.ne
        }
    }

    /// Grow the interval by the least amount needed to contain `lat`.
    /// An empty interval becomes the single latitude: [lat, lat].
    #[debug_requires(!lat.is_nan())]
    pub fn extend(&mut self, lat: f64) {
        if self.is_empty() {
            self.sw = lat;
            self.ne = lat;
        } else if lat < self.sw {
            self.sw = lat;
        } else if lat > self.ne {
            self.ne = lat;
        }
    }
}

impl PartialEq for LatBounds {
    /// Empty intervals are equal, otherwise the sum of the differences of the
    /// ends must be within `EQUALS_MARGIN_ERROR`.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            is_small(
                libm::fabs(other.sw - self.sw) + libm::fabs(self.ne - other.ne),
                EQUALS_MARGIN_ERROR,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_bounds_empty() {
        let empty = LatBounds::new(1.0, -1.0);
        assert!(empty.is_empty());
        assert!(!empty.contains(0.0));
        assert_eq!(0.0, empty.midpoint());

        let point = LatBounds::new(10.0, 10.0);
        assert!(!point.is_empty());
        assert!(point.contains(10.0));
    }

    #[test]
    fn test_lat_bounds_contains() {
        let a = LatBounds::new(-10.0, 20.0);
        assert!(a.contains(-10.0));
        assert!(a.contains(20.0));
        assert!(a.contains(0.0));
        assert!(!a.contains(-10.5));
        assert!(!a.contains(20.5));
        assert_eq!(5.0, a.midpoint());
    }

    #[test]
    fn test_lat_bounds_extend() {
        let mut a = LatBounds::new(1.0, -1.0);
        a.extend(30.0);
        assert_eq!(30.0, a.sw());
        assert_eq!(30.0, a.ne());

        a.extend(-15.0);
        assert_eq!(-15.0, a.sw());
        assert_eq!(30.0, a.ne());

        a.extend(45.0);
        assert_eq!(-15.0, a.sw());
        assert_eq!(45.0, a.ne());

        // contained: unchanged
        a.extend(0.0);
        assert_eq!(LatBounds::new(-15.0, 45.0), a);
    }

    #[test]
    fn test_lat_bounds_intersects() {
        let a = LatBounds::new(0.0, 10.0);
        assert!(a.intersects(&LatBounds::new(5.0, 15.0)));
        assert!(a.intersects(&LatBounds::new(-5.0, 0.0)));
        assert!(a.intersects(&LatBounds::new(10.0, 20.0)));
        assert!(a.intersects(&LatBounds::new(2.0, 3.0)));
        assert!(a.intersects(&LatBounds::new(-20.0, 20.0)));
        assert!(!a.intersects(&LatBounds::new(10.5, 20.0)));
        assert!(!a.intersects(&LatBounds::new(-20.0, -0.5)));

        // an empty interval intersects nothing
        let empty = LatBounds::new(1.0, -1.0);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_lat_bounds_eq() {
        let a = LatBounds::new(0.0, 10.0);
        assert_eq!(a, LatBounds::new(0.4e-9, 10.0 + 0.4e-9));
        assert_ne!(a, LatBounds::new(1.0e-9, 10.0 + 1.0e-9));
        assert_eq!(LatBounds::new(1.0, -1.0), LatBounds::new(5.0, 2.0));
        assert_ne!(a, LatBounds::new(1.0, -1.0));
        assert_ne!(LatBounds::new(1.0, -1.0), a);
    }
}
