// Copyright (c) 2024 Via Technology Ltd.

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

//! The error module contains the errors reported when constructing
//! coordinates and bounds.
//!
//! Out of range values are never errors: latitudes are clamped and
//! longitudes are wrapped. Only values that cannot be normalised are rejected.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A latitude or longitude is not a number.
    #[error("invalid float numbers: ({lat}, {lng})")]
    InvalidNumber { lat: f64, lng: f64 },

    /// A south west or north east corner is present but is not a coordinate.
    #[error("invalid LatLng value: '{value}'")]
    InvalidArgumentType { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::InvalidNumber {
            lat: f64::NAN,
            lng: 1.0,
        };
        assert_eq!("invalid float numbers: (NaN, 1)", error.to_string());

        let error = Error::InvalidArgumentType {
            value: String::from("north"),
        };
        assert_eq!("invalid LatLng value: 'north'", error.to_string());
    }
}
