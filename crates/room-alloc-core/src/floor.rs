// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::{fmt::Display, ops::Sub};

/// A vertical coordinate in the building, counted from 1 upwards.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Floor(u8);

impl Floor {
    #[inline]
    pub const fn new(v: u8) -> Self {
        Floor(v)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Floor {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor({})", self.0)
    }
}

impl From<u8> for Floor {
    #[inline]
    fn from(v: u8) -> Self {
        Floor(v)
    }
}

/// The number of floors between two [`Floor`]s, always non-negative.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct FloorDistance(u8);

impl FloorDistance {
    #[inline]
    pub const fn new(v: u8) -> Self {
        FloorDistance(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        FloorDistance(0)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for FloorDistance {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FloorDistance({})", self.0)
    }
}

impl From<u8> for FloorDistance {
    #[inline]
    fn from(v: u8) -> Self {
        FloorDistance(v)
    }
}

impl Sub<Floor> for Floor {
    type Output = FloorDistance;

    #[inline]
    fn sub(self, rhs: Floor) -> Self::Output {
        FloorDistance(self.0.abs_diff(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_difference_is_absolute() {
        let a = Floor::new(3);
        let b = Floor::new(8);
        assert_eq!(a - b, FloorDistance::new(5));
        assert_eq!(b - a, FloorDistance::new(5));
    }

    #[test]
    fn floor_difference_with_itself_is_zero() {
        let f = Floor::new(7);
        assert!((f - f).is_zero());
        assert_eq!(f - f, FloorDistance::zero());
    }

    #[test]
    fn floors_order_by_level() {
        assert!(Floor::new(1) < Floor::new(10));
        assert_eq!(Floor::from(4), Floor::new(4));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Floor::new(2).to_string(), "Floor(2)");
        assert_eq!(FloorDistance::new(3).to_string(), "FloorDistance(3)");
    }
}
