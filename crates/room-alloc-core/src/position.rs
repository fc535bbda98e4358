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

/// The zero-based slot of a room along its corridor, counted from the lift.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct RoomPosition(usize);

impl RoomPosition {
    #[inline]
    pub const fn new(v: usize) -> Self {
        RoomPosition(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        RoomPosition(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for RoomPosition {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomPosition({})", self.0)
    }
}

impl From<usize> for RoomPosition {
    #[inline]
    fn from(v: usize) -> Self {
        RoomPosition(v)
    }
}

/// The number of corridor slots between two [`RoomPosition`]s.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct PositionDistance(usize);

impl PositionDistance {
    #[inline]
    pub const fn new(v: usize) -> Self {
        PositionDistance(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        PositionDistance(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for PositionDistance {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PositionDistance({})", self.0)
    }
}

impl From<usize> for PositionDistance {
    #[inline]
    fn from(v: usize) -> Self {
        PositionDistance(v)
    }
}

impl Sub<RoomPosition> for RoomPosition {
    type Output = PositionDistance;

    #[inline]
    fn sub(self, rhs: RoomPosition) -> Self::Output {
        PositionDistance(self.0.abs_diff(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_difference_is_absolute() {
        let a = RoomPosition::new(0);
        let b = RoomPosition::new(6);
        assert_eq!(a - b, PositionDistance::new(6));
        assert_eq!(b - a, PositionDistance::new(6));
    }

    #[test]
    fn position_difference_with_itself_is_zero() {
        let p = RoomPosition::new(4);
        assert!((p - p).is_zero());
        assert_eq!(p - p, PositionDistance::zero());
    }

    #[test]
    fn display_formats() {
        assert_eq!(RoomPosition::new(9).to_string(), "RoomPosition(9)");
        assert_eq!(PositionDistance::new(1).to_string(), "PositionDistance(1)");
    }
}
