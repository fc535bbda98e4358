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

use num_traits::{CheckedAdd, SaturatingAdd, Zero};
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Walking time between two rooms, in whole minutes.
///
/// This is the cost scalar the selector minimizes. It only ever grows by
/// addition, so the arithmetic surface is deliberately small.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct TravelTime(u64);

impl TravelTime {
    #[inline]
    pub const fn new(minutes: u64) -> Self {
        TravelTime(minutes)
    }

    #[inline]
    pub const fn zero() -> Self {
        TravelTime(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, other: TravelTime) -> Option<Self> {
        self.0.checked_add(other.0).map(TravelTime)
    }

    #[inline]
    pub fn saturating_add(self, other: TravelTime) -> Self {
        TravelTime(self.0.saturating_add(other.0))
    }
}

impl Display for TravelTime {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TravelTime({} min)", self.0)
    }
}

impl From<u64> for TravelTime {
    #[inline]
    fn from(minutes: u64) -> Self {
        TravelTime(minutes)
    }
}

impl Add for TravelTime {
    type Output = TravelTime;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        TravelTime(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in TravelTime + TravelTime"),
        )
    }
}

impl AddAssign for TravelTime {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in TravelTime += TravelTime");
    }
}

impl CheckedAdd for TravelTime {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(TravelTime)
    }
}

impl SaturatingAdd for TravelTime {
    #[inline]
    fn saturating_add(&self, rhs: &Self) -> Self {
        TravelTime(self.0.saturating_add(rhs.0))
    }
}

impl Zero for TravelTime {
    #[inline]
    fn zero() -> Self {
        TravelTime(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for TravelTime {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TravelTime::zero(), |acc, t| acc + t)
    }
}
