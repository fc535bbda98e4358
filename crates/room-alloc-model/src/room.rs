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

use crate::id::RoomNumber;
use room_alloc_core::{floor::Floor, position::RoomPosition};
use std::fmt::Display;

/// One hotel room at a fixed place in the building.
///
/// `Room` is a small copyable value. Floor and number never change after
/// topology generation; `booked` is the only varying field, and even that is
/// never flipped in place — [`Room::book`] and [`Room::vacate`] return a new
/// value, so snapshots stay independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    floor: Floor,
    number: RoomNumber,
    booked: bool,
}

impl Room {
    /// Creates an unbooked room.
    #[inline]
    pub const fn new(floor: Floor, number: RoomNumber) -> Self {
        Room {
            floor,
            number,
            booked: false,
        }
    }

    #[inline]
    pub const fn floor(self) -> Floor {
        self.floor
    }

    #[inline]
    pub const fn number(self) -> RoomNumber {
        self.number
    }

    #[inline]
    pub const fn is_booked(self) -> bool {
        self.booked
    }

    /// The zero-based corridor slot, derived from the door number.
    ///
    /// Floors 1-9 number their rooms `floor*100 + k`, floor 10 numbers them
    /// `1000 + k`, so the modulus depends on the floor.
    #[inline]
    pub fn position(self) -> RoomPosition {
        let modulus: usize = if self.floor.value() <= 9 { 100 } else { 1000 };
        RoomPosition::new((self.number.value() as usize % modulus).saturating_sub(1))
    }

    #[inline]
    pub const fn with_booked(self, booked: bool) -> Self {
        Room {
            floor: self.floor,
            number: self.number,
            booked,
        }
    }

    #[inline]
    pub const fn book(self) -> Self {
        self.with_booked(true)
    }

    #[inline]
    pub const fn vacate(self) -> Self {
        self.with_booked(false)
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room({}, {}, {})",
            self.number.value(),
            self.floor,
            if self.booked { "booked" } else { "free" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(floor: u8, number: u16) -> Room {
        Room::new(Floor::new(floor), RoomNumber::new(number))
    }

    #[test]
    fn position_on_lower_floors_uses_mod_100() {
        assert_eq!(room(1, 101).position(), RoomPosition::new(0));
        assert_eq!(room(3, 307).position(), RoomPosition::new(6));
        assert_eq!(room(9, 910).position(), RoomPosition::new(9));
    }

    #[test]
    fn position_on_top_floor_uses_mod_1000() {
        assert_eq!(room(10, 1001).position(), RoomPosition::new(0));
        assert_eq!(room(10, 1007).position(), RoomPosition::new(6));
    }

    #[test]
    fn booking_returns_a_new_value() {
        let free = room(2, 205);
        let booked = free.book();
        assert!(!free.is_booked());
        assert!(booked.is_booked());
        assert_eq!(booked.vacate(), free);
    }

    #[test]
    fn display_shows_state() {
        assert_eq!(room(2, 205).to_string(), "Room(205, Floor(2), free)");
        assert_eq!(room(2, 205).book().to_string(), "Room(205, Floor(2), booked)");
    }
}
