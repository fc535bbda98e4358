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

//! The fixed hotel topology.
//!
//! The building never changes shape: floors 1-9 carry ten rooms each,
//! numbered `floor*100 + k` for `k` in `1..=10`, and floor 10 carries seven
//! rooms numbered `1000 + k` for `k` in `1..=7`. Generation is pure and
//! deterministic; the result is ordered by ascending floor, then ascending
//! room number.

use crate::{id::RoomNumber, room::Room};
use room_alloc_core::floor::Floor;

/// Number of floors in the building.
pub const FLOOR_COUNT: u8 = 10;

/// Rooms per floor on floors 1 through 9.
pub const ROOMS_PER_LOWER_FLOOR: usize = 10;

/// Rooms on floor 10.
pub const TOP_FLOOR_ROOM_COUNT: usize = 7;

/// Total rooms across the whole building.
pub const TOTAL_ROOM_COUNT: usize =
    (FLOOR_COUNT as usize - 1) * ROOMS_PER_LOWER_FLOOR + TOP_FLOOR_ROOM_COUNT;

/// All floors, bottom to top.
#[inline]
pub fn floors() -> impl Iterator<Item = Floor> {
    (1..=FLOOR_COUNT).map(Floor::new)
}

/// How many rooms a floor holds.
#[inline]
pub fn floor_room_count(floor: Floor) -> usize {
    if floor.value() == FLOOR_COUNT {
        TOP_FLOOR_ROOM_COUNT
    } else {
        ROOMS_PER_LOWER_FLOOR
    }
}

/// Generates the full 97-room topology, every room unbooked.
pub fn generate() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(TOTAL_ROOM_COUNT);
    for floor in floors() {
        let base: u16 = if floor.value() == FLOOR_COUNT {
            1000
        } else {
            floor.value() as u16 * 100
        };
        for k in 1..=floor_room_count(floor) as u16 {
            rooms.push(Room::new(floor, RoomNumber::new(base + k)));
        }
    }
    rooms
}
