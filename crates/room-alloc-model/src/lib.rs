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

//! # Room Allocation Model (`room-alloc-model`)
//!
//! Data model for the hotel room allocation problem, built on the typed
//! primitives of `room-alloc-core`.
//!
//! - **`RoomNumber`**: the globally unique, stable identifier of a room.
//! - **`Room`**: a value entity combining floor, number and booked state.
//!   Rooms are never mutated in place; every state change produces a fresh
//!   snapshot.
//! - **`layout`**: the fixed 97-room topology (floors 1-9 with ten rooms
//!   each, floor 10 with seven) and its generation.
//! - **`occupancy`**: pure snapshot transformations layered on top of the
//!   topology: committing a selection, resetting, and seeding a randomized
//!   occupancy pattern from a reproducible RNG.

pub mod err;
pub mod id;
pub mod layout;
pub mod occupancy;
pub mod room;

pub mod prelude {
    pub use crate::err::InvalidProbabilityError;
    pub use crate::id::RoomNumber;
    pub use crate::layout::{
        FLOOR_COUNT, ROOMS_PER_LOWER_FLOOR, TOP_FLOOR_ROOM_COUNT, TOTAL_ROOM_COUNT,
    };
    pub use crate::occupancy::{OccupancyConfig, OccupancySampler, commit_selection};
    pub use crate::room::Room;
}
