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

use room_alloc_core::travel::TravelTime;
use room_alloc_model::room::Room;

/// Minutes to move one floor up or down.
pub const FLOOR_TRANSIT_MINUTES: u64 = 2;

/// Walking time between two rooms.
///
/// Vertical cost is two minutes per floor of difference, horizontal cost is
/// one minute per corridor slot between the two in-floor positions.
/// Symmetric, and zero for a room against itself.
#[inline]
pub fn travel_time(a: &Room, b: &Room) -> TravelTime {
    let vertical = (a.floor() - b.floor()).value() as u64 * FLOOR_TRANSIT_MINUTES;
    let horizontal = (a.position() - b.position()).value() as u64;
    TravelTime::new(vertical) + TravelTime::new(horizontal)
}
