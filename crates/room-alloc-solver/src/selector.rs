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

//! The two-phase optimal-set search.
//!
//! Phase one scans floors bottom-up and takes the first floor that can seat
//! the whole party: same floor, lowest numbers, cheapest possible spread,
//! and a reproducible answer. Only when no single floor qualifies does phase
//! two slide a window over the globally sorted availability list and keep
//! the window with the smallest first-to-last travel time.
//!
//! Errors are signalled purely by shape: an empty selection for an
//! out-of-bounds request or an unservable one, never a panic. Callers must
//! compare the selection length against the requested count before
//! committing anything.

use crate::transit::travel_time;
use room_alloc_core::travel::TravelTime;
use room_alloc_model::{id::RoomNumber, layout, room::Room};
use tracing::{debug, instrument};

/// Smallest party size the selector accepts.
pub const MIN_REQUEST_ROOMS: usize = 1;

/// Largest party size the selector accepts.
pub const MAX_REQUEST_ROOMS: usize = 5;

/// The outcome of one allocation search.
///
/// Holds between zero and the requested number of rooms. A shorter-than-
/// requested selection means insufficient availability (or an invalid
/// request); nothing has been committed either way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    rooms: Vec<Room>,
}

impl Selection {
    #[inline]
    fn empty() -> Self {
        Self { rooms: Vec::new() }
    }

    #[inline]
    fn from_rooms(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Whether the search granted the full requested count.
    #[inline]
    pub fn satisfies(&self, requested: usize) -> bool {
        self.rooms.len() == requested
    }

    /// The numbers to flip booked in the caller's next snapshot.
    #[inline]
    pub fn numbers(&self) -> Vec<RoomNumber> {
        self.rooms.iter().map(|r| r.number()).collect()
    }

    /// Travel time between the first and last selected room.
    ///
    /// This is the figure shown to the guest; zero for fewer than two rooms.
    pub fn span(&self) -> TravelTime {
        match (self.rooms.first(), self.rooms.last()) {
            (Some(a), Some(b)) => travel_time(a, b),
            _ => TravelTime::zero(),
        }
    }

    #[inline]
    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

/// Picks the contiguous room set with minimal travel cost for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalSelector;

impl Default for OptimalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimalSelector {
    pub fn new() -> Self {
        Self
    }

    /// Runs the search against a read-only snapshot.
    ///
    /// Requests outside `[MIN_REQUEST_ROOMS, MAX_REQUEST_ROOMS]` yield an
    /// empty selection immediately.
    #[instrument(skip(self, rooms))]
    pub fn select(&self, rooms: &[Room], num_rooms: usize) -> Selection {
        if !(MIN_REQUEST_ROOMS..=MAX_REQUEST_ROOMS).contains(&num_rooms) {
            debug!(num_rooms, "request outside valid bounds");
            return Selection::empty();
        }

        if let Some(selection) = self.single_floor(rooms, num_rooms) {
            return selection;
        }
        self.cross_floor_window(rooms, num_rooms)
    }

    /// Phase one: the lowest floor with enough free rooms wins outright.
    fn single_floor(&self, rooms: &[Room], num_rooms: usize) -> Option<Selection> {
        for floor in layout::floors() {
            let mut on_floor: Vec<Room> = rooms
                .iter()
                .copied()
                .filter(|r| r.floor() == floor && !r.is_booked())
                .collect();

            if on_floor.len() >= num_rooms {
                on_floor.sort_by_key(|r| r.number());
                on_floor.truncate(num_rooms);
                debug!(%floor, "single-floor phase satisfied the request");
                return Some(Selection::from_rooms(on_floor));
            }
        }
        None
    }

    /// Phase two: minimal-span window over the global availability list.
    fn cross_floor_window(&self, rooms: &[Room], num_rooms: usize) -> Selection {
        let mut available: Vec<Room> = rooms.iter().copied().filter(|r| !r.is_booked()).collect();
        available.sort_by_key(|r| (r.floor(), r.number()));

        if available.len() < num_rooms {
            debug!(
                available = available.len(),
                num_rooms, "not enough free rooms in the whole building"
            );
            return Selection::empty();
        }

        let mut best_cost: Option<TravelTime> = None;
        let mut best_window: Option<&[Room]> = None;

        for window in available.windows(num_rooms) {
            // A window is scored by its first-to-last travel time only; the
            // rooms in between do not contribute. Strict improvement keeps
            // the earliest window on ties.
            let cost = travel_time(&window[0], &window[num_rooms - 1]);
            if best_cost.is_none_or(|b| cost < b) {
                best_cost = Some(cost);
                best_window = Some(window);
            }
        }

        match (best_window, best_cost) {
            (Some(window), Some(cost)) => {
                debug!(%cost, "cross-floor window phase satisfied the request");
                Selection::from_rooms(window.to_vec())
            }
            _ => Selection::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh topology with every room booked except the listed numbers.
    fn all_booked_except(free: &[u16]) -> Vec<Room> {
        layout::generate()
            .into_iter()
            .map(|r| r.with_booked(!free.contains(&r.number().value())))
            .collect()
    }

    fn numbers(selection: &Selection) -> Vec<u16> {
        selection.rooms().iter().map(|r| r.number().value()).collect()
    }

    #[test]
    fn fresh_hotel_three_rooms_takes_start_of_floor_one() {
        let rooms = layout::generate();
        let selection = OptimalSelector::new().select(&rooms, 3);

        assert_eq!(numbers(&selection), vec![101, 102, 103]);
        assert!(selection.satisfies(3));
        assert_eq!(selection.span(), TravelTime::new(2));
    }

    #[test]
    fn single_floor_result_shares_a_floor_with_ascending_numbers() {
        let rooms = all_booked_except(&[105, 102, 108, 110, 103]);
        let selection = OptimalSelector::new().select(&rooms, 3);

        assert_eq!(numbers(&selection), vec![102, 103, 105]);
        let floor = selection.rooms()[0].floor();
        assert!(selection.rooms().iter().all(|r| r.floor() == floor));
    }

    #[test]
    fn lowest_qualifying_floor_wins_even_with_one_room() {
        // Floor 1 keeps a single free room; every other floor is wide open.
        let rooms: Vec<Room> = layout::generate()
            .into_iter()
            .map(|r| {
                let on_floor_one = r.floor().value() == 1;
                r.with_booked(on_floor_one && r.number().value() != 107)
            })
            .collect();

        let selection = OptimalSelector::new().select(&rooms, 1);
        assert_eq!(numbers(&selection), vec![107]);
    }

    #[test]
    fn full_floor_one_falls_through_to_floor_two() {
        let rooms: Vec<Room> = layout::generate()
            .into_iter()
            .map(|r| r.with_booked(r.floor().value() == 1))
            .collect();

        let selection = OptimalSelector::new().select(&rooms, 2);
        assert_eq!(numbers(&selection), vec![201, 202]);
    }

    #[test]
    fn snapshot_order_does_not_matter() {
        let mut rooms = layout::generate();
        rooms.reverse();
        let selection = OptimalSelector::new().select(&rooms, 3);
        assert_eq!(numbers(&selection), vec![101, 102, 103]);
    }

    #[test]
    fn out_of_bounds_requests_return_empty() {
        let rooms = layout::generate();
        let selector = OptimalSelector::new();

        assert!(selector.select(&rooms, 0).is_empty());
        assert!(selector.select(&rooms, 6).is_empty());
        assert!(selector.select(&rooms, usize::MAX).is_empty());
    }

    #[test]
    fn cross_floor_fallback_returns_a_contiguous_sorted_block() {
        // No floor has four free rooms, so the window phase must run.
        let rooms = all_booked_except(&[101, 102, 201, 202, 301]);
        let selection = OptimalSelector::new().select(&rooms, 4);

        assert_eq!(numbers(&selection), vec![101, 102, 201, 202]);

        // Contiguous block of the globally sorted availability list.
        let sorted_free = [101u16, 102, 201, 202, 301];
        let got = numbers(&selection);
        let start = sorted_free
            .iter()
            .position(|&n| n == got[0])
            .expect("block start");
        assert_eq!(&sorted_free[start..start + got.len()], got.as_slice());
    }

    #[test]
    fn fallback_prefers_the_smallest_window_span() {
        // Sorted availability: 101, 110, 209, 210, 301. The middle window
        // [110, 209, 210] spans two minutes; its neighbors span ten.
        let rooms = all_booked_except(&[101, 110, 209, 210, 301]);
        let selection = OptimalSelector::new().select(&rooms, 3);

        assert_eq!(numbers(&selection), vec![110, 209, 210]);
        assert_eq!(selection.span(), TravelTime::new(2));
    }

    #[test]
    fn first_window_wins_on_equal_span() {
        // One free room per floor; every window of two spans two minutes.
        let rooms = all_booked_except(&[101, 201, 301, 401]);
        let selection = OptimalSelector::new().select(&rooms, 2);

        assert_eq!(numbers(&selection), vec![101, 201]);
    }

    #[test]
    fn insufficient_availability_returns_short_selection() {
        let rooms = all_booked_except(&[404, 808]);
        let selection = OptimalSelector::new().select(&rooms, 5);

        assert!(selection.len() < 5);
        assert!(!selection.satisfies(5));
    }

    #[test]
    fn fully_booked_hotel_grants_nothing() {
        let rooms = all_booked_except(&[]);
        assert!(OptimalSelector::new().select(&rooms, 1).is_empty());
    }

    #[test]
    fn selection_never_mutates_the_snapshot() {
        let rooms = layout::generate();
        let before = rooms.clone();
        let _ = OptimalSelector::new().select(&rooms, 5);
        assert_eq!(rooms, before);
    }

    #[test]
    fn span_is_zero_for_empty_and_single_selections() {
        let rooms = layout::generate();
        let selector = OptimalSelector::new();

        assert!(selector.select(&rooms, 0).span().is_zero());
        assert!(selector.select(&rooms, 1).span().is_zero());
    }

    #[test]
    fn selection_numbers_match_rooms() {
        let rooms = layout::generate();
        let selection = OptimalSelector::new().select(&rooms, 2);
        let ns = selection.numbers();
        assert_eq!(ns.len(), 2);
        assert_eq!(ns[0], selection.rooms()[0].number());
    }
}
