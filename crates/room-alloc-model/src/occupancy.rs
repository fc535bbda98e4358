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

//! Pure snapshot transformations over the room list.
//!
//! The allocation core never mutates booking state. Everything here takes a
//! snapshot by reference and hands back a fresh `Vec<Room>`, so a caller
//! serializing "read snapshot, compute selection, commit" keeps full control
//! over when state actually changes.

use crate::{err::InvalidProbabilityError, id::RoomNumber, room::Room};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

/// Returns a new snapshot with every room in `selection` marked booked.
///
/// Rooms keep their order. Numbers that do not occur in the snapshot are
/// ignored; the caller has already length-checked the selection against its
/// request, so an unknown number cannot silently shrink a booking.
pub fn commit_selection(rooms: &[Room], selection: &[RoomNumber]) -> Vec<Room> {
    rooms
        .iter()
        .map(|&r| {
            if selection.contains(&r.number()) {
                r.book()
            } else {
                r
            }
        })
        .collect()
}

/// Default seed for the occupancy sampler.
pub const DEFAULT_SEED: u64 = 42;

/// Default probability that a sampled room is booked.
pub const DEFAULT_BOOKED_PROBABILITY: f64 = 0.4;

/// Configuration for [`OccupancySampler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyConfig {
    seed: u64,
    booked_probability: f64,
}

impl OccupancyConfig {
    /// Validates the probability and builds a config.
    pub fn new(seed: u64, booked_probability: f64) -> Result<Self, InvalidProbabilityError> {
        if !(0.0..=1.0).contains(&booked_probability) {
            return Err(InvalidProbabilityError::new(booked_probability));
        }
        Ok(Self {
            seed,
            booked_probability,
        })
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn booked_probability(&self) -> f64 {
        self.booked_probability
    }
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            booked_probability: DEFAULT_BOOKED_PROBABILITY,
        }
    }
}

/// Draws a reproducible random occupancy pattern over a snapshot.
///
/// Each room's booked flag is sampled independently with the configured
/// probability. The RNG is seeded, so the same config over the same snapshot
/// always produces the same pattern.
pub struct OccupancySampler {
    booked_probability: f64,
    rng: SmallRng,
}

impl OccupancySampler {
    pub fn new(config: OccupancyConfig) -> Self {
        Self {
            booked_probability: config.booked_probability(),
            rng: SmallRng::seed_from_u64(config.seed()),
        }
    }

    /// Returns a new snapshot with randomized booked flags.
    pub fn scatter(&mut self, rooms: &[Room]) -> Vec<Room> {
        let out: Vec<Room> = rooms
            .iter()
            .map(|&r| r.with_booked(self.rng.random_bool(self.booked_probability)))
            .collect();
        let booked = out.iter().filter(|r| r.is_booked()).count();
        debug!(booked, total = out.len(), "sampled occupancy pattern");
        out
    }
}

impl From<OccupancyConfig> for OccupancySampler {
    fn from(config: OccupancyConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    #[test]
    fn commit_books_exactly_the_selected_numbers() {
        let rooms = layout::generate();
        let selection = [RoomNumber::new(101), RoomNumber::new(103)];
        let next = commit_selection(&rooms, &selection);

        assert_eq!(next.len(), rooms.len());
        for (before, after) in rooms.iter().zip(&next) {
            assert_eq!(before.number(), after.number());
            let expected = selection.contains(&before.number());
            assert_eq!(after.is_booked(), expected, "wrong state for {after}");
        }
        // The input snapshot is untouched.
        assert!(rooms.iter().all(|r| !r.is_booked()));
    }

    #[test]
    fn commit_ignores_numbers_not_in_snapshot() {
        let rooms = layout::generate();
        let next = commit_selection(&rooms, &[RoomNumber::new(9999)]);
        assert_eq!(next, rooms);
    }

    #[test]
    fn config_rejects_probability_outside_unit_interval() {
        assert!(OccupancyConfig::new(1, -0.1).is_err());
        assert!(OccupancyConfig::new(1, 1.5).is_err());
        assert!(OccupancyConfig::new(1, f64::NAN).is_err());
        assert!(OccupancyConfig::new(1, 0.0).is_ok());
        assert!(OccupancyConfig::new(1, 1.0).is_ok());
    }

    #[test]
    fn default_config_matches_demo_policy() {
        let cfg = OccupancyConfig::default();
        assert_eq!(cfg.seed(), DEFAULT_SEED);
        assert_eq!(cfg.booked_probability(), DEFAULT_BOOKED_PROBABILITY);
    }

    #[test]
    fn same_seed_same_pattern() {
        let rooms = layout::generate();
        let cfg = OccupancyConfig::new(7, 0.4).unwrap();
        let a = OccupancySampler::new(cfg).scatter(&rooms);
        let b = OccupancySampler::new(cfg).scatter(&rooms);
        assert_eq!(a, b);
    }

    #[test]
    fn probability_extremes_book_none_or_all() {
        let rooms = layout::generate();

        let none = OccupancySampler::new(OccupancyConfig::new(3, 0.0).unwrap()).scatter(&rooms);
        assert!(none.iter().all(|r| !r.is_booked()));

        let all = OccupancySampler::new(OccupancyConfig::new(3, 1.0).unwrap()).scatter(&rooms);
        assert!(all.iter().all(|r| r.is_booked()));
    }

    #[test]
    fn scatter_preserves_room_identity_and_order() {
        let rooms = layout::generate();
        let next = OccupancySampler::new(OccupancyConfig::default()).scatter(&rooms);
        assert_eq!(next.len(), rooms.len());
        for (before, after) in rooms.iter().zip(&next) {
            assert_eq!(before.number(), after.number());
            assert_eq!(before.floor(), after.floor());
        }
    }
}
