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

use room_alloc_model::prelude::*;
use room_alloc_model::{layout, occupancy};
use room_alloc_solver::selector::OptimalSelector;
use serde::Serialize;
use std::{fs::File, io::BufWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct RequestOutcome {
    requested: usize,
    granted: Vec<u16>,
    span_minutes: u64,
    satisfied: bool,
}

#[derive(Debug, Clone, Serialize)]
struct RunReport {
    description: String,
    seed: u64,
    booked_probability: f64,
    initially_booked: usize,
    outcomes: Vec<RequestOutcome>,
}

fn main() {
    enable_tracing();

    // Fresh building, then a reproducible random occupancy pattern.
    let config = OccupancyConfig::default();
    let mut sampler = OccupancySampler::new(config);
    let mut rooms = sampler.scatter(&layout::generate());
    let initially_booked = rooms.iter().filter(|r| r.is_booked()).count();
    info!(
        initially_booked,
        total = rooms.len(),
        "starting demo occupancy"
    );

    let selector = OptimalSelector::new();
    let requests = [3usize, 2, 5, 4, 1, 5, 5];
    let mut outcomes = Vec::with_capacity(requests.len());

    for requested in requests {
        let selection = selector.select(&rooms, requested);
        let satisfied = selection.satisfies(requested);
        let granted: Vec<u16> = selection.numbers().iter().map(|n| n.value()).collect();
        let span_minutes = selection.span().value();

        if satisfied {
            // Commit only complete selections; partial grants never change
            // state.
            rooms = occupancy::commit_selection(&rooms, &selection.numbers());
            info!(requested, ?granted, span_minutes, "booking committed");
        } else {
            info!(requested, "not enough rooms, nothing committed");
        }

        outcomes.push(RequestOutcome {
            requested,
            granted,
            span_minutes,
            satisfied,
        });
    }

    let report = RunReport {
        description: "Hotel room allocation demo: seeded occupancy, then a scripted \
                      booking sequence against the two-phase selector."
            .into(),
        seed: config.seed(),
        booked_probability: config.booked_probability(),
        initially_booked,
        outcomes,
    };

    let file = File::create("demo_results.json").expect("create demo_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("========================= Demo Finished =========================");
    println!("=================================================================");
    println!();
    for outcome in &report.outcomes {
        if outcome.satisfied {
            println!(
                "request {} -> rooms {:?} ({} min between first and last)",
                outcome.requested, outcome.granted, outcome.span_minutes
            );
        } else {
            println!("request {} -> declined (insufficient availability)", outcome.requested);
        }
    }
    println!();
    println!("Wrote: demo_results.json");
}
