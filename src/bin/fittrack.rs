// ABOUTME: Demo binary printing report summaries for three fixed example workouts
// ABOUTME: Swimming, walking, and running sessions rendered to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

//! # Fittrack Demo Binary
//!
//! Builds the three fixed example workouts, computes their statistics, and
//! prints the rendered summaries to stdout. No flags, no configuration files;
//! logging is controlled through `RUST_LOG` / `LOG_FORMAT` and goes to
//! stderr.

use anyhow::Result;
use chrono::Duration;
use fittrack::intelligence::Workout;
use fittrack::logging;
use fittrack::reports::render_summary;
use tracing::info;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let workouts = [
        Workout::swimming(2_000, Duration::minutes(90), 85.0, 50.0, 5),
        Workout::walking(20_000, Duration::minutes(3 * 60 + 45), 85.0, 185.0),
        Workout::running(5_000, Duration::minutes(30), 85.0),
    ];

    for workout in &workouts {
        let summary = render_summary(workout);
        info!(
            workout.kind = workout.name(),
            calories_kcal = summary.calories_kcal,
            "computed workout summary"
        );
        println!("{summary}");
    }

    Ok(())
}
