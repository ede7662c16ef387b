// ABOUTME: Workout intelligence - per-sport calorie formulas and speed overrides
// ABOUTME: Hosts the closed Workout sum type dispatching the variant formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

/// The `Workout` sum type and its per-variant calorie computations
pub mod workout;

pub use workout::Workout;
