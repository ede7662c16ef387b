// ABOUTME: Physiological coefficients for the per-sport calorie formulas
// ABOUTME: Conventional stride lengths and empirical MET-style multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

/// Conventional length of one step for running and walking (meters)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Conventional length of one swim stroke (meters)
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Mean speed multiplier in the running calorie formula
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;

/// Mean speed shift in the running calorie formula
pub const RUN_SPEED_SHIFT: f64 = 1.79;

/// Body weight coefficient in the walking calorie formula
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Speed-over-height coefficient in the walking calorie formula
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Mean speed shift in the swimming calorie formula
pub const SWIM_SPEED_SHIFT: f64 = 1.1;

/// Body weight multiplier in the swimming calorie formula
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;
