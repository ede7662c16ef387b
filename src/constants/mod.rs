// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Unit conversion factors and physiological formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

/// Unit conversion constants for distance, time, and speed
pub mod units;

/// Physiological coefficients for the calorie formulas
pub mod physiology;
