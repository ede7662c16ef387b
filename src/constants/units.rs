// ABOUTME: Unit conversion constants for distance, time, and speed measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// km/h to m/s conversion factor
pub const KMH_TO_MS: f64 = 0.278;
