// ABOUTME: Workout report model, fixed-format rendering, and output formats
// ABOUTME: Assembles final summaries by merging variant calorie results into base reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

//! # Workout Reports
//!
//! The flat [`WorkoutSummary`] snapshot, its fixed-format text rendering, and
//! the [`render_summary`] dispatch that merges a variant's calorie result
//! into its base summary.
//!
//! The summary and the calorie figure come from two separate calls on the
//! workout: `summary()` carries the baseline (zero) calorie field, and the
//! dispatch overwrites it with `calories_kcal()`. Folding the calorie call
//! into `summary()` would change override semantics if the two ever
//! disagree, so the two-call contract stays explicit.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::intelligence::Workout;

/// Final rendered snapshot of a workout session's metrics
///
/// Output-only and immutable once assembled; all values are computed from a
/// single workout snapshot at report time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Human-readable workout label
    pub sport: String,
    /// Session duration in minutes
    pub duration_minutes: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.sport)?;
        writeln!(f, "Длительность: {} мин", self.duration_minutes)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Ср. скорость: {:.2} км/ч", self.speed_kmh)?;
        writeln!(f, "Потрачено ккал: {:.2}", self.calories_kcal)
    }
}

/// Assemble the final summary for any workout variant
///
/// The returned summary's calorie field equals the variant's own
/// `calories_kcal()` result exactly; the other fields come from the variant's
/// `summary()`.
#[must_use]
pub fn render_summary(workout: &Workout) -> WorkoutSummary {
    let calories_kcal = workout.calories_kcal();

    let mut summary = workout.summary();
    summary.calories_kcal = calories_kcal;

    debug!(
        workout.kind = workout.name(),
        calories_kcal, "assembled workout summary"
    );

    summary
}

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-format text (default) - the original report surface
    #[default]
    Text,
    /// JSON format for machine consumption
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Serialize a summary to the requested output format
///
/// # Errors
///
/// Returns `AppError` with `ErrorCode::SerializationError` if JSON
/// serialization fails.
pub fn format_summary(summary: &WorkoutSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).map_err(|e| AppError::serialization(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_display_fixed_format() {
        let summary = WorkoutSummary {
            sport: "Бег".to_owned(),
            duration_minutes: 30.0,
            distance_km: 3.25,
            speed_kmh: 6.5,
            calories_kcal: 302.9145,
        };
        let expected = "Тип тренировки: Бег\n\
                        Длительность: 30 мин\n\
                        Дистанция: 3.25 км.\n\
                        Ср. скорость: 6.50 км/ч\n\
                        Потрачено ккал: 302.91\n";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_render_summary_merges_variant_calories() {
        let workout = Workout::swimming(2_000, Duration::minutes(90), 85.0, 50.0, 5);
        let summary = render_summary(&workout);
        // Exact equality: the dispatch copies the value, no recomputation drift
        assert!((summary.calories_kcal - workout.calories_kcal()).abs() < f64::EPSILON);
        assert!(summary.calories_kcal > 0.0);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_summary_json() {
        let workout = Workout::running(5_000, Duration::minutes(30), 85.0);
        let summary = render_summary(&workout);
        let json = format_summary(&summary, OutputFormat::Json).unwrap();
        assert!(json.contains("\"sport\": \"Бег\""));
        assert!(json.contains("\"distance_km\": 3.25"));
    }
}
