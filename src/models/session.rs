// ABOUTME: Shared workout session record with common derived metrics
// ABOUTME: Distance, mean speed, and duration conversions shared by all workout kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

use chrono::Duration;

use crate::constants::units::{
    METERS_PER_KM, MS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::models::SportType;
use crate::reports::WorkoutSummary;

/// Shared record of a single workout session
///
/// Every workout variant carries one of these by composition. The fields are
/// raw inputs; distance and mean speed are derived on demand. All derived
/// metrics are pure and total: a zero duration yields a zero mean speed by
/// policy rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Sport/workout kind, source of the report label
    pub sport: SportType,
    /// Number of steps (running, walking) or strokes (swimming)
    pub action_count: u32,
    /// Length of one step or stroke in meters
    pub step_length_m: f64,
    /// Elapsed time of the session
    pub duration: Duration,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl Session {
    /// Create a new session record
    #[must_use]
    pub const fn new(
        sport: SportType,
        action_count: u32,
        step_length_m: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Self {
        Self {
            sport,
            action_count,
            step_length_m,
            duration,
            weight_kg,
        }
    }

    /// Session duration in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / (MS_PER_SECOND * SECONDS_PER_HOUR)
    }

    /// Session duration in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / (MS_PER_SECOND * SECONDS_PER_MINUTE)
    }

    /// Distance covered in kilometers
    ///
    /// Formula: `action_count x step_length_m / 1000`. Swimming reports keep
    /// this stroke-based distance even though its speed is measured by pool
    /// traversals.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count) * self.step_length_m / METERS_PER_KM
    }

    /// Mean speed over the whole session in km/h
    ///
    /// Returns `0.0` for a zero duration.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        let hours = self.duration_hours();
        if hours > 0.0 {
            self.distance_km() / hours
        } else {
            0.0
        }
    }

    /// Baseline calorie count
    ///
    /// Always `0.0`: every workout variant supplies its own formula through
    /// [`Workout::calories_kcal`](crate::intelligence::Workout::calories_kcal).
    /// The baseline only exists so a base summary can be assembled before the
    /// variant's figure is merged in.
    #[must_use]
    pub const fn calories_kcal(&self) -> f64 {
        0.0
    }

    /// Assemble the base summary for this session
    ///
    /// Carries the baseline (zero) calorie figure; the dispatch in
    /// [`reports`](crate::reports) overwrites it with the variant's own
    /// result.
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            sport: self.sport.display_name().to_owned(),
            duration_minutes: self.duration_minutes(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::physiology::STEP_LENGTH_M;

    fn walk_session(action_count: u32, duration: Duration) -> Session {
        Session::new(SportType::Walk, action_count, STEP_LENGTH_M, duration, 85.0)
    }

    #[test]
    fn test_distance_km() {
        let session = walk_session(20_000, Duration::minutes(225));
        assert!((session.distance_km() - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_speed_kmh() {
        let session = walk_session(20_000, Duration::minutes(225));
        let expected = 13.0 / 3.75;
        assert!((session.mean_speed_kmh() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_yields_zero_speed() {
        let session = walk_session(20_000, Duration::zero());
        assert!(session.mean_speed_kmh().abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_linear_in_action_count() {
        let duration = Duration::minutes(60);
        let single = walk_session(5_000, duration);
        let double = walk_session(10_000, duration);
        assert!((double.distance_km() - 2.0 * single.distance_km()).abs() < 1e-12);
    }

    #[test]
    fn test_base_summary_has_zero_calories() {
        let session = walk_session(20_000, Duration::minutes(225));
        let summary = session.summary();
        assert_eq!(summary.sport, "Ходьба");
        assert!((summary.duration_minutes - 225.0).abs() < f64::EPSILON);
        assert!(summary.calories_kcal.abs() < f64::EPSILON);
    }
}
