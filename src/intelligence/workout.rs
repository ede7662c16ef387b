// ABOUTME: Closed Workout sum type with per-variant calorie formulas
// ABOUTME: Implements running, walking, and swimming computations over a shared Session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

use chrono::Duration;

use crate::constants::physiology::{
    RUN_SPEED_MULTIPLIER, RUN_SPEED_SHIFT, STEP_LENGTH_M, STROKE_LENGTH_M, SWIM_SPEED_SHIFT,
    SWIM_WEIGHT_MULTIPLIER, WALK_SPEED_HEIGHT_MULTIPLIER, WALK_WEIGHT_MULTIPLIER,
};
use crate::constants::units::{CM_PER_METER, KMH_TO_MS, METERS_PER_KM, MINUTES_PER_HOUR};
use crate::models::{Session, SportType};
use crate::reports::WorkoutSummary;

/// Workout variant selection
///
/// Closed set of supported workout kinds, each carrying the shared [`Session`]
/// by composition plus its own parameters:
///
/// - `Running`: empirical MET-style formula over mean speed and weight
/// - `Walking`: formula over squared speed, body height, and weight
/// - `Swimming`: formula over pool-traversal speed and weight; overrides the
///   mean speed computation
///
/// All computations are pure functions of the carried values; a zero duration
/// yields zero speed, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    /// Running session
    ///
    /// Formula: `(18 x speed + 1.79) x weight / 1000 x hours x 60`
    ///
    /// Speed in km/h, weight in kg; the division by 1000 cancels the km-to-m
    /// scaling baked into the multiplier constant.
    Running {
        /// Shared session record
        session: Session,
    },

    /// Walking session
    ///
    /// Formula: `(0.035 x weight + speed_ms^2 / height_m x 0.029 x weight) x hours x 60`
    ///
    /// Speed converted to m/s, height to meters before evaluation.
    Walking {
        /// Shared session record
        session: Session,
        /// User height in centimeters
        height_cm: f64,
    },

    /// Swimming session
    ///
    /// Formula: `(speed + 1.1) x 2 x weight x hours`
    ///
    /// Speed here is the pool-traversal speed, not the stroke-based base
    /// speed: `pool_length_m x pool_crossings / 1000 / hours`.
    Swimming {
        /// Shared session record
        session: Session,
        /// Length of the pool in meters
        pool_length_m: f64,
        /// Number of pool traversals
        pool_crossings: u32,
    },
}

impl Workout {
    /// Create a running workout with the conventional step length
    #[must_use]
    pub const fn running(action_count: u32, duration: Duration, weight_kg: f64) -> Self {
        Self::Running {
            session: Session::new(SportType::Run, action_count, STEP_LENGTH_M, duration, weight_kg),
        }
    }

    /// Create a walking workout with the conventional step length
    #[must_use]
    pub const fn walking(
        action_count: u32,
        duration: Duration,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self::Walking {
            session: Session::new(
                SportType::Walk,
                action_count,
                STEP_LENGTH_M,
                duration,
                weight_kg,
            ),
            height_cm,
        }
    }

    /// Create a swimming workout with the conventional stroke length
    #[must_use]
    pub const fn swimming(
        action_count: u32,
        duration: Duration,
        weight_kg: f64,
        pool_length_m: f64,
        pool_crossings: u32,
    ) -> Self {
        Self::Swimming {
            session: Session::new(
                SportType::Swim,
                action_count,
                STROKE_LENGTH_M,
                duration,
                weight_kg,
            ),
            pool_length_m,
            pool_crossings,
        }
    }

    /// Get the shared session record
    #[must_use]
    pub const fn session(&self) -> &Session {
        match self {
            Self::Running { session }
            | Self::Walking { session, .. }
            | Self::Swimming { session, .. } => session,
        }
    }

    /// Mean speed over the session in km/h
    ///
    /// Running and walking use the stroke/step-based speed from the session.
    /// Swimming measures speed by pool traversals instead and returns `0.0`
    /// for a zero duration, matching the base policy.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running { session } | Self::Walking { session, .. } => session.mean_speed_kmh(),
            Self::Swimming {
                session,
                pool_length_m,
                pool_crossings,
            } => {
                let hours = session.duration_hours();
                if hours > 0.0 {
                    pool_length_m * f64::from(*pool_crossings) / METERS_PER_KM / hours
                } else {
                    0.0
                }
            }
        }
    }

    /// Calories burned over the session in kcal
    #[must_use]
    pub fn calories_kcal(&self) -> f64 {
        match self {
            Self::Running { session } => Self::running_calories(session),
            Self::Walking { session, height_cm } => Self::walking_calories(session, *height_cm),
            Self::Swimming { session, .. } => {
                Self::swimming_calories(session, self.mean_speed_kmh())
            }
        }
    }

    /// Assemble the summary for this workout
    ///
    /// Starts from the base session summary. Swimming replaces the speed
    /// field with its traversal-based speed while keeping the stroke-based
    /// distance, an asymmetry the reporting contract deliberately preserves.
    /// The calorie field stays at the baseline; the merge happens in
    /// [`render_summary`](crate::reports::render_summary).
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        match self {
            Self::Running { session } | Self::Walking { session, .. } => session.summary(),
            Self::Swimming { session, .. } => {
                let mut summary = session.summary();
                summary.speed_kmh = self.mean_speed_kmh();
                summary
            }
        }
    }

    /// Get the workout kind name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running { .. } => "running",
            Self::Walking { .. } => "walking",
            Self::Swimming { .. } => "swimming",
        }
    }

    /// Get the calorie formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Running { .. } => "kcal = (18 x speed + 1.79) x weight / 1000 x minutes",
            Self::Walking { .. } => {
                "kcal = (0.035 x weight + speed_ms^2 / height x 0.029 x weight) x minutes"
            }
            Self::Swimming { .. } => "kcal = (speed + 1.1) x 2 x weight x hours",
        }
    }

    /// Running calorie formula
    fn running_calories(session: &Session) -> f64 {
        let speed = session.mean_speed_kmh();
        let minutes = session.duration_hours() * MINUTES_PER_HOUR;
        RUN_SPEED_MULTIPLIER.mul_add(speed, RUN_SPEED_SHIFT) * session.weight_kg / METERS_PER_KM
            * minutes
    }

    /// Walking calorie formula
    fn walking_calories(session: &Session, height_cm: f64) -> f64 {
        let speed_ms = session.mean_speed_kmh() * KMH_TO_MS;
        let height_m = height_cm / CM_PER_METER;
        let minutes = session.duration_hours() * MINUTES_PER_HOUR;
        (WALK_WEIGHT_MULTIPLIER * session.weight_kg
            + speed_ms.powi(2) / height_m * WALK_SPEED_HEIGHT_MULTIPLIER * session.weight_kg)
            * minutes
    }

    /// Swimming calorie formula over the traversal-based speed
    fn swimming_calories(session: &Session, speed_kmh: f64) -> f64 {
        (speed_kmh + SWIM_SPEED_SHIFT)
            * SWIM_WEIGHT_MULTIPLIER
            * session.weight_kg
            * session.duration_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_calories_formula() {
        let workout = Workout::running(5_000, Duration::minutes(30), 85.0);
        // distance 3.25 km, speed 6.5 km/h
        let expected = (18.0 * 6.5 + 1.79) * 85.0 / 1000.0 * 0.5 * 60.0;
        assert!(
            (workout.calories_kcal() - expected).abs() < 1e-6,
            "expected {expected}, got {}",
            workout.calories_kcal()
        );
    }

    #[test]
    fn test_walking_calories_formula() {
        let workout = Workout::walking(20_000, Duration::minutes(225), 85.0, 185.0);
        let speed_ms = (13.0 / 3.75) * 0.278;
        let expected =
            (0.035 * 85.0 + speed_ms * speed_ms / 1.85 * 0.029 * 85.0) * 3.75 * 60.0;
        assert!(
            (workout.calories_kcal() - expected).abs() < 1e-6,
            "expected {expected}, got {}",
            workout.calories_kcal()
        );
    }

    #[test]
    fn test_swimming_speed_override() {
        let workout = Workout::swimming(2_000, Duration::minutes(90), 85.0, 50.0, 5);
        let expected = 50.0 * 5.0 / 1000.0 / 1.5;
        assert!((workout.mean_speed_kmh() - expected).abs() < 1e-12);
        // Stroke-based session speed differs from the traversal-based override
        assert!(workout.session().mean_speed_kmh() > workout.mean_speed_kmh());
    }

    #[test]
    fn test_swimming_calories_formula() {
        let workout = Workout::swimming(2_000, Duration::minutes(90), 85.0, 50.0, 5);
        let speed = 0.25 / 1.5;
        let expected = (speed + 1.1) * 2.0 * 85.0 * 1.5;
        assert!(
            (workout.calories_kcal() - expected).abs() < 1e-6,
            "expected {expected}, got {}",
            workout.calories_kcal()
        );
    }

    #[test]
    fn test_swimming_zero_duration_zero_speed() {
        let workout = Workout::swimming(2_000, Duration::zero(), 85.0, 50.0, 5);
        assert!(workout.mean_speed_kmh().abs() < f64::EPSILON);
        assert!(workout.calories_kcal().abs() < f64::EPSILON);
    }

    #[test]
    fn test_calorie_formulas_deterministic() {
        let workout = Workout::walking(20_000, Duration::minutes(225), 85.0, 185.0);
        let first = workout.calories_kcal();
        let second = workout.calories_kcal();
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn test_name_and_formula() {
        let workout = Workout::running(5_000, Duration::minutes(30), 85.0);
        assert_eq!(workout.name(), "running");
        assert!(workout.formula().contains("1.79"));
    }
}
