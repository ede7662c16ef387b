// ABOUTME: Sport type enumeration for supported workout kinds
// ABOUTME: Defines the closed set of sports with parsing and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::AppError;

/// Enumeration of supported sport/workout types
///
/// Closed set: the calorie formulas are defined per sport, so adding a sport
/// means adding a formula in code, not registering a plugin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running workout
    Run,
    /// Walking workout
    Walk,
    /// Swimming workout
    Swim,
}

impl SportType {
    /// Get the human-readable report label for this sport type
    ///
    /// Labels are the Russian workout names used by the report surface.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Run => "Бег",
            Self::Walk => "Ходьба",
            Self::Swim => "Плавание",
        }
    }

    /// Get the sport name as an internal identifier string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Walk => "walk",
            Self::Swim => "swim",
        }
    }
}

impl FromStr for SportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "run" | "running" => Ok(Self::Run),
            "walk" | "walking" => Ok(Self::Walk),
            "swim" | "swimming" => Ok(Self::Swim),
            other => Err(AppError::invalid_input(format!(
                "Unknown sport type: '{other}'. Valid options: run, walk, swim"
            ))),
        }
    }
}
