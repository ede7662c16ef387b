// ABOUTME: Core data models for workout sessions
// ABOUTME: Session record and sport type enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

/// Shared workout session record and its derived metrics
pub mod session;

/// Sport type enumeration with display labels
pub mod sport;

pub use session::Session;
pub use sport::SportType;
