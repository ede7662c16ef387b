// ABOUTME: Workout statistics engine for running, walking, and swimming sessions
// ABOUTME: Computes distance, mean speed, and calories, and renders report summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fittrack Project

#![deny(unsafe_code)]

//! # Fittrack
//!
//! Small workout statistics engine. Raw session data (step/stroke count,
//! duration, body weight, variant-specific parameters) flows one direction:
//! derived metrics (distance, mean speed), then the variant-specific calorie
//! formula, then a flat report summary rendered for display.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversion factors and physiological coefficients
//! - **models**: Core data models (`Session`, `SportType`)
//! - **intelligence**: Workout variants and their calorie formulas
//! - **reports**: Report model, fixed-format rendering, and output formats
//! - **logging**: Structured logging configuration

/// Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
pub mod errors;

/// Unit conversion factors and physiological coefficients organized by domain
pub mod constants;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models (`Session`, `SportType`)
pub mod models;

/// Workout variants (running, walking, swimming) and calorie formulas
pub mod intelligence;

/// Report model, fixed-format rendering, and output formats
pub mod reports;
