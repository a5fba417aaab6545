// ABOUTME: Core types for the Treino workout plan API
// ABOUTME: Foundation crate with error handling, domain models and the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

#![deny(unsafe_code)]

//! # Treino Core
//!
//! Foundation crate providing the shared types of the Treino API. It has no
//! I/O and changes infrequently, so the server crate recompiles quickly.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Profile, exercise and plan types
//! - **catalog**: The static exercise table

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain models (profile, exercise, plan)
pub mod models;

/// Static exercise catalog
pub mod catalog;
