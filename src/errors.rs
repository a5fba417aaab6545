// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: Keeps `crate::errors` as the single import path for handlers and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # Unified Error Handling
//!
//! Error types live in `treino-core` so domain code can share them; with the
//! `http-response` feature enabled `AppError` converts directly into an axum
//! response with a `{"detail", "code"}` body.

pub use treino_core::errors::*;
