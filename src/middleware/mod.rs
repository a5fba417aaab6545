// ABOUTME: HTTP middleware for the plan API
// ABOUTME: Request ID propagation and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

/// CORS layer configuration
pub mod cors;
/// Request ID propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
