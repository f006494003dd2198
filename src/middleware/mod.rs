// ABOUTME: HTTP middleware stack shared by every route
// ABOUTME: Request correlation IDs, request tracing spans, and security headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

/// Request ID generation and per-request tracing spans
pub mod tracing;

pub use tracing::{create_request_span, record_response, GymRequestId, REQUEST_ID_HEADER};
