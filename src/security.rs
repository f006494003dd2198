// ABOUTME: Security headers applied to every HTTP response
// ABOUTME: Environment-specific header sets with an image policy derived from site config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! # Security Headers Middleware
//!
//! Protects the rendered pages against MIME sniffing, clickjacking and
//! cross-origin content injection.

use crate::config::environment::Environment;
use crate::config::site::ImageConfig;
use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// Security headers configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Content Security Policy header value
    pub csp: String,
    /// X-Frame-Options header value
    pub frame_options: String,
    /// X-Content-Type-Options header value
    pub content_type_options: String,
    /// Referrer-Policy header value
    pub referrer_policy: String,
    /// Strict-Transport-Security header value (production only)
    pub hsts: Option<String>,
}

impl SecurityConfig {
    /// Header set for `environment`, with `img-src` limited to the image allow-list
    #[must_use]
    pub fn for_site(environment: Environment, images: &ImageConfig) -> Self {
        let mut img_src = String::from("'self' data:");
        for domain in &images.domains {
            img_src.push_str(" https://");
            img_src.push_str(domain);
        }
        let upgrade = if environment.is_production() {
            " upgrade-insecure-requests;"
        } else {
            ""
        };

        Self {
            // Pages carry an inline stylesheet and no scripts
            csp: format!(
                "default-src 'self'; script-src 'none'; style-src 'self' 'unsafe-inline'; img-src {img_src}; frame-ancestors 'none'; object-src 'none'; base-uri 'self'; form-action 'self';{upgrade}"
            ),
            frame_options: "DENY".to_owned(),
            content_type_options: "nosniff".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            hsts: environment
                .is_production()
                .then(|| "max-age=31536000; includeSubDomains".to_owned()),
        }
    }

    /// Convert to typed header pairs, skipping any value that is not a valid header
    #[must_use]
    pub fn to_headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        let mut pairs = vec![
            ("content-security-policy", self.csp.as_str()),
            ("x-frame-options", self.frame_options.as_str()),
            ("x-content-type-options", self.content_type_options.as_str()),
            ("referrer-policy", self.referrer_policy.as_str()),
        ];
        if let Some(hsts) = &self.hsts {
            pairs.push(("strict-transport-security", hsts.as_str()));
        }

        pairs
            .into_iter()
            .filter_map(|(name, value)| match HeaderValue::from_str(value) {
                Ok(value) => Some((HeaderName::from_static(name), value)),
                Err(e) => {
                    warn!(header = name, error = %e, "Skipping invalid security header");
                    None
                }
            })
            .collect()
    }
}

/// Response headers shared by the middleware
pub type SecurityHeaders = Arc<Vec<(HeaderName, HeaderValue)>>;

/// Middleware function inserting security headers not already set by a handler
pub async fn apply_security_headers(
    State(headers): State<SecurityHeaders>,
    mut response: Response,
) -> Response {
    let response_headers = response.headers_mut();
    for (name, value) in headers.iter() {
        if !response_headers.contains_key(name) {
            response_headers.insert(name.clone(), value.clone());
        }
    }
    response
}
