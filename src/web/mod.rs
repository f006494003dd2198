// ABOUTME: Server-rendered HTML pages for the Gym Journal site
// ABOUTME: Landing page, registration form, and the not-found page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! HTML rendering
//!
//! Pages are plain functions from site configuration to an HTML string; they
//! never touch the database.

/// Landing page
pub mod landing;
/// Shared document shell and element helpers
pub mod layout;
/// Registration form
pub mod register;

use crate::constants::routes;
use layout::{link, page};

/// Render the not-found page for `path`
#[must_use]
pub fn not_found(path: &str) -> String {
    let body = format!(
        r#"        <div class="column center">
            <h2>Page not found</h2>
            <p class="muted">Nothing lives at <code>{path}</code> yet.</p>
            <p>{home}</p>
        </div>"#,
        path = html_escape::encode_text(path),
        home = link(routes::HOME, "button primary", "Back to home"),
    );
    page("Not found - Gym Journal", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found("/<script>");
        assert!(html.contains("/&lt;script&gt;"));
        assert!(html.contains(r#"href="/""#));
    }
}
