// ABOUTME: Splash/landing page rendered at the site root
// ABOUTME: Logo, title, tagline, and the Sign In / Sign Up entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use super::layout::{link, logo, page};
use crate::config::site::ImageConfig;
use crate::constants::{routes, service_names};

/// Render the landing page
#[must_use]
pub fn render(images: &ImageConfig) -> String {
    let body = format!(
        r#"        <div class="column center">
            {logo}
            <div>
                <h1>{app}</h1>
                <p class="muted">Track your fitness journey</p>
            </div>
            <nav class="actions">
                {sign_in}
                {sign_up}
            </nav>
            <p class="subtle">Your personal fitness companion</p>
        </div>"#,
        logo = logo(images, false),
        app = service_names::APP_DISPLAY_NAME,
        sign_in = link(routes::LOGIN, "button primary", "Sign In"),
        sign_up = link(routes::REGISTER, "button secondary", "Sign Up"),
    );
    page(service_names::APP_DISPLAY_NAME, &body)
}
