// ABOUTME: Shared HTML page shell, stylesheet and logo markup for server-rendered pages
// ABOUTME: Escapes interpolated values and emits <picture> sources for accepted image formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use crate::config::site::ImageConfig;
use crate::constants::{routes, service_names};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const STYLESHEET: &str = r"
        * { box-sizing: border-box; }
        body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif; color: #111827; }
        .screen { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 0 16px; background: linear-gradient(135deg, #eff6ff, #e0e7ff); }
        .column { max-width: 28rem; width: 100%; }
        .column > * + * { margin-top: 2rem; }
        .center { text-align: center; }
        .logo { display: flex; justify-content: center; }
        .logo img { width: 8rem; height: 8rem; object-fit: contain; }
        .logo.small img { width: 6rem; height: 6rem; }
        h1 { font-size: 2.5rem; font-weight: 700; margin: 0; }
        h2 { font-size: 1.875rem; font-weight: 700; margin: 0; }
        .muted { color: #4b5563; }
        .subtle { color: #6b7280; font-size: 0.875rem; }
        .actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; padding-top: 2rem; }
        .button { display: inline-block; padding: 0.75rem 1.5rem; font-weight: 600; border-radius: 0.5rem; text-decoration: none; box-shadow: 0 1px 3px rgba(0,0,0,0.2); }
        .button.primary { background: #2563eb; color: #fff; border: none; }
        .button.primary:hover { background: #1d4ed8; }
        .button.secondary { background: #fff; color: #111827; border: 1px solid #d1d5db; }
        .card { background: #fff; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); padding: 2rem; }
        .field { margin-bottom: 1rem; }
        .field label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
        .field input { width: 100%; padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
        .field .hint { margin: 0.25rem 0 0; font-size: 0.75rem; color: #6b7280; }
        .checkbox { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
        .link { color: #2563eb; text-decoration: none; }
        button.button { width: 100%; cursor: pointer; font-size: 1rem; }
        @media (prefers-color-scheme: dark) {
            body { color: #f9fafb; }
            .screen { background: linear-gradient(135deg, #111827, #1f2937); }
            .card { background: #1f2937; }
            .muted, .field label { color: #d1d5db; }
        }
";

/// Wrap page content in the document shell
#[must_use]
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{STYLESHEET}</style>
</head>
<body>
    <div class="screen">
{body}
    </div>
</body>
</html>
"#,
        title = encode_text(title),
    )
}

/// Application logo as a `<picture>` with one `<source>` per accepted format
///
/// Falls back to an empty string when the configured image rules reject the
/// logo source, so a misconfigured remote logo never reaches the page.
#[must_use]
pub fn logo(images: &ImageConfig, small: bool) -> String {
    image(images, routes::LOGO, &format!("{} Logo", service_names::APP_DISPLAY_NAME))
        .map(|picture| {
            let class = if small { "logo small" } else { "logo" };
            format!(r#"<div class="{class}">{picture}</div>"#)
        })
        .unwrap_or_default()
}

/// Render an image permitted by `images`, or `None` if the source is rejected
#[must_use]
pub fn image(images: &ImageConfig, src: &str, alt: &str) -> Option<String> {
    if let Err(e) = images.check_src(src) {
        tracing::warn!(image.src = %src, error = %e, "Image source rejected");
        return None;
    }

    let mut picture = String::from("<picture>");
    for (format, variant) in images.variants(src) {
        let _ = write!(
            picture,
            r#"<source type="{}" srcset="{}">"#,
            format.mime_type(),
            encode_double_quoted_attribute(&variant)
        );
    }
    let _ = write!(
        picture,
        r#"<img src="{}" alt="{}"></picture>"#,
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(alt)
    );
    Some(picture)
}

/// Anchor element with escaped attributes and text
#[must_use]
pub fn link(href: &str, class: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        encode_double_quoted_attribute(href),
        encode_double_quoted_attribute(class),
        encode_text(text)
    )
}
